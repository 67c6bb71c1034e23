// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::{collections::HashMap, time::Instant};

use log::{debug, trace, warn};

use super::{
    helper_constants::{DEFAULT_COUNTRY_CODE_PRIORITY, MIN_LOOKUP_LENGTH},
    CountryBucket, PrefixIndexBuilder, PrefixRecord,
};
use crate::{i18n::RegionCode, normalizer::sanitize};

/// Read-only index of dialing prefixes, sharded by country code.
///
/// Built once from the full prefix table and never modified afterwards,
/// so a single instance can be shared between any number of threads. For
/// process-wide use wrap it in a `std::sync::LazyLock`:
///
/// ```ignore
/// static PREFIX_INDEX: LazyLock<PrefixIndex> = LazyLock::new(|| {
///     PrefixIndex::new(dataset::load_records("prefix_data.csv").unwrap())
/// });
/// ```
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    /// Country code string to the prefixes registered under it.
    buckets: HashMap<String, CountryBucket>,

    /// Lengths of the candidate country codes in the order they are tried.
    country_code_priority: [usize; 3],
}

impl PrefixIndex {
    /// Builds the index with the default country code priority.
    pub fn new(records: impl IntoIterator<Item = PrefixRecord>) -> Self {
        Self::build(records, DEFAULT_COUNTRY_CODE_PRIORITY)
    }

    pub fn builder() -> PrefixIndexBuilder {
        PrefixIndexBuilder::new()
    }

    /// Single pass over the records. Nothing is validated: the first record
    /// of a country fixes the bucket metadata and a later record with the
    /// same prefix replaces the earlier one.
    pub(super) fn build(
        records: impl IntoIterator<Item = PrefixRecord>,
        country_code_priority: [usize; 3],
    ) -> Self {
        let started = Instant::now();
        let mut buckets = HashMap::<String, CountryBucket>::new();
        let mut records_seen = 0usize;

        for record in records {
            records_seen += 1;
            if let Some(bucket) = buckets.get_mut(&record.country_code) {
                bucket.insert(record);
            } else {
                let mut bucket = CountryBucket::for_record(&record);
                let country_code = record.country_code.clone();
                bucket.insert(record);
                buckets.insert(country_code, bucket);
            }
        }

        debug!(
            "Built prefix index from {} records into {} country buckets in {:?}",
            records_seen,
            buckets.len(),
            started.elapsed()
        );
        Self { buckets, country_code_priority }
    }

    /// Picks the bucket for a digit string by trying its first 1, 2 and 3
    /// characters as country codes in the configured priority order.
    pub(crate) fn find_country_bucket(&self, digits: &str) -> Option<&CountryBucket> {
        self.country_code_priority
            .iter()
            .filter_map(|&length| digits.get(..length))
            .find_map(|candidate| self.buckets.get(candidate))
    }

    /// Returns the record with the longest prefix of `digits` registered
    /// under its country, or `None` when nothing matches.
    ///
    /// `digits` is expected to be the output of [`crate::sanitize`]; use
    /// [`PrefixIndex::lookup_number`] for raw text.
    pub fn lookup(&self, digits: &str) -> Option<&PrefixRecord> {
        if digits.len() < MIN_LOOKUP_LENGTH {
            return None;
        }
        let bucket = self.find_country_bucket(digits)?;

        // Candidates longer than the input would all repeat the same substring,
        // so the window starts at the input length.
        let longest = bucket.max_prefix_len().min(digits.len());
        let shortest = bucket.country_code_len().min(longest);

        (shortest..=longest)
            .rev()
            .filter_map(|length| digits.get(..length))
            .find_map(|prefix| bucket.get(prefix))
    }

    /// Sanitizes human-entered text and looks it up.
    pub fn lookup_number(&self, number: &str) -> Option<&PrefixRecord> {
        let started = Instant::now();
        let digits = sanitize(number);
        let found = self.lookup(&digits);

        match found {
            Some(record) => trace!(
                "Found prefix {} ({}) for {} in {:?}",
                record.number_prefix,
                record.region_code,
                digits,
                started.elapsed()
            ),
            None => trace!("No prefix found for {} in {:?}", digits, started.elapsed()),
        }
        found
    }

    /// Region of the prefix matching the human-entered number, or the
    /// unknown region "ZZ" when nothing matches.
    pub fn region_code_for_number(&self, number: &str) -> &str {
        self.lookup_number(number)
            .map_or(RegionCode::get_unknown(), |record| record.region_code.as_str())
    }

    /// Country code of the bucket that would serve `digits`.
    pub fn country_code_of(&self, digits: &str) -> Option<&str> {
        self.find_country_bucket(digits).map(|bucket| bucket.country_code())
    }

    pub fn supported_country_codes(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(|code| code.as_str())
    }

    /// Regions registered under a country code, sorted and without
    /// repetitions.
    pub fn regions_for_country_code(&self, country_code: &str) -> Vec<&str> {
        let Some(bucket) = self.buckets.get(country_code) else {
            warn!("Unknown country code provided: {}", country_code);
            return Vec::new();
        };
        let mut regions: Vec<&str> = bucket
            .records()
            .map(|record| record.region_code.as_str())
            .collect();
        regions.sort_unstable();
        regions.dedup();
        regions
    }

    /// Number of distinct prefixes held by the index.
    pub fn len(&self) -> usize {
        self.buckets.values().map(|bucket| bucket.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
