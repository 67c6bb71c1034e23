use std::collections::HashMap;

use log::{debug, warn};

use super::PrefixRecord;

/// All prefixes registered under one dialing country code.
#[derive(Debug, Clone)]
pub(crate) struct CountryBucket {
    zone_id: u8,
    country_code: String,
    country_code_len: usize,
    /// Widest candidate prefix worth probing for this country.
    max_prefix_len: usize,
    prefix_map: HashMap<String, PrefixRecord>,
}

impl CountryBucket {
    /// Creates an empty bucket taking its country metadata from the first
    /// record seen for the code.
    pub(super) fn for_record(record: &PrefixRecord) -> Self {
        Self {
            zone_id: record.zone_id,
            country_code: record.country_code.clone(),
            country_code_len: record.country_code_len,
            max_prefix_len: 0,
            prefix_map: HashMap::new(),
        }
    }

    /// Adds the record under its prefix, replacing any earlier record with
    /// the same prefix. Country metadata stays as set by the first record.
    pub(super) fn insert(&mut self, record: PrefixRecord) {
        if record.zone_id != self.zone_id || record.country_code_len != self.country_code_len {
            warn!(
                "Record {} disagrees with country code {} metadata (zone {} vs {}, length {} vs {}), keeping the first",
                record.number_prefix,
                self.country_code,
                record.zone_id,
                self.zone_id,
                record.country_code_len,
                self.country_code_len
            );
        }
        self.max_prefix_len = self.max_prefix_len.max(record.prefix_len);

        if let Some(replaced) = self.prefix_map.insert(record.number_prefix.clone(), record) {
            debug!(
                "Duplicate prefix {} ({}) replaced by a later record",
                replaced.number_prefix, replaced.region_code
            );
        }
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn country_code_len(&self) -> usize {
        self.country_code_len
    }

    pub fn max_prefix_len(&self) -> usize {
        self.max_prefix_len
    }

    pub fn len(&self) -> usize {
        self.prefix_map.len()
    }

    pub fn get(&self, prefix: &str) -> Option<&PrefixRecord> {
        self.prefix_map.get(prefix)
    }

    pub fn records(&self) -> impl Iterator<Item = &PrefixRecord> {
        self.prefix_map.values()
    }
}
