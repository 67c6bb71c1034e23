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

use serde::{de, Deserialize, Deserializer, Serialize};
use strum::IntoEnumIterator;

use super::NumberKind;

/// One row of the dialing prefix table.
///
/// `number_prefix` always starts with `country_code`; longer prefixes
/// describe finer sub-ranges (mobile blocks, satellite ranges) nested
/// under the country. Field order is the column order of a written table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PrefixRecord {
    /// World numbering zone, 1 to 9.
    pub zone_id: u8,
    /// Dialing country code as a digit string. Never compared as an integer.
    pub country_code: String,
    /// Two-letter region code, e.g. "US" or "GB".
    pub region_code: String,
    /// Full dialing prefix, including the country code.
    pub number_prefix: String,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_geographic: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_mobile: bool,
    #[serde(deserialize_with = "deserialize_flag")]
    pub is_satellite: bool,
    /// Length of `country_code` in digits (1, 2 or 3).
    #[serde(rename = "cc_len")]
    pub country_code_len: usize,
    /// Length of `number_prefix`; bounds the lookup walk.
    pub prefix_len: usize,
}

/// Accepts `1`/`0`, `t`/`f` and `true`/`false` in the usual casings.
fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    let value = String::deserialize(deserializer)?;
    match value.as_str() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(de::Error::custom(format!("'{value}' is not a boolean"))),
    }
}

impl PrefixRecord {
    /// Builds a record whose lengths are derived from the given strings.
    /// All classification flags start cleared.
    pub fn new(
        zone_id: u8,
        country_code: impl Into<String>,
        region_code: impl Into<String>,
        number_prefix: impl Into<String>,
    ) -> Self {
        let country_code = country_code.into();
        let number_prefix = number_prefix.into();
        Self {
            zone_id,
            country_code_len: country_code.len(),
            prefix_len: number_prefix.len(),
            country_code,
            region_code: region_code.into(),
            number_prefix,
            ..Default::default()
        }
    }

    pub fn with_kind(mut self, kind: NumberKind) -> Self {
        match kind {
            NumberKind::Geographic => self.is_geographic = true,
            NumberKind::Mobile => self.is_mobile = true,
            NumberKind::Satellite => self.is_satellite = true,
        }
        self
    }

    pub fn is(&self, kind: NumberKind) -> bool {
        match kind {
            NumberKind::Geographic => self.is_geographic,
            NumberKind::Mobile => self.is_mobile,
            NumberKind::Satellite => self.is_satellite,
        }
    }

    /// Iterates over every kind flagged on this record.
    pub fn kinds(&self) -> impl Iterator<Item = NumberKind> + '_ {
        NumberKind::iter().filter(|kind| self.is(*kind))
    }
}
