use super::{
    errors::IndexConfigError,
    helper_constants::{DEFAULT_COUNTRY_CODE_PRIORITY, MAX_LENGTH_COUNTRY_CODE},
    PrefixIndex, PrefixRecord,
};

/// Configures how a [`PrefixIndex`] resolves ambiguous country codes
/// before building it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixIndexBuilder {
    country_code_priority: [usize; 3],
}

impl Default for PrefixIndexBuilder {
    fn default() -> Self {
        Self { country_code_priority: DEFAULT_COUNTRY_CODE_PRIORITY }
    }
}

impl PrefixIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the order in which candidate country codes of each length are
    /// tried. Every length from 1 to 3 must appear exactly once.
    pub fn country_code_priority(mut self, priority: [usize; 3]) -> Result<Self, IndexConfigError> {
        for (i, &length) in priority.iter().enumerate() {
            if length == 0 || length > MAX_LENGTH_COUNTRY_CODE {
                return Err(IndexConfigError::InvalidLength(length));
            }
            if priority[..i].contains(&length) {
                return Err(IndexConfigError::DuplicateLength(length));
            }
        }
        self.country_code_priority = priority;
        Ok(self)
    }

    pub fn build(self, records: impl IntoIterator<Item = PrefixRecord>) -> PrefixIndex {
        PrefixIndex::build(records, self.country_code_priority)
    }
}
