mod prefixindex;
pub mod normalizer;
pub mod dataset;
pub mod i18n;

/// Crate-level scenarios run against the fixture dataset in /resources
#[cfg(test)]
mod tests;

pub use normalizer::{normalize, sanitize};
pub use prefixindex::{
    errors, helper_constants, NumberKind, PrefixIndex, PrefixIndexBuilder,
    PrefixRecord,
};
