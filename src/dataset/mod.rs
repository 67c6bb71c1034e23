//! Reading and writing the dialing prefix table.
//!
//! The table is comma separated text with a header line naming the columns
//! `zone_id`, `country_code`, `region_code`, `number_prefix`,
//! `is_geographic`, `is_mobile`, `is_satellite`, `cc_len` and `prefix_len`.
//! Columns are matched by name, so their order is free and unknown columns
//! are ignored.

mod errors;
mod reader;
mod writer;

pub use errors::DatasetError;
pub use reader::{load_records, parse_records, read_records};
pub use writer::write_records;

/// Columns every table must carry, named after the serde names of the
/// [`crate::PrefixRecord`] fields.
pub(crate) const COLUMNS: [&str; 9] = [
    "zone_id",
    "country_code",
    "region_code",
    "number_prefix",
    "is_geographic",
    "is_mobile",
    "is_satellite",
    "cc_len",
    "prefix_len",
];
