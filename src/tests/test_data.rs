use crate::{dataset::parse_records, PrefixIndex, PrefixRecord};

/// Small excerpt of the prefix table: NANP, UK with Guernsey, Mexico,
/// Russia with Kazakhstan, Egypt, Finland with Aland and Iridium.
pub const TEST_PREFIX_DATA: &str = include_str!("../../resources/test_prefix_data.csv");

static ONCE: std::sync::Once = std::sync::Once::new();

pub fn init_logger() {
    ONCE.call_once(|| colog::default_builder()
        .filter_level(log::LevelFilter::Trace)
        .init()
    );
}

pub fn test_records() -> Vec<PrefixRecord> {
    parse_records(TEST_PREFIX_DATA).expect("Test prefix data should be valid")
}

pub fn get_prefix_index() -> PrefixIndex {
    init_logger();
    PrefixIndex::new(test_records())
}
