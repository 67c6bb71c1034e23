pub mod helper_constants;
pub mod errors;
mod enums;
mod record;
mod country_bucket;
mod builder;
mod prefixindex;

pub use enums::NumberKind;
pub use record::PrefixRecord;
pub(crate) use country_bucket::CountryBucket;
pub use builder::PrefixIndexBuilder;
pub use prefixindex::PrefixIndex;
