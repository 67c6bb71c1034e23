/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;

/// Digit strings shorter than this never carry a prefix.
pub const MIN_LOOKUP_LENGTH: usize = 2;

/// Order in which candidate country codes of length 1, 2 and 3 are tried
/// when picking a bucket. Country codes are not prefix-free, so this is a
/// fixed precedence and not "longest first": the two digit candidate is
/// tried before the one digit candidate, and the three digit one comes last.
/// It has to be re-checked against the registered codes of the dataset
/// before being changed.
pub const DEFAULT_COUNTRY_CODE_PRIORITY: [usize; 3] = [2, 1, 3];

/// Priority used by older revisions of the prefix table.
pub const LEGACY_COUNTRY_CODE_PRIORITY: [usize; 3] = [3, 2, 1];

pub const PLUS_SIGN: &'static str = "+";
pub const LEFT_PARENTHESIS: char = '(';
pub const TRUNK_PREFIX: char = '0';

// Punctuation removed from numbers before lookup. The letter 'x' and the
// comma are deliberately absent: they separate extensions and are kept
// verbatim.
pub const STRIPPED_CHARS: &[char] = &[' ', '-', '.', '(', ')', '/', '+'];
