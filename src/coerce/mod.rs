//! Coercions from raw environment strings to typed values.
//!
//! Every function here is pure: it only sees the raw string of a key that is
//! known to be present. Default substitution happens in [`crate::Env`].

mod array;
mod boolean;
mod encoding;
mod numeric;

pub use array::split_array;
pub use boolean::{parse_bool, LEXICON};
pub use encoding::Encoding;
pub use numeric::{parse_float, parse_int};

/// Whitespace as understood by the numeric parsers and `trim`: the Unicode
/// `White_Space` set minus NEL, plus the byte order mark.
pub(crate) fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

pub(crate) fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}
