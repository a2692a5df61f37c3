use std::fmt;
use std::str::FromStr;

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

use crate::Error;

/// Accepts unpadded input and ignores leftover bits in the final group.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Text encodings a raw value can be turned into bytes with.
///
/// Names are matched case-insensitively; see [`Encoding::from_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    #[default]
    Utf8,
    Utf16Le,
    Latin1,
    Ascii,
    Base64,
    Base64Url,
    Hex,
}

impl Encoding {
    /// Canonical name of the encoding.
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf8",
            Encoding::Utf16Le => "utf16le",
            Encoding::Latin1 => "latin1",
            Encoding::Ascii => "ascii",
            Encoding::Base64 => "base64",
            Encoding::Base64Url => "base64url",
            Encoding::Hex => "hex",
        }
    }

    /// Converts `s` into bytes. This never fails: input that does not fit the
    /// encoding is skipped or truncated, never rejected.
    pub fn to_bytes(self, s: &str) -> Vec<u8> {
        match self {
            Encoding::Utf8 => s.as_bytes().to_vec(),
            Encoding::Utf16Le => s.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            // Both keep the low byte of each UTF-16 code unit.
            Encoding::Latin1 | Encoding::Ascii => {
                s.encode_utf16().map(|unit| (unit & 0xFF) as u8).collect()
            }
            Encoding::Base64 | Encoding::Base64Url => base64_bytes(s),
            Encoding::Hex => hex_bytes(s),
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Ok(Encoding::Utf16Le),
            "latin1" | "binary" => Ok(Encoding::Latin1),
            "ascii" => Ok(Encoding::Ascii),
            "base64" => Ok(Encoding::Base64),
            "base64url" => Ok(Encoding::Base64Url),
            "hex" => Ok(Encoding::Hex),
            _ => Err(Error::UnknownEncoding(name.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Decodes base64 in either alphabet. Characters outside the alphabet are
/// skipped and decoding ends at the first `=`.
fn base64_bytes(s: &str) -> Vec<u8> {
    let mut cleaned: String = s
        .chars()
        .take_while(|&c| c != '=')
        .filter_map(|c| match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '+' | '/' => Some(c),
            '-' => Some('+'),
            '_' => Some('/'),
            _ => None,
        })
        .collect();

    // A single dangling character carries fewer than eight bits.
    if cleaned.len() % 4 == 1 {
        cleaned.pop();
    }

    LENIENT_BASE64.decode(cleaned).unwrap_or_default()
}

/// Decodes hex digit pairs up to the first pair that is not valid hex.
fn hex_bytes(s: &str) -> Vec<u8> {
    let valid = s.bytes().take_while(u8::is_ascii_hexdigit).count() & !1;
    hex::decode(&s[..valid]).unwrap_or_default()
}
