/// Recognized boolean tokens. Matching is exact; `"Yes"` is not a token.
pub const LEXICON: [(&str, bool); 14] = [
    ("1", true),
    ("0", false),
    ("true", true),
    ("TRUE", true),
    ("false", false),
    ("FALSE", false),
    ("yes", true),
    ("YES", true),
    ("no", false),
    ("NO", false),
    ("on", true),
    ("ON", true),
    ("off", false),
    ("OFF", false),
];

/// Looks `s` up in [`LEXICON`], returning `None` for unrecognized tokens.
pub fn parse_bool(s: &str) -> Option<bool> {
    LEXICON
        .iter()
        .find(|(token, _)| *token == s)
        .map(|&(_, value)| value)
}
