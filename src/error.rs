use thiserror::Error;

/// Top-level error type for the envaid library.
///
/// Only malformed JSON and unknown buffer encodings are raised. Missing keys,
/// unrecognized boolean tokens, and malformed numbers degrade to a default or
/// a sentinel instead.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to parse '{key}' as JSON: {source}")]
    Json {
        key: String,
        source: serde_json::Error,
    },

    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),
}
