use thiserror::Error;

/// Errors surfaced by the JSON capability.
///
/// Everything else in the crate is total and reports bad input through a
/// sentinel value instead.
#[derive(Debug, Error)]
pub enum StrError {
    #[error("no JSON decoder is configured")]
    DecoderUnavailable,
    #[error("malformed JSON: {0}")]
    Malformed(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = StrError> = std::result::Result<T, E>;
