use thiserror::Error;

/// Failure to parse one of the closed vocabularies.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unknown palette role: {0}")]
    Role(String),
    #[error("unknown mood tag: {0}")]
    Mood(String),
    #[error("unknown style tag: {0}")]
    Style(String),
    #[error("unknown color vision deficiency: {0}")]
    Cvd(String),
}
