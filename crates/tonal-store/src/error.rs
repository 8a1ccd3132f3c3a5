use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("save limit reached ({0} palettes)")]
    LimitReached(usize),
}

pub type Result<T> = std::result::Result<T, StoreError>;
