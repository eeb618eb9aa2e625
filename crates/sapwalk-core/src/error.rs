use thiserror::Error;

pub type Result<T> = std::result::Result<T, WalkError>;

/// Stream I/O is the converter's only failure class. Malformed walk text is
/// never an error: every line classifies into one of the four line kinds.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
