use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("word not found: {0}")]
    WordNotFound(String),
    #[error("word already exists: {0}")]
    DuplicateWord(String),
    #[error("invalid word: {0}")]
    InvalidWord(&'static str),
    #[error("storage error: {0}")]
    Storage(&'static str),
}
