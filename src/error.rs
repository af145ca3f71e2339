//! Error types for word list operations.

/// Errors that can occur when loading or mutating a personal word list.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An empty word cannot be added
    #[error("Cannot add an empty word")]
    EmptyWord,

    /// The word contains a line terminator and cannot be stored as one line
    #[error("Word contains a line terminator")]
    InvalidWord,

    /// Reading or writing the backing file failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
