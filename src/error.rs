//! Error types and handling for rs2-seq
//!
//! Exhaustion of a sequence is never an error: `Seq::next` signals it with
//! `None`. The variants below are reserved for misuse of the API.

/// Main error type for sequence operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    /// A pipeline or builder was constructed without a required collaborator
    #[error("Missing dependency: {0}")]
    MissingDependency(&'static str),

    /// An item was appended to a group that has already been iterated
    #[error("Item cannot be added to group after iteration has started")]
    FrozenGroup,

    /// The current value was read from an adapter positioned at the end
    #[error("No current value: iterator is not positioned on an element")]
    EmptyValue,

    /// A pipeline configuration could not be parsed
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for SeqError {
    fn from(err: serde_json::Error) -> Self {
        SeqError::InvalidConfig(err.to_string())
    }
}

/// Result type for rs2_seq operations
pub type SeqResult<T> = Result<T, SeqError>;
