/// Crate Error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A `+`-separated segment is neither `<count>d<sides>` nor an integer
    #[error("malformed term \"{0}\"")]
    Parse(String),
    #[error("invalid die size {0}: sizes must be positive")]
    InvalidSize(i64),
    /// Broken roll outcome invariant, never caused by user input alone
    #[error("invalid roll outcome: {0}")]
    InvalidState(&'static str),
    #[error("invalid verbosity {0}: expected 0, 1 or 2")]
    InvalidVerbosity(u8),
}

/// Crate Result type
pub type Result<T> = std::result::Result<T, Error>;
