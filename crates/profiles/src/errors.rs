use thiserror::Error;

/// Failure to produce a batch of profiles.
///
/// A failed generation never yields a partial batch; callers keep whatever they
/// held before.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Random source unavailable: {0}")]
    RandomSource(String),

    #[error("Batch size must be positive")]
    EmptyBatch,
}

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard unavailable")]
    Unavailable,

    #[error("Clipboard access denied")]
    Denied,

    #[error("Clipboard command failed: {0}")]
    Command(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No profile selected")]
    NothingSelected,
}

/// Text that does not name a filter value.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown {kind}: {value}")]
pub struct FilterParseError {
    pub kind: &'static str,
    pub value: String,
}
