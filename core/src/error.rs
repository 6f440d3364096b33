use thiserror::Error;

/// Result type for echocat operations
pub type Result<T> = std::result::Result<T, EchocatError>;

/// Error types for echocat operations
#[derive(Error, Debug)]
pub enum EchocatError {
    /// Requested view key is not one of the known views or combinations
    #[error("Unknown view key: {0}")]
    UnknownViewKey(String),

    /// A study in the overread table has no rater readings to average
    #[error("Study {0} has no rater readings")]
    EmptyRaterSet(String),

    /// A predicted study has no entry in the aggregated ground truth
    #[error("No ground truth reading for predicted study: {0}")]
    MissingGroundTruth(String),

    /// No paired samples matched the requested view; statistics are undefined
    #[error("No paired samples for the requested view")]
    EmptySampleSet,

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Table deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Plot rendering error
    #[error("Plot error: {0}")]
    Plot(String),
}
