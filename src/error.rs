use thiserror::Error;

/// Error type for the route advisor.
///
/// `find_best_option` itself only ever reports `Computation`; the file
/// variants belong to the scenario record/replay surface.
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// A data-generation or scoring step failed during a comparison.
    #[error("comparison failed: {message}")]
    Computation { message: String },

    /// A recorded scenario file did not pass the trivial bounds checks.
    #[error("invalid scenario data: {message}")]
    Scenario { message: String },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

impl AdvisorError {
    pub fn computation<S: Into<String>>(message: S) -> Self {
        Self::Computation {
            message: message.into(),
        }
    }

    pub fn scenario<S: Into<String>>(message: S) -> Self {
        Self::Scenario {
            message: message.into(),
        }
    }

    /// Folds any advisor error into the single failure kind the comparison
    /// reports to its callers.
    pub fn into_computation(self) -> Self {
        match self {
            computation @ Self::Computation { .. } => computation,
            other => Self::computation(other.to_string()),
        }
    }
}
