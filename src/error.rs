use thiserror::Error;

/// Coarse classification of an [`Error`], as reported to callers of the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself was malformed (bad count, unknown strategy, ...)
    InvalidArgument,
    /// The request was fine, but the engine is not in a state where it can be served
    InvalidState,
}

/// Errors returned by the engine's operations.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid argument {name}: {message}")]
    InvalidArgument {
        /// Parameter name, as named in the request.
        name: &'static str,
        /// Human-readable explanation.
        message: String,
    },

    /// The requested initialization strategy does not exist.
    #[error("unknown initialization strategy: {0:?} (expected one of \"random\", \"farthest\", \"kmeans++\")")]
    UnknownStrategy(String),

    /// Requested cluster count is incompatible with the point set.
    #[error("invalid cluster count: requested {requested}, but point set has {n_points} points")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of points currently held by the engine.
        n_points: usize,
    },

    /// Operation invoked out of order (e.g. stepping before any centroid exists).
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidArgument { .. } | Error::UnknownStrategy(_) | Error::InvalidClusterCount { .. } => {
                ErrorKind::InvalidArgument
            }
            Error::InvalidState(_) => ErrorKind::InvalidState,
        }
    }

    pub(crate) fn invalid_argument(name: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidArgument { name, message: message.into() }
    }

    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        Error::InvalidState(message.into())
    }
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
