use std::fmt;
use std::time::Duration;

/// Client operation, used to label errors and logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Lookup,
    Random,
    Daily,
    Search,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Lookup => "lookup",
            Operation::Random => "random",
            Operation::Daily => "daily",
            Operation::Search => "search",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by a [`crate::Transport`]
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: HTTP {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Connection error: {0}")]
    Connection(String),
}

/// The response body did not have the expected shape
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("envelope reported ok without data")]
    MissingData,

    #[error("service reported failure: {0:?}")]
    Rejected(String),
}

#[derive(Debug, thiserror::Error)]
pub enum RaeError {
    #[error("{op} {arg:?}: {source}")]
    Transport {
        op: Operation,
        arg: String,
        #[source]
        source: TransportError,
    },

    #[error("{op} {arg:?}: timed out after {after:?}")]
    Timeout {
        op: Operation,
        arg: String,
        after: Duration,
    },

    #[error("{op} {arg:?}: cancelled")]
    Cancelled { op: Operation, arg: String },

    #[error("{op} {arg:?}: {source}")]
    Decode {
        op: Operation,
        arg: String,
        #[source]
        source: DecodeError,
    },

    #[error("{op} {arg:?}: service reported failure: {message:?}")]
    Service {
        op: Operation,
        arg: String,
        message: String,
    },

    #[error("{op} {arg:?}: word not found")]
    NotFound {
        op: Operation,
        arg: String,
        /// Message the service attached, may be empty
        message: String,
        /// Alternate headwords, only ever filled in by lookup
        suggestions: Vec<String>,
    },

    #[error("search {terms:?}: hit {index} ({id:?}) could not be decoded: {source}")]
    SearchHit {
        terms: String,
        index: usize,
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("lookup {arg:?}: empty headword")]
    EmptyWord { arg: String },
}

impl RaeError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RaeError::NotFound { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, RaeError::Timeout { .. })
    }

    /// Alternate spellings attached to a not-found lookup, empty otherwise
    pub fn suggestions(&self) -> &[String] {
        match self {
            RaeError::NotFound { suggestions, .. } => suggestions.as_slice(),
            _ => &[],
        }
    }

    /// Operation the error came from
    pub fn operation(&self) -> Operation {
        match self {
            RaeError::Transport { op, .. }
            | RaeError::Timeout { op, .. }
            | RaeError::Cancelled { op, .. }
            | RaeError::Decode { op, .. }
            | RaeError::Service { op, .. }
            | RaeError::NotFound { op, .. } => *op,
            RaeError::SearchHit { .. } => Operation::Search,
            RaeError::EmptyWord { .. } => Operation::Lookup,
        }
    }
}
