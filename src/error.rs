use std::fmt;

/// Error type for Cloud Controller operations
#[derive(Debug)]
pub enum CcError {
    /// Connection could not be established, timed out, or broke mid-request
    Transport(reqwest::Error),
    /// Server answered with a status the caller did not accept
    UnexpectedStatus { status: u16, body: String },
    /// Response body did not match the expected document shape
    Decode(String),
    /// Host or cursor URL could not be parsed
    InvalidUrl(String),
    /// Page navigation error (missing cursor, cursor cycle)
    Pagination(String),
    /// Token not found in any source
    TokenNotFound(String),
    /// Configuration error
    Config(String),
    /// Work dispatcher misuse (zero workers, queue closed)
    Dispatcher(String),
}

impl CcError {
    /// Whether this error means client and server disagree on the document schema
    ///
    /// Such errors are not expected failure modes; callers should treat them as fatal.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, CcError::Decode(_))
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            CcError::UnexpectedStatus { status, .. } => Some(*status),
            CcError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl fmt::Display for CcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CcError::Transport(e) => write!(f, "HTTP request failed: {}", e),
            CcError::UnexpectedStatus { status, body } => {
                write!(f, "unexpected status {}: {}", status, body)
            }
            CcError::Decode(msg) => write!(f, "JSON decode error: {}", msg),
            CcError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            CcError::Pagination(msg) => write!(f, "Pagination error: {}", msg),
            CcError::TokenNotFound(msg) => write!(f, "{}", msg),
            CcError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CcError::Dispatcher(msg) => write!(f, "Dispatcher error: {}", msg),
        }
    }
}

impl std::error::Error for CcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CcError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CcError {
    fn from(err: reqwest::Error) -> Self {
        CcError::Transport(err)
    }
}

impl From<serde_json::Error> for CcError {
    fn from(err: serde_json::Error) -> Self {
        CcError::Decode(err.to_string())
    }
}

impl From<url::ParseError> for CcError {
    fn from(err: url::ParseError) -> Self {
        CcError::InvalidUrl(err.to_string())
    }
}

/// Result type alias for Cloud Controller operations
pub type Result<T> = std::result::Result<T, CcError>;
