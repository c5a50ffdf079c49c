// Client error types

/// Errors raised by the gateway client and its resource façades.
///
/// The client never recovers locally: every failure is handed to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network unreachable, DNS failure, or a body that is not the expected JSON.
    #[error("transport failed: {0}")]
    TransportFailed(String),

    /// The transport succeeded but the status was outside 200-299.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// The session store could not be written.
    #[error("session store error: {0}")]
    Session(#[from] SessionError),

    /// The client was configured with an unusable base URL.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ClientError {
    pub fn transport(message: impl Into<String>) -> Self {
        ClientError::TransportFailed(message.into())
    }

    pub fn request_failed(status: u16, message: impl Into<String>) -> Self {
        ClientError::RequestFailed {
            status,
            message: message.into(),
        }
    }

    /// Transport status of a `RequestFailed`, if that is what this is.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::TransportFailed(err.to_string())
    }
}

/// Errors from persisting the session token.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("session file is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("session storage unavailable: {0}")]
    Unavailable(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
