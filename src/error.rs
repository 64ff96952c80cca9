/// All errors a bridge operation can surface.
///
/// Every gateway method returns these through the `error` field of a
/// [`BridgeResponse`](crate::response::BridgeResponse); nothing is
/// thrown past the caller.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// Configuration was missing when the shared client was requested.
    /// The remote call was never attempted.
    #[error("no_client")]
    NoClient,

    /// Transport-level failure (connection refused, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(String),

    /// Error body returned by PostgREST (constraint violation, auth
    /// failure, unknown table). Passed through opaquely.
    #[error("PostgREST error ({status}): {message}")]
    Postgrest {
        status: u16,
        message: String,
        code: Option<String>,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl BridgeError {
    pub fn postgrest(status: u16, message: impl Into<String>, code: Option<String>) -> Self {
        Self::Postgrest {
            status,
            message: message.into(),
            code,
        }
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for BridgeError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

/// Result alias using BridgeError.
pub type BridgeResult<T> = Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_client_marker() {
        // The UI matches on this exact string.
        assert_eq!(BridgeError::NoClient.to_string(), "no_client");
    }

    #[test]
    fn test_postgrest_display() {
        let err = BridgeError::postgrest(409, "duplicate key", Some("23505".to_string()));
        assert_eq!(err.to_string(), "PostgREST error (409): duplicate key");
    }
}
