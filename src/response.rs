use crate::error::BridgeError;

/// Response type matching the supabase-js `{ data, error }` pair.
///
/// Every gateway operation resolves to one of these: `data` holds the
/// returned row (or rows) on success, `error` holds the failure
/// otherwise. Exactly one of the two is set.
#[derive(Debug)]
pub struct BridgeResponse<T> {
    /// The returned data (None on error).
    pub data: Option<T>,
    /// Error, if any.
    pub error: Option<BridgeError>,
}

impl<T> BridgeResponse<T> {
    /// Create a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(err: BridgeError) -> Self {
        Self {
            data: None,
            error: Some(err),
        }
    }

    /// Create the response for an unconfigured client. No remote call
    /// was made.
    pub fn no_client() -> Self {
        Self::error(BridgeError::NoClient)
    }

    /// Check if the response is successful.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Check if the response has an error.
    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// Convert into a Result, consuming the response.
    pub fn into_result(self) -> Result<T, BridgeError> {
        match self.error {
            Some(err) => Err(err),
            None => self
                .data
                .ok_or_else(|| BridgeError::serialization("response carried no data")),
        }
    }
}
