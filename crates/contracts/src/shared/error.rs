use thiserror::Error;

/// Failure of a single backend call.
///
/// Errors stay local to the request that produced them: callers turn them
/// into inline messages and keep whatever state they already had.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("HTTP {0}")]
    Status(u16),
    /// The body was not the JSON we expected.
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl NetworkError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, NetworkError::Status(404))
    }
}
