use thiserror::Error;

/// Token gate failures. The display text is what clients see.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Unauthorized access token not found")]
    MissingToken,
    #[error("Unauthorized invalid token")]
    InvalidToken,
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::MissingToken => 1001,
            AuthError::InvalidToken => 1002,
        }
    }
}
