use async_trait::async_trait;

use super::domain::Principal;
use super::errors::AuthError;

/// Credential verification abstraction.
/// Implementations can compare a shared secret, look up per-user keys, or
/// decode signed tokens.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Principal, AuthError>;
}

/// Accepts exactly one configured secret.
#[derive(Clone)]
pub struct StaticTokenVerifier {
    secret: String,
}

impl StaticTokenVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self { secret: secret.into() }
    }
}

impl std::fmt::Debug for StaticTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenVerifier").finish_non_exhaustive()
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn verify(&self, token: &str) -> Result<Principal, AuthError> {
        if token == self.secret {
            Ok(Principal::Shared)
        } else {
            Err(AuthError::InvalidToken)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_verifier_matches_exactly() {
        let v = StaticTokenVerifier::new("s3cret");
        assert_eq!(v.verify("s3cret").await, Ok(Principal::Shared));
        assert_eq!(v.verify("s3cret ").await, Err(AuthError::InvalidToken));
        assert_eq!(format!("{v:?}"), "StaticTokenVerifier { .. }");
    }
}
