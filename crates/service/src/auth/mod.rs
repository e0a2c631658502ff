//! Auth module: the token gate in front of every protected route.
//!
//! `authenticate` turns the raw `Authorization` header into a [`Principal`]
//! using whichever [`TokenVerifier`] the route group was built with.

pub mod domain;
pub mod errors;
pub mod verifier;

pub use domain::Principal;
pub use errors::AuthError;
pub use verifier::{StaticTokenVerifier, TokenVerifier};

/// Gate a request on its `Authorization` header value.
///
/// An absent or blank header is a missing token; anything else is handed to
/// the verifier.
pub async fn authenticate(
    verifier: &dyn TokenVerifier,
    header: Option<&str>,
) -> Result<Principal, AuthError> {
    let token = match header.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => return Err(AuthError::MissingToken),
    };
    verifier.verify(token).await
}
