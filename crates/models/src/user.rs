use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

pub const DEFAULT_ROLE: &str = "viewer";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub username: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String { DEFAULT_ROLE.into() }

impl AuthenticatedUser {
    /// Build a user record; a missing or blank role becomes `viewer`.
    pub fn new(username: &str, role: Option<&str>) -> Result<Self, ModelError> {
        validate_username(username)?;
        let role = match role.map(str::trim) {
            Some(r) if !r.is_empty() => r.to_string(),
            _ => default_role(),
        };
        Ok(Self { username: username.to_string(), role })
    }
}

pub fn validate_username(username: &str) -> Result<(), ModelError> {
    if username.trim().is_empty() {
        return Err(ModelError::Validation("Username is required".into()));
    }
    Ok(())
}
