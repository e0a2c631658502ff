use std::sync::Arc;

use models::{user::{self, AuthenticatedUser}, Collection};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::{mutate, query, DocumentStore};

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn DocumentStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self { Self { store } }

    pub async fn list(&self) -> Result<Vec<AuthenticatedUser>, ServiceError> {
        query(&*self.store, |doc| doc.authenticated_users.clone()).await
    }

    pub async fn get(&self, username: &str) -> Result<AuthenticatedUser, ServiceError> {
        query(&*self.store, |doc| {
            doc.authenticated_users.iter().find(|u| u.username == username).cloned()
        })
        .await?
        .ok_or_else(|| ServiceError::not_found("User"))
    }

    /// Mark `username` as authenticated with `role` (default `viewer`).
    pub async fn authenticate(&self, username: &str, role: Option<&str>) -> Result<AuthenticatedUser, ServiceError> {
        let new_user = AuthenticatedUser::new(username, role)?;
        let created = mutate(&*self.store, |doc| {
            if doc.authenticated_users.iter().any(|u| u.username == new_user.username) {
                return Err(ServiceError::Conflict("User already authenticated".into()));
            }
            doc.authenticated_users.push(new_user.clone());
            Ok(new_user)
        })
        .await?;
        info!(collection = %Collection::AuthenticatedUsers, username = %created.username, role = %created.role, "user authenticated");
        Ok(created)
    }

    pub async fn remove(&self, username: &str) -> Result<AuthenticatedUser, ServiceError> {
        user::validate_username(username)?;
        let removed = mutate(&*self.store, |doc| {
            let found = doc
                .authenticated_users
                .iter()
                .find(|u| u.username == username)
                .cloned()
                .ok_or_else(|| ServiceError::not_found("User"))?;
            doc.authenticated_users.retain(|u| u.username != username);
            Ok(found)
        })
        .await?;
        info!(collection = %Collection::AuthenticatedUsers, username = %removed.username, "user removed");
        Ok(removed)
    }
}
