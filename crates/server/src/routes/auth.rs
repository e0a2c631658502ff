use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use service::{
    auth::{self, AuthError, TokenVerifier},
    services::{CategoryService, FavoriteService, ProductService, UserService},
    storage::DocumentStore,
};
use tracing::warn;

use crate::errors::ApiError;

/// Shared handler state: one service per collection over a single store,
/// plus the verifiers guarding each route group.
#[derive(Clone)]
pub struct ServerState {
    pub categories: CategoryService,
    pub products: ProductService,
    pub favorites: FavoriteService,
    pub users: UserService,
    pub verifier: Arc<dyn TokenVerifier>,
    pub users_verifier: Arc<dyn TokenVerifier>,
}

impl ServerState {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        verifier: Arc<dyn TokenVerifier>,
        users_verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        Self {
            categories: CategoryService::new(Arc::clone(&store)),
            products: ProductService::new(Arc::clone(&store)),
            favorites: FavoriteService::new(Arc::clone(&store)),
            users: UserService::new(store),
            verifier,
            users_verifier,
        }
    }
}

/// Middleware: require a valid `Authorization` token for catalog routes.
pub async fn require_token(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    gate(&*state.verifier, &mut req).await?;
    Ok(next.run(req).await)
}

/// Middleware: same gate for `/users`, checked against the users token.
pub async fn require_users_token(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    gate(&*state.users_verifier, &mut req).await?;
    Ok(next.run(req).await)
}

/// Verify the request and stash the resulting principal in its extensions.
async fn gate(verifier: &dyn TokenVerifier, req: &mut Request) -> Result<(), ApiError> {
    let header = match req.headers().get(AUTHORIZATION) {
        None => None,
        Some(v) => match v.to_str() {
            Ok(s) => Some(s),
            Err(_) => {
                warn!(path = %req.uri().path(), "non-ascii Authorization header");
                return Err(AuthError::InvalidToken.into());
            }
        },
    };

    let outcome = auth::authenticate(verifier, header).await;
    match outcome {
        Ok(principal) => {
            req.extensions_mut().insert(principal);
            Ok(())
        }
        Err(e) => {
            warn!(path = %req.uri().path(), method = %req.method(), code = e.code(), reason = %e, "request rejected by token gate");
            Err(e.into())
        }
    }
}
