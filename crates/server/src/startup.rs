use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::Router;
use configs::AppConfig;
use service::{
    auth::{StaticTokenVerifier, TokenVerifier},
    storage::{DocumentStore, JsonDocumentStore},
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, auth::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn load_bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.server.host, cfg.server.port).parse()?)
}

/// Open the document store and wire services and verifiers from config.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let path = Path::new(&cfg.storage.path);
    common::env::ensure_data_dir(path).await?;
    let store = JsonDocumentStore::connect(path).await?;
    let store: Arc<dyn DocumentStore> = store;

    let verifier: Arc<dyn TokenVerifier> = Arc::new(StaticTokenVerifier::new(cfg.auth.token.clone()));
    let users_verifier: Arc<dyn TokenVerifier> =
        Arc::new(StaticTokenVerifier::new(cfg.auth.users_token().to_string()));

    Ok(ServerState::new(store, verifier, users_verifier))
}

/// Build the application router for an already-built state.
pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Public entry: build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr = load_bind_addr(&cfg)?;
    info!(%addr, storage = %cfg.storage.path, "starting catalog api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
