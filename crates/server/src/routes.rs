use axum::{middleware, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub mod auth;
pub mod categories;
pub mod favorites;
pub mod products;
pub mod users;

use auth::ServerState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: public health check, the
/// token-gated catalog routes and the separately gated `/users` routes.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new().route("/health", get(health));

    let catalog = Router::new()
        .route(
            "/categories",
            get(categories::list).post(categories::create).delete(categories::remove_by_name),
        )
        .route("/categories/:id", get(categories::get).delete(categories::remove_by_id))
        .route("/products", get(products::list).post(products::create))
        .route("/products/:id", get(products::get))
        .route(
            "/favorites",
            get(favorites::list).post(favorites::add).delete(favorites::remove),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_token));

    let users = Router::new()
        .route(
            "/users",
            get(users::list).post(users::authenticate).delete(users::remove_by_body),
        )
        .route("/users/:username", get(users::get).delete(users::remove_by_path))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_users_token));

    public
        .merge(catalog)
        .merge(users)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
