use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use common::types::Message;
use models::favorite::Favorite;
use serde_json::{json, Value};

use crate::{errors::ApiError, routes::auth::ServerState};

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Favorite>>, ApiError> {
    state
        .favorites
        .list()
        .await
        .map(Json)
        .map_err(|e| ApiError::Internal(format!("Error retrieving favorites: {e}")))
}

pub async fn add(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<Favorite>, ApiError>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let favorite = state.favorites.add(input.user_id, input.product_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Product added to favorites", "favorite": favorite})),
    ))
}

pub async fn remove(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<Favorite>, ApiError>,
) -> Result<Json<Message>, ApiError> {
    state.favorites.remove(input.user_id, input.product_id).await?;
    Ok(Json(Message::new("Product removed from favorites")))
}
