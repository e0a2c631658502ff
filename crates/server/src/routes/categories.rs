use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use common::types::Message;
use models::category::Category;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{errors::ApiError, routes::auth::ServerState};

#[derive(Debug, Deserialize)]
pub struct CategoryInput {
    pub name: String,
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(state.categories.list().await?))
}

pub async fn get(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WithRejection<Path<u64>, ApiError>,
) -> Result<Json<Category>, ApiError> {
    Ok(Json(state.categories.get(id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<CategoryInput>, ApiError>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let category = state.categories.create(&input.name).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Category added successfully", "category": category})),
    ))
}

pub async fn remove_by_name(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<CategoryInput>, ApiError>,
) -> Result<Json<Message>, ApiError> {
    state.categories.remove_by_name(&input.name).await?;
    Ok(Json(Message::new("Category removed successfully")))
}

pub async fn remove_by_id(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WithRejection<Path<u64>, ApiError>,
) -> Result<Json<Message>, ApiError> {
    state.categories.remove_by_id(id).await?;
    Ok(Json(Message::new("Category removed successfully")))
}
