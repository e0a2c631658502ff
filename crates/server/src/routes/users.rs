use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;
use common::types::Message;
use models::user::AuthenticatedUser;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{errors::ApiError, routes::auth::ServerState};

#[derive(Debug, Deserialize)]
pub struct UserInput {
    pub username: String,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UsernameInput {
    pub username: String,
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<AuthenticatedUser>>, ApiError> {
    Ok(Json(state.users.list().await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(username): Path<String>,
) -> Result<Json<AuthenticatedUser>, ApiError> {
    Ok(Json(state.users.get(&username).await?))
}

pub async fn authenticate(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<UserInput>, ApiError>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let user = state.users.authenticate(&input.username, input.role.as_deref()).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "User authenticated successfully", "user": user})),
    ))
}

pub async fn remove_by_body(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<UsernameInput>, ApiError>,
) -> Result<Json<Message>, ApiError> {
    state.users.remove(&input.username).await?;
    Ok(Json(Message::new("User removed successfully")))
}

pub async fn remove_by_path(
    State(state): State<ServerState>,
    Path(username): Path<String>,
) -> Result<Json<Message>, ApiError> {
    state.users.remove(&username).await?;
    Ok(Json(Message::new("User removed successfully")))
}
