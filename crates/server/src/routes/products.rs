use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::WithRejection;
use models::product::{NewProduct, Product};
use serde::Deserialize;

use crate::{errors::ApiError, routes::auth::ServerState};

#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
}

impl ProductQuery {
    fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }
}

pub async fn list(
    State(state): State<ServerState>,
    WithRejection(Query(q), _): WithRejection<Query<ProductQuery>, ApiError>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = match q.category() {
        Some(category) => state.products.list_by_category(category).await?,
        None => state.products.list().await?,
    };
    Ok(Json(products))
}

/// `GET /products/:id`; a `category` query still takes precedence and
/// returns the filtered list.
pub async fn get(
    State(state): State<ServerState>,
    WithRejection(Path(id), _): WithRejection<Path<u64>, ApiError>,
    WithRejection(Query(q), _): WithRejection<Query<ProductQuery>, ApiError>,
) -> Result<Response, ApiError> {
    if let Some(category) = q.category() {
        let products = state.products.list_by_category(category).await?;
        return Ok(Json(products).into_response());
    }
    Ok(Json(state.products.get(id).await?).into_response())
}

pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<NewProduct>, ApiError>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let product = state.products.create(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}
