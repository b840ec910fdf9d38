use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

/// Minimum search length before the directory is queried; shorter input gets
/// an empty list without touching the database. Mirrors the client-side
/// autocomplete gate.
const MIN_SEARCH_LEN: usize = 2;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/cities", get(search_cities))
}

#[derive(Debug, Deserialize)]
struct CitySearchParams {
    search: Option<String>,
}

async fn search_cities(
    State(state): State<AppState>,
    Query(params): Query<CitySearchParams>,
) -> Result<Json<Value>, AppError> {
    let search = params.search.unwrap_or_default();
    if search.chars().count() < MIN_SEARCH_LEN {
        return Ok(Json(json!({ "cities": [] })));
    }

    let cities = state.cities.search(&search).await.map_err(AppError::internal)?;
    Ok(Json(json!({ "cities": cities })))
}
