use axum::{
    extract::{Path, Query, State},
    routing::get,
    Extension, Json, Router,
};
use serde::Deserialize;
use tura_core::session::SessionContext;
use tura_shared::models::catalog::CatalogItems;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/pricing/items/{organization_id}", get(catalog_items))
}

#[derive(Debug, Deserialize)]
struct SeasonParams {
    season: Option<String>,
}

/// Catalog the customize step picks from: active hotels and tours of one
/// organization for one season. The path org must match the token org; a
/// mismatch is reported as not-found so nothing leaks across tenants.
async fn catalog_items(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Path(organization_id): Path<Uuid>,
    Query(params): Query<SeasonParams>,
) -> Result<Json<CatalogItems>, AppError> {
    if organization_id != session.organization_id {
        return Err(AppError::NotFound(
            "Catalog not found or access denied".to_string(),
        ));
    }

    let season = params
        .season
        .unwrap_or_else(|| state.default_season.clone());

    let items = state.catalog.items_for_season(organization_id, &season).await.map_err(AppError::internal)?;
    Ok(Json(items))
}
