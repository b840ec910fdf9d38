use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Extension, Json, Router,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};
use tura_core::session::SessionContext;
use tura_shared::models::catalog::TourType;
use tura_shared::models::pricing::{NewTourPricing, TourPricing, TourPricingPatch};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/api/pricing/tours",
        get(list_tours)
            .post(create_tour)
            .put(update_tour)
            .delete(archive_tour),
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTourPricingRequest {
    tour_name: Option<String>,
    city: Option<String>,
    tour_type: Option<TourType>,
    currency: Option<String>,
    season_name: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    adult_price: Option<Decimal>,
    child_price: Option<Decimal>,
    duration: Option<String>,
    description: Option<String>,
    notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateTourPricingRequest {
    id: Option<i64>,
    #[serde(flatten)]
    patch: TourPricingPatch,
}

#[derive(Debug, Deserialize)]
struct ArchiveParams {
    id: Option<i64>,
}

fn required(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

async fn list_tours(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Json<Vec<TourPricing>>, AppError> {
    let tours = state.tours.list_active(session.organization_id).await.map_err(AppError::internal)?;
    Ok(Json(tours))
}

async fn create_tour(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Json(req): Json<CreateTourPricingRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (Some(tour_name), Some(city), Some(tour_type), Some(currency)) = (
        required(&req.tour_name),
        required(&req.city),
        req.tour_type,
        required(&req.currency),
    ) else {
        return Err(AppError::Validation(
            "Missing required fields: tourName, city, tourType, currency".to_string(),
        ));
    };

    let new = NewTourPricing {
        tour_name,
        city,
        tour_type,
        currency,
        season_name: req.season_name,
        start_date: req.start_date,
        end_date: req.end_date,
        adult_price: req.adult_price,
        child_price: req.child_price,
        duration: req.duration,
        description: req.description,
        notes: req.notes,
    };

    let id = state.tours.create(session.organization_id, &new).await.map_err(AppError::internal)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Tour pricing created successfully",
            "id": id,
            "summary": {
                "tour": new.tour_name,
                "city": new.city,
                "tourType": new.tour_type.as_str(),
                "season": new.season_name.as_deref().unwrap_or("N/A"),
                "currency": new.currency,
            }
        })),
    ))
}

async fn update_tour(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Json(req): Json<UpdateTourPricingRequest>,
) -> Result<Json<Value>, AppError> {
    let id = req
        .id
        .ok_or_else(|| AppError::Validation("Missing required field: id".to_string()))?;

    state
        .tours
        .find_owned(session.organization_id, id)
        .await.map_err(AppError::internal)?
        .ok_or_else(|| {
            AppError::NotFound("Tour pricing not found or access denied".to_string())
        })?;

    state
        .tours
        .update(session.organization_id, id, &req.patch)
        .await.map_err(AppError::internal)?;

    Ok(Json(json!({
        "message": "Tour pricing updated successfully",
        "id": id,
        "summary": {
            "tour": req.patch.tour_name.as_deref().unwrap_or("unchanged"),
            "city": req.patch.city.as_deref().unwrap_or("unchanged"),
            "tourType": req.patch.tour_type.map(|t| t.as_str()).unwrap_or("unchanged"),
            "season": req.patch.season_name.as_deref().unwrap_or("N/A"),
            "currency": req.patch.currency.as_deref().unwrap_or("unchanged"),
        }
    })))
}

async fn archive_tour(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Query(params): Query<ArchiveParams>,
) -> Result<Json<Value>, AppError> {
    let id = params
        .id
        .ok_or_else(|| AppError::Validation("Missing required parameter: id".to_string()))?;

    let existing = state
        .tours
        .find_owned(session.organization_id, id)
        .await.map_err(AppError::internal)?
        .ok_or_else(|| {
            AppError::NotFound("Tour pricing not found or access denied".to_string())
        })?;

    state.tours.archive(session.organization_id, id).await.map_err(AppError::internal)?;

    Ok(Json(json!({
        "message": "Tour pricing archived successfully",
        "id": id,
        "summary": {
            "tour": existing.tour_name,
            "city": existing.city,
            "tourType": existing.tour_type.as_str(),
            "status": "archived",
        }
    })))
}
