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
use tura_shared::models::pricing::{HotelPricing, HotelPricingPatch, NewHotelPricing};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/api/pricing/hotels",
        get(list_hotels)
            .post(create_hotel)
            .put(update_hotel)
            .delete(archive_hotel),
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateHotelPricingRequest {
    hotel_name: Option<String>,
    city: Option<String>,
    star_rating: Option<i16>,
    currency: Option<String>,
    season_name: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    double_bb: Option<Decimal>,
    single_supplement: Option<Decimal>,
    triple_bb: Option<Decimal>,
    child_0_6: Option<Decimal>,
    child_6_12: Option<Decimal>,
    base_meal_plan: Option<String>,
    hb_supplement: Option<Decimal>,
    fb_supplement: Option<Decimal>,
    ai_supplement: Option<Decimal>,
    notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateHotelPricingRequest {
    id: Option<i64>,
    #[serde(flatten)]
    patch: HotelPricingPatch,
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

async fn list_hotels(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Json<Vec<HotelPricing>>, AppError> {
    let hotels = state.hotels.list_active(session.organization_id).await.map_err(AppError::internal)?;
    Ok(Json(hotels))
}

async fn create_hotel(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Json(req): Json<CreateHotelPricingRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (Some(hotel_name), Some(city), Some(star_rating), Some(currency)) = (
        required(&req.hotel_name),
        required(&req.city),
        req.star_rating,
        required(&req.currency),
    ) else {
        return Err(AppError::Validation(
            "Missing required fields: hotelName, city, starRating, currency".to_string(),
        ));
    };

    let new = NewHotelPricing {
        hotel_name,
        city,
        star_rating,
        currency,
        season_name: req.season_name,
        start_date: req.start_date,
        end_date: req.end_date,
        double_bb: req.double_bb,
        single_supplement: req.single_supplement,
        triple_bb: req.triple_bb,
        child_0_6: req.child_0_6,
        child_6_12: req.child_6_12,
        base_meal_plan: req.base_meal_plan,
        hb_supplement: req.hb_supplement,
        fb_supplement: req.fb_supplement,
        ai_supplement: req.ai_supplement,
        notes: req.notes,
    };

    let id = state.hotels.create(session.organization_id, &new).await.map_err(AppError::internal)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Hotel pricing created successfully",
            "id": id,
            "summary": {
                "hotel": new.hotel_name,
                "city": new.city,
                "starRating": new.star_rating,
                "season": new.season_name.as_deref().unwrap_or("N/A"),
                "currency": new.currency,
            }
        })),
    ))
}

async fn update_hotel(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Json(req): Json<UpdateHotelPricingRequest>,
) -> Result<Json<Value>, AppError> {
    let id = req
        .id
        .ok_or_else(|| AppError::Validation("Missing required field: id".to_string()))?;

    state
        .hotels
        .find_owned(session.organization_id, id)
        .await.map_err(AppError::internal)?
        .ok_or_else(|| {
            AppError::NotFound("Hotel pricing not found or access denied".to_string())
        })?;

    state
        .hotels
        .update(session.organization_id, id, &req.patch)
        .await.map_err(AppError::internal)?;

    Ok(Json(json!({
        "message": "Hotel pricing updated successfully",
        "id": id,
        "summary": {
            "hotel": req.patch.hotel_name.as_deref().unwrap_or("unchanged"),
            "city": req.patch.city.as_deref().unwrap_or("unchanged"),
            "season": req.patch.season_name.as_deref().unwrap_or("N/A"),
            "currency": req.patch.currency.as_deref().unwrap_or("unchanged"),
        }
    })))
}

async fn archive_hotel(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Query(params): Query<ArchiveParams>,
) -> Result<Json<Value>, AppError> {
    let id = params
        .id
        .ok_or_else(|| AppError::Validation("Missing required parameter: id".to_string()))?;

    let existing = state
        .hotels
        .find_owned(session.organization_id, id)
        .await.map_err(AppError::internal)?
        .ok_or_else(|| {
            AppError::NotFound("Hotel pricing not found or access denied".to_string())
        })?;

    state.hotels.archive(session.organization_id, id).await.map_err(AppError::internal)?;

    Ok(Json(json!({
        "message": "Hotel pricing archived successfully",
        "id": id,
        "summary": {
            "hotel": existing.hotel_name,
            "city": existing.city,
            "season": existing.season_name.as_deref().unwrap_or("N/A"),
            "status": "archived",
        }
    })))
}
