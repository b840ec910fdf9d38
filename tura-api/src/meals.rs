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
use tura_shared::models::pricing::{MealPricing, MealPricingPatch, NewMealPricing};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/api/pricing/meals",
        get(list_meals)
            .post(create_meal)
            .put(update_meal)
            .delete(archive_meal),
    )
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateMealPricingRequest {
    restaurant_name: Option<String>,
    city: Option<String>,
    meal_type: Option<String>,
    currency: Option<String>,
    season_name: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    adult_lunch: Option<Decimal>,
    child_lunch: Option<Decimal>,
    adult_dinner: Option<Decimal>,
    child_dinner: Option<Decimal>,
    menu_description: Option<String>,
    notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UpdateMealPricingRequest {
    id: Option<i64>,
    #[serde(flatten)]
    patch: MealPricingPatch,
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

async fn list_meals(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Json<Vec<MealPricing>>, AppError> {
    let meals = state.meals.list_active(session.organization_id).await.map_err(AppError::internal)?;
    Ok(Json(meals))
}

async fn create_meal(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Json(req): Json<CreateMealPricingRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (Some(restaurant_name), Some(city), Some(meal_type), Some(currency)) = (
        required(&req.restaurant_name),
        required(&req.city),
        required(&req.meal_type),
        required(&req.currency),
    ) else {
        return Err(AppError::Validation(
            "Missing required fields: restaurantName, city, mealType, currency".to_string(),
        ));
    };

    let new = NewMealPricing {
        restaurant_name,
        city,
        meal_type,
        currency,
        season_name: req.season_name,
        start_date: req.start_date,
        end_date: req.end_date,
        adult_lunch: req.adult_lunch,
        child_lunch: req.child_lunch,
        adult_dinner: req.adult_dinner,
        child_dinner: req.child_dinner,
        menu_description: req.menu_description,
        notes: req.notes,
    };

    let id = state.meals.create(session.organization_id, &new).await.map_err(AppError::internal)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Meal pricing created successfully",
            "id": id,
            "summary": {
                "restaurant": new.restaurant_name,
                "city": new.city,
                "mealType": new.meal_type,
                "season": new.season_name.as_deref().unwrap_or("N/A"),
                "currency": new.currency,
            }
        })),
    ))
}

async fn update_meal(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Json(req): Json<UpdateMealPricingRequest>,
) -> Result<Json<Value>, AppError> {
    let id = req
        .id
        .ok_or_else(|| AppError::Validation("Missing required field: id".to_string()))?;

    state
        .meals
        .find_owned(session.organization_id, id)
        .await.map_err(AppError::internal)?
        .ok_or_else(|| {
            AppError::NotFound("Meal pricing not found or access denied".to_string())
        })?;

    state
        .meals
        .update(session.organization_id, id, &req.patch)
        .await.map_err(AppError::internal)?;

    Ok(Json(json!({
        "message": "Meal pricing updated successfully",
        "id": id,
        "summary": {
            "restaurant": req.patch.restaurant_name.as_deref().unwrap_or("unchanged"),
            "city": req.patch.city.as_deref().unwrap_or("unchanged"),
            "mealType": req.patch.meal_type.as_deref().unwrap_or("unchanged"),
            "season": req.patch.season_name.as_deref().unwrap_or("N/A"),
            "currency": req.patch.currency.as_deref().unwrap_or("unchanged"),
        }
    })))
}

async fn archive_meal(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Query(params): Query<ArchiveParams>,
) -> Result<Json<Value>, AppError> {
    let id = params
        .id
        .ok_or_else(|| AppError::Validation("Missing required parameter: id".to_string()))?;

    let existing = state
        .meals
        .find_owned(session.organization_id, id)
        .await.map_err(AppError::internal)?
        .ok_or_else(|| {
            AppError::NotFound("Meal pricing not found or access denied".to_string())
        })?;

    state.meals.archive(session.organization_id, id).await.map_err(AppError::internal)?;

    Ok(Json(json!({
        "message": "Meal pricing archived successfully",
        "id": id,
        "summary": {
            "restaurant": existing.restaurant_name,
            "city": existing.city,
            "mealType": existing.meal_type,
            "status": "archived",
        }
    })))
}
