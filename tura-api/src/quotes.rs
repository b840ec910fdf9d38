use axum::{
    extract::{Path, State},
    routing::post,
    Extension, Json, Router,
};
use tura_core::session::SessionContext;
use tura_shared::models::quote::{GenerateQuoteRequest, GenerateQuoteResponse};
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/api/quotes/{organization_id}/ai-generate",
        post(ai_generate),
    )
}

/// Forwards a completed wizard draft to the generation service and enforces
/// its response contract: a success must carry an itinerary uuid or numeric
/// id, otherwise it is reported as an upstream failure regardless of status.
async fn ai_generate(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Path(organization_id): Path<Uuid>,
    Json(request): Json<GenerateQuoteRequest>,
) -> Result<Json<GenerateQuoteResponse>, AppError> {
    if organization_id != session.organization_id {
        return Err(AppError::NotFound(
            "Quote not found or access denied".to_string(),
        ));
    }

    if request.customer_name.inner().trim().is_empty()
        || request.customer_email.inner().trim().is_empty()
    {
        return Err(AppError::Validation(
            "Missing required fields: customer_name, customer_email".to_string(),
        ));
    }

    if request.city_nights.is_empty() {
        return Err(AppError::Validation(
            "Missing required field: city_nights".to_string(),
        ));
    }

    tracing::info!(
        organization = %organization_id,
        destination = %request.destination,
        nights = request.city_nights.iter().map(|cn| cn.nights).sum::<u32>(),
        "Generating itinerary"
    );

    let response = state
        .generator
        .generate(organization_id, &request)
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    if let Some(message) = response.error {
        return Err(AppError::Upstream(message));
    }

    if response.itinerary_ref().is_none() {
        return Err(AppError::Upstream(
            "Generation service returned no itinerary id".to_string(),
        ));
    }

    Ok(Json(response))
}
