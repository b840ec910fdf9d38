use crate::controller::WizardError;
use crate::customize::CustomizeSelection;
use crate::draft::QuoteDraft;
use crate::BackendError;
use async_trait::async_trait;
use tura_core::session::SessionContext;
use tura_shared::models::quote::{GenerateQuoteRequest, GenerateQuoteResponse};
use uuid::Uuid;

/// The external itinerary generation service.
#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    async fn generate(
        &self,
        organization_id: Uuid,
        request: &GenerateQuoteRequest,
    ) -> Result<GenerateQuoteResponse, BackendError>;
}

/// Assemble the generation payload from the full draft. The preferences
/// block is included only when customization was opted into and the
/// operator actually locked something.
pub fn build_request(
    session: &SessionContext,
    draft: &QuoteDraft,
    wants_customization: bool,
    selection: &CustomizeSelection,
) -> Result<GenerateQuoteRequest, WizardError> {
    let city_nights = draft.valid_cities();
    let start_date = draft.start_date.ok_or(WizardError::MissingDestinations)?;
    if city_nights.is_empty() {
        return Err(WizardError::MissingDestinations);
    }
    let end_date = draft.end_date().ok_or(WizardError::MissingDestinations)?;

    let quote_preferences = if wants_customization {
        selection.build_preferences(session.user_id)
    } else {
        None
    };

    let customer_phone = if draft.customer_phone.trim().is_empty() {
        None
    } else {
        Some(draft.customer_phone.clone().into())
    };

    Ok(GenerateQuoteRequest {
        customer_name: draft.customer_name.clone().into(),
        customer_email: draft.customer_email.clone().into(),
        customer_phone,
        destination: draft.destination_label(),
        city_nights,
        start_date,
        end_date,
        adults: draft.adults,
        children: draft.children,
        hotel_category: draft.hotel_category,
        tour_type: draft.tour_type,
        special_requests: draft.special_requests.clone(),
        quote_preferences,
    })
}
