use super::catalog::{HotelCategory, TourType};
use crate::pii::Masked;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One stop of the trip: a city and the nights spent there. Order matters,
/// the itinerary follows the list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CityNight {
    pub city: String,
    pub nights: u32,
}

impl CityNight {
    pub fn new(city: impl Into<String>, nights: u32) -> Self {
        Self {
            city: city.into(),
            nights,
        }
    }
}

/// Operator-chosen catalog items the generation service must use instead of
/// choosing freely. Built only when customization was opted into and at
/// least one selection was made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotePreferences {
    /// City -> locked hotel id. At most one hotel per city.
    pub locked_hotels: BTreeMap<String, i64>,
    pub locked_tours: Vec<i64>,
    pub customization_notes: String,
    pub locked_at: DateTime<Utc>,
    pub locked_by_user_id: Uuid,
}

/// Payload of `POST /api/quotes/{organization_id}/ai-generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateQuoteRequest {
    pub customer_name: Masked<String>,
    pub customer_email: Masked<String>,
    pub customer_phone: Option<Masked<String>>,
    pub destination: String,
    pub city_nights: Vec<CityNight>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub adults: u32,
    pub children: u32,
    pub hotel_category: HotelCategory,
    pub tour_type: TourType,
    pub special_requests: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_preferences: Option<QuotePreferences>,
}

/// Response of the generation service.
///
/// Contract: a successful generation must carry a stable identifier, the
/// itinerary uuid preferred, a numeric id accepted as fallback. A success
/// status with neither id is treated as a failure by callers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateQuoteResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itinerary_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Stable reference to a generated itinerary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItineraryRef {
    Uuid(Uuid),
    Numeric(i64),
}

impl GenerateQuoteResponse {
    /// Itinerary identifier, uuid preferred over the numeric fallback.
    pub fn itinerary_ref(&self) -> Option<ItineraryRef> {
        if let Some(uuid) = self.uuid {
            Some(ItineraryRef::Uuid(uuid))
        } else {
            self.itinerary_id.map(ItineraryRef::Numeric)
        }
    }
}
