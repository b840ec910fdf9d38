use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a pricing row.
///
/// Archived rows are retained for historical bookings and are never
/// physically deleted; list endpoints filter them out, direct lookups do not.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    Archived,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Active => "active",
            RecordStatus::Archived => "archived",
        }
    }
}

impl std::str::FromStr for RecordStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(RecordStatus::Active),
            "archived" => Ok(RecordStatus::Archived),
            other => Err(format!("unknown record status: {}", other)),
        }
    }
}

/// Restaurant rate sheet entry, one row per (restaurant, season).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPricing {
    pub id: i64,
    #[serde(skip_serializing)]
    pub organization_id: Uuid,
    pub restaurant_name: String,
    pub city: String,
    pub meal_type: String,
    pub season_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub currency: String,
    pub adult_lunch: Option<Decimal>,
    pub child_lunch: Option<Decimal>,
    pub adult_dinner: Option<Decimal>,
    pub child_dinner: Option<Decimal>,
    pub menu_description: Option<String>,
    pub notes: Option<String>,
    pub status: RecordStatus,
}

/// Hotel rate sheet entry. Base rate is bed & breakfast; other meal plans
/// are supplements on top of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelPricing {
    pub id: i64,
    #[serde(skip_serializing)]
    pub organization_id: Uuid,
    pub hotel_name: String,
    pub city: String,
    pub star_rating: i16,
    pub season_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub currency: String,
    pub double_bb: Option<Decimal>,
    pub single_supplement: Option<Decimal>,
    pub triple_bb: Option<Decimal>,
    pub child_0_6: Option<Decimal>,
    pub child_6_12: Option<Decimal>,
    pub base_meal_plan: Option<String>,
    pub hb_supplement: Option<Decimal>,
    pub fb_supplement: Option<Decimal>,
    pub ai_supplement: Option<Decimal>,
    pub notes: Option<String>,
    pub status: RecordStatus,
}

/// Tour rate sheet entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourPricing {
    pub id: i64,
    #[serde(skip_serializing)]
    pub organization_id: Uuid,
    pub tour_name: String,
    pub city: String,
    pub tour_type: super::catalog::TourType,
    pub season_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub currency: String,
    pub adult_price: Option<Decimal>,
    pub child_price: Option<Decimal>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub status: RecordStatus,
}

// ============================================================================
// Create / update shapes
// ============================================================================
//
// Update semantics are split into two disjoint field groups:
//   * identity fields (name, city, type, currency) are sparse-patch:
//     an absent value keeps the stored one (COALESCE in SQL);
//   * rate fields (season, validity dates, prices, descriptions, notes) are
//     full-replace: the incoming value is written as-is, including NULL.
// Callers editing one price must therefore resubmit the whole rate block.

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMealPricing {
    pub restaurant_name: String,
    pub city: String,
    pub meal_type: String,
    pub currency: String,
    pub season_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub adult_lunch: Option<Decimal>,
    pub child_lunch: Option<Decimal>,
    pub adult_dinner: Option<Decimal>,
    pub child_dinner: Option<Decimal>,
    pub menu_description: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPricingPatch {
    // sparse-patch group
    pub restaurant_name: Option<String>,
    pub city: Option<String>,
    pub meal_type: Option<String>,
    pub currency: Option<String>,
    // full-replace group
    pub season_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub adult_lunch: Option<Decimal>,
    pub child_lunch: Option<Decimal>,
    pub adult_dinner: Option<Decimal>,
    pub child_dinner: Option<Decimal>,
    pub menu_description: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHotelPricing {
    pub hotel_name: String,
    pub city: String,
    pub star_rating: i16,
    pub currency: String,
    pub season_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub double_bb: Option<Decimal>,
    pub single_supplement: Option<Decimal>,
    pub triple_bb: Option<Decimal>,
    pub child_0_6: Option<Decimal>,
    pub child_6_12: Option<Decimal>,
    pub base_meal_plan: Option<String>,
    pub hb_supplement: Option<Decimal>,
    pub fb_supplement: Option<Decimal>,
    pub ai_supplement: Option<Decimal>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelPricingPatch {
    // sparse-patch group
    pub hotel_name: Option<String>,
    pub city: Option<String>,
    pub star_rating: Option<i16>,
    pub currency: Option<String>,
    // full-replace group
    pub season_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub double_bb: Option<Decimal>,
    pub single_supplement: Option<Decimal>,
    pub triple_bb: Option<Decimal>,
    pub child_0_6: Option<Decimal>,
    pub child_6_12: Option<Decimal>,
    pub base_meal_plan: Option<String>,
    pub hb_supplement: Option<Decimal>,
    pub fb_supplement: Option<Decimal>,
    pub ai_supplement: Option<Decimal>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTourPricing {
    pub tour_name: String,
    pub city: String,
    pub tour_type: super::catalog::TourType,
    pub currency: String,
    pub season_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub adult_price: Option<Decimal>,
    pub child_price: Option<Decimal>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourPricingPatch {
    // sparse-patch group
    pub tour_name: Option<String>,
    pub city: Option<String>,
    pub tour_type: Option<super::catalog::TourType>,
    pub currency: Option<String>,
    // full-replace group
    pub season_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub adult_price: Option<Decimal>,
    pub child_price: Option<Decimal>,
    pub duration: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
}
