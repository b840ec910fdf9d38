use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tour operation model: a private vehicle/guide for one party, or a
/// seat-in-coach departure shared with other travellers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TourType {
    Private,
    Sic,
}

impl TourType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TourType::Private => "PRIVATE",
            TourType::Sic => "SIC",
        }
    }
}

impl std::str::FromStr for TourType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PRIVATE" => Ok(TourType::Private),
            "SIC" => Ok(TourType::Sic),
            other => Err(format!("unknown tour type: {}", other)),
        }
    }
}

/// Hotel star category an operator quotes against.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HotelCategory {
    #[serde(rename = "3")]
    ThreeStar,
    #[serde(rename = "4")]
    FourStar,
    #[serde(rename = "5")]
    FiveStar,
}

impl HotelCategory {
    pub fn stars(&self) -> i16 {
        match self {
            HotelCategory::ThreeStar => 3,
            HotelCategory::FourStar => 4,
            HotelCategory::FiveStar => 5,
        }
    }

    /// Catalog label form, e.g. "4-star". Catalog items carry this string
    /// as their category discriminator.
    pub fn label(&self) -> String {
        format!("{}-star", self.stars())
    }
}

/// A hotel the operator can lock into a quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HotelOption {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub category: String,
    pub price_per_night: Option<Decimal>,
    pub description: Option<String>,
}

/// A tour the operator can lock into a quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TourOption {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub tour_type: TourType,
    pub price_per_person: Option<Decimal>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

/// Catalog returned by `GET /api/pricing/items/{organization_id}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogItems {
    pub hotels: Vec<HotelOption>,
    pub tours: Vec<TourOption>,
}
