use chrono::{Duration, NaiveDate};
use tura_shared::models::catalog::{HotelCategory, TourType};
use tura_shared::models::quote::CityNight;

/// The in-memory quote draft a wizard instance collects. Lives only for the
/// duration of one wizard run; dropped on abandon or successful submission.
#[derive(Debug, Clone)]
pub struct QuoteDraft {
    /// Ordered stops. Rows with a blank city are kept while editing and
    /// ignored by validation and derived values.
    pub city_nights: Vec<CityNight>,
    pub start_date: Option<NaiveDate>,
    pub adults: u32,
    pub children: u32,
    pub hotel_category: HotelCategory,
    pub tour_type: TourType,
    pub special_requests: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
}

impl Default for QuoteDraft {
    fn default() -> Self {
        Self {
            city_nights: vec![CityNight::new("", 2)],
            start_date: None,
            adults: 2,
            children: 0,
            hotel_category: HotelCategory::FourStar,
            tour_type: TourType::Private,
            special_requests: String::new(),
            customer_name: String::new(),
            customer_email: String::new(),
            customer_phone: String::new(),
        }
    }
}

impl QuoteDraft {
    pub fn add_city(&mut self) {
        self.city_nights.push(CityNight::new("", 2));
    }

    pub fn remove_city(&mut self, index: usize) {
        if index < self.city_nights.len() {
            self.city_nights.remove(index);
        }
    }

    pub fn set_city(&mut self, index: usize, city: impl Into<String>) {
        if let Some(entry) = self.city_nights.get_mut(index) {
            entry.city = city.into();
        }
    }

    /// Nights per stop, floored at 1.
    pub fn set_nights(&mut self, index: usize, nights: u32) {
        if let Some(entry) = self.city_nights.get_mut(index) {
            entry.nights = nights.max(1);
        }
    }

    /// Stops with a non-blank city, in itinerary order.
    pub fn valid_cities(&self) -> Vec<CityNight> {
        self.city_nights
            .iter()
            .filter(|cn| !cn.city.trim().is_empty())
            .cloned()
            .collect()
    }

    pub fn total_nights(&self) -> u32 {
        self.valid_cities().iter().map(|cn| cn.nights).sum()
    }

    pub fn total_days(&self) -> u32 {
        self.total_nights() + 1
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.start_date
            .map(|start| start + Duration::days(i64::from(self.total_nights())))
    }

    /// Display string for the whole trip, e.g. "Istanbul & Cappadocia".
    pub fn destination_label(&self) -> String {
        self.valid_cities()
            .iter()
            .map(|cn| cn.city.trim().to_string())
            .collect::<Vec<_>>()
            .join(" & ")
    }

    pub fn has_destinations(&self) -> bool {
        !self.valid_cities().is_empty() && self.start_date.is_some()
    }

    pub fn has_contact(&self) -> bool {
        !self.customer_name.trim().is_empty() && !self.customer_email.trim().is_empty()
    }
}
