use crate::generator::QuoteGenerator;
use std::sync::Arc;
use tura_core::repository::{
    CatalogRepository, CityRepository, HotelPricingRepository, MealPricingRepository,
    OrganizationRepository, TourPricingRepository,
};

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
    pub expiration: u64,
}

#[derive(Clone)]
pub struct AppState {
    pub meals: Arc<dyn MealPricingRepository>,
    pub hotels: Arc<dyn HotelPricingRepository>,
    pub tours: Arc<dyn TourPricingRepository>,
    pub cities: Arc<dyn CityRepository>,
    pub catalog: Arc<dyn CatalogRepository>,
    pub organizations: Arc<dyn OrganizationRepository>,
    pub generator: Arc<dyn QuoteGenerator>,
    pub auth: AuthConfig,
    /// Season label the catalog endpoint falls back to when the request
    /// names none.
    pub default_season: String,
}
