pub mod app_config;
pub mod catalog_repo;
pub mod city_repo;
pub mod database;
pub mod hotel_repo;
pub mod meal_repo;
pub mod org_repo;
pub mod tour_repo;

pub use catalog_repo::PostgresCatalogRepository;
pub use city_repo::PostgresCityRepository;
pub use database::DbClient;
pub use hotel_repo::PostgresHotelPricingRepository;
pub use meal_repo::PostgresMealPricingRepository;
pub use org_repo::PostgresOrganizationRepository;
pub use tour_repo::PostgresTourPricingRepository;
