use async_trait::async_trait;
use tura_shared::models::catalog::CatalogItems;
use tura_shared::models::organization::{Organization, OrganizationStatus};
use tura_shared::models::pricing::{
    HotelPricing, HotelPricingPatch, MealPricing, MealPricingPatch, NewHotelPricing,
    NewMealPricing, NewTourPricing, TourPricing, TourPricingPatch,
};
use uuid::Uuid;

pub type RepoError = Box<dyn std::error::Error + Send + Sync>;

/// Repository trait for restaurant rate sheets.
///
/// Every method is scoped by organization id; a row belonging to another
/// tenant behaves exactly like a missing row.
#[async_trait]
pub trait MealPricingRepository: Send + Sync {
    /// Active rows for one organization, ordered by (city, restaurant name).
    async fn list_active(&self, organization_id: Uuid) -> Result<Vec<MealPricing>, RepoError>;

    /// Lookup by id regardless of status. Used both as the ownership
    /// precheck for writes and for historical-booking lookups.
    async fn find_owned(
        &self,
        organization_id: Uuid,
        id: i64,
    ) -> Result<Option<MealPricing>, RepoError>;

    async fn create(
        &self,
        organization_id: Uuid,
        new: &NewMealPricing,
    ) -> Result<i64, RepoError>;

    async fn update(
        &self,
        organization_id: Uuid,
        id: i64,
        patch: &MealPricingPatch,
    ) -> Result<(), RepoError>;

    /// Flip status to archived. Never removes the row.
    async fn archive(&self, organization_id: Uuid, id: i64) -> Result<(), RepoError>;
}

/// Repository trait for hotel rate sheets.
#[async_trait]
pub trait HotelPricingRepository: Send + Sync {
    async fn list_active(&self, organization_id: Uuid) -> Result<Vec<HotelPricing>, RepoError>;

    async fn find_owned(
        &self,
        organization_id: Uuid,
        id: i64,
    ) -> Result<Option<HotelPricing>, RepoError>;

    async fn create(
        &self,
        organization_id: Uuid,
        new: &NewHotelPricing,
    ) -> Result<i64, RepoError>;

    async fn update(
        &self,
        organization_id: Uuid,
        id: i64,
        patch: &HotelPricingPatch,
    ) -> Result<(), RepoError>;

    async fn archive(&self, organization_id: Uuid, id: i64) -> Result<(), RepoError>;
}

/// Repository trait for tour rate sheets.
#[async_trait]
pub trait TourPricingRepository: Send + Sync {
    async fn list_active(&self, organization_id: Uuid) -> Result<Vec<TourPricing>, RepoError>;

    async fn find_owned(
        &self,
        organization_id: Uuid,
        id: i64,
    ) -> Result<Option<TourPricing>, RepoError>;

    async fn create(
        &self,
        organization_id: Uuid,
        new: &NewTourPricing,
    ) -> Result<i64, RepoError>;

    async fn update(
        &self,
        organization_id: Uuid,
        id: i64,
        patch: &TourPricingPatch,
    ) -> Result<(), RepoError>;

    async fn archive(&self, organization_id: Uuid, id: i64) -> Result<(), RepoError>;
}

/// Repository trait for the destination city directory backing autocomplete.
#[async_trait]
pub trait CityRepository: Send + Sync {
    async fn search(&self, prefix: &str) -> Result<Vec<String>, RepoError>;
}

/// Repository trait for the customize-step catalog: hotels and tours an
/// organization can lock into a quote, for one season.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn items_for_season(
        &self,
        organization_id: Uuid,
        season: &str,
    ) -> Result<CatalogItems, RepoError>;
}

/// Repository trait for tenant management (super-admin surface).
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Organization>, RepoError>;

    async fn create(&self, name: &str, slug: &str) -> Result<Organization, RepoError>;

    /// Returns false when no organization has that id.
    async fn set_status(&self, id: Uuid, status: OrganizationStatus) -> Result<bool, RepoError>;
}
