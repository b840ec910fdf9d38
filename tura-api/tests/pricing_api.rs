use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;
use tura_api::generator::{GeneratorError, QuoteGenerator};
use tura_api::middleware::auth::Claims;
use tura_api::state::AuthConfig;
use tura_api::{app, AppState};
use tura_core::repository::{
    CatalogRepository, CityRepository, HotelPricingRepository, MealPricingRepository,
    OrganizationRepository, RepoError, TourPricingRepository,
};
use tura_shared::models::catalog::CatalogItems;
use tura_shared::models::organization::{Organization, OrganizationStatus};
use tura_shared::models::pricing::*;
use tura_shared::models::quote::{GenerateQuoteRequest, GenerateQuoteResponse};
use uuid::Uuid;

const SECRET: &str = "test-secret";

// ============================================================================
// In-memory fakes
// ============================================================================

#[derive(Default)]
struct InMemoryMeals {
    rows: Mutex<HashMap<i64, MealPricing>>,
    next_id: AtomicI64,
}

impl InMemoryMeals {
    fn row(&self, id: i64) -> Option<MealPricing> {
        self.rows.lock().unwrap().get(&id).cloned()
    }

    fn seed(&self, organization_id: Uuid, restaurant_name: &str, city: &str) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.rows.lock().unwrap().insert(
            id,
            MealPricing {
                id,
                organization_id,
                restaurant_name: restaurant_name.to_string(),
                city: city.to_string(),
                meal_type: "dinner".to_string(),
                season_name: None,
                start_date: None,
                end_date: None,
                currency: "EUR".to_string(),
                adult_lunch: None,
                child_lunch: None,
                adult_dinner: None,
                child_dinner: None,
                menu_description: None,
                notes: None,
                status: RecordStatus::Active,
            },
        );
        id
    }
}

#[async_trait]
impl MealPricingRepository for InMemoryMeals {
    async fn list_active(&self, organization_id: Uuid) -> Result<Vec<MealPricing>, RepoError> {
        let mut rows: Vec<_> = self
            .rows
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.organization_id == organization_id && r.status == RecordStatus::Active)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            (a.city.as_str(), a.restaurant_name.as_str())
                .cmp(&(b.city.as_str(), b.restaurant_name.as_str()))
        });
        Ok(rows)
    }

    async fn find_owned(
        &self,
        organization_id: Uuid,
        id: i64,
    ) -> Result<Option<MealPricing>, RepoError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .get(&id)
            .filter(|r| r.organization_id == organization_id)
            .cloned())
    }

    async fn create(
        &self,
        organization_id: Uuid,
        new: &NewMealPricing,
    ) -> Result<i64, RepoError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.rows.lock().unwrap().insert(
            id,
            MealPricing {
                id,
                organization_id,
                restaurant_name: new.restaurant_name.clone(),
                city: new.city.clone(),
                meal_type: new.meal_type.clone(),
                season_name: new.season_name.clone(),
                start_date: new.start_date,
                end_date: new.end_date,
                currency: new.currency.clone(),
                adult_lunch: new.adult_lunch,
                child_lunch: new.child_lunch,
                adult_dinner: new.adult_dinner,
                child_dinner: new.child_dinner,
                menu_description: new.menu_description.clone(),
                notes: new.notes.clone(),
                status: RecordStatus::Active,
            },
        );
        Ok(id)
    }

    async fn update(
        &self,
        organization_id: Uuid,
        id: i64,
        patch: &MealPricingPatch,
    ) -> Result<(), RepoError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows
            .get_mut(&id)
            .filter(|r| r.organization_id == organization_id)
        {
            // identity fields coalesce, rate fields overwrite
            if let Some(v) = &patch.restaurant_name {
                row.restaurant_name = v.clone();
            }
            if let Some(v) = &patch.city {
                row.city = v.clone();
            }
            if let Some(v) = &patch.meal_type {
                row.meal_type = v.clone();
            }
            if let Some(v) = &patch.currency {
                row.currency = v.clone();
            }
            row.season_name = patch.season_name.clone();
            row.start_date = patch.start_date;
            row.end_date = patch.end_date;
            row.adult_lunch = patch.adult_lunch;
            row.child_lunch = patch.child_lunch;
            row.adult_dinner = patch.adult_dinner;
            row.child_dinner = patch.child_dinner;
            row.menu_description = patch.menu_description.clone();
            row.notes = patch.notes.clone();
        }
        Ok(())
    }

    async fn archive(&self, organization_id: Uuid, id: i64) -> Result<(), RepoError> {
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows
            .get_mut(&id)
            .filter(|r| r.organization_id == organization_id)
        {
            row.status = RecordStatus::Archived;
        }
        Ok(())
    }
}

struct EmptyHotels;

#[async_trait]
impl HotelPricingRepository for EmptyHotels {
    async fn list_active(&self, _org: Uuid) -> Result<Vec<HotelPricing>, RepoError> {
        Ok(vec![])
    }
    async fn find_owned(&self, _org: Uuid, _id: i64) -> Result<Option<HotelPricing>, RepoError> {
        Ok(None)
    }
    async fn create(&self, _org: Uuid, _new: &NewHotelPricing) -> Result<i64, RepoError> {
        Ok(1)
    }
    async fn update(
        &self,
        _org: Uuid,
        _id: i64,
        _patch: &HotelPricingPatch,
    ) -> Result<(), RepoError> {
        Ok(())
    }
    async fn archive(&self, _org: Uuid, _id: i64) -> Result<(), RepoError> {
        Ok(())
    }
}

struct EmptyTours;

#[async_trait]
impl TourPricingRepository for EmptyTours {
    async fn list_active(&self, _org: Uuid) -> Result<Vec<TourPricing>, RepoError> {
        Ok(vec![])
    }
    async fn find_owned(&self, _org: Uuid, _id: i64) -> Result<Option<TourPricing>, RepoError> {
        Ok(None)
    }
    async fn create(&self, _org: Uuid, _new: &NewTourPricing) -> Result<i64, RepoError> {
        Ok(1)
    }
    async fn update(
        &self,
        _org: Uuid,
        _id: i64,
        _patch: &TourPricingPatch,
    ) -> Result<(), RepoError> {
        Ok(())
    }
    async fn archive(&self, _org: Uuid, _id: i64) -> Result<(), RepoError> {
        Ok(())
    }
}

#[derive(Default)]
struct CountingCities {
    calls: AtomicUsize,
}

#[async_trait]
impl CityRepository for CountingCities {
    async fn search(&self, prefix: &str) -> Result<Vec<String>, RepoError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![format!("{}tanbul", prefix)])
    }
}

struct EmptyCatalog;

#[async_trait]
impl CatalogRepository for EmptyCatalog {
    async fn items_for_season(
        &self,
        _org: Uuid,
        _season: &str,
    ) -> Result<CatalogItems, RepoError> {
        Ok(CatalogItems::default())
    }
}

struct NoOrganizations;

#[async_trait]
impl OrganizationRepository for NoOrganizations {
    async fn list(&self) -> Result<Vec<Organization>, RepoError> {
        Ok(vec![])
    }
    async fn create(&self, name: &str, slug: &str) -> Result<Organization, RepoError> {
        Ok(Organization {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: slug.to_string(),
            status: OrganizationStatus::Active,
            created_at: chrono::Utc::now(),
        })
    }
    async fn set_status(&self, _id: Uuid, _status: OrganizationStatus) -> Result<bool, RepoError> {
        Ok(false)
    }
}

struct StubGenerator(GenerateQuoteResponse);

#[async_trait]
impl QuoteGenerator for StubGenerator {
    async fn generate(
        &self,
        _org: Uuid,
        _request: &GenerateQuoteRequest,
    ) -> Result<GenerateQuoteResponse, GeneratorError> {
        Ok(self.0.clone())
    }
}

// ============================================================================
// Harness
// ============================================================================

struct Harness {
    state: AppState,
    meals: Arc<InMemoryMeals>,
    cities: Arc<CountingCities>,
}

fn harness_with_generator(generator: Arc<dyn QuoteGenerator>) -> Harness {
    let meals = Arc::new(InMemoryMeals::default());
    let cities = Arc::new(CountingCities::default());
    let state = AppState {
        meals: meals.clone(),
        hotels: Arc::new(EmptyHotels),
        tours: Arc::new(EmptyTours),
        cities: cities.clone(),
        catalog: Arc::new(EmptyCatalog),
        organizations: Arc::new(NoOrganizations),
        generator,
        auth: AuthConfig {
            secret: SECRET.to_string(),
            expiration: 3600,
        },
        default_season: "Winter 2025-26".to_string(),
    };
    Harness {
        state,
        meals,
        cities,
    }
}

fn harness() -> Harness {
    harness_with_generator(Arc::new(StubGenerator(GenerateQuoteResponse {
        uuid: Some(Uuid::new_v4()),
        itinerary_id: None,
        error: None,
    })))
}

fn token(organization_id: Uuid, role: &str) -> String {
    let claims = Claims {
        organization_id,
        user_id: Uuid::new_v4(),
        role: role.to_string(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap()
}

async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    bearer: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = bearer {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn pricing_routes_require_a_bearer_token() {
    let h = harness();
    let (status, body) = send(&h.state, "GET", "/api/pricing/meals", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Unauthorized");
}

#[tokio::test]
async fn garbage_token_is_rejected() {
    let h = harness();
    let (status, _) = send(
        &h.state,
        "GET",
        "/api/pricing/meals",
        Some("not-a-token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_without_required_fields_names_them() {
    let h = harness();
    let org = Uuid::new_v4();
    let (status, body) = send(
        &h.state,
        "POST",
        "/api/pricing/meals",
        Some(&token(org, "OPERATOR")),
        Some(json!({ "restaurantName": "Deraliye", "city": "Istanbul" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("mealType"));
    assert!(message.contains("currency"));
}

#[tokio::test]
async fn create_then_list_round_trip() {
    let h = harness();
    let org = Uuid::new_v4();
    let bearer = token(org, "OPERATOR");

    let (status, body) = send(
        &h.state,
        "POST",
        "/api/pricing/meals",
        Some(&bearer),
        Some(json!({
            "restaurantName": "Deraliye",
            "city": "Istanbul",
            "mealType": "dinner",
            "currency": "EUR",
            "adultDinner": "35.00"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["summary"]["restaurant"], "Deraliye");
    let id = body["id"].as_i64().unwrap();

    let (status, body) = send(&h.state, "GET", "/api/pricing/meals", Some(&bearer), None).await;
    assert_eq!(status, StatusCode::OK);
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["id"].as_i64().unwrap(), id);
    assert_eq!(listed[0]["status"], "active");
}

#[tokio::test]
async fn list_is_scoped_to_the_caller_organization() {
    let h = harness();
    let org_a = Uuid::new_v4();
    let org_b = Uuid::new_v4();
    h.meals.seed(org_a, "Deraliye", "Istanbul");
    h.meals.seed(org_b, "Seten", "Cappadocia");

    let (_, body) = send(
        &h.state,
        "GET",
        "/api/pricing/meals",
        Some(&token(org_a, "OPERATOR")),
        None,
    )
    .await;
    let listed = body.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["restaurantName"], "Deraliye");
}

#[tokio::test]
async fn update_without_id_is_a_validation_error() {
    let h = harness();
    let (status, body) = send(
        &h.state,
        "PUT",
        "/api/pricing/meals",
        Some(&token(Uuid::new_v4(), "OPERATOR")),
        Some(json!({ "city": "Izmir" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required field: id");
}

#[tokio::test]
async fn cross_tenant_update_is_a_collapsed_404() {
    let h = harness();
    let org_a = Uuid::new_v4();
    let org_b = Uuid::new_v4();
    let foreign_id = h.meals.seed(org_b, "Seten", "Cappadocia");

    let (status, body) = send(
        &h.state,
        "PUT",
        "/api/pricing/meals",
        Some(&token(org_a, "OPERATOR")),
        Some(json!({ "id": foreign_id, "city": "Izmir" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Meal pricing not found or access denied");

    // The row is untouched.
    assert_eq!(h.meals.row(foreign_id).unwrap().city, "Cappadocia");
}

#[tokio::test]
async fn update_patches_identity_and_replaces_rates() {
    let h = harness();
    let org = Uuid::new_v4();
    let bearer = token(org, "OPERATOR");
    let id = h.meals.seed(org, "Deraliye", "Istanbul");
    {
        let mut rows = h.meals.rows.lock().unwrap();
        let row = rows.get_mut(&id).unwrap();
        row.season_name = Some("Summer 2025".to_string());
        row.adult_dinner = Some("35.00".parse().unwrap());
    }

    // City patched; season and prices absent from the body, so replaced
    // with NULL.
    let (status, _) = send(
        &h.state,
        "PUT",
        "/api/pricing/meals",
        Some(&bearer),
        Some(json!({ "id": id, "city": "Izmir" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let row = h.meals.row(id).unwrap();
    assert_eq!(row.city, "Izmir");
    assert_eq!(row.restaurant_name, "Deraliye");
    assert_eq!(row.season_name, None);
    assert_eq!(row.adult_dinner, None);
}

#[tokio::test]
async fn archive_flips_status_and_keeps_the_row() {
    let h = harness();
    let org = Uuid::new_v4();
    let bearer = token(org, "OPERATOR");
    let id = h.meals.seed(org, "Deraliye", "Istanbul");

    let (status, body) = send(
        &h.state,
        "DELETE",
        &format!("/api/pricing/meals?id={}", id),
        Some(&bearer),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["summary"]["status"], "archived");

    // Gone from the active list...
    let (_, body) = send(&h.state, "GET", "/api/pricing/meals", Some(&bearer), None).await;
    assert!(body.as_array().unwrap().is_empty());

    // ...but the row itself survives with flipped status.
    let row = h.meals.row(id).unwrap();
    assert_eq!(row.status, RecordStatus::Archived);
}

#[tokio::test]
async fn archive_without_id_is_a_validation_error() {
    let h = harness();
    let (status, body) = send(
        &h.state,
        "DELETE",
        "/api/pricing/meals",
        Some(&token(Uuid::new_v4(), "OPERATOR")),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required parameter: id");
}

#[tokio::test]
async fn short_city_search_skips_the_directory() {
    let h = harness();
    let (status, body) = send(&h.state, "GET", "/api/cities?search=I", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["cities"].as_array().unwrap().is_empty());
    assert_eq!(h.cities.calls.load(Ordering::SeqCst), 0);

    let (_, body) = send(&h.state, "GET", "/api/cities?search=Is", None, None).await;
    assert_eq!(body["cities"][0], "Istanbul");
    assert_eq!(h.cities.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn catalog_for_another_organization_is_a_collapsed_404() {
    let h = harness();
    let org = Uuid::new_v4();
    let other = Uuid::new_v4();
    let (status, body) = send(
        &h.state,
        "GET",
        &format!("/api/pricing/items/{}", other),
        Some(&token(org, "OPERATOR")),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Catalog not found or access denied");
}

fn generation_body() -> Value {
    json!({
        "customer_name": "John Smith",
        "customer_email": "john@example.com",
        "customer_phone": null,
        "destination": "Istanbul & Cappadocia",
        "city_nights": [
            { "city": "Istanbul", "nights": 3 },
            { "city": "Cappadocia", "nights": 2 }
        ],
        "start_date": "2026-03-01",
        "end_date": "2026-03-06",
        "adults": 2,
        "children": 0,
        "hotel_category": "4",
        "tour_type": "PRIVATE",
        "special_requests": ""
    })
}

#[tokio::test]
async fn generation_success_passes_the_identifier_through() {
    let uuid = Uuid::new_v4();
    let h = harness_with_generator(Arc::new(StubGenerator(GenerateQuoteResponse {
        uuid: Some(uuid),
        itinerary_id: None,
        error: None,
    })));
    let org = Uuid::new_v4();

    let (status, body) = send(
        &h.state,
        "POST",
        &format!("/api/quotes/{}/ai-generate", org),
        Some(&token(org, "OPERATOR")),
        Some(generation_body()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["uuid"], uuid.to_string());
}

#[tokio::test]
async fn generation_without_identifier_is_an_upstream_failure() {
    let h = harness_with_generator(Arc::new(StubGenerator(GenerateQuoteResponse::default())));
    let org = Uuid::new_v4();

    let (status, body) = send(
        &h.state,
        "POST",
        &format!("/api/quotes/{}/ai-generate", org),
        Some(&token(org, "OPERATOR")),
        Some(generation_body()),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "Generation service returned no itinerary id");
}

#[tokio::test]
async fn generation_for_another_organization_is_a_collapsed_404() {
    let h = harness();
    let org = Uuid::new_v4();
    let other = Uuid::new_v4();

    let (status, _) = send(
        &h.state,
        "POST",
        &format!("/api/quotes/{}/ai-generate", other),
        Some(&token(org, "OPERATOR")),
        Some(generation_body()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn admin_surface_is_gated_by_role() {
    let h = harness();
    let org = Uuid::new_v4();

    let (status, _) = send(
        &h.state,
        "GET",
        "/api/admin/organizations",
        Some(&token(org, "OPERATOR")),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &h.state,
        "GET",
        "/api/admin/organizations",
        Some(&token(org, "SUPER_ADMIN")),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}
