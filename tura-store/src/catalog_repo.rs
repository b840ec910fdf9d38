use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tura_core::repository::{CatalogRepository, RepoError};
use tura_shared::models::catalog::{CatalogItems, HotelOption, TourOption};
use uuid::Uuid;

/// Customize-step catalog built from the active rate sheets: every priced
/// hotel and tour the organization can lock into a quote for one season.
/// Rows with no season label are valid year-round and always included.
pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct HotelItemRow {
    id: i64,
    hotel_name: String,
    city: String,
    star_rating: i16,
    double_bb: Option<Decimal>,
    notes: Option<String>,
}

#[derive(sqlx::FromRow)]
struct TourItemRow {
    id: i64,
    tour_name: String,
    city: String,
    tour_type: String,
    adult_price: Option<Decimal>,
    duration: Option<String>,
    description: Option<String>,
}

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    async fn items_for_season(
        &self,
        organization_id: Uuid,
        season: &str,
    ) -> Result<CatalogItems, RepoError> {
        let hotel_rows = sqlx::query_as::<_, HotelItemRow>(
            "SELECT id, hotel_name, city, star_rating, double_bb, notes \
             FROM hotel_pricing \
             WHERE organization_id = $1 AND status = 'active' \
               AND (season_name = $2 OR season_name IS NULL) \
             ORDER BY city, hotel_name",
        )
        .bind(organization_id)
        .bind(season)
        .fetch_all(&self.pool)
        .await?;

        let tour_rows = sqlx::query_as::<_, TourItemRow>(
            "SELECT id, tour_name, city, tour_type, adult_price, duration, description \
             FROM tour_pricing \
             WHERE organization_id = $1 AND status = 'active' \
               AND (season_name = $2 OR season_name IS NULL) \
             ORDER BY city, tour_name",
        )
        .bind(organization_id)
        .bind(season)
        .fetch_all(&self.pool)
        .await?;

        let hotels = hotel_rows
            .into_iter()
            .map(|row| HotelOption {
                id: row.id,
                name: row.hotel_name,
                location: row.city,
                category: format!("{}-star", row.star_rating),
                price_per_night: row.double_bb,
                description: row.notes,
            })
            .collect();

        let tours = tour_rows
            .into_iter()
            .map(|row| {
                Ok(TourOption {
                    id: row.id,
                    name: row.tour_name,
                    location: row.city,
                    tour_type: row.tour_type.parse()?,
                    price_per_person: row.adult_price,
                    duration: row.duration,
                    description: row.description,
                })
            })
            .collect::<Result<Vec<_>, RepoError>>()?;

        Ok(CatalogItems { hotels, tours })
    }
}
