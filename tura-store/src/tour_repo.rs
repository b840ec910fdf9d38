use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tura_core::repository::{RepoError, TourPricingRepository};
use tura_shared::models::catalog::TourType;
use tura_shared::models::pricing::{NewTourPricing, RecordStatus, TourPricing, TourPricingPatch};
use uuid::Uuid;

pub struct PostgresTourPricingRepository {
    pool: PgPool,
}

impl PostgresTourPricingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TourRow {
    id: i64,
    organization_id: Uuid,
    tour_name: String,
    city: String,
    tour_type: String,
    season_name: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    currency: String,
    adult_price: Option<Decimal>,
    child_price: Option<Decimal>,
    duration: Option<String>,
    description: Option<String>,
    notes: Option<String>,
    status: String,
}

fn from_row(row: TourRow) -> Result<TourPricing, RepoError> {
    let status: RecordStatus = row.status.parse()?;
    let tour_type: TourType = row.tour_type.parse()?;
    Ok(TourPricing {
        id: row.id,
        organization_id: row.organization_id,
        tour_name: row.tour_name,
        city: row.city,
        tour_type,
        season_name: row.season_name,
        start_date: row.start_date,
        end_date: row.end_date,
        currency: row.currency,
        adult_price: row.adult_price,
        child_price: row.child_price,
        duration: row.duration,
        description: row.description,
        notes: row.notes,
        status,
    })
}

const COLUMNS: &str = "id, organization_id, tour_name, city, tour_type, season_name, \
     start_date, end_date, currency, adult_price, child_price, duration, \
     description, notes, status";

#[async_trait]
impl TourPricingRepository for PostgresTourPricingRepository {
    async fn list_active(&self, organization_id: Uuid) -> Result<Vec<TourPricing>, RepoError> {
        let rows = sqlx::query_as::<_, TourRow>(&format!(
            "SELECT {} FROM tour_pricing \
             WHERE organization_id = $1 AND status = 'active' \
             ORDER BY city, tour_name",
            COLUMNS
        ))
        .bind(organization_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(from_row).collect()
    }

    async fn find_owned(
        &self,
        organization_id: Uuid,
        id: i64,
    ) -> Result<Option<TourPricing>, RepoError> {
        let row = sqlx::query_as::<_, TourRow>(&format!(
            "SELECT {} FROM tour_pricing WHERE id = $1 AND organization_id = $2",
            COLUMNS
        ))
        .bind(id)
        .bind(organization_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(from_row).transpose()
    }

    async fn create(
        &self,
        organization_id: Uuid,
        new: &NewTourPricing,
    ) -> Result<i64, RepoError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO tour_pricing ( \
                organization_id, tour_name, city, tour_type, \
                season_name, start_date, end_date, currency, \
                adult_price, child_price, duration, description, \
                notes, status \
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, 'active') \
             RETURNING id",
        )
        .bind(organization_id)
        .bind(&new.tour_name)
        .bind(&new.city)
        .bind(new.tour_type.as_str())
        .bind(&new.season_name)
        .bind(new.start_date)
        .bind(new.end_date)
        .bind(&new.currency)
        .bind(new.adult_price)
        .bind(new.child_price)
        .bind(&new.duration)
        .bind(&new.description)
        .bind(&new.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(
        &self,
        organization_id: Uuid,
        id: i64,
        patch: &TourPricingPatch,
    ) -> Result<(), RepoError> {
        // Identity columns coalesce to the stored value; rate columns are
        // written as-is, NULL included.
        sqlx::query(
            "UPDATE tour_pricing SET \
                tour_name = COALESCE($1, tour_name), \
                city = COALESCE($2, city), \
                tour_type = COALESCE($3, tour_type), \
                currency = COALESCE($4, currency), \
                season_name = $5, \
                start_date = $6, \
                end_date = $7, \
                adult_price = $8, \
                child_price = $9, \
                duration = $10, \
                description = $11, \
                notes = $12 \
             WHERE id = $13 AND organization_id = $14",
        )
        .bind(&patch.tour_name)
        .bind(&patch.city)
        .bind(patch.tour_type.map(|t| t.as_str()))
        .bind(&patch.currency)
        .bind(&patch.season_name)
        .bind(patch.start_date)
        .bind(patch.end_date)
        .bind(patch.adult_price)
        .bind(patch.child_price)
        .bind(&patch.duration)
        .bind(&patch.description)
        .bind(&patch.notes)
        .bind(id)
        .bind(organization_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn archive(&self, organization_id: Uuid, id: i64) -> Result<(), RepoError> {
        sqlx::query(
            "UPDATE tour_pricing SET status = 'archived' \
             WHERE id = $1 AND organization_id = $2",
        )
        .bind(id)
        .bind(organization_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
