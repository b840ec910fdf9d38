use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tura_core::repository::{HotelPricingRepository, RepoError};
use tura_shared::models::pricing::{
    HotelPricing, HotelPricingPatch, NewHotelPricing, RecordStatus,
};
use uuid::Uuid;

pub struct PostgresHotelPricingRepository {
    pool: PgPool,
}

impl PostgresHotelPricingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct HotelRow {
    id: i64,
    organization_id: Uuid,
    hotel_name: String,
    city: String,
    star_rating: i16,
    season_name: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    currency: String,
    double_bb: Option<Decimal>,
    single_supplement: Option<Decimal>,
    triple_bb: Option<Decimal>,
    child_0_6: Option<Decimal>,
    child_6_12: Option<Decimal>,
    base_meal_plan: Option<String>,
    hb_supplement: Option<Decimal>,
    fb_supplement: Option<Decimal>,
    ai_supplement: Option<Decimal>,
    notes: Option<String>,
    status: String,
}

fn from_row(row: HotelRow) -> Result<HotelPricing, RepoError> {
    let status: RecordStatus = row.status.parse()?;
    Ok(HotelPricing {
        id: row.id,
        organization_id: row.organization_id,
        hotel_name: row.hotel_name,
        city: row.city,
        star_rating: row.star_rating,
        season_name: row.season_name,
        start_date: row.start_date,
        end_date: row.end_date,
        currency: row.currency,
        double_bb: row.double_bb,
        single_supplement: row.single_supplement,
        triple_bb: row.triple_bb,
        child_0_6: row.child_0_6,
        child_6_12: row.child_6_12,
        base_meal_plan: row.base_meal_plan,
        hb_supplement: row.hb_supplement,
        fb_supplement: row.fb_supplement,
        ai_supplement: row.ai_supplement,
        notes: row.notes,
        status,
    })
}

const COLUMNS: &str = "id, organization_id, hotel_name, city, star_rating, season_name, \
     start_date, end_date, currency, double_bb, single_supplement, triple_bb, \
     child_0_6, child_6_12, base_meal_plan, hb_supplement, fb_supplement, \
     ai_supplement, notes, status";

#[async_trait]
impl HotelPricingRepository for PostgresHotelPricingRepository {
    async fn list_active(&self, organization_id: Uuid) -> Result<Vec<HotelPricing>, RepoError> {
        let rows = sqlx::query_as::<_, HotelRow>(&format!(
            "SELECT {} FROM hotel_pricing \
             WHERE organization_id = $1 AND status = 'active' \
             ORDER BY city, hotel_name",
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
    ) -> Result<Option<HotelPricing>, RepoError> {
        let row = sqlx::query_as::<_, HotelRow>(&format!(
            "SELECT {} FROM hotel_pricing WHERE id = $1 AND organization_id = $2",
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
        new: &NewHotelPricing,
    ) -> Result<i64, RepoError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO hotel_pricing ( \
                organization_id, hotel_name, city, star_rating, \
                season_name, start_date, end_date, currency, \
                double_bb, single_supplement, triple_bb, \
                child_0_6, child_6_12, base_meal_plan, \
                hb_supplement, fb_supplement, ai_supplement, \
                notes, status \
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, 'active') \
             RETURNING id",
        )
        .bind(organization_id)
        .bind(&new.hotel_name)
        .bind(&new.city)
        .bind(new.star_rating)
        .bind(&new.season_name)
        .bind(new.start_date)
        .bind(new.end_date)
        .bind(&new.currency)
        .bind(new.double_bb)
        .bind(new.single_supplement)
        .bind(new.triple_bb)
        .bind(new.child_0_6)
        .bind(new.child_6_12)
        .bind(&new.base_meal_plan)
        .bind(new.hb_supplement)
        .bind(new.fb_supplement)
        .bind(new.ai_supplement)
        .bind(&new.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(
        &self,
        organization_id: Uuid,
        id: i64,
        patch: &HotelPricingPatch,
    ) -> Result<(), RepoError> {
        // Identity columns coalesce to the stored value; rate columns are
        // written as-is, NULL included.
        sqlx::query(
            "UPDATE hotel_pricing SET \
                hotel_name = COALESCE($1, hotel_name), \
                city = COALESCE($2, city), \
                star_rating = COALESCE($3, star_rating), \
                currency = COALESCE($4, currency), \
                season_name = $5, \
                start_date = $6, \
                end_date = $7, \
                double_bb = $8, \
                single_supplement = $9, \
                triple_bb = $10, \
                child_0_6 = $11, \
                child_6_12 = $12, \
                base_meal_plan = $13, \
                hb_supplement = $14, \
                fb_supplement = $15, \
                ai_supplement = $16, \
                notes = $17 \
             WHERE id = $18 AND organization_id = $19",
        )
        .bind(&patch.hotel_name)
        .bind(&patch.city)
        .bind(patch.star_rating)
        .bind(&patch.currency)
        .bind(&patch.season_name)
        .bind(patch.start_date)
        .bind(patch.end_date)
        .bind(patch.double_bb)
        .bind(patch.single_supplement)
        .bind(patch.triple_bb)
        .bind(patch.child_0_6)
        .bind(patch.child_6_12)
        .bind(&patch.base_meal_plan)
        .bind(patch.hb_supplement)
        .bind(patch.fb_supplement)
        .bind(patch.ai_supplement)
        .bind(&patch.notes)
        .bind(id)
        .bind(organization_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn archive(&self, organization_id: Uuid, id: i64) -> Result<(), RepoError> {
        sqlx::query(
            "UPDATE hotel_pricing SET status = 'archived' \
             WHERE id = $1 AND organization_id = $2",
        )
        .bind(id)
        .bind(organization_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
