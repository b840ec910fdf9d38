use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tura_core::repository::{MealPricingRepository, RepoError};
use tura_shared::models::pricing::{MealPricing, MealPricingPatch, NewMealPricing, RecordStatus};
use uuid::Uuid;

pub struct PostgresMealPricingRepository {
    pool: PgPool,
}

impl PostgresMealPricingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct MealRow {
    id: i64,
    organization_id: Uuid,
    restaurant_name: String,
    city: String,
    meal_type: String,
    season_name: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    currency: String,
    adult_lunch_price: Option<Decimal>,
    child_lunch_price: Option<Decimal>,
    adult_dinner_price: Option<Decimal>,
    child_dinner_price: Option<Decimal>,
    menu_description: Option<String>,
    notes: Option<String>,
    status: String,
}

fn from_row(row: MealRow) -> Result<MealPricing, RepoError> {
    let status: RecordStatus = row.status.parse()?;
    Ok(MealPricing {
        id: row.id,
        organization_id: row.organization_id,
        restaurant_name: row.restaurant_name,
        city: row.city,
        meal_type: row.meal_type,
        season_name: row.season_name,
        start_date: row.start_date,
        end_date: row.end_date,
        currency: row.currency,
        adult_lunch: row.adult_lunch_price,
        child_lunch: row.child_lunch_price,
        adult_dinner: row.adult_dinner_price,
        child_dinner: row.child_dinner_price,
        menu_description: row.menu_description,
        notes: row.notes,
        status,
    })
}

const COLUMNS: &str = "id, organization_id, restaurant_name, city, meal_type, season_name, \
     start_date, end_date, currency, adult_lunch_price, child_lunch_price, \
     adult_dinner_price, child_dinner_price, menu_description, notes, status";

#[async_trait]
impl MealPricingRepository for PostgresMealPricingRepository {
    async fn list_active(&self, organization_id: Uuid) -> Result<Vec<MealPricing>, RepoError> {
        let rows = sqlx::query_as::<_, MealRow>(&format!(
            "SELECT {} FROM meal_pricing \
             WHERE organization_id = $1 AND status = 'active' \
             ORDER BY city, restaurant_name",
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
    ) -> Result<Option<MealPricing>, RepoError> {
        let row = sqlx::query_as::<_, MealRow>(&format!(
            "SELECT {} FROM meal_pricing WHERE id = $1 AND organization_id = $2",
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
        new: &NewMealPricing,
    ) -> Result<i64, RepoError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO meal_pricing ( \
                organization_id, restaurant_name, city, meal_type, \
                season_name, start_date, end_date, currency, \
                adult_lunch_price, child_lunch_price, \
                adult_dinner_price, child_dinner_price, \
                menu_description, notes, status \
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, 'active') \
             RETURNING id",
        )
        .bind(organization_id)
        .bind(&new.restaurant_name)
        .bind(&new.city)
        .bind(&new.meal_type)
        .bind(&new.season_name)
        .bind(new.start_date)
        .bind(new.end_date)
        .bind(&new.currency)
        .bind(new.adult_lunch)
        .bind(new.child_lunch)
        .bind(new.adult_dinner)
        .bind(new.child_dinner)
        .bind(&new.menu_description)
        .bind(&new.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }

    async fn update(
        &self,
        organization_id: Uuid,
        id: i64,
        patch: &MealPricingPatch,
    ) -> Result<(), RepoError> {
        // Identity columns coalesce to the stored value; rate columns are
        // written as-is, NULL included.
        sqlx::query(
            "UPDATE meal_pricing SET \
                restaurant_name = COALESCE($1, restaurant_name), \
                city = COALESCE($2, city), \
                meal_type = COALESCE($3, meal_type), \
                currency = COALESCE($4, currency), \
                season_name = $5, \
                start_date = $6, \
                end_date = $7, \
                adult_lunch_price = $8, \
                child_lunch_price = $9, \
                adult_dinner_price = $10, \
                child_dinner_price = $11, \
                menu_description = $12, \
                notes = $13 \
             WHERE id = $14 AND organization_id = $15",
        )
        .bind(&patch.restaurant_name)
        .bind(&patch.city)
        .bind(&patch.meal_type)
        .bind(&patch.currency)
        .bind(&patch.season_name)
        .bind(patch.start_date)
        .bind(patch.end_date)
        .bind(patch.adult_lunch)
        .bind(patch.child_lunch)
        .bind(patch.adult_dinner)
        .bind(patch.child_dinner)
        .bind(&patch.menu_description)
        .bind(&patch.notes)
        .bind(id)
        .bind(organization_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn archive(&self, organization_id: Uuid, id: i64) -> Result<(), RepoError> {
        sqlx::query(
            "UPDATE meal_pricing SET status = 'archived' \
             WHERE id = $1 AND organization_id = $2",
        )
        .bind(id)
        .bind(organization_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
