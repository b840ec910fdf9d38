use async_trait::async_trait;
use sqlx::PgPool;
use tura_core::repository::{CityRepository, RepoError};

pub struct PostgresCityRepository {
    pool: PgPool,
}

impl PostgresCityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CityRepository for PostgresCityRepository {
    async fn search(&self, prefix: &str) -> Result<Vec<String>, RepoError> {
        let cities: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM cities WHERE name ILIKE $1 || '%' ORDER BY name LIMIT 10",
        )
        .bind(prefix)
        .fetch_all(&self.pool)
        .await?;

        Ok(cities)
    }
}
