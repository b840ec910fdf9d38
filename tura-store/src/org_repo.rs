use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tura_core::repository::{OrganizationRepository, RepoError};
use tura_shared::models::organization::{Organization, OrganizationStatus};
use uuid::Uuid;

pub struct PostgresOrganizationRepository {
    pool: PgPool,
}

impl PostgresOrganizationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OrganizationRow {
    id: Uuid,
    name: String,
    slug: String,
    status: String,
    created_at: DateTime<Utc>,
}

fn from_row(row: OrganizationRow) -> Result<Organization, RepoError> {
    let status: OrganizationStatus = row.status.parse()?;
    Ok(Organization {
        id: row.id,
        name: row.name,
        slug: row.slug,
        status,
        created_at: row.created_at,
    })
}

#[async_trait]
impl OrganizationRepository for PostgresOrganizationRepository {
    async fn list(&self) -> Result<Vec<Organization>, RepoError> {
        let rows = sqlx::query_as::<_, OrganizationRow>(
            "SELECT id, name, slug, status, created_at FROM organizations ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(from_row).collect()
    }

    async fn create(&self, name: &str, slug: &str) -> Result<Organization, RepoError> {
        let row = sqlx::query_as::<_, OrganizationRow>(
            "INSERT INTO organizations (id, name, slug, status) \
             VALUES ($1, $2, $3, 'active') \
             RETURNING id, name, slug, status, created_at",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(slug)
        .fetch_one(&self.pool)
        .await?;

        from_row(row)
    }

    async fn set_status(&self, id: Uuid, status: OrganizationStatus) -> Result<bool, RepoError> {
        let result = sqlx::query("UPDATE organizations SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
