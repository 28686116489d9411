//! PostgreSQL Driver Repository Implementation
//!
//! Implements the DriverRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::DriverRepository;
use crate::domain::models::driver::{Driver, DriverId};
use crate::shared::errors::RepositoryError;

const DRIVER_COLUMNS: &str = "id, name, ds_type, driver_class, supported_versions, description, \
                              created_by, created_at, updated_at";

/// Database row representation for the de_driver table
#[derive(Debug, sqlx::FromRow)]
struct DriverRow {
    id: Uuid,
    name: String,
    ds_type: String,
    driver_class: Option<String>,
    supported_versions: Option<String>,
    description: Option<String>,
    created_by: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<DriverRow> for Driver {
    fn from(row: DriverRow) -> Self {
        Driver::restore(
            DriverId::from_uuid(row.id),
            row.name,
            row.ds_type,
            row.driver_class,
            row.supported_versions,
            row.description,
            row.created_by,
            row.created_at,
            row.updated_at,
        )
    }
}

/// PostgreSQL implementation of DriverRepository
pub struct PostgresDriverRepository {
    pool: PgPool,
}

impl PostgresDriverRepository {
    /// Create a new PostgresDriverRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DriverRepository for PostgresDriverRepository {
    async fn find_all(&self) -> Result<Vec<Driver>, RepositoryError> {
        let rows = sqlx::query_as::<_, DriverRow>(&format!(
            "SELECT {DRIVER_COLUMNS} FROM de_driver ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Driver::from).collect())
    }

    async fn find_by_id(&self, id: &DriverId) -> Result<Option<Driver>, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(&format!("SELECT {DRIVER_COLUMNS} FROM de_driver WHERE id = $1"))
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Driver::from))
    }

    async fn exists_by_name(&self, name: &str, exclude_id: Option<DriverId>) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM de_driver
                WHERE name = $1 AND ($2::uuid IS NULL OR id != $2)
            )
            "#,
        )
        .bind(name)
        .bind(exclude_id.map(|id| *id.as_uuid()))
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(&self, driver: &Driver) -> Result<Driver, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(&format!(
            r#"
            INSERT INTO de_driver (
                id, name, ds_type, driver_class, supported_versions, description,
                created_by, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {DRIVER_COLUMNS}
            "#
        ))
        .bind(driver.id().as_uuid())
        .bind(driver.name())
        .bind(driver.ds_type())
        .bind(driver.driver_class())
        .bind(driver.supported_versions())
        .bind(driver.description())
        .bind(driver.created_by())
        .bind(driver.created_at())
        .bind(driver.updated_at())
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        Ok(Driver::from(row))
    }

    async fn update(&self, driver: &Driver) -> Result<Option<Driver>, RepositoryError> {
        let row = sqlx::query_as::<_, DriverRow>(&format!(
            r#"
            UPDATE de_driver
            SET name = $2,
                ds_type = $3,
                driver_class = $4,
                supported_versions = $5,
                description = $6,
                updated_at = $7
            WHERE id = $1
            RETURNING {DRIVER_COLUMNS}
            "#
        ))
        .bind(driver.id().as_uuid())
        .bind(driver.name())
        .bind(driver.ds_type())
        .bind(driver.driver_class())
        .bind(driver.supported_versions())
        .bind(driver.description())
        .bind(driver.updated_at())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        Ok(row.map(Driver::from))
    }

    async fn delete(&self, id: &DriverId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM de_driver WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn is_in_use(&self, id: &DriverId) -> Result<bool, RepositoryError> {
        let in_use = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM datasource
                WHERE configuration->>'customDriver' = $1
            )
            "#,
        )
        .bind(id.to_string())
        .fetch_one(&self.pool)
        .await?;

        Ok(in_use)
    }
}
