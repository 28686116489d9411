//! PostgreSQL Driver File Repository Implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::DriverDetailRepository;
use crate::domain::models::driver::DriverId;
use crate::domain::models::driver_detail::{DriverDetail, DriverFileId};
use crate::shared::errors::RepositoryError;

/// Database row representation for the de_driver_details table
#[derive(Debug, sqlx::FromRow)]
struct DriverDetailRow {
    id: Uuid,
    de_driver_id: Uuid,
    file_name: String,
    version: Option<String>,
    driver_classes: serde_json::Value,
    created_at: DateTime<Utc>,
}

impl TryFrom<DriverDetailRow> for DriverDetail {
    type Error = RepositoryError;

    fn try_from(row: DriverDetailRow) -> Result<Self, Self::Error> {
        let driver_classes: Vec<String> = serde_json::from_value(row.driver_classes)
            .map_err(|e| RepositoryError::Mapping(format!("Failed to parse driver_classes: {}", e)))?;

        Ok(DriverDetail::restore(
            DriverFileId::from_uuid(row.id),
            DriverId::from_uuid(row.de_driver_id),
            row.file_name,
            row.version,
            driver_classes,
            row.created_at,
        ))
    }
}

/// PostgreSQL implementation of DriverDetailRepository
pub struct PostgresDriverDetailRepository {
    pool: PgPool,
}

impl PostgresDriverDetailRepository {
    /// Create a new PostgresDriverDetailRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DriverDetailRepository for PostgresDriverDetailRepository {
    async fn find_by_driver_id(&self, driver_id: &DriverId) -> Result<Vec<DriverDetail>, RepositoryError> {
        let rows = sqlx::query_as::<_, DriverDetailRow>(
            r#"
            SELECT id, de_driver_id, file_name, version, driver_classes, created_at
            FROM de_driver_details
            WHERE de_driver_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(driver_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DriverDetail::try_from).collect()
    }

    async fn find_by_id(&self, id: &DriverFileId) -> Result<Option<DriverDetail>, RepositoryError> {
        let row = sqlx::query_as::<_, DriverDetailRow>(
            r#"
            SELECT id, de_driver_id, file_name, version, driver_classes, created_at
            FROM de_driver_details
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(DriverDetail::try_from).transpose()
    }

    async fn exists_by_file_name(&self, driver_id: &DriverId, file_name: &str) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM de_driver_details
                WHERE de_driver_id = $1 AND file_name = $2
            )
            "#,
        )
        .bind(driver_id.as_uuid())
        .bind(file_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(&self, detail: &DriverDetail) -> Result<DriverDetail, RepositoryError> {
        let driver_classes_json = serde_json::to_value(detail.driver_classes())
            .map_err(|e| RepositoryError::Mapping(format!("Failed to serialize driver_classes: {}", e)))?;

        let row = sqlx::query_as::<_, DriverDetailRow>(
            r#"
            INSERT INTO de_driver_details (id, de_driver_id, file_name, version, driver_classes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, de_driver_id, file_name, version, driver_classes, created_at
            "#,
        )
        .bind(detail.id().as_uuid())
        .bind(detail.driver_id().as_uuid())
        .bind(detail.file_name())
        .bind(detail.version())
        .bind(&driver_classes_json)
        .bind(detail.created_at())
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_write)?;

        DriverDetail::try_from(row)
    }

    async fn delete(&self, id: &DriverFileId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM de_driver_details WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
