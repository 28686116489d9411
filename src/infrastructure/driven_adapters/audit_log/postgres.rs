//! PostgreSQL Audit Log
//!
//! Appends audit entries to the sys_log table.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::AuditLog;
use crate::domain::models::audit::AuditEntry;
use crate::shared::errors::RepositoryError;

/// PostgreSQL implementation of AuditLog
pub struct PostgresAuditLog {
    pool: PgPool,
}

impl PostgresAuditLog {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditLog for PostgresAuditLog {
    async fn record(&self, entry: &AuditEntry) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO sys_log (
                id, operate_type, source_type, source_id, source_name, position,
                operator_id, operator_name, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(entry.operation.as_str())
        .bind(entry.source_type)
        .bind(&entry.source_id)
        .bind(entry.source_name.as_deref())
        .bind(entry.position.as_deref())
        .bind(&entry.operator_id)
        .bind(&entry.operator_name)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
