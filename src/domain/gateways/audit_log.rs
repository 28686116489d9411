//! Audit Log Gateway

use async_trait::async_trait;

use crate::domain::models::audit::AuditEntry;
use crate::shared::errors::RepositoryError;

/// Sink for audit records of mutating operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditLog: Send + Sync {
    async fn record(&self, entry: &AuditEntry) -> Result<(), RepositoryError>;
}
