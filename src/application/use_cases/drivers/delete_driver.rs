//! Delete Driver Use Case
//!
//! Removes a driver, its file records and its stored files.

use std::sync::Arc;

use super::{record_audit, require_admin};
use crate::domain::gateways::{AuditLog, DriverFileStore, DriverRepository};
use crate::domain::models::{Actor, AuditEntry, AuditOperation, DriverId};
use crate::shared::errors::UseCaseError;
use crate::shared::i18n::MessageKey;

/// Use case for deleting a driver
pub struct DeleteDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
    file_store: Arc<dyn DriverFileStore>,
    audit_log: Arc<dyn AuditLog>,
}

impl DeleteDriverUseCase {
    /// Create a new DeleteDriverUseCase
    #[must_use]
    pub fn new(
        driver_repository: Arc<dyn DriverRepository>,
        file_store: Arc<dyn DriverFileStore>,
        audit_log: Arc<dyn AuditLog>,
    ) -> Self {
        Self {
            driver_repository,
            file_store,
            audit_log,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Forbidden` if the caller is not an administrator.
    /// Returns `UseCaseError::NotFound` if the driver doesn't exist.
    /// Returns `UseCaseError::Conflict` if a data source still uses the driver.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, actor: &Actor, id: &DriverId) -> Result<(), UseCaseError> {
        require_admin(actor)?;
        tracing::info!(driver_id = %id, "Deleting driver");

        let driver = self.driver_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(driver_id = %id, "Driver not found for deletion");
            UseCaseError::driver_not_found(id)
        })?;

        if self.driver_repository.is_in_use(id).await? {
            tracing::warn!(driver_id = %id, "Driver is used by a data source");
            return Err(UseCaseError::Conflict(MessageKey::DriverInUse));
        }

        if !self.driver_repository.delete(id).await? {
            return Err(UseCaseError::driver_not_found(id));
        }

        // Records are gone at this point; leftover files are only logged
        if let Err(err) = self.file_store.remove_all(id).await {
            tracing::warn!(driver_id = %id, error = %err, "Failed to remove driver files");
        }
        record_audit(self.audit_log.as_ref(), AuditEntry::for_driver(AuditOperation::Delete, &driver, actor)).await;

        tracing::info!(driver_id = %id, "Driver deleted successfully");
        Ok(())
    }
}
