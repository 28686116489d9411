//! Update Driver Use Case
//!
//! Replaces the editable fields of an existing driver.

use std::sync::Arc;

use super::{conflict_on_duplicate, record_audit, require_admin};
use crate::domain::gateways::{AuditLog, DriverRepository};
use crate::domain::models::{Actor, AuditEntry, AuditOperation, Driver, DriverId, UpdateDriverData};
use crate::shared::errors::UseCaseError;
use crate::shared::i18n::MessageKey;

/// Use case for updating a driver
pub struct UpdateDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
    audit_log: Arc<dyn AuditLog>,
}

impl UpdateDriverUseCase {
    /// Create a new UpdateDriverUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>, audit_log: Arc<dyn AuditLog>) -> Self {
        Self {
            driver_repository,
            audit_log,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Forbidden` if the caller is not an administrator.
    /// Returns `UseCaseError::NotFound` if the driver doesn't exist.
    /// Returns `UseCaseError::Conflict` if another driver already uses the new name.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, actor: &Actor, id: &DriverId, data: UpdateDriverData) -> Result<Driver, UseCaseError> {
        require_admin(actor)?;
        tracing::info!(driver_id = %id, "Updating driver");

        let existing = self.driver_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(driver_id = %id, "Driver not found for update");
            UseCaseError::driver_not_found(id)
        })?;

        let updated = existing.with_updates(data)?;

        if self.driver_repository.exists_by_name(updated.name(), Some(*id)).await? {
            tracing::warn!(driver_id = %id, name = %updated.name(), "Cannot update: name already exists");
            return Err(UseCaseError::Conflict(MessageKey::DriverRepeatName));
        }

        let result = self
            .driver_repository
            .update(&updated)
            .await
            .map_err(conflict_on_duplicate(MessageKey::DriverRepeatName))?
            .ok_or_else(|| UseCaseError::driver_not_found(id))?;
        record_audit(self.audit_log.as_ref(), AuditEntry::for_driver(AuditOperation::Modify, &result, actor)).await;

        tracing::info!(driver_id = %id, "Driver updated successfully");
        Ok(result)
    }
}
