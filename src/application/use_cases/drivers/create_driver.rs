//! Create Driver Use Case
//!
//! Registers a new custom driver.

use std::sync::Arc;

use super::{conflict_on_duplicate, record_audit, require_admin};
use crate::domain::gateways::{AuditLog, DriverRepository};
use crate::domain::models::{Actor, AuditEntry, AuditOperation, CreateDriverData, Driver};
use crate::shared::errors::UseCaseError;
use crate::shared::i18n::MessageKey;

/// Use case for creating a new driver
pub struct CreateDriverUseCase {
    driver_repository: Arc<dyn DriverRepository>,
    audit_log: Arc<dyn AuditLog>,
}

impl CreateDriverUseCase {
    /// Create a new CreateDriverUseCase
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
    /// Returns `UseCaseError::Conflict` if a driver with the same name already exists.
    /// Returns `UseCaseError::Domain` if the data breaks a driver rule.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, actor: &Actor, data: CreateDriverData) -> Result<Driver, UseCaseError> {
        require_admin(actor)?;
        tracing::info!(name = %data.name, ds_type = %data.ds_type, "Creating new driver");

        let driver = Driver::new(data, &actor.username)?;

        if self.driver_repository.exists_by_name(driver.name(), None).await? {
            tracing::warn!(name = %driver.name(), "Driver name already exists");
            return Err(UseCaseError::Conflict(MessageKey::DriverRepeatName));
        }

        let created = self
            .driver_repository
            .create(&driver)
            .await
            .map_err(conflict_on_duplicate(MessageKey::DriverRepeatName))?;
        record_audit(self.audit_log.as_ref(), AuditEntry::for_driver(AuditOperation::Create, &created, actor)).await;

        tracing::info!(driver_id = %created.id(), "Driver created successfully");
        Ok(created)
    }
}
