//! Delete Driver File Use Case
//!
//! Removes an uploaded JAR record and the stored file behind it.

use std::sync::Arc;

use super::require_admin;
use crate::domain::gateways::{DriverDetailRepository, DriverFileStore};
use crate::domain::models::{Actor, DriverFileId};
use crate::shared::errors::UseCaseError;

/// Use case for deleting a driver file
pub struct DeleteDriverFileUseCase {
    detail_repository: Arc<dyn DriverDetailRepository>,
    file_store: Arc<dyn DriverFileStore>,
}

impl DeleteDriverFileUseCase {
    /// Create a new DeleteDriverFileUseCase
    #[must_use]
    pub fn new(detail_repository: Arc<dyn DriverDetailRepository>, file_store: Arc<dyn DriverFileStore>) -> Self {
        Self {
            detail_repository,
            file_store,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Forbidden` if the caller is not an administrator.
    /// Returns `UseCaseError::NotFound` if the file record doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, actor: &Actor, id: &DriverFileId) -> Result<(), UseCaseError> {
        require_admin(actor)?;
        tracing::info!(file_id = %id, "Deleting driver file");

        let detail = self.detail_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(file_id = %id, "Driver file not found for deletion");
            UseCaseError::driver_file_not_found(id)
        })?;

        if !self.detail_repository.delete(id).await? {
            return Err(UseCaseError::driver_file_not_found(id));
        }

        if let Err(err) = self.file_store.remove(detail.driver_id(), detail.file_name()).await {
            tracing::warn!(file_id = %id, file_name = %detail.file_name(), error = %err, "Failed to remove driver file");
        }

        tracing::info!(file_id = %id, driver_id = %detail.driver_id(), "Driver file deleted successfully");
        Ok(())
    }
}
