//! List Driver Files Use Case

use std::sync::Arc;

use super::require_admin;
use crate::domain::gateways::DriverDetailRepository;
use crate::domain::models::{Actor, DriverDetail, DriverId};
use crate::shared::errors::UseCaseError;

/// Use case for listing the files uploaded for a driver
pub struct ListDriverDetailsUseCase {
    detail_repository: Arc<dyn DriverDetailRepository>,
}

impl ListDriverDetailsUseCase {
    /// Create a new ListDriverDetailsUseCase
    #[must_use]
    pub fn new(detail_repository: Arc<dyn DriverDetailRepository>) -> Self {
        Self { detail_repository }
    }

    /// Execute the use case
    ///
    /// An unknown driver simply has no files.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Forbidden` if the caller is not an administrator.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, actor: &Actor, driver_id: &DriverId) -> Result<Vec<DriverDetail>, UseCaseError> {
        require_admin(actor)?;
        tracing::debug!(driver_id = %driver_id, "Listing driver files");

        let details = self.detail_repository.find_by_driver_id(driver_id).await?;

        tracing::debug!(driver_id = %driver_id, count = details.len(), "Found driver files");
        Ok(details)
    }
}
