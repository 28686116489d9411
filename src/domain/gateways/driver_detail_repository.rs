//! Driver File Repository Gateway
//!
//! Persistence of the records describing uploaded driver JAR files.

use async_trait::async_trait;

use crate::domain::models::driver::DriverId;
use crate::domain::models::driver_detail::{DriverDetail, DriverFileId};
use crate::shared::errors::RepositoryError;

/// Repository trait for driver file records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriverDetailRepository: Send + Sync {
    /// Files of a driver, oldest first
    async fn find_by_driver_id(&self, driver_id: &DriverId) -> Result<Vec<DriverDetail>, RepositoryError>;

    /// Find a file record by its ID
    async fn find_by_id(&self, id: &DriverFileId) -> Result<Option<DriverDetail>, RepositoryError>;

    /// Whether the driver already has a file with this name
    async fn exists_by_file_name(&self, driver_id: &DriverId, file_name: &str) -> Result<bool, RepositoryError>;

    /// Create a new file record
    ///
    /// A second record for the same driver and file name yields
    /// `RepositoryError::UniqueViolation`.
    async fn create(&self, detail: &DriverDetail) -> Result<DriverDetail, RepositoryError>;

    /// Delete a file record
    async fn delete(&self, id: &DriverFileId) -> Result<bool, RepositoryError>;
}
