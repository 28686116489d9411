//! Driver Repository Gateway
//!
//! Abstract trait defining the contract for driver persistence operations.

use async_trait::async_trait;

use crate::domain::models::driver::{Driver, DriverId};
use crate::shared::errors::RepositoryError;

/// Repository trait for Driver persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Find all drivers, newest first
    async fn find_all(&self) -> Result<Vec<Driver>, RepositoryError>;

    /// Find a driver by its ID
    async fn find_by_id(&self, id: &DriverId) -> Result<Option<Driver>, RepositoryError>;

    /// Check if a name is taken, optionally excluding a specific driver ID
    async fn exists_by_name(&self, name: &str, exclude_id: Option<DriverId>) -> Result<bool, RepositoryError>;

    /// Create a new driver
    ///
    /// A taken name yields `RepositoryError::UniqueViolation`.
    async fn create(&self, driver: &Driver) -> Result<Driver, RepositoryError>;

    /// Update an existing driver; a taken name yields `RepositoryError::UniqueViolation`
    async fn update(&self, driver: &Driver) -> Result<Option<Driver>, RepositoryError>;

    /// Delete a driver and, in cascade, its file records
    async fn delete(&self, id: &DriverId) -> Result<bool, RepositoryError>;

    /// Whether any data source is configured to use the driver
    async fn is_in_use(&self, id: &DriverId) -> Result<bool, RepositoryError>;
}
