//! Driver File Store Gateway
//!
//! Storage of driver JAR bytes, one directory per driver.

use async_trait::async_trait;

use crate::domain::models::driver::DriverId;
use crate::domain::models::driver_detail::DriverFileName;
use crate::shared::errors::StorageError;

/// Storage for uploaded driver files
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriverFileStore: Send + Sync {
    /// Write a file, replacing any previous content
    async fn store(&self, driver_id: &DriverId, file_name: &DriverFileName, content: &[u8]) -> Result<(), StorageError>;

    /// Remove a single file; a missing file is not an error
    async fn remove(&self, driver_id: &DriverId, file_name: &str) -> Result<(), StorageError>;

    /// Remove every file of a driver; a missing directory is not an error
    async fn remove_all(&self, driver_id: &DriverId) -> Result<(), StorageError>;
}
