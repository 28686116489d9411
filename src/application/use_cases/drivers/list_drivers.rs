//! List Drivers Use Case
//!
//! Retrieves every registered driver together with the display name of its
//! data-source type.

use std::sync::Arc;

use crate::domain::gateways::{DataSourceTypeCatalog, DriverRepository};
use crate::domain::models::datasource_type::find_type;
use crate::domain::models::Driver;
use crate::shared::errors::UseCaseError;

/// A driver with the display name of its data-source type
#[derive(Debug, Clone, PartialEq)]
pub struct DriverSummary {
    pub driver: Driver,
    pub type_description: Option<String>,
}

/// Use case for listing all drivers
pub struct ListDriversUseCase {
    driver_repository: Arc<dyn DriverRepository>,
    type_catalog: Arc<dyn DataSourceTypeCatalog>,
}

impl ListDriversUseCase {
    /// Create a new ListDriversUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>, type_catalog: Arc<dyn DataSourceTypeCatalog>) -> Self {
        Self {
            driver_repository,
            type_catalog,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self) -> Result<Vec<DriverSummary>, UseCaseError> {
        tracing::debug!("Listing all drivers");

        let drivers = self.driver_repository.find_all().await?;
        let types = self.type_catalog.types().await?;

        let summaries: Vec<DriverSummary> = drivers
            .into_iter()
            .map(|driver| {
                let type_description = find_type(&types, driver.ds_type()).map(|t| t.name.clone());
                DriverSummary {
                    driver,
                    type_description,
                }
            })
            .collect();

        tracing::debug!(count = summaries.len(), "Found drivers");
        Ok(summaries)
    }
}
