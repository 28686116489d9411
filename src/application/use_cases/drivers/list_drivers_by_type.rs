//! List Drivers By Type Use Case
//!
//! Offers the drivers that can serve a data-source type: the custom drivers
//! registered for it, followed by the built-in default entry.

use std::sync::Arc;

use crate::domain::gateways::{DataSourceTypeCatalog, DriverRepository};
use crate::domain::models::datasource_type::find_type;
use crate::domain::models::DriverChoice;
use crate::shared::errors::UseCaseError;

/// Use case for listing the driver choices of a data-source type
pub struct ListDriversByTypeUseCase {
    driver_repository: Arc<dyn DriverRepository>,
    type_catalog: Arc<dyn DataSourceTypeCatalog>,
}

impl ListDriversByTypeUseCase {
    /// Create a new ListDriversByTypeUseCase
    #[must_use]
    pub fn new(driver_repository: Arc<dyn DriverRepository>, type_catalog: Arc<dyn DataSourceTypeCatalog>) -> Self {
        Self {
            driver_repository,
            type_catalog,
        }
    }

    /// Execute the use case
    ///
    /// The result always ends with exactly one default entry, whose
    /// supported versions come from the matching data-source type.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, ds_type: &str) -> Result<Vec<DriverChoice>, UseCaseError> {
        tracing::debug!(ds_type = %ds_type, "Listing drivers by type");

        let mut choices: Vec<DriverChoice> = self
            .driver_repository
            .find_all()
            .await?
            .into_iter()
            .filter(|driver| driver.serves_type(ds_type))
            .map(DriverChoice::Custom)
            .collect();

        let types = self.type_catalog.types().await?;
        choices.push(DriverChoice::Default {
            ds_type: ds_type.to_string(),
            supported_versions: find_type(&types, ds_type).and_then(|t| t.supported_versions.clone()),
        });

        tracing::debug!(count = choices.len(), "Found driver choices");
        Ok(choices)
    }
}
