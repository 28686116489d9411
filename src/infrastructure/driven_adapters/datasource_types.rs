//! Configured Data Source Types
//!
//! Serves the data-source type catalogue from application configuration.

use async_trait::async_trait;

use crate::domain::gateways::DataSourceTypeCatalog;
use crate::domain::models::DataSourceType;
use crate::shared::errors::RepositoryError;

/// DataSourceTypeCatalog backed by the `[[datasource_types]]` config entries
#[derive(Debug, Clone, Default)]
pub struct ConfiguredDataSourceTypes {
    types: Vec<DataSourceType>,
}

impl ConfiguredDataSourceTypes {
    #[must_use]
    pub fn new(types: Vec<DataSourceType>) -> Self {
        Self { types }
    }
}

#[async_trait]
impl DataSourceTypeCatalog for ConfiguredDataSourceTypes {
    async fn types(&self) -> Result<Vec<DataSourceType>, RepositoryError> {
        Ok(self.types.clone())
    }
}
