//! Data Source Type Catalog Gateway

use async_trait::async_trait;

use crate::domain::models::datasource_type::DataSourceType;
use crate::shared::errors::RepositoryError;

/// Source of the supported data-source types
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataSourceTypeCatalog: Send + Sync {
    async fn types(&self) -> Result<Vec<DataSourceType>, RepositoryError>;
}
