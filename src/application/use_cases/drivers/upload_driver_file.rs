//! Upload Driver File Use Case
//!
//! Stores a JAR for a driver and records what its manifest and JDBC
//! service registration declare.
//!
//! The record is inserted before the bytes are written, so the unique key on
//! `(driver, file name)` decides between concurrent uploads of the same file
//! and the loser never touches storage.

use std::sync::Arc;

use super::{conflict_on_duplicate, require_admin};
use crate::domain::gateways::{DriverDetailRepository, DriverFileStore, DriverRepository, JarInspector};
use crate::domain::models::{Actor, DriverDetail, DriverFileName, DriverId, JarMetadata};
use crate::shared::errors::UseCaseError;
use crate::shared::i18n::MessageKey;

/// A file received from the client
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub content: Vec<u8>,
}

/// Use case for uploading a driver JAR
pub struct UploadDriverFileUseCase {
    driver_repository: Arc<dyn DriverRepository>,
    detail_repository: Arc<dyn DriverDetailRepository>,
    file_store: Arc<dyn DriverFileStore>,
    jar_inspector: Arc<dyn JarInspector>,
}

impl UploadDriverFileUseCase {
    /// Create a new UploadDriverFileUseCase
    #[must_use]
    pub fn new(
        driver_repository: Arc<dyn DriverRepository>,
        detail_repository: Arc<dyn DriverDetailRepository>,
        file_store: Arc<dyn DriverFileStore>,
        jar_inspector: Arc<dyn JarInspector>,
    ) -> Self {
        Self {
            driver_repository,
            detail_repository,
            file_store,
            jar_inspector,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Forbidden` if the caller is not an administrator.
    /// Returns `UseCaseError::NotFound` if the driver doesn't exist.
    /// Returns `UseCaseError::Domain` if the file is not an acceptable jar.
    /// Returns `UseCaseError::Conflict` if the driver already has a file with that name.
    /// Returns `UseCaseError::Storage` if the file cannot be written.
    /// Returns `UseCaseError::Repository` if there's a database error.
    /// Returns `UseCaseError::Internal` if the inspection task dies.
    pub async fn execute(
        &self,
        actor: &Actor,
        driver_id: &DriverId,
        file: UploadedFile,
    ) -> Result<DriverDetail, UseCaseError> {
        require_admin(actor)?;
        tracing::info!(driver_id = %driver_id, file_name = %file.file_name, size = file.content.len(), "Uploading driver file");

        let file_name = DriverFileName::parse(&file.file_name)?;

        if self.driver_repository.find_by_id(driver_id).await?.is_none() {
            tracing::warn!(driver_id = %driver_id, "Driver not found for upload");
            return Err(UseCaseError::driver_not_found(driver_id));
        }

        if self
            .detail_repository
            .exists_by_file_name(driver_id, file_name.as_str())
            .await?
        {
            tracing::warn!(driver_id = %driver_id, file_name = %file_name, "Driver file already exists");
            return Err(UseCaseError::Conflict(MessageKey::JarExisted));
        }

        let (metadata, content) = self.inspect(file.content).await?;
        tracing::debug!(
            driver_id = %driver_id,
            version = ?metadata.version,
            driver_classes = ?metadata.driver_classes,
            "Inspected driver jar"
        );

        let detail = DriverDetail::new(*driver_id, file_name.clone(), metadata);
        let created = self
            .detail_repository
            .create(&detail)
            .await
            .map_err(conflict_on_duplicate(MessageKey::JarExisted))?;

        if let Err(err) = self.file_store.store(driver_id, &file_name, &content).await {
            if let Err(cleanup) = self.detail_repository.delete(created.id()).await {
                tracing::warn!(file_id = %created.id(), error = %cleanup, "Failed to remove record of unstored driver file");
            }
            return Err(err.into());
        }

        tracing::info!(driver_id = %driver_id, file_id = %created.id(), "Driver file uploaded successfully");
        Ok(created)
    }

    /// Inflating archive entries is blocking work, so it runs off the async workers
    async fn inspect(&self, content: Vec<u8>) -> Result<(JarMetadata, Vec<u8>), UseCaseError> {
        let inspector = Arc::clone(&self.jar_inspector);
        let (metadata, content) = tokio::task::spawn_blocking(move || {
            let metadata = inspector.inspect(&content);
            (metadata, content)
        })
        .await
        .map_err(|e| UseCaseError::Internal(format!("jar inspection task failed: {e}")))?;

        Ok((metadata?, content))
    }
}
