//! Local Driver File Store
//!
//! Keeps driver JARs on the local filesystem under
//! `<storage_dir>/<driver id>/<file name>`. Files are written to a unique
//! temporary name and renamed into place, so readers never see a partial JAR
//! and two writers never interleave their bytes.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::gateways::DriverFileStore;
use crate::domain::models::driver::DriverId;
use crate::domain::models::driver_detail::DriverFileName;
use crate::shared::errors::StorageError;

/// Filesystem implementation of DriverFileStore
pub struct LocalDriverFileStore {
    root: PathBuf,
}

impl LocalDriverFileStore {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn driver_dir(&self, driver_id: &DriverId) -> PathBuf {
        self.root.join(driver_id.to_string())
    }

    fn file_path(&self, driver_id: &DriverId, file_name: &str) -> Result<PathBuf, StorageError> {
        // Stored names are single path components; anything else would escape the driver dir
        if file_name.is_empty()
            || file_name.contains(['/', '\\'])
            || file_name == "."
            || file_name == ".."
        {
            return Err(StorageError::InvalidPath(file_name.to_string()));
        }
        Ok(self.driver_dir(driver_id).join(file_name))
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn ignore_not_found(result: std::io::Result<()>) -> std::io::Result<()> {
    match result {
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        other => other,
    }
}

#[async_trait]
impl DriverFileStore for LocalDriverFileStore {
    async fn store(&self, driver_id: &DriverId, file_name: &DriverFileName, content: &[u8]) -> Result<(), StorageError> {
        let dir = self.driver_dir(driver_id);
        tokio::fs::create_dir_all(&dir).await.map_err(io_error(&dir))?;

        let path = self.file_path(driver_id, file_name.as_str())?;
        let staging = dir.join(format!(".{}.{}.part", file_name.as_str(), Uuid::new_v4()));
        if let Err(err) = tokio::fs::write(&staging, content).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(io_error(&staging)(err));
        }
        if let Err(err) = tokio::fs::rename(&staging, &path).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(io_error(&path)(err));
        }

        tracing::debug!(path = %path.display(), bytes = content.len(), "Stored driver file");
        Ok(())
    }

    async fn remove(&self, driver_id: &DriverId, file_name: &str) -> Result<(), StorageError> {
        let path = self.file_path(driver_id, file_name)?;
        ignore_not_found(tokio::fs::remove_file(&path).await).map_err(io_error(&path))
    }

    async fn remove_all(&self, driver_id: &DriverId) -> Result<(), StorageError> {
        let dir = self.driver_dir(driver_id);
        ignore_not_found(tokio::fs::remove_dir_all(&dir).await).map_err(io_error(&dir))
    }
}
