//! Driver File Domain Model
//!
//! A JAR file uploaded for a driver, with what was learned from inspecting it.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::driver::DriverId;
use crate::shared::errors::DomainError;

/// Newtype wrapper for driver file IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DriverFileId(Uuid);

impl DriverFileId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DriverFileId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DriverFileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<&str> for DriverFileId {
    type Error = uuid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(Uuid::parse_str(value.trim())?))
    }
}

/// A validated JAR file name: a single path component ending in `.jar`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverFileName(String);

impl DriverFileName {
    /// Validate an uploaded file name
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFileName` for empty names, names with
    /// path separators or parent references, and control characters.
    /// Returns `DomainError::NotJar` if the name does not end in `.jar`.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let name = raw.trim();
        if name.is_empty()
            || name.len() > 255
            || name.contains(['/', '\\'])
            || name.starts_with('.')
            || name.chars().any(char::is_control)
        {
            return Err(DomainError::InvalidFileName(raw.to_string()));
        }
        if !name.ends_with(".jar") {
            return Err(DomainError::NotJar(name.to_string()));
        }
        Ok(Self(name.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DriverFileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Facts read from a JAR archive
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JarMetadata {
    /// `Implementation-Version` (or `Specification-Version`) from the manifest
    pub version: Option<String>,
    /// Classes registered in `META-INF/services/java.sql.Driver`
    pub driver_classes: Vec<String>,
}

/// Driver file entity
#[derive(Debug, Clone, PartialEq)]
pub struct DriverDetail {
    id: DriverFileId,
    driver_id: DriverId,
    file_name: String,
    version: Option<String>,
    driver_classes: Vec<String>,
    created_at: DateTime<Utc>,
}

impl DriverDetail {
    /// Record a newly uploaded file
    #[must_use]
    pub fn new(driver_id: DriverId, file_name: DriverFileName, metadata: JarMetadata) -> Self {
        Self {
            id: DriverFileId::new(),
            driver_id,
            file_name: file_name.0,
            version: metadata.version,
            driver_classes: metadata.driver_classes,
            created_at: Utc::now(),
        }
    }

    /// Restore a file record from persisted data
    #[must_use]
    pub fn restore(
        id: DriverFileId,
        driver_id: DriverId,
        file_name: String,
        version: Option<String>,
        driver_classes: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            driver_id,
            file_name,
            version,
            driver_classes,
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> &DriverFileId {
        &self.id
    }

    #[must_use]
    pub fn driver_id(&self) -> &DriverId {
        &self.driver_id
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    #[must_use]
    pub fn driver_classes(&self) -> &[String] {
        &self.driver_classes
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
