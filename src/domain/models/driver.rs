//! Driver Domain Model
//!
//! Represents a custom database driver registered for a data-source type.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::errors::DomainError;

/// Identifier, name and class of the synthetic built-in driver entry
pub const DEFAULT_DRIVER: &str = "default";

/// Newtype wrapper for Driver ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DriverId(Uuid);

impl DriverId {
    /// Create a new random DriverId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a DriverId from an existing UUID
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DriverId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DriverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for DriverId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl TryFrom<&str> for DriverId {
    type Error = uuid::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(Self(Uuid::parse_str(value.trim())?))
    }
}

/// Data required to create a new Driver
#[derive(Debug, Clone)]
pub struct CreateDriverData {
    pub name: String,
    pub ds_type: String,
    pub driver_class: Option<String>,
    pub supported_versions: Option<String>,
    pub description: Option<String>,
}

/// Replacement values for an existing Driver
#[derive(Debug, Clone)]
pub struct UpdateDriverData {
    pub name: String,
    pub ds_type: String,
    pub driver_class: Option<String>,
    pub supported_versions: Option<String>,
    pub description: Option<String>,
}

/// Driver domain entity
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    id: DriverId,
    name: String,
    ds_type: String,
    driver_class: Option<String>,
    supported_versions: Option<String>,
    description: Option<String>,
    created_by: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Driver {
    /// Create a new Driver owned by `created_by`
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidState` if the name or type is blank, or
    /// if the name collides with the built-in default entry.
    pub fn new(data: CreateDriverData, created_by: &str) -> Result<Self, DomainError> {
        let name = required(data.name, "name")?;
        let ds_type = required(data.ds_type, "type")?;
        ensure_not_reserved(&name)?;

        let now = Utc::now();
        Ok(Self {
            id: DriverId::new(),
            name,
            ds_type,
            driver_class: optional(data.driver_class),
            supported_versions: optional(data.supported_versions),
            description: optional(data.description),
            created_by: created_by.to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Restore a Driver from persisted data
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: DriverId,
        name: String,
        ds_type: String,
        driver_class: Option<String>,
        supported_versions: Option<String>,
        description: Option<String>,
        created_by: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            ds_type,
            driver_class,
            supported_versions,
            description,
            created_by,
            created_at,
            updated_at,
        }
    }

    /// Apply updates to the driver, returning a new instance
    ///
    /// # Errors
    ///
    /// Same rules as [`Driver::new`].
    pub fn with_updates(self, data: UpdateDriverData) -> Result<Self, DomainError> {
        let name = required(data.name, "name")?;
        let ds_type = required(data.ds_type, "type")?;
        ensure_not_reserved(&name)?;

        Ok(Self {
            name,
            ds_type,
            driver_class: optional(data.driver_class),
            supported_versions: optional(data.supported_versions),
            description: optional(data.description),
            updated_at: Utc::now(),
            ..self
        })
    }

    /// Whether this driver serves the given data-source type (case-insensitive)
    #[must_use]
    pub fn serves_type(&self, ds_type: &str) -> bool {
        self.ds_type.to_lowercase() == ds_type.to_lowercase()
    }

    // Getters

    #[must_use]
    pub fn id(&self) -> &DriverId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn ds_type(&self) -> &str {
        &self.ds_type
    }

    #[must_use]
    pub fn driver_class(&self) -> Option<&str> {
        self.driver_class.as_deref()
    }

    #[must_use]
    pub fn supported_versions(&self) -> Option<&str> {
        self.supported_versions.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn created_by(&self) -> &str {
        &self.created_by
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

fn required(value: String, field: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidState(format!("{field} must not be blank")));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn ensure_not_reserved(name: &str) -> Result<(), DomainError> {
    if name.eq_ignore_ascii_case(DEFAULT_DRIVER) {
        return Err(DomainError::InvalidState(format!(
            "'{DEFAULT_DRIVER}' is reserved for the built-in driver"
        )));
    }
    Ok(())
}

/// Display alias: the name, followed by the supported versions in
/// parentheses when there are any.
#[must_use]
pub fn display_alias(name: &str, supported_versions: Option<&str>) -> String {
    match supported_versions {
        Some(versions) if !versions.trim().is_empty() => format!("{name}({versions})"),
        _ => name.to_string(),
    }
}

/// A selectable driver for a data-source type: a stored custom driver, or
/// the built-in default entry.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverChoice {
    Custom(Driver),
    Default {
        ds_type: String,
        supported_versions: Option<String>,
    },
}

impl DriverChoice {
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            Self::Custom(driver) => driver.id().to_string(),
            Self::Default { .. } => DEFAULT_DRIVER.to_string(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Custom(driver) => driver.name(),
            Self::Default { .. } => DEFAULT_DRIVER,
        }
    }

    #[must_use]
    pub fn ds_type(&self) -> &str {
        match self {
            Self::Custom(driver) => driver.ds_type(),
            Self::Default { ds_type, .. } => ds_type,
        }
    }

    #[must_use]
    pub fn driver_class(&self) -> Option<&str> {
        match self {
            Self::Custom(driver) => driver.driver_class(),
            Self::Default { .. } => Some(DEFAULT_DRIVER),
        }
    }

    #[must_use]
    pub fn supported_versions(&self) -> Option<&str> {
        match self {
            Self::Custom(driver) => driver.supported_versions(),
            Self::Default { supported_versions, .. } => supported_versions.as_deref(),
        }
    }

    #[must_use]
    pub fn name_alias(&self) -> String {
        display_alias(self.name(), self.supported_versions())
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_driver_data() -> CreateDriverData {
        CreateDriverData {
            name: "MySQL 8 Connector".to_string(),
            ds_type: "mysql".to_string(),
            driver_class: Some("com.mysql.cj.jdbc.Driver".to_string()),
            supported_versions: Some("8.0".to_string()),
            description: None,
        }
    }

    #[test]
    fn test_driver_id_try_from_string() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = DriverId::try_from(uuid_str).unwrap();
        assert_eq!(id.to_string(), uuid_str);
        assert!(DriverId::try_from("default").is_err());
    }

    #[test]
    fn test_driver_new_trims_and_stamps_creator() {
        let mut data = create_test_driver_data();
        data.name = "  MySQL 8 Connector ".to_string();
        data.description = Some("   ".to_string());

        let driver = Driver::new(data, "admin").unwrap();

        assert_eq!(driver.name(), "MySQL 8 Connector");
        assert_eq!(driver.description(), None);
        assert_eq!(driver.created_by(), "admin");
        assert_eq!(driver.created_at(), driver.updated_at());
    }

    #[test]
    fn test_driver_new_rejects_blank_name() {
        let mut data = create_test_driver_data();
        data.name = " ".to_string();
        assert!(matches!(Driver::new(data, "admin"), Err(DomainError::InvalidState(_))));
    }

    #[test]
    fn test_driver_new_rejects_reserved_name() {
        let mut data = create_test_driver_data();
        data.name = "Default".to_string();
        assert!(Driver::new(data, "admin").is_err());
    }

    #[test]
    fn test_driver_with_updates_keeps_identity() {
        let driver = Driver::new(create_test_driver_data(), "admin").unwrap();
        let id = *driver.id();
        let created_at = driver.created_at();

        let updated = driver
            .with_updates(UpdateDriverData {
                name: "MariaDB".to_string(),
                ds_type: "mariadb".to_string(),
                driver_class: None,
                supported_versions: None,
                description: Some("fork".to_string()),
            })
            .unwrap();

        assert_eq!(updated.id(), &id);
        assert_eq!(updated.created_at(), created_at);
        assert_eq!(updated.name(), "MariaDB");
        assert_eq!(updated.driver_class(), None);
        assert_eq!(updated.description(), Some("fork"));
    }

    #[test]
    fn test_serves_type_ignores_case() {
        let driver = Driver::new(create_test_driver_data(), "admin").unwrap();
        assert!(driver.serves_type("MYSQL"));
        assert!(driver.serves_type("MySql"));
        assert!(!driver.serves_type("mariadb"));
    }

    #[test]
    fn test_display_alias() {
        assert_eq!(display_alias("MySQL", None), "MySQL");
        assert_eq!(display_alias("MySQL", Some("")), "MySQL");
        assert_eq!(display_alias("MySQL", Some("  ")), "MySQL");
        assert_eq!(display_alias("MySQL", Some("5.7/8.0")), "MySQL(5.7/8.0)");
        assert_eq!(display_alias("MySQL", Some(" 5.7 ")), "MySQL( 5.7 )");
    }

    #[test]
    fn test_default_choice_uses_literal_default() {
        let choice = DriverChoice::Default {
            ds_type: "mysql".to_string(),
            supported_versions: Some("5.7".to_string()),
        };
        assert_eq!(choice.id(), "default");
        assert_eq!(choice.name(), "default");
        assert_eq!(choice.driver_class(), Some("default"));
        assert_eq!(choice.name_alias(), "default(5.7)");
        assert!(choice.is_default());
    }
}
