//! Driver DTOs
//!
//! Data transfer objects for driver API endpoints.

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::use_cases::drivers::DriverSummary;
use crate::domain::models::{display_alias, CreateDriverData, Driver, DriverChoice, DriverDetail, UpdateDriverData};

lazy_static! {
    /// Fully qualified Java class name, e.g. `com.mysql.cj.jdbc.Driver`
    static ref DRIVER_CLASS_REGEX: Regex =
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*(\.[A-Za-z_$][A-Za-z0-9_$]*)*$").expect("valid regex");
}

/// Validates a driver class name
fn validate_driver_class(class: &str) -> Result<(), validator::ValidationError> {
    if DRIVER_CLASS_REGEX.is_match(class.trim()) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("driver_class");
        error.message = Some("driverClass must be a fully qualified class name".into());
        Err(error)
    }
}

/// Rejects values made only of whitespace
fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut error = validator::ValidationError::new("blank");
        error.message = Some("must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// DTO for creating a new driver
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverDto {
    #[validate(length(min = 1, max = 50, message = "name must be between 1 and 50 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50, message = "type must be between 1 and 50 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub ds_type: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "driverClass must be at most 255 characters"))]
    #[validate(custom(function = "validate_driver_class"))]
    pub driver_class: Option<String>,

    #[serde(default)]
    #[validate(length(max = 255, message = "supportedVersions must be at most 255 characters"))]
    pub supported_versions: Option<String>,

    #[serde(default, rename = "desc")]
    #[validate(length(max = 255, message = "desc must be at most 255 characters"))]
    pub description: Option<String>,
}

impl From<CreateDriverDto> for CreateDriverData {
    fn from(dto: CreateDriverDto) -> Self {
        Self {
            name: dto.name,
            ds_type: dto.ds_type,
            driver_class: dto.driver_class,
            supported_versions: dto.supported_versions,
            description: dto.description,
        }
    }
}

/// DTO for updating a driver; carries the id in the body
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverDto {
    pub id: String,

    #[validate(length(min = 1, max = 50, message = "name must be between 1 and 50 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50, message = "type must be between 1 and 50 characters"))]
    #[validate(custom(function = "validate_not_blank"))]
    pub ds_type: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "driverClass must be at most 255 characters"))]
    #[validate(custom(function = "validate_driver_class"))]
    pub driver_class: Option<String>,

    #[serde(default)]
    #[validate(length(max = 255, message = "supportedVersions must be at most 255 characters"))]
    pub supported_versions: Option<String>,

    #[serde(default, rename = "desc")]
    #[validate(length(max = 255, message = "desc must be at most 255 characters"))]
    pub description: Option<String>,
}

impl UpdateDriverDto {
    /// Split into the target id and the replacement values
    #[must_use]
    pub fn into_parts(self) -> (String, UpdateDriverData) {
        (
            self.id,
            UpdateDriverData {
                name: self.name,
                ds_type: self.ds_type,
                driver_class: self.driver_class,
                supported_versions: self.supported_versions,
                description: self.description,
            },
        )
    }
}

/// Body of the id-only endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct IdDto {
    pub id: String,
}

/// Response DTO for a driver or the built-in default entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDto {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub ds_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_versions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "desc")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_by: Option<String>,
    /// Milliseconds since the Unix epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<i64>,
}

impl From<Driver> for DriverDto {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id().to_string(),
            name: driver.name().to_string(),
            ds_type: driver.ds_type().to_string(),
            type_desc: None,
            driver_class: driver.driver_class().map(str::to_string),
            supported_versions: driver.supported_versions().map(str::to_string),
            name_alias: Some(display_alias(driver.name(), driver.supported_versions())),
            description: driver.description().map(str::to_string),
            create_by: Some(driver.created_by().to_string()),
            create_time: Some(millis(driver.created_at())),
            update_time: Some(millis(driver.updated_at())),
        }
    }
}

impl From<DriverSummary> for DriverDto {
    fn from(summary: DriverSummary) -> Self {
        Self {
            type_desc: summary.type_description,
            ..Self::from(summary.driver)
        }
    }
}

impl From<DriverChoice> for DriverDto {
    fn from(choice: DriverChoice) -> Self {
        match choice {
            DriverChoice::Custom(driver) => Self::from(driver),
            default @ DriverChoice::Default { .. } => Self {
                id: default.id(),
                name: default.name().to_string(),
                ds_type: default.ds_type().to_string(),
                type_desc: None,
                driver_class: default.driver_class().map(str::to_string),
                supported_versions: default.supported_versions().map(str::to_string),
                name_alias: Some(default.name_alias()),
                description: None,
                create_by: None,
                create_time: None,
                update_time: None,
            },
        }
    }
}

/// Response DTO for an uploaded driver file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDetailDto {
    pub id: String,
    pub de_driver_id: String,
    pub file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Registered JDBC driver classes, comma separated
    pub driver_class: String,
    pub driver_classes: Vec<String>,
    pub create_time: i64,
}

impl From<DriverDetail> for DriverDetailDto {
    fn from(detail: DriverDetail) -> Self {
        Self {
            id: detail.id().to_string(),
            de_driver_id: detail.driver_id().to_string(),
            file_name: detail.file_name().to_string(),
            version: detail.version().map(str::to_string),
            driver_class: detail.driver_classes().join(","),
            driver_classes: detail.driver_classes().to_vec(),
            create_time: millis(detail.created_at()),
        }
    }
}

fn millis(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}
