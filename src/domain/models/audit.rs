//! Audit Entry
//!
//! Record of a mutating operation performed on a driver.

use chrono::{DateTime, Utc};

use super::actor::Actor;
use super::driver::Driver;

/// Kind of operation being audited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOperation {
    Create,
    Modify,
    Delete,
}

impl AuditOperation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Modify => "modify",
            Self::Delete => "delete",
        }
    }
}

/// Source type recorded for driver operations
pub const DRIVER_SOURCE_TYPE: &str = "driver";

/// A single audit log record
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub operation: AuditOperation,
    pub source_type: &'static str,
    pub source_id: String,
    pub source_name: Option<String>,
    /// Data-source type the driver belongs to
    pub position: Option<String>,
    pub operator_id: String,
    pub operator_name: String,
    pub created_at: DateTime<Utc>,
}

impl AuditEntry {
    /// Audit record for an operation on `driver` performed by `actor`
    #[must_use]
    pub fn for_driver(operation: AuditOperation, driver: &Driver, actor: &Actor) -> Self {
        Self {
            operation,
            source_type: DRIVER_SOURCE_TYPE,
            source_id: driver.id().to_string(),
            source_name: Some(driver.name().to_string()),
            position: Some(driver.ds_type().to_string()),
            operator_id: actor.user_id.clone(),
            operator_name: actor.username.clone(),
            created_at: Utc::now(),
        }
    }
}
