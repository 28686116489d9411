//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{AuditLog, DataSourceTypeCatalog, DriverDetailRepository, DriverFileStore, DriverRepository, JarInspector};
pub use models::{Actor, DataSourceType, Driver, DriverChoice, DriverDetail, DriverId};
