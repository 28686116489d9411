//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod actor;
pub mod audit;
pub mod datasource_type;
pub mod driver;
pub mod driver_detail;

pub use actor::Actor;
pub use audit::{AuditEntry, AuditOperation};
pub use datasource_type::DataSourceType;
pub use driver::{display_alias, CreateDriverData, Driver, DriverChoice, DriverId, UpdateDriverData, DEFAULT_DRIVER};
pub use driver_detail::{DriverDetail, DriverFileId, DriverFileName, JarMetadata};
