//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod audit_log;
pub mod datasource_type_catalog;
pub mod driver_detail_repository;
pub mod driver_file_store;
pub mod driver_repository;
pub mod jar_inspector;

pub use audit_log::AuditLog;
pub use datasource_type_catalog::DataSourceTypeCatalog;
pub use driver_detail_repository::DriverDetailRepository;
pub use driver_file_store::DriverFileStore;
pub use driver_repository::DriverRepository;
pub use jar_inspector::JarInspector;
