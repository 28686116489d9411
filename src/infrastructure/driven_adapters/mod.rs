//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories and the audit log
//! - Driver file storage and JAR inspection
//! - Configuration

pub mod audit_log;
pub mod config;
pub mod database;
pub mod datasource_types;
pub mod driver_detail_repository;
pub mod driver_repository;
pub mod file_store;
pub mod jar_inspector;

pub use audit_log::PostgresAuditLog;
pub use config::AppConfig;
pub use datasource_types::ConfiguredDataSourceTypes;
pub use driver_detail_repository::PostgresDriverDetailRepository;
pub use driver_repository::PostgresDriverRepository;
pub use file_store::LocalDriverFileStore;
pub use jar_inspector::ZipJarInspector;
