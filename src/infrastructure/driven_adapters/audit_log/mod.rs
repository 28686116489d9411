//! Audit Log Implementations

mod postgres;

pub use postgres::PostgresAuditLog;
