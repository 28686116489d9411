//! Driver Use Cases
//!
//! Business logic for managing custom drivers and their JAR files.
//! Every mutating use case (and file listing) is reserved to administrators.

mod create_driver;
mod delete_driver;
mod delete_driver_file;
mod list_driver_details;
mod list_drivers;
mod list_drivers_by_type;
mod update_driver;
mod upload_driver_file;

pub use create_driver::CreateDriverUseCase;
pub use delete_driver::DeleteDriverUseCase;
pub use delete_driver_file::DeleteDriverFileUseCase;
pub use list_driver_details::ListDriverDetailsUseCase;
pub use list_drivers::{DriverSummary, ListDriversUseCase};
pub use list_drivers_by_type::ListDriversByTypeUseCase;
pub use update_driver::UpdateDriverUseCase;
pub use upload_driver_file::{UploadDriverFileUseCase, UploadedFile};

use crate::domain::gateways::AuditLog;
use crate::domain::models::{Actor, AuditEntry};
use crate::shared::errors::{RepositoryError, UseCaseError};
use crate::shared::i18n::MessageKey;

/// Reject callers that are not administrators
fn require_admin(actor: &Actor) -> Result<(), UseCaseError> {
    if actor.is_admin {
        return Ok(());
    }
    tracing::warn!(user_id = %actor.user_id, "Driver management denied for non-admin caller");
    Err(UseCaseError::Forbidden(MessageKey::NoDriverPermission))
}

/// Turn a unique key violation raised by a concurrent write into a conflict
fn conflict_on_duplicate(key: MessageKey) -> impl FnOnce(RepositoryError) -> UseCaseError {
    move |err| match err {
        RepositoryError::UniqueViolation(constraint) => {
            tracing::warn!(constraint = %constraint, "Concurrent write hit a unique key");
            UseCaseError::Conflict(key)
        }
        other => other.into(),
    }
}

/// Write an audit record; a failing audit sink never fails the operation
async fn record_audit(audit_log: &dyn AuditLog, entry: AuditEntry) {
    if let Err(err) = audit_log.record(&entry).await {
        tracing::warn!(
            error = %err,
            operation = entry.operation.as_str(),
            source_id = %entry.source_id,
            "Failed to write audit log entry"
        );
    }
}
