//! Shared Module
//!
//! Cross-cutting utilities and types used across the application.

pub mod context;
pub mod errors;
pub mod i18n;

pub use context::RequestContext;
pub use errors::{ApiError, DomainError, RepositoryError, StorageError, UseCaseError};
pub use i18n::{Locale, MessageKey};
