//! JAR Inspector Gateway

use crate::domain::models::driver_detail::JarMetadata;
use crate::shared::errors::DomainError;

/// Reads driver metadata out of a JAR archive
#[cfg_attr(test, mockall::automock)]
pub trait JarInspector: Send + Sync {
    /// # Errors
    ///
    /// Returns `DomainError::InvalidJar` if the bytes are not a readable archive.
    fn inspect(&self, content: &[u8]) -> Result<JarMetadata, DomainError>;
}
