//! API Middleware
//!
//! Authentication, permission extractors and request context middleware.

pub mod auth;
pub mod request_id;

pub use auth::{add_config_extension, AuthenticatedUser, DatasourceReader, DriverAdmin, JwtAuth};
pub use request_id::{request_context_middleware, RequestId, REQUEST_ID_HEADER};
