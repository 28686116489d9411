//! JWT Authentication Middleware
//!
//! Extracts and validates JWT tokens from requests, and checks the
//! permissions carried in their claims.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::models::Actor;
use crate::infrastructure::driven_adapters::config::AppConfig;
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::context::RequestContext;
use crate::shared::errors::ErrorResponse;
use crate::shared::i18n::MessageKey;

/// Role granted every permission
pub const ADMIN_ROLE: &str = "admin";

/// Permission required by every driver endpoint
pub const DATASOURCE_READ: &str = "datasource:read";

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Display name of the user
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Role
    pub role: String,
    /// Granted permissions, e.g. `datasource:read`
    #[serde(default)]
    pub permissions: Vec<String>,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// Authenticated user extracted from JWT
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub permissions: Vec<String>,
}

impl AuthenticatedUser {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    /// Admins hold every permission
    #[must_use]
    pub fn has_permission(&self, permission: &str) -> bool {
        self.is_admin() || self.permissions.iter().any(|p| p == permission)
    }

    #[must_use]
    pub fn to_actor(&self) -> Actor {
        Actor::new(self.id.clone(), self.name.clone(), self.is_admin())
    }
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            name: claims.name,
            email: claims.email,
            role: claims.role,
            permissions: claims.permissions,
        }
    }
}

/// JWT authentication extractor
pub struct JwtAuth(pub AuthenticatedUser);

/// Error type for authentication and permission failures
#[derive(Debug)]
pub struct AuthError {
    status: StatusCode,
    message: String,
}

impl AuthError {
    fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
        }
    }

    fn forbidden(key: MessageKey) -> Self {
        Self {
            status: StatusCode::FORBIDDEN,
            message: key.translate(RequestContext::locale()).to_string(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let code = if self.status == StatusCode::FORBIDDEN {
            "FORBIDDEN"
        } else {
            "UNAUTHORIZED"
        };
        (self.status, Json(ErrorResponse::new(code, self.message, None))).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for JwtAuth
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Get config from request extensions
        let config = parts
            .extensions
            .get::<Arc<AppConfig>>()
            .ok_or_else(|| AuthError::unauthorized("Configuration not available"))?
            .clone();

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AuthError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AuthError::unauthorized("Invalid Authorization header format"))?;

        // Explicit algorithm prevents algorithm confusion attacks
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 60;

        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.jwt.secret.as_bytes()),
            &validation,
        )
        .map_err(|err| {
            tracing::debug!(error = %err, "Rejected bearer token");
            AuthError::unauthorized("Invalid or expired token")
        })?;

        Ok(JwtAuth(token_data.claims.into()))
    }
}

/// Caller holding the `datasource:read` permission
pub struct DatasourceReader(pub Actor);

#[async_trait]
impl<S> FromRequestParts<S> for DatasourceReader
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let JwtAuth(user) = JwtAuth::from_request_parts(parts, state).await?;

        if !user.has_permission(DATASOURCE_READ) {
            tracing::warn!(user_id = %user.id, "Missing {} permission", DATASOURCE_READ);
            return Err(AuthError::forbidden(MessageKey::NoDatasourcePermission));
        }

        Ok(DatasourceReader(user.to_actor()))
    }
}

/// Caller allowed to manage drivers: a data-source reader with the admin role
///
/// Runs before the body is read, so non-admins are refused before any
/// payload or id is interpreted.
pub struct DriverAdmin(pub Actor);

#[async_trait]
impl<S> FromRequestParts<S> for DriverAdmin
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let DatasourceReader(actor) = DatasourceReader::from_request_parts(parts, state).await?;

        if !actor.is_admin {
            tracing::warn!(user_id = %actor.user_id, "Driver management denied for non-admin caller");
            return Err(AuthError::forbidden(MessageKey::NoDriverPermission));
        }

        Ok(DriverAdmin(actor))
    }
}

/// Middleware layer that adds config to request extensions for JWT validation
pub async fn add_config_extension(
    State(state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: axum::middleware::Next,
) -> Response {
    request.extensions_mut().insert(state.config.clone());
    next.run(request).await
}
