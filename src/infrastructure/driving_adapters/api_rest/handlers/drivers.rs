//! Driver Handlers
//!
//! HTTP handlers for driver administration and driver file management.
//! All endpoints require JWT authentication and the `datasource:read`
//! permission. Management operations take the `DriverAdmin` extractor, which
//! refuses non-admins before the body or any id is parsed.

use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use validator::Validate;

use crate::application::use_cases::drivers::UploadedFile;
use crate::domain::models::{DriverFileId, DriverId};
use crate::infrastructure::driven_adapters::config::DriversConfig;
use crate::infrastructure::driving_adapters::api_rest::dto::driver::{
    CreateDriverDto, DriverDetailDto, DriverDto, IdDto, UpdateDriverDto,
};
use crate::infrastructure::driving_adapters::api_rest::middleware::auth::{DatasourceReader, DriverAdmin};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for driver endpoints
///
/// The `add_config_extension` middleware must run first so the
/// `DatasourceReader` extractor can validate tokens.
pub fn router(config: &DriversConfig) -> Router<AppState> {
    Router::new()
        .route("/list", post(list_drivers))
        .route("/list/:type", get(list_drivers_by_type))
        .route("/save", post(save_driver))
        .route("/update", post(update_driver))
        .route("/delete", post(delete_driver))
        .route("/listDriverDetails/:id", get(list_driver_details))
        .route("/deleteDriverFile", post(delete_driver_file))
        .route(
            "/file/upload",
            post(upload_driver_file).layer(DefaultBodyLimit::max(config.max_upload_bytes)),
        )
}

/// POST /driver/list - All drivers, newest first, with their type names
///
/// # Responses
///
/// * 200 OK - List of drivers
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 403 Forbidden - Caller cannot read data sources
#[axum::debug_handler]
async fn list_drivers(
    _reader: DatasourceReader,
    State(state): State<AppState>,
) -> Result<Json<Vec<DriverDto>>, ApiError> {
    let drivers = state.list_drivers_use_case.execute().await?;

    Ok(Json(drivers.into_iter().map(DriverDto::from).collect()))
}

/// GET /driver/list/:type - Drivers for a data-source type plus the default entry
///
/// # Responses
///
/// * 200 OK - Matching drivers, the `default` entry last
/// * 401 Unauthorized - Missing or invalid JWT token
/// * 403 Forbidden - Caller cannot read data sources
#[axum::debug_handler]
async fn list_drivers_by_type(
    _reader: DatasourceReader,
    State(state): State<AppState>,
    Path(ds_type): Path<String>,
) -> Result<Json<Vec<DriverDto>>, ApiError> {
    let choices = state.list_drivers_by_type_use_case.execute(&ds_type).await?;

    Ok(Json(choices.into_iter().map(DriverDto::from).collect()))
}

/// POST /driver/save - Create a driver
///
/// # Responses
///
/// * 200 OK - Driver created
/// * 400 Bad Request - Validation error
/// * 403 Forbidden - Caller is not an admin
/// * 409 Conflict - Name already taken
#[axum::debug_handler]
async fn save_driver(
    DriverAdmin(actor): DriverAdmin,
    State(state): State<AppState>,
    Json(dto): Json<CreateDriverDto>,
) -> Result<Json<DriverDto>, ApiError> {
    dto.validate()?;

    let driver = state.create_driver_use_case.execute(&actor, dto.into()).await?;

    Ok(Json(DriverDto::from(driver)))
}

/// POST /driver/update - Replace a driver's fields
///
/// # Responses
///
/// * 200 OK - Driver updated
/// * 400 Bad Request - Validation error or malformed id
/// * 403 Forbidden - Caller is not an admin
/// * 404 Not Found - Driver does not exist
/// * 409 Conflict - Name used by another driver
#[axum::debug_handler]
async fn update_driver(
    DriverAdmin(actor): DriverAdmin,
    State(state): State<AppState>,
    Json(dto): Json<UpdateDriverDto>,
) -> Result<Json<DriverDto>, ApiError> {
    dto.validate()?;

    let (id, data) = dto.into_parts();
    let driver_id = DriverId::try_from(id.as_str())?;

    let driver = state.update_driver_use_case.execute(&actor, &driver_id, data).await?;

    Ok(Json(DriverDto::from(driver)))
}

/// POST /driver/delete - Delete a driver and its files
///
/// # Responses
///
/// * 200 OK - Driver deleted (empty body)
/// * 400 Bad Request - Malformed id
/// * 403 Forbidden - Caller is not an admin
/// * 404 Not Found - Driver does not exist
/// * 409 Conflict - A data source uses the driver
#[axum::debug_handler]
async fn delete_driver(
    DriverAdmin(actor): DriverAdmin,
    State(state): State<AppState>,
    Json(dto): Json<IdDto>,
) -> Result<StatusCode, ApiError> {
    let driver_id = DriverId::try_from(dto.id.as_str())?;

    state.delete_driver_use_case.execute(&actor, &driver_id).await?;

    Ok(StatusCode::OK)
}

/// GET /driver/listDriverDetails/:id - Files of a driver, oldest first
///
/// # Responses
///
/// * 200 OK - File records, empty for an unknown driver
/// * 400 Bad Request - Malformed id
/// * 403 Forbidden - Caller is not an admin
#[axum::debug_handler]
async fn list_driver_details(
    DriverAdmin(actor): DriverAdmin,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<DriverDetailDto>>, ApiError> {
    let driver_id = DriverId::try_from(id.as_str())?;

    let details = state.list_driver_details_use_case.execute(&actor, &driver_id).await?;

    Ok(Json(details.into_iter().map(DriverDetailDto::from).collect()))
}

/// POST /driver/deleteDriverFile - Delete one driver file
///
/// # Responses
///
/// * 200 OK - File deleted (empty body)
/// * 400 Bad Request - Malformed id
/// * 403 Forbidden - Caller is not an admin
/// * 404 Not Found - File record does not exist
#[axum::debug_handler]
async fn delete_driver_file(
    DriverAdmin(actor): DriverAdmin,
    State(state): State<AppState>,
    Json(dto): Json<IdDto>,
) -> Result<StatusCode, ApiError> {
    let file_id = DriverFileId::try_from(dto.id.as_str())?;

    state.delete_driver_file_use_case.execute(&actor, &file_id).await?;

    Ok(StatusCode::OK)
}

/// POST /driver/file/upload - Upload a JAR for a driver
///
/// Multipart fields: `id` (driver id) and `file` (the JAR).
///
/// # Responses
///
/// * 200 OK - File stored and inspected
/// * 400 Bad Request - Missing fields, not a jar, or unreadable archive
/// * 403 Forbidden - Caller is not an admin
/// * 404 Not Found - Driver does not exist
/// * 409 Conflict - The driver already has a file with that name
/// * 413 Payload Too Large - Body exceeds `drivers.max_upload_bytes`
#[axum::debug_handler]
async fn upload_driver_file(
    DriverAdmin(actor): DriverAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<DriverDetailDto>, ApiError> {
    let mut driver_id: Option<String> = None;
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("id") => driver_id = Some(field.text().await.map_err(multipart_error)?),
            Some("file") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content = field.bytes().await.map_err(multipart_error)?;
                file = Some(UploadedFile {
                    file_name,
                    content: content.to_vec(),
                });
            }
            _ => {}
        }
    }

    let driver_id = driver_id.ok_or_else(|| ApiError::BadRequest("Missing multipart field 'id'".to_string()))?;
    let file = file.ok_or_else(|| ApiError::BadRequest("Missing multipart field 'file'".to_string()))?;
    let driver_id = DriverId::try_from(driver_id.as_str())?;

    let detail = state
        .upload_driver_file_use_case
        .execute(&actor, &driver_id, file)
        .await?;

    Ok(Json(DriverDetailDto::from(detail)))
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return ApiError::PayloadTooLarge(err.body_text());
    }
    ApiError::BadRequest(err.body_text())
}
