//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::drivers::{
    CreateDriverUseCase, DeleteDriverFileUseCase, DeleteDriverUseCase, ListDriverDetailsUseCase,
    ListDriversByTypeUseCase, ListDriversUseCase, UpdateDriverUseCase, UploadDriverFileUseCase,
};
use crate::infrastructure::driven_adapters::config::AppConfig;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub list_drivers_use_case: Arc<ListDriversUseCase>,
    pub list_drivers_by_type_use_case: Arc<ListDriversByTypeUseCase>,
    pub create_driver_use_case: Arc<CreateDriverUseCase>,
    pub update_driver_use_case: Arc<UpdateDriverUseCase>,
    pub delete_driver_use_case: Arc<DeleteDriverUseCase>,
    pub list_driver_details_use_case: Arc<ListDriverDetailsUseCase>,
    pub delete_driver_file_use_case: Arc<DeleteDriverFileUseCase>,
    pub upload_driver_file_use_case: Arc<UploadDriverFileUseCase>,
}

/// Build the application router
///
/// Layers, outermost first: CORS, request context (request id and locale),
/// HTTP tracing, config injection for the JWT extractors.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/driver", handlers::drivers::router(&state.config.drivers))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::add_config_extension,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(middleware::request_context_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
