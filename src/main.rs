//! Driver Registry API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use driver_registry::application::use_cases::drivers::{
    CreateDriverUseCase, DeleteDriverFileUseCase, DeleteDriverUseCase, ListDriverDetailsUseCase,
    ListDriversByTypeUseCase, ListDriversUseCase, UpdateDriverUseCase, UploadDriverFileUseCase,
};
use driver_registry::domain::gateways::{
    AuditLog, DataSourceTypeCatalog, DriverDetailRepository, DriverFileStore, DriverRepository, JarInspector,
};
use driver_registry::domain::models::DataSourceType;
use driver_registry::infrastructure::driven_adapters::config::AppConfig;
use driver_registry::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use driver_registry::infrastructure::driven_adapters::{
    ConfiguredDataSourceTypes, LocalDriverFileStore, PostgresAuditLog, PostgresDriverDetailRepository,
    PostgresDriverRepository, ZipJarInspector,
};
use driver_registry::infrastructure::driving_adapters::api_rest::{build_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!(
        storage_dir = %config.drivers.storage_dir.display(),
        datasource_types = config.datasource_types.len(),
        "Configuration loaded successfully"
    );

    // Create database connection pool
    let pool = create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create driven adapters
    let driver_repository: Arc<dyn DriverRepository> = Arc::new(PostgresDriverRepository::new(pool.clone()));
    let detail_repository: Arc<dyn DriverDetailRepository> =
        Arc::new(PostgresDriverDetailRepository::new(pool.clone()));
    let audit_log: Arc<dyn AuditLog> = Arc::new(PostgresAuditLog::new(pool));
    let file_store: Arc<dyn DriverFileStore> = Arc::new(LocalDriverFileStore::new(config.drivers.storage_dir.clone()));
    let jar_inspector: Arc<dyn JarInspector> = Arc::new(ZipJarInspector::new());
    let type_catalog: Arc<dyn DataSourceTypeCatalog> = Arc::new(ConfiguredDataSourceTypes::new(
        config.datasource_types.iter().cloned().map(DataSourceType::from).collect(),
    ));

    // Create application state
    let app_state = AppState {
        config: Arc::new(config.clone()),
        list_drivers_use_case: Arc::new(ListDriversUseCase::new(driver_repository.clone(), type_catalog.clone())),
        list_drivers_by_type_use_case: Arc::new(ListDriversByTypeUseCase::new(
            driver_repository.clone(),
            type_catalog,
        )),
        create_driver_use_case: Arc::new(CreateDriverUseCase::new(driver_repository.clone(), audit_log.clone())),
        update_driver_use_case: Arc::new(UpdateDriverUseCase::new(driver_repository.clone(), audit_log.clone())),
        delete_driver_use_case: Arc::new(DeleteDriverUseCase::new(
            driver_repository.clone(),
            file_store.clone(),
            audit_log,
        )),
        list_driver_details_use_case: Arc::new(ListDriverDetailsUseCase::new(detail_repository.clone())),
        delete_driver_file_use_case: Arc::new(DeleteDriverFileUseCase::new(
            detail_repository.clone(),
            file_store.clone(),
        )),
        upload_driver_file_use_case: Arc::new(UploadDriverFileUseCase::new(
            driver_repository,
            detail_repository,
            file_store,
            jar_inspector,
        )),
    };

    let app = build_router(app_state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Plain text logs by default, JSON lines when `LOG_FORMAT=json`
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "driver_registry=debug,tower_http=debug".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
