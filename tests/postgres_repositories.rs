//! Integration tests for the PostgreSQL adapters
//!
//! These tests spin up a real PostgreSQL database using testcontainers and
//! run migrations. They need Docker: `cargo test -- --ignored`.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;

use driver_registry::domain::gateways::{AuditLog, DriverDetailRepository, DriverRepository};
use driver_registry::domain::models::{
    Actor, AuditEntry, AuditOperation, CreateDriverData, Driver, DriverDetail, DriverFileName, JarMetadata,
    UpdateDriverData,
};
use driver_registry::infrastructure::driven_adapters::database::run_migrations;
use driver_registry::infrastructure::driven_adapters::{
    PostgresAuditLog, PostgresDriverDetailRepository, PostgresDriverRepository,
};
use driver_registry::shared::errors::RepositoryError;

struct TestDb {
    pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl TestDb {
    async fn new() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&format!("postgres://postgres:postgres@{host}:{port}/postgres"))
            .await
            .expect("Failed to connect to test database");

        run_migrations(&pool).await.expect("Failed to run migrations");

        Self {
            pool,
            _container: container,
        }
    }
}

fn new_driver(name: &str, ds_type: &str) -> Driver {
    Driver::new(
        CreateDriverData {
            name: name.to_string(),
            ds_type: ds_type.to_string(),
            driver_class: Some("com.example.jdbc.Driver".to_string()),
            supported_versions: Some("1.0".to_string()),
            description: None,
        },
        "admin",
    )
    .unwrap()
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_driver_repository_crud() {
    let db = TestDb::new().await;
    let repo = PostgresDriverRepository::new(db.pool.clone());

    let first = repo.create(&new_driver("MySQL", "mysql")).await.unwrap();
    let second = repo.create(&new_driver("Postgres", "pg")).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].id(), second.id());

    assert!(repo.exists_by_name("MySQL", None).await.unwrap());
    assert!(!repo.exists_by_name("MySQL", Some(*first.id())).await.unwrap());
    assert!(repo.exists_by_name("MySQL", Some(*second.id())).await.unwrap());

    let updated = first
        .clone()
        .with_updates(UpdateDriverData {
            name: "MySQL 8".to_string(),
            ds_type: "mysql".to_string(),
            driver_class: None,
            supported_versions: None,
            description: Some("updated".to_string()),
        })
        .unwrap();
    let stored = repo.update(&updated).await.unwrap().unwrap();
    assert_eq!(stored.name(), "MySQL 8");
    assert_eq!(stored.driver_class(), None);
    assert_eq!(stored.description(), Some("updated"));

    assert!(repo.delete(first.id()).await.unwrap());
    assert!(!repo.delete(first.id()).await.unwrap());
    assert!(repo.find_by_id(first.id()).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_driver_in_use_by_datasource() {
    let db = TestDb::new().await;
    let repo = PostgresDriverRepository::new(db.pool.clone());
    let driver = repo.create(&new_driver("MySQL", "mysql")).await.unwrap();

    assert!(!repo.is_in_use(driver.id()).await.unwrap());

    sqlx::query("INSERT INTO datasource (id, name, ds_type, configuration) VALUES ($1, $2, $3, $4)")
        .bind(uuid::Uuid::new_v4())
        .bind("sales")
        .bind("mysql")
        .bind(serde_json::json!({"customDriver": driver.id().to_string(), "host": "db"}))
        .execute(&db.pool)
        .await
        .unwrap();

    assert!(repo.is_in_use(driver.id()).await.unwrap());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_driver_detail_repository_roundtrip_and_cascade() {
    let db = TestDb::new().await;
    let drivers = PostgresDriverRepository::new(db.pool.clone());
    let details = PostgresDriverDetailRepository::new(db.pool.clone());
    let driver = drivers.create(&new_driver("MySQL", "mysql")).await.unwrap();

    let detail = DriverDetail::new(
        *driver.id(),
        DriverFileName::parse("mysql.jar").unwrap(),
        JarMetadata {
            version: Some("8.0.33".to_string()),
            driver_classes: vec!["com.mysql.cj.jdbc.Driver".to_string()],
        },
    );
    let stored = details.create(&detail).await.unwrap();
    assert_eq!(stored.driver_classes(), ["com.mysql.cj.jdbc.Driver".to_string()]);
    assert!(details.exists_by_file_name(driver.id(), "mysql.jar").await.unwrap());
    assert!(!details.exists_by_file_name(driver.id(), "other.jar").await.unwrap());

    let listed = details.find_by_driver_id(driver.id()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].version(), Some("8.0.33"));

    drivers.delete(driver.id()).await.unwrap();
    assert!(details.find_by_id(detail.id()).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_duplicate_writes_surface_as_unique_violations() {
    let db = TestDb::new().await;
    let drivers = PostgresDriverRepository::new(db.pool.clone());
    let details = PostgresDriverDetailRepository::new(db.pool.clone());
    let driver = drivers.create(&new_driver("MySQL", "mysql")).await.unwrap();

    let same_name = drivers.create(&new_driver("MySQL", "mariadb")).await;
    assert!(matches!(same_name, Err(RepositoryError::UniqueViolation(_))));

    let file = || DriverDetail::new(*driver.id(), DriverFileName::parse("mysql.jar").unwrap(), JarMetadata::default());
    details.create(&file()).await.unwrap();
    let same_file = details.create(&file()).await;
    assert!(matches!(same_file, Err(RepositoryError::UniqueViolation(_))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_audit_log_writes_sys_log() {
    let db = TestDb::new().await;
    let audit_log = PostgresAuditLog::new(db.pool.clone());
    let driver = new_driver("MySQL", "mysql");
    let actor = Actor::new("1", "admin", true);

    audit_log
        .record(&AuditEntry::for_driver(AuditOperation::Create, &driver, &actor))
        .await
        .unwrap();

    let (operate_type, source_name, position): (String, Option<String>, Option<String>) =
        sqlx::query_as("SELECT operate_type, source_name, position FROM sys_log WHERE source_id = $1")
            .bind(driver.id().to_string())
            .fetch_one(&db.pool)
            .await
            .unwrap();
    assert_eq!(operate_type, "create");
    assert_eq!(source_name.as_deref(), Some("MySQL"));
    assert_eq!(position.as_deref(), Some("mysql"));
}
