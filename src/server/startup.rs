use sea_orm::DatabaseConnection;

use crate::server::{catalog::Catalog, config::Config, error::AppError};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up to date before the first
/// request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Loads and validates the master data catalog.
///
/// # Returns
/// - `Ok(Catalog)` - Validated catalog ready to be shared
/// - `Err(AppError::CatalogErr)` - File unreadable or rows inconsistent
pub async fn load_catalog(config: &Config) -> Result<Catalog, AppError> {
    let catalog = Catalog::load(&config.catalog_path).await?;

    tracing::info!(
        path = %config.catalog_path,
        stages = catalog.stages().count(),
        "Master data catalog loaded"
    );

    Ok(catalog)
}
