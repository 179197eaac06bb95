use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "edcenter=info,tower_http=info";

/// Installs the global tracing subscriber.
///
/// Log levels come from `RUST_LOG` and fall back to `edcenter=info,tower_http=info`.
pub fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the CORS layer.
///
/// Restricts requests to `CORS_ORIGIN` when configured and allows any origin otherwise.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer to wrap the router in
/// - `Err(AppError::ConfigErr)` - `CORS_ORIGIN` is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let Some(origin) = &config.cors_origin else {
        return Ok(CorsLayer::permissive());
    };

    let origin = HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidEnvVar {
        name: "CORS_ORIGIN".to_string(),
        value: origin.clone(),
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}
