use crate::server::{
    config::Config,
    error::AppError,
    service::{auth::token::TokenService, notification::ShipmentNotifier},
};

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
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for outgoing webhook calls.
///
/// Redirects are disabled so a webhook cannot bounce requests to other hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    Ok(client)
}

pub fn setup_token_service(config: &Config) -> TokenService {
    TokenService::new(config.jwt_secret.as_bytes(), config.token_ttl)
}

pub fn setup_shipment_notifier(config: &Config, http_client: reqwest::Client) -> ShipmentNotifier {
    if let Some(url) = &config.shipment_webhook_url {
        tracing::info!("Shipment notifications will be posted to {}", url);
    }

    ShipmentNotifier::new(http_client, config.shipment_webhook_url.clone())
}
