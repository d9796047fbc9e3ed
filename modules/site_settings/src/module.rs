//! Module declaration and lifecycle

use crate::api::rest::RestState;
use crate::config::{Config, DatabaseConfig};
use crate::contract::SettingsApi;
use crate::domain::{LookupOptions, Service, SettingsRepository};
use anyhow::Result;
use parking_lot::RwLock;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;

/// Site settings module
pub struct SiteSettingsModule {
    config: RwLock<Config>,
    service: RwLock<Option<Arc<Service>>>,
}

impl Default for SiteSettingsModule {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl SiteSettingsModule {
    pub fn new(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            service: RwLock::new(None),
        }
    }

    /// Build the domain service on top of a database connection
    pub fn init(&self, db: Arc<DatabaseConnection>) -> Result<()> {
        let settings_repo = Arc::new(
            crate::infra::storage::repositories::SeaOrmSettingsRepository::new(db),
        );
        self.init_with_repository(settings_repo)
    }

    /// Build the domain service on top of any settings store
    pub fn init_with_repository(&self, settings_repo: Arc<dyn SettingsRepository>) -> Result<()> {
        let options = LookupOptions::from(&*self.config.read());
        let service = Arc::new(Service::new(settings_repo, options));
        *self.service.write() = Some(service);

        tracing::info!(
            website_config_not_found = options.website_config_not_found,
            "Site settings service initialized"
        );
        Ok(())
    }

    /// Run database migrations
    pub async fn migrate(&self, db: &DatabaseConnection) -> Result<()> {
        use crate::infra::storage::migrations::Migrator;
        use sea_orm_migration::MigratorTrait;

        Migrator::up(db, None).await?;
        tracing::info!("Site settings migrations completed");
        Ok(())
    }

    /// In-process client for other modules
    pub fn client(&self) -> Result<Arc<dyn SettingsApi>> {
        let service = self.service()?;
        Ok(Arc::new(crate::api::native::NativeClient::new(service)))
    }

    /// Mount the REST routes onto a router
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        let state = RestState {
            service: self.service()?,
            expose_error_details: self.config.read().expose_error_details,
        };

        tracing::info!("Registering site settings REST routes");
        crate::api::rest::routes::register_routes(router, state)
    }

    fn service(&self) -> Result<Arc<Service>> {
        self.service
            .read()
            .as_ref()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Service not initialized"))
    }
}

/// Lifetime for the single pooled in-memory SQLite connection. The pool
/// API has no "never"; this outlives any realistic process.
const PINNED_CONNECTION_LIFETIME: Duration = Duration::from_secs(10 * 365 * 24 * 60 * 60);

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Open a pooled database connection
pub async fn connect_database(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .sqlx_logging(false);

    // Every connection to an in-memory SQLite database gets its own database,
    // so the pool must hold exactly one connection and never recycle it.
    if is_in_memory(&config.url) {
        options
            .min_connections(1)
            .max_connections(1)
            .max_lifetime(PINNED_CONNECTION_LIFETIME)
            .idle_timeout(PINNED_CONNECTION_LIFETIME);
    }

    let db = Database::connect(options).await?;
    tracing::info!(max_connections = config.max_connections, "Database connected");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_urls_are_detected() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite:file:settings?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://site_settings.db?mode=rwc"));
        assert!(!is_in_memory("postgres://localhost/shop"));
    }

    #[tokio::test]
    async fn test_in_memory_pool_keeps_migrated_schema() {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        };
        let db = connect_database(&config).await.expect("Failed to connect");
        SiteSettingsModule::default()
            .migrate(&db)
            .await
            .expect("Failed to migrate");

        let repo = crate::infra::storage::repositories::SeaOrmSettingsRepository::new(Arc::new(db));
        for _ in 0..3 {
            let all = repo
                .list_all(crate::contract::Namespace::SiteSettings)
                .await
                .expect("Migrated table should be reachable");
            assert!(all.is_empty());
        }
    }
}
