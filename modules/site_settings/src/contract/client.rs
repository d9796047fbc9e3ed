//! Native client trait for inter-module communication
//!
//! This trait defines the API that other modules use to read settings.
//! NO HTTP - direct function calls for performance.

use super::{error::SettingsError, model::Setting};
use async_trait::async_trait;

/// Read-only settings API for inter-module communication
#[async_trait]
pub trait SettingsApi: Send + Sync {
    /// Get a site setting by key
    async fn get_site_setting(&self, key: &str) -> Result<Setting, SettingsError>;

    /// Get every website configuration record, ordered by key
    async fn get_all_website_config(&self) -> Result<Vec<Setting>, SettingsError>;

    /// Get a website configuration record by key
    async fn get_website_config(&self, key: &str) -> Result<Setting, SettingsError>;
}
