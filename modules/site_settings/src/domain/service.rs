//! Domain service - settings lookup and outcome classification

use super::lookup::{internal, not_found, Lookup};
use super::repository::SettingsRepository;
use crate::config::Config;
use crate::contract::{Namespace, Setting, SettingsError};
use std::sync::Arc;

/// Behavior switches for the lookup service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LookupOptions {
    /// Classify a missing website-config key as `NotFound` instead of `Internal`
    pub website_config_not_found: bool,
}

impl From<&Config> for LookupOptions {
    fn from(config: &Config) -> Self {
        Self {
            website_config_not_found: config.website_config_not_found,
        }
    }
}

/// Domain service for settings lookup
pub struct Service {
    settings_repo: Arc<dyn SettingsRepository>,
    options: LookupOptions,
}

impl Service {
    /// Create a new service instance
    pub fn new(settings_repo: Arc<dyn SettingsRepository>, options: LookupOptions) -> Self {
        Self {
            settings_repo,
            options,
        }
    }

    /// Get a site setting by key
    pub async fn get_site_setting(&self, key: &str) -> Result<Setting, SettingsError> {
        let namespace = Namespace::SiteSettings;
        tracing::debug!(%namespace, key, "looking up setting");

        match Lookup::from(self.settings_repo.find_by_key(namespace, key).await) {
            Lookup::Found(setting) => Ok(setting),
            Lookup::NotFound => {
                tracing::warn!(%namespace, key, "setting not found");
                Err(not_found(namespace, key))
            }
            Lookup::Failed(err) => {
                tracing::error!(%namespace, key, error = ?err, "failed to fetch setting");
                Err(internal(err))
            }
        }
    }

    /// Get every website configuration record
    ///
    /// An empty namespace is a success. Every store error, including the
    /// not-found sentinel, is an internal failure here.
    pub async fn get_all_website_config(&self) -> Result<Vec<Setting>, SettingsError> {
        let namespace = Namespace::WebsiteConfig;
        tracing::debug!(%namespace, "listing settings");

        self.settings_repo.list_all(namespace).await.map_err(|err| {
            tracing::error!(%namespace, error = ?err, "failed to list settings");
            internal(err)
        })
    }

    /// Get a website configuration record by key
    ///
    /// A missing key is an internal failure unless
    /// [`LookupOptions::website_config_not_found`] is set.
    pub async fn get_website_config(&self, key: &str) -> Result<Setting, SettingsError> {
        let namespace = Namespace::WebsiteConfig;
        tracing::debug!(%namespace, key, "looking up setting");

        match Lookup::from(self.settings_repo.find_by_key(namespace, key).await) {
            Lookup::Found(setting) => Ok(setting),
            Lookup::NotFound if self.options.website_config_not_found => {
                tracing::warn!(%namespace, key, "setting not found");
                Err(not_found(namespace, key))
            }
            Lookup::NotFound => {
                let err = not_found(namespace, key);
                tracing::error!(%namespace, key, "failed to fetch setting: {}", err);
                Err(SettingsError::Internal {
                    cause: err.to_string(),
                })
            }
            Lookup::Failed(err) => {
                tracing::error!(%namespace, key, error = ?err, "failed to fetch setting");
                Err(internal(err))
            }
        }
    }
}
