//! Native client implementation - wraps domain service for in-process calls

use crate::contract::{Setting, SettingsApi, SettingsError};
use crate::domain::Service;
use async_trait::async_trait;
use std::sync::Arc;

/// Native client implementation that directly calls the domain service
///
/// This client is used for in-process communication without HTTP overhead.
#[derive(Clone)]
pub struct NativeClient {
    service: Arc<Service>,
}

impl NativeClient {
    /// Create a new native client
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SettingsApi for NativeClient {
    async fn get_site_setting(&self, key: &str) -> Result<Setting, SettingsError> {
        self.service.get_site_setting(key).await
    }

    async fn get_all_website_config(&self) -> Result<Vec<Setting>, SettingsError> {
        self.service.get_all_website_config().await
    }

    async fn get_website_config(&self, key: &str) -> Result<Setting, SettingsError> {
        self.service.get_website_config(key).await
    }
}
