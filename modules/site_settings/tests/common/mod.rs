//! Common test utilities and substitute settings stores
#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::RwLock;
use site_settings::domain::{LookupOptions, Service, SettingsRepository, StoreError};
use site_settings::{Namespace, Setting};
use std::collections::HashMap;
use std::sync::Arc;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

pub fn setting(namespace: Namespace, key: &str, value: serde_json::Value) -> Setting {
    Setting {
        namespace,
        key: key.to_string(),
        value,
        updated_at: chrono::Utc::now(),
    }
}

/// How the mock store reports a missing key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absence {
    /// `Ok(None)`
    EmptyResult,
    /// `Err(StoreError::NotFound)`
    Sentinel,
}

/// In-memory store keyed by (namespace, key)
#[derive(Clone)]
pub struct MockSettingsRepo {
    data: Arc<RwLock<HashMap<(Namespace, String), Setting>>>,
    absence: Absence,
}

impl MockSettingsRepo {
    pub fn new() -> Self {
        Self::with_absence(Absence::EmptyResult)
    }

    pub fn with_absence(absence: Absence) -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
            absence,
        }
    }

    pub fn insert(&self, namespace: Namespace, key: &str, value: serde_json::Value) -> Setting {
        let record = setting(namespace, key, value);
        self.data
            .write()
            .insert((namespace, key.to_string()), record.clone());
        record
    }

    pub fn count(&self) -> usize {
        self.data.read().len()
    }
}

impl Default for MockSettingsRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsRepository for MockSettingsRepo {
    async fn find_by_key(
        &self,
        namespace: Namespace,
        key: &str,
    ) -> Result<Option<Setting>, StoreError> {
        match self.data.read().get(&(namespace, key.to_string())) {
            Some(found) => Ok(Some(found.clone())),
            None => match self.absence {
                Absence::EmptyResult => Ok(None),
                Absence::Sentinel => Err(StoreError::NotFound),
            },
        }
    }

    async fn list_all(&self, namespace: Namespace) -> Result<Vec<Setting>, StoreError> {
        let mut results: Vec<Setting> = self
            .data
            .read()
            .values()
            .filter(|s| s.namespace == namespace)
            .cloned()
            .collect();
        results.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(results)
    }
}

/// Store that fails every call with a freshly built error
pub struct FailingRepo {
    make_error: Box<dyn Fn() -> StoreError + Send + Sync>,
}

impl FailingRepo {
    pub fn new(make_error: impl Fn() -> StoreError + Send + Sync + 'static) -> Self {
        Self {
            make_error: Box::new(make_error),
        }
    }

    pub fn connection_refused() -> Self {
        Self::new(|| StoreError::Unavailable("connection refused".to_string()))
    }
}

#[async_trait]
impl SettingsRepository for FailingRepo {
    async fn find_by_key(
        &self,
        _namespace: Namespace,
        _key: &str,
    ) -> Result<Option<Setting>, StoreError> {
        Err((self.make_error)())
    }

    async fn list_all(&self, _namespace: Namespace) -> Result<Vec<Setting>, StoreError> {
        Err((self.make_error)())
    }
}

pub fn create_test_service(repo: Arc<dyn SettingsRepository>) -> Service {
    Service::new(repo, LookupOptions::default())
}

pub fn create_symmetric_service(repo: Arc<dyn SettingsRepository>) -> Service {
    Service::new(
        repo,
        LookupOptions {
            website_config_not_found: true,
        },
    )
}
