//! Repository trait for data access
//!
//! This trait defines the read interface the lookup service consumes.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{Namespace, Setting};
use async_trait::async_trait;

/// Failure reported by a settings store.
///
/// `NotFound` is the store's explicit "no matching record" sentinel. Stores may
/// report absence either this way or by returning `Ok(None)`; callers must treat
/// both the same.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("setting not found")]
    NotFound,

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("malformed record: {0}")]
    Malformed(String),

    #[error("store error")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Backend(Box::new(err))
    }
}

/// Read-only settings store
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Find a record by key within a namespace
    async fn find_by_key(
        &self,
        namespace: Namespace,
        key: &str,
    ) -> Result<Option<Setting>, StoreError>;

    /// List every record in a namespace, ordered by key
    async fn list_all(&self, namespace: Namespace) -> Result<Vec<Setting>, StoreError>;
}
