//! Store outcome classification
//!
//! A store answers a keyed query in one of three ways. `Lookup` folds the
//! `Result<Option<_>, StoreError>` shape into that tagged form so the service
//! classifies each outcome exactly once.

use super::repository::StoreError;
use crate::contract::{Namespace, SettingsError};

/// Outcome of a keyed store query
#[derive(Debug)]
pub enum Lookup<T> {
    Found(T),
    NotFound,
    Failed(StoreError),
}

impl<T> From<Result<Option<T>, StoreError>> for Lookup<T> {
    fn from(result: Result<Option<T>, StoreError>) -> Self {
        match result {
            Ok(Some(value)) => Lookup::Found(value),
            Ok(None) | Err(StoreError::NotFound) => Lookup::NotFound,
            Err(err) => Lookup::Failed(err),
        }
    }
}

/// Build a `NotFound` error for a key
pub fn not_found(namespace: Namespace, key: &str) -> SettingsError {
    SettingsError::NotFound {
        namespace,
        key: key.to_string(),
    }
}

/// Build an `Internal` error that keeps the full cause chain (`outer: inner: ...`)
pub fn internal(err: StoreError) -> SettingsError {
    SettingsError::Internal {
        cause: format!("{:#}", anyhow::Error::from(err)),
    }
}
