//! Contract models for site settings
//!
//! These models are transport-agnostic and used for inter-module communication.
//! NO serde derives - these are pure domain models.

use chrono::{DateTime, Utc};

/// Logical grouping of setting keys.
///
/// Keys are unique within a namespace only; the same key may exist in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Site-wide settings (`/settings/{key}`)
    SiteSettings,
    /// Per-key website configuration (`/website-config`)
    WebsiteConfig,
}

impl Namespace {
    /// Stable name, also used as the backing table name
    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::SiteSettings => "site_settings",
            Namespace::WebsiteConfig => "website_config",
        }
    }
}

impl std::fmt::Display for Namespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named configuration value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    /// Namespace the record was read from
    pub namespace: Namespace,
    /// Identifier, unique within its namespace
    pub key: String,
    /// Opaque payload, passed through unmodified
    pub value: serde_json::Value,
    /// Last update timestamp as recorded by the store
    pub updated_at: DateTime<Utc>,
}
