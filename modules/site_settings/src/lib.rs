//! Site Settings Module
//!
//! Read-only lookup of site-wide settings and website configuration.
//! Every lookup resolves to the stored record, a not-found classification,
//! or an internal failure; callers never see raw store errors.

// Public exports
pub mod contract;
pub use contract::{
    client::SettingsApi, error::SettingsError, Namespace, Setting, StatusCategory,
};

pub mod config;
pub use config::Config;

pub mod module;
pub use module::{connect_database, SiteSettingsModule};

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
