//! Domain layer - lookup logic and the store interface it consumes

pub mod lookup;
pub mod repository;
pub mod service;

pub use lookup::Lookup;
pub use repository::{SettingsRepository, StoreError};
pub use service::{LookupOptions, Service};
