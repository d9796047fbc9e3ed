//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{site_setting, website_config};
use crate::contract::{Namespace, Setting};

impl From<site_setting::Model> for Setting {
    fn from(entity: site_setting::Model) -> Self {
        Self {
            namespace: Namespace::SiteSettings,
            key: entity.key,
            value: entity.value,
            updated_at: entity.updated_at,
        }
    }
}

impl From<website_config::Model> for Setting {
    fn from(entity: website_config::Model) -> Self {
        Self {
            namespace: Namespace::WebsiteConfig,
            key: entity.key,
            value: entity.value,
            updated_at: entity.updated_at,
        }
    }
}

// Seeding helpers; the service itself never writes.

impl From<&Setting> for site_setting::ActiveModel {
    fn from(model: &Setting) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            key: Set(model.key.clone()),
            value: Set(model.value.clone()),
            updated_at: Set(model.updated_at),
        }
    }
}

impl From<&Setting> for website_config::ActiveModel {
    fn from(model: &Setting) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            key: Set(model.key.clone()),
            value: Set(model.value.clone()),
            updated_at: Set(model.updated_at),
        }
    }
}
