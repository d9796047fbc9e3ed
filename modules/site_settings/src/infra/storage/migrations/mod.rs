//! Database migrations for site settings

use sea_orm_migration::prelude::*;

mod m20250301_000001_create_site_settings;
mod m20250301_000002_create_website_config;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_site_settings::Migration),
            Box::new(m20250301_000002_create_website_config::Migration),
        ]
    }
}
