//! SeaORM repository implementation

use crate::contract::{Namespace, Setting};
use crate::domain::repository::{SettingsRepository, StoreError};
use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use super::entity::{site_setting, website_config};

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::RecordNotFound(_) => StoreError::NotFound,
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => StoreError::Unavailable(err.to_string()),
            DbErr::Json(_) | DbErr::Type(_) | DbErr::TryIntoErr { .. } => {
                StoreError::Malformed(err.to_string())
            }
            other => StoreError::backend(other),
        }
    }
}

pub struct SeaOrmSettingsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmSettingsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsRepository for SeaOrmSettingsRepository {
    async fn find_by_key(
        &self,
        namespace: Namespace,
        key: &str,
    ) -> Result<Option<Setting>, StoreError> {
        let result = match namespace {
            Namespace::SiteSettings => site_setting::Entity::find_by_id(key)
                .one(&*self.db)
                .await?
                .map(Setting::from),
            Namespace::WebsiteConfig => website_config::Entity::find_by_id(key)
                .one(&*self.db)
                .await?
                .map(Setting::from),
        };

        Ok(result)
    }

    async fn list_all(&self, namespace: Namespace) -> Result<Vec<Setting>, StoreError> {
        let results = match namespace {
            Namespace::SiteSettings => site_setting::Entity::find()
                .order_by_asc(site_setting::Column::Key)
                .all(&*self.db)
                .await?
                .into_iter()
                .map(Setting::from)
                .collect(),
            Namespace::WebsiteConfig => website_config::Entity::find()
                .order_by_asc(website_config::Column::Key)
                .all(&*self.db)
                .await?
                .into_iter()
                .map(Setting::from)
                .collect(),
        };

        Ok(results)
    }
}
