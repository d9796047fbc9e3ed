//! SeaORM entities for database tables
//!
//! Both namespaces share one row shape but live in separate tables, so each
//! gets its own entity.

/// Site settings table entity
pub mod site_setting {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "site_settings")]
    pub struct Model {
        /// Setting key (primary key)
        #[sea_orm(primary_key, auto_increment = false)]
        pub key: String,

        /// Setting value as JSON
        pub value: Json,

        /// Last update timestamp
        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Website configuration table entity
pub mod website_config {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "website_config")]
    pub struct Model {
        /// Config key (primary key)
        #[sea_orm(primary_key, auto_increment = false)]
        pub key: String,

        /// Config value as JSON
        pub value: Json,

        pub updated_at: DateTimeUtc,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}
