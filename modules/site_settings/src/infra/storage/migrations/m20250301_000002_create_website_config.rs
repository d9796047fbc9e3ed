//! Creates the website configuration table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WebsiteConfig::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WebsiteConfig::Key)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WebsiteConfig::Value).json().not_null())
                    .col(
                        ColumnDef::new(WebsiteConfig::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WebsiteConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WebsiteConfig {
    Table,
    Key,
    Value,
    UpdatedAt,
}
