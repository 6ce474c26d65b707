use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `print_products` table and its columns.
#[derive(DeriveIden)]
enum PrintProducts {
    Table,
    Id,
    Name,
    Price,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PrintProducts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PrintProducts::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PrintProducts::Name).string().not_null())
                    .col(ColumnDef::new(PrintProducts::Price).double().not_null())
                    .col(
                        ColumnDef::new(PrintProducts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PrintProducts::Table).to_owned())
            .await
    }
}
