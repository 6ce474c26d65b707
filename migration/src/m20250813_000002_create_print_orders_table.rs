use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `print_orders` table and its columns.
#[derive(DeriveIden)]
enum PrintOrders {
    Table,
    Id,
    ClientId,
    ProductId,
    Quantity,
    Status,
    CreatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Clients {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum PrintProducts {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PrintOrders::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PrintOrders::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PrintOrders::ClientId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PrintOrders::ProductId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PrintOrders::Quantity).integer().not_null())
                    .col(ColumnDef::new(PrintOrders::Status).string().not_null())
                    .col(
                        ColumnDef::new(PrintOrders::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_print_orders_client_id")
                            .from(PrintOrders::Table, PrintOrders::ClientId)
                            .to(Clients::Table, Clients::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_print_orders_product_id")
                            .from(PrintOrders::Table, PrintOrders::ProductId)
                            .to(PrintProducts::Table, PrintProducts::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PrintOrders::Table).to_owned())
            .await
    }
}
