use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Bookings {
    Table,
    Date,
    ClientId,
    ServiceId,
}

#[derive(DeriveIden)]
enum PrintOrders {
    Table,
    ClientId,
    ProductId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on bookings.client_id for fetching bookings by client
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_client_id")
                    .table(Bookings::Table)
                    .col(Bookings::ClientId)
                    .to_owned(),
            )
            .await?;

        // Index on bookings.service_id for the in-use check on service deletion
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_service_id")
                    .table(Bookings::Table)
                    .col(Bookings::ServiceId)
                    .to_owned(),
            )
            .await?;

        // Index on bookings.date for the dashboard's upcoming-bookings query
        manager
            .create_index(
                Index::create()
                    .name("idx_bookings_date")
                    .table(Bookings::Table)
                    .col(Bookings::Date)
                    .to_owned(),
            )
            .await?;

        // Index on print_orders.client_id for fetching orders by client
        manager
            .create_index(
                Index::create()
                    .name("idx_print_orders_client_id")
                    .table(PrintOrders::Table)
                    .col(PrintOrders::ClientId)
                    .to_owned(),
            )
            .await?;

        // Index on print_orders.product_id for the in-use check on product deletion
        manager
            .create_index(
                Index::create()
                    .name("idx_print_orders_product_id")
                    .table(PrintOrders::Table)
                    .col(PrintOrders::ProductId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_bookings_client_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_bookings_service_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_bookings_date").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_print_orders_client_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_print_orders_product_id").to_owned())
            .await?;

        Ok(())
    }
}
