pub use sea_orm_migration::prelude::*;

mod m20250812_000001_create_clients_table;
mod m20250812_000002_create_services_table;
mod m20250812_000003_create_bookings_table;
mod m20250813_000001_create_print_products_table;
mod m20250813_000002_create_print_orders_table;
mod m20250814_000001_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250812_000001_create_clients_table::Migration),
            Box::new(m20250812_000002_create_services_table::Migration),
            Box::new(m20250812_000003_create_bookings_table::Migration),
            Box::new(m20250813_000001_create_print_products_table::Migration),
            Box::new(m20250813_000002_create_print_orders_table::Migration),
            Box::new(m20250814_000001_add_indexes::Migration),
        ]
    }
}
