pub mod bookings;
pub mod clients;
pub mod print_orders;
pub mod print_products;
pub mod services;

mod store;

pub use store::DatabaseStore;

use sea_orm::{Database, DatabaseConnection};

/// Create a SeaORM connection pool for the configured Postgres database.
pub async fn create_pool(database_url: &str) -> DatabaseConnection {
    Database::connect(database_url)
        .await
        .expect("Failed to connect to database")
}
