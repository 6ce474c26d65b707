use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use studiodesk::config::{Config, StoreBackend};
use studiodesk::create_pool;
use studiodesk::db::DatabaseStore;
use studiodesk::handlers;
use studiodesk::store::SharedStore;
use studiodesk::store::memory::MemoryStore;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = Config::from_env();

    let store: SharedStore = match config.backend {
        StoreBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .expect("DATABASE_URL must be set when STORE_BACKEND=postgres");
            let db = create_pool(database_url).await;
            Migrator::up(&db, None)
                .await
                .expect("Failed to run migrations");
            tracing::info!("Connected to Postgres");
            Arc::new(DatabaseStore::new(db))
        }
        StoreBackend::Memory => {
            let store = MemoryStore::new();
            if config.seed_demo_data {
                store.seed_demo_data().await;
            }
            tracing::info!("Using in-memory store");
            Arc::new(store)
        }
    };
    let store_data = web::Data::new(store);

    let bind_addr = config.bind_addr();
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(store_data.clone())
            .configure(handlers::init_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await
}
