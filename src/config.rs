use std::env;

/// Which record-store backend to run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Postgres,
}

/// Runtime configuration, read once at startup from the environment
/// (after `dotenv` has loaded any `.env` file).
#[derive(Debug, Clone)]
pub struct Config {
    pub backend: StoreBackend,
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let backend = match env::var("STORE_BACKEND").as_deref() {
            Ok("postgres") => StoreBackend::Postgres,
            Ok("memory") | Err(_) => StoreBackend::Memory,
            Ok(other) => {
                panic!("Unknown STORE_BACKEND `{other}` (expected `memory` or `postgres`)")
            }
        };

        let database_url = match backend {
            StoreBackend::Postgres => Some(
                env::var("DATABASE_URL")
                    .expect("DATABASE_URL must be set when STORE_BACKEND=postgres"),
            ),
            StoreBackend::Memory => env::var("DATABASE_URL").ok(),
        };

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .expect("PORT must be a number");

        // Demo seeding only makes sense for the transient backend; Postgres
        // keeps whatever rows it already has.
        let seed_demo_data = matches!(env::var("SEED_DEMO_DATA").as_deref(), Ok("1") | Ok("true"));

        Self {
            backend,
            database_url,
            host,
            port,
            seed_demo_data,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
