pub mod config;
pub mod db;
pub mod handlers;
pub mod models;
pub mod store;
pub mod views;

pub use db::create_pool;
