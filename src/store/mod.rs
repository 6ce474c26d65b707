pub mod memory;

use std::sync::Arc;

use actix_web::{HttpResponse, http::StatusCode};
use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::DbErr;
use thiserror::Error;

use crate::models::bookings::{self, NewBooking};
use crate::models::clients::{self, ClientForm};
use crate::models::print_orders::{self, PrintOrderEditForm, PrintOrderForm};
use crate::models::print_products::{self, PrintProductForm};
use crate::models::services::{self, ServiceForm};

/// Shared handle to whichever backend the server was configured with.
pub type SharedStore = Arc<dyn Store>;

/// Errors surfaced by either storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },
    #[error("{entity} {id} is still referenced by {count} {dependents}")]
    InUse {
        entity: &'static str,
        id: i64,
        count: u64,
        dependents: &'static str,
    },
    #[error("{0}")]
    Validation(String),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl actix_web::ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
            StoreError::InUse { .. } => StatusCode::CONFLICT,
            StoreError::Validation(_) => StatusCode::BAD_REQUEST,
            StoreError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            // Backend detail goes to the logs, not the page.
            StoreError::Database(e) => {
                tracing::error!("storage failure: {e}");
                "storage error".to_string()
            }
            other => other.to_string(),
        };
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(body)
    }
}

/// Uniform record-store contract implemented by both backends.
///
/// Reference checks live here, at the store boundary: creating or editing a
/// booking or print order against a client/service/product id that does not
/// resolve fails with `NotFound` and leaves the store unchanged. Deleting a
/// client cascades to its bookings and print orders; deleting a service or
/// print product that is still referenced fails with `InUse`.
#[async_trait]
pub trait Store: Send + Sync {
    // ── Clients ──
    async fn list_clients(&self) -> Result<Vec<clients::Model>, StoreError>;
    async fn get_client(&self, id: i64) -> Result<clients::Model, StoreError>;
    async fn create_client(&self, form: ClientForm) -> Result<clients::Model, StoreError>;
    async fn update_client(
        &self,
        id: i64,
        form: ClientForm,
    ) -> Result<clients::Model, StoreError>;
    async fn delete_client(&self, id: i64) -> Result<(), StoreError>;
    /// The `limit` most recently created clients, newest first.
    async fn recent_clients(&self, limit: u64) -> Result<Vec<clients::Model>, StoreError>;

    // ── Services ──
    async fn list_services(&self) -> Result<Vec<services::Model>, StoreError>;
    async fn get_service(&self, id: i64) -> Result<services::Model, StoreError>;
    async fn create_service(&self, form: ServiceForm) -> Result<services::Model, StoreError>;
    async fn update_service(
        &self,
        id: i64,
        form: ServiceForm,
    ) -> Result<services::Model, StoreError>;
    async fn delete_service(&self, id: i64) -> Result<(), StoreError>;

    // ── Bookings ──
    async fn list_bookings(&self) -> Result<Vec<bookings::Model>, StoreError>;
    async fn get_booking(&self, id: i64) -> Result<bookings::Model, StoreError>;
    async fn create_booking(&self, input: NewBooking) -> Result<bookings::Model, StoreError>;
    async fn update_booking(
        &self,
        id: i64,
        input: NewBooking,
    ) -> Result<bookings::Model, StoreError>;
    async fn delete_booking(&self, id: i64) -> Result<(), StoreError>;
    /// A client's booking history, newest date first.
    async fn bookings_for_client(
        &self,
        client_id: i64,
    ) -> Result<Vec<bookings::Model>, StoreError>;
    /// Bookings on or after `today`, soonest first, capped at `limit`.
    async fn upcoming_bookings(
        &self,
        today: NaiveDate,
        limit: u64,
    ) -> Result<Vec<bookings::Model>, StoreError>;

    // ── Print products ──
    async fn list_print_products(&self) -> Result<Vec<print_products::Model>, StoreError>;
    async fn get_print_product(&self, id: i64) -> Result<print_products::Model, StoreError>;
    async fn create_print_product(
        &self,
        form: PrintProductForm,
    ) -> Result<print_products::Model, StoreError>;
    async fn update_print_product(
        &self,
        id: i64,
        form: PrintProductForm,
    ) -> Result<print_products::Model, StoreError>;
    async fn delete_print_product(&self, id: i64) -> Result<(), StoreError>;

    // ── Print orders ──
    async fn list_print_orders(&self) -> Result<Vec<print_orders::Model>, StoreError>;
    async fn get_print_order(&self, id: i64) -> Result<print_orders::Model, StoreError>;
    async fn create_print_order(
        &self,
        form: PrintOrderForm,
    ) -> Result<print_orders::Model, StoreError>;
    async fn update_print_order(
        &self,
        id: i64,
        form: PrintOrderEditForm,
    ) -> Result<print_orders::Model, StoreError>;
    async fn delete_print_order(&self, id: i64) -> Result<(), StoreError>;
    /// A client's print orders, newest first.
    async fn print_orders_for_client(
        &self,
        client_id: i64,
    ) -> Result<Vec<print_orders::Model>, StoreError>;
}
