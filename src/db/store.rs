use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::db;
use crate::models::bookings::{self, NewBooking};
use crate::models::clients::{self, ClientForm};
use crate::models::print_orders::{self, PrintOrderEditForm, PrintOrderForm};
use crate::models::print_products::{self, PrintProductForm};
use crate::models::services::{self, ServiceForm};
use crate::store::{Store, StoreError};

/// Postgres-backed store. Ids come from the tables' BIGSERIAL columns and
/// client cascades run inside the database via the foreign-key actions.
pub struct DatabaseStore {
    db: DatabaseConnection,
}

impl DatabaseStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn require_client(&self, id: i64) -> Result<(), StoreError> {
        match db::clients::get_client_by_id(&self.db, id).await? {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                entity: "client",
                id,
            }),
        }
    }

    async fn require_service(&self, id: i64) -> Result<(), StoreError> {
        match db::services::get_service_by_id(&self.db, id).await? {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                entity: "service",
                id,
            }),
        }
    }

    async fn require_print_product(&self, id: i64) -> Result<(), StoreError> {
        match db::print_products::get_print_product_by_id(&self.db, id).await? {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                entity: "print product",
                id,
            }),
        }
    }
}

#[async_trait]
impl Store for DatabaseStore {
    // ── Clients ──

    async fn list_clients(&self) -> Result<Vec<clients::Model>, StoreError> {
        Ok(db::clients::get_all_clients(&self.db).await?)
    }

    async fn get_client(&self, id: i64) -> Result<clients::Model, StoreError> {
        db::clients::get_client_by_id(&self.db, id)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "client",
                id,
            })
    }

    async fn create_client(&self, form: ClientForm) -> Result<clients::Model, StoreError> {
        Ok(db::clients::insert_client(&self.db, form).await?)
    }

    async fn update_client(
        &self,
        id: i64,
        form: ClientForm,
    ) -> Result<clients::Model, StoreError> {
        db::clients::update_client(&self.db, id, form)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "client",
                id,
            })
    }

    async fn delete_client(&self, id: i64) -> Result<(), StoreError> {
        let bookings = db::bookings::count_bookings_by_client_id(&self.db, id).await?;
        let orders = db::print_orders::count_print_orders_by_client_id(&self.db, id).await?;
        let result = db::clients::delete_client(&self.db, id).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound {
                entity: "client",
                id,
            });
        }
        tracing::info!(
            "client {id} deleted, cascade removed {bookings} bookings and {orders} print orders"
        );
        Ok(())
    }

    async fn recent_clients(&self, limit: u64) -> Result<Vec<clients::Model>, StoreError> {
        Ok(db::clients::get_recent_clients(&self.db, limit).await?)
    }

    // ── Services ──

    async fn list_services(&self) -> Result<Vec<services::Model>, StoreError> {
        Ok(db::services::get_all_services(&self.db).await?)
    }

    async fn get_service(&self, id: i64) -> Result<services::Model, StoreError> {
        db::services::get_service_by_id(&self.db, id)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "service",
                id,
            })
    }

    async fn create_service(&self, form: ServiceForm) -> Result<services::Model, StoreError> {
        Ok(db::services::insert_service(&self.db, form).await?)
    }

    async fn update_service(
        &self,
        id: i64,
        form: ServiceForm,
    ) -> Result<services::Model, StoreError> {
        db::services::update_service(&self.db, id, form)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "service",
                id,
            })
    }

    async fn delete_service(&self, id: i64) -> Result<(), StoreError> {
        let referencing = db::bookings::count_bookings_by_service_id(&self.db, id).await?;
        if referencing > 0 {
            return Err(StoreError::InUse {
                entity: "service",
                id,
                count: referencing,
                dependents: "bookings",
            });
        }
        let result = db::services::delete_service(&self.db, id).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound {
                entity: "service",
                id,
            });
        }
        Ok(())
    }

    // ── Bookings ──

    async fn list_bookings(&self) -> Result<Vec<bookings::Model>, StoreError> {
        Ok(db::bookings::get_all_bookings(&self.db).await?)
    }

    async fn get_booking(&self, id: i64) -> Result<bookings::Model, StoreError> {
        db::bookings::get_booking_by_id(&self.db, id)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "booking",
                id,
            })
    }

    async fn create_booking(&self, input: NewBooking) -> Result<bookings::Model, StoreError> {
        self.require_client(input.client_id).await?;
        self.require_service(input.service_id).await?;
        Ok(db::bookings::insert_booking(&self.db, input).await?)
    }

    async fn update_booking(
        &self,
        id: i64,
        input: NewBooking,
    ) -> Result<bookings::Model, StoreError> {
        self.get_booking(id).await?;
        self.require_client(input.client_id).await?;
        self.require_service(input.service_id).await?;
        db::bookings::update_booking(&self.db, id, input)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "booking",
                id,
            })
    }

    async fn delete_booking(&self, id: i64) -> Result<(), StoreError> {
        let result = db::bookings::delete_booking(&self.db, id).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound {
                entity: "booking",
                id,
            });
        }
        Ok(())
    }

    async fn bookings_for_client(
        &self,
        client_id: i64,
    ) -> Result<Vec<bookings::Model>, StoreError> {
        Ok(db::bookings::get_bookings_by_client_id(&self.db, client_id).await?)
    }

    async fn upcoming_bookings(
        &self,
        today: NaiveDate,
        limit: u64,
    ) -> Result<Vec<bookings::Model>, StoreError> {
        Ok(db::bookings::get_upcoming_bookings(&self.db, today, limit).await?)
    }

    // ── Print products ──

    async fn list_print_products(&self) -> Result<Vec<print_products::Model>, StoreError> {
        Ok(db::print_products::get_all_print_products(&self.db).await?)
    }

    async fn get_print_product(&self, id: i64) -> Result<print_products::Model, StoreError> {
        db::print_products::get_print_product_by_id(&self.db, id)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "print product",
                id,
            })
    }

    async fn create_print_product(
        &self,
        form: PrintProductForm,
    ) -> Result<print_products::Model, StoreError> {
        Ok(db::print_products::insert_print_product(&self.db, form).await?)
    }

    async fn update_print_product(
        &self,
        id: i64,
        form: PrintProductForm,
    ) -> Result<print_products::Model, StoreError> {
        db::print_products::update_print_product(&self.db, id, form)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "print product",
                id,
            })
    }

    async fn delete_print_product(&self, id: i64) -> Result<(), StoreError> {
        let referencing = db::print_orders::count_print_orders_by_product_id(&self.db, id).await?;
        if referencing > 0 {
            return Err(StoreError::InUse {
                entity: "print product",
                id,
                count: referencing,
                dependents: "print orders",
            });
        }
        let result = db::print_products::delete_print_product(&self.db, id).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound {
                entity: "print product",
                id,
            });
        }
        Ok(())
    }

    // ── Print orders ──

    async fn list_print_orders(&self) -> Result<Vec<print_orders::Model>, StoreError> {
        Ok(db::print_orders::get_all_print_orders(&self.db).await?)
    }

    async fn get_print_order(&self, id: i64) -> Result<print_orders::Model, StoreError> {
        db::print_orders::get_print_order_by_id(&self.db, id)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "print order",
                id,
            })
    }

    async fn create_print_order(
        &self,
        form: PrintOrderForm,
    ) -> Result<print_orders::Model, StoreError> {
        self.require_client(form.client_id).await?;
        self.require_print_product(form.product_id).await?;
        Ok(db::print_orders::insert_print_order(&self.db, form).await?)
    }

    async fn update_print_order(
        &self,
        id: i64,
        form: PrintOrderEditForm,
    ) -> Result<print_orders::Model, StoreError> {
        self.get_print_order(id).await?;
        self.require_client(form.client_id).await?;
        self.require_print_product(form.product_id).await?;
        db::print_orders::update_print_order(&self.db, id, form)
            .await?
            .ok_or(StoreError::NotFound {
                entity: "print order",
                id,
            })
    }

    async fn delete_print_order(&self, id: i64) -> Result<(), StoreError> {
        let result = db::print_orders::delete_print_order(&self.db, id).await?;
        if result.rows_affected == 0 {
            return Err(StoreError::NotFound {
                entity: "print order",
                id,
            });
        }
        Ok(())
    }

    async fn print_orders_for_client(
        &self,
        client_id: i64,
    ) -> Result<Vec<print_orders::Model>, StoreError> {
        Ok(db::print_orders::get_print_orders_by_client_id(&self.db, client_id).await?)
    }
}
