use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Utc};
use tokio::sync::RwLock;

use crate::models::bookings::{self, NewBooking};
use crate::models::clients::{self, ClientForm};
use crate::models::print_orders::{self, OrderStatus, PrintOrderEditForm, PrintOrderForm};
use crate::models::print_products::{self, PrintProductForm};
use crate::models::services::{self, ServiceForm};
use crate::store::{Store, StoreError};

/// Transient backend: every entity lives in a per-type map behind one lock,
/// so a cascade delete is a single atomic step. `BTreeMap` keeps `list`
/// output in id order without sorting on every read.
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    clients: BTreeMap<i64, clients::Model>,
    services: BTreeMap<i64, services::Model>,
    bookings: BTreeMap<i64, bookings::Model>,
    print_products: BTreeMap<i64, print_products::Model>,
    print_orders: BTreeMap<i64, print_orders::Model>,
}

/// Max existing id + 1, or 1 for an empty table.
fn next_id<V>(table: &BTreeMap<i64, V>) -> i64 {
    table.keys().next_back().map_or(1, |max| max + 1)
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Tables::default()),
        }
    }

    /// Preload the demo catalogue and sample records the studio used while
    /// the app only had transient storage.
    pub async fn seed_demo_data(&self) {
        let mut tables = self.inner.write().await;
        let now = Utc::now();

        for (id, name, price) in [
            (1, "Family Portrait Session", 1500.0),
            (2, "Wedding Photography Package", 10000.0),
            (3, "Professional Headshots", 1000.0),
        ] {
            tables.services.insert(
                id,
                services::Model {
                    id,
                    name: name.to_string(),
                    price,
                    created_at: now,
                },
            );
        }

        for (id, name, price) in [(1, "Canvas Print (16x20)", 750.0), (2, "Photo Album", 1500.0)] {
            tables.print_products.insert(
                id,
                print_products::Model {
                    id,
                    name: name.to_string(),
                    price,
                    created_at: now,
                },
            );
        }

        for (id, name, email, phone) in [
            (1, "Rebafenyi Mudau", "rebafenyiisrael@gmail.com", "082 722 2080"),
            (2, "Israel Vhadau", "Israel.vhadau@izra.pri.za", "076 892 1234"),
        ] {
            tables.clients.insert(
                id,
                clients::Model {
                    id,
                    name: name.to_string(),
                    email: email.to_string(),
                    phone: phone.to_string(),
                    created_at: now,
                },
            );
        }

        tables.bookings.insert(
            1,
            bookings::Model {
                id: 1,
                date: NaiveDate::from_ymd_opt(2025, 8, 15).expect("valid date"),
                time: NaiveTime::from_hms_opt(10, 0, 0).expect("valid time"),
                client_id: 1,
                service_id: 1,
                created_at: now,
            },
        );

        tracing::info!("seeded demo data: 2 clients, 3 services, 2 print products, 1 booking");
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Store for MemoryStore {
    // ── Clients ──

    async fn list_clients(&self) -> Result<Vec<clients::Model>, StoreError> {
        Ok(self.inner.read().await.clients.values().cloned().collect())
    }

    async fn get_client(&self, id: i64) -> Result<clients::Model, StoreError> {
        self.inner
            .read()
            .await
            .clients
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "client",
                id,
            })
    }

    async fn create_client(&self, form: ClientForm) -> Result<clients::Model, StoreError> {
        let mut tables = self.inner.write().await;
        let id = next_id(&tables.clients);
        let client = clients::Model {
            id,
            name: form.name,
            email: form.email,
            phone: form.phone,
            created_at: Utc::now(),
        };
        tables.clients.insert(id, client.clone());
        Ok(client)
    }

    async fn update_client(
        &self,
        id: i64,
        form: ClientForm,
    ) -> Result<clients::Model, StoreError> {
        let mut tables = self.inner.write().await;
        let client = tables.clients.get_mut(&id).ok_or(StoreError::NotFound {
            entity: "client",
            id,
        })?;
        client.name = form.name;
        client.email = form.email;
        client.phone = form.phone;
        Ok(client.clone())
    }

    async fn delete_client(&self, id: i64) -> Result<(), StoreError> {
        let mut tables = self.inner.write().await;
        if tables.clients.remove(&id).is_none() {
            return Err(StoreError::NotFound {
                entity: "client",
                id,
            });
        }
        let bookings_before = tables.bookings.len();
        tables.bookings.retain(|_, b| b.client_id != id);
        let orders_before = tables.print_orders.len();
        tables.print_orders.retain(|_, o| o.client_id != id);
        tracing::info!(
            "client {id} deleted, cascade removed {} bookings and {} print orders",
            bookings_before - tables.bookings.len(),
            orders_before - tables.print_orders.len(),
        );
        Ok(())
    }

    async fn recent_clients(&self, limit: u64) -> Result<Vec<clients::Model>, StoreError> {
        let tables = self.inner.read().await;
        let mut recent: Vec<_> = tables.clients.values().cloned().collect();
        recent.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        recent.truncate(limit as usize);
        Ok(recent)
    }

    // ── Services ──

    async fn list_services(&self) -> Result<Vec<services::Model>, StoreError> {
        Ok(self.inner.read().await.services.values().cloned().collect())
    }

    async fn get_service(&self, id: i64) -> Result<services::Model, StoreError> {
        self.inner
            .read()
            .await
            .services
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "service",
                id,
            })
    }

    async fn create_service(&self, form: ServiceForm) -> Result<services::Model, StoreError> {
        let mut tables = self.inner.write().await;
        let id = next_id(&tables.services);
        let service = services::Model {
            id,
            name: form.name,
            price: form.price,
            created_at: Utc::now(),
        };
        tables.services.insert(id, service.clone());
        Ok(service)
    }

    async fn update_service(
        &self,
        id: i64,
        form: ServiceForm,
    ) -> Result<services::Model, StoreError> {
        let mut tables = self.inner.write().await;
        let service = tables.services.get_mut(&id).ok_or(StoreError::NotFound {
            entity: "service",
            id,
        })?;
        service.name = form.name;
        service.price = form.price;
        Ok(service.clone())
    }

    async fn delete_service(&self, id: i64) -> Result<(), StoreError> {
        let mut tables = self.inner.write().await;
        if !tables.services.contains_key(&id) {
            return Err(StoreError::NotFound {
                entity: "service",
                id,
            });
        }
        let referencing = tables.bookings.values().filter(|b| b.service_id == id).count() as u64;
        if referencing > 0 {
            return Err(StoreError::InUse {
                entity: "service",
                id,
                count: referencing,
                dependents: "bookings",
            });
        }
        tables.services.remove(&id);
        Ok(())
    }

    // ── Bookings ──

    async fn list_bookings(&self) -> Result<Vec<bookings::Model>, StoreError> {
        Ok(self.inner.read().await.bookings.values().cloned().collect())
    }

    async fn get_booking(&self, id: i64) -> Result<bookings::Model, StoreError> {
        self.inner
            .read()
            .await
            .bookings
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "booking",
                id,
            })
    }

    async fn create_booking(&self, input: NewBooking) -> Result<bookings::Model, StoreError> {
        let mut tables = self.inner.write().await;
        if !tables.clients.contains_key(&input.client_id) {
            return Err(StoreError::NotFound {
                entity: "client",
                id: input.client_id,
            });
        }
        if !tables.services.contains_key(&input.service_id) {
            return Err(StoreError::NotFound {
                entity: "service",
                id: input.service_id,
            });
        }
        let id = next_id(&tables.bookings);
        let booking = bookings::Model {
            id,
            date: input.date,
            time: input.time,
            client_id: input.client_id,
            service_id: input.service_id,
            created_at: Utc::now(),
        };
        tables.bookings.insert(id, booking.clone());
        Ok(booking)
    }

    async fn update_booking(
        &self,
        id: i64,
        input: NewBooking,
    ) -> Result<bookings::Model, StoreError> {
        let mut tables = self.inner.write().await;
        if !tables.bookings.contains_key(&id) {
            return Err(StoreError::NotFound {
                entity: "booking",
                id,
            });
        }
        if !tables.clients.contains_key(&input.client_id) {
            return Err(StoreError::NotFound {
                entity: "client",
                id: input.client_id,
            });
        }
        if !tables.services.contains_key(&input.service_id) {
            return Err(StoreError::NotFound {
                entity: "service",
                id: input.service_id,
            });
        }
        let booking = tables.bookings.get_mut(&id).ok_or(StoreError::NotFound {
            entity: "booking",
            id,
        })?;
        booking.date = input.date;
        booking.time = input.time;
        booking.client_id = input.client_id;
        booking.service_id = input.service_id;
        Ok(booking.clone())
    }

    async fn delete_booking(&self, id: i64) -> Result<(), StoreError> {
        let mut tables = self.inner.write().await;
        match tables.bookings.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                entity: "booking",
                id,
            }),
        }
    }

    async fn bookings_for_client(
        &self,
        client_id: i64,
    ) -> Result<Vec<bookings::Model>, StoreError> {
        let tables = self.inner.read().await;
        let mut owned: Vec<_> = tables
            .bookings
            .values()
            .filter(|b| b.client_id == client_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| (b.date, b.time).cmp(&(a.date, a.time)));
        Ok(owned)
    }

    async fn upcoming_bookings(
        &self,
        today: NaiveDate,
        limit: u64,
    ) -> Result<Vec<bookings::Model>, StoreError> {
        let tables = self.inner.read().await;
        let mut upcoming: Vec<_> = tables
            .bookings
            .values()
            .filter(|b| b.date >= today)
            .cloned()
            .collect();
        upcoming.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));
        upcoming.truncate(limit as usize);
        Ok(upcoming)
    }

    // ── Print products ──

    async fn list_print_products(&self) -> Result<Vec<print_products::Model>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .print_products
            .values()
            .cloned()
            .collect())
    }

    async fn get_print_product(&self, id: i64) -> Result<print_products::Model, StoreError> {
        self.inner
            .read()
            .await
            .print_products
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "print product",
                id,
            })
    }

    async fn create_print_product(
        &self,
        form: PrintProductForm,
    ) -> Result<print_products::Model, StoreError> {
        let mut tables = self.inner.write().await;
        let id = next_id(&tables.print_products);
        let product = print_products::Model {
            id,
            name: form.name,
            price: form.price,
            created_at: Utc::now(),
        };
        tables.print_products.insert(id, product.clone());
        Ok(product)
    }

    async fn update_print_product(
        &self,
        id: i64,
        form: PrintProductForm,
    ) -> Result<print_products::Model, StoreError> {
        let mut tables = self.inner.write().await;
        let product = tables
            .print_products
            .get_mut(&id)
            .ok_or(StoreError::NotFound {
                entity: "print product",
                id,
            })?;
        product.name = form.name;
        product.price = form.price;
        Ok(product.clone())
    }

    async fn delete_print_product(&self, id: i64) -> Result<(), StoreError> {
        let mut tables = self.inner.write().await;
        if !tables.print_products.contains_key(&id) {
            return Err(StoreError::NotFound {
                entity: "print product",
                id,
            });
        }
        let referencing = tables
            .print_orders
            .values()
            .filter(|o| o.product_id == id)
            .count() as u64;
        if referencing > 0 {
            return Err(StoreError::InUse {
                entity: "print product",
                id,
                count: referencing,
                dependents: "print orders",
            });
        }
        tables.print_products.remove(&id);
        Ok(())
    }

    // ── Print orders ──

    async fn list_print_orders(&self) -> Result<Vec<print_orders::Model>, StoreError> {
        Ok(self
            .inner
            .read()
            .await
            .print_orders
            .values()
            .cloned()
            .collect())
    }

    async fn get_print_order(&self, id: i64) -> Result<print_orders::Model, StoreError> {
        self.inner
            .read()
            .await
            .print_orders
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound {
                entity: "print order",
                id,
            })
    }

    async fn create_print_order(
        &self,
        form: PrintOrderForm,
    ) -> Result<print_orders::Model, StoreError> {
        let mut tables = self.inner.write().await;
        if !tables.clients.contains_key(&form.client_id) {
            return Err(StoreError::NotFound {
                entity: "client",
                id: form.client_id,
            });
        }
        if !tables.print_products.contains_key(&form.product_id) {
            return Err(StoreError::NotFound {
                entity: "print product",
                id: form.product_id,
            });
        }
        let id = next_id(&tables.print_orders);
        let order = print_orders::Model {
            id,
            client_id: form.client_id,
            product_id: form.product_id,
            quantity: form.quantity,
            status: OrderStatus::Ordered,
            created_at: Utc::now(),
        };
        tables.print_orders.insert(id, order.clone());
        Ok(order)
    }

    async fn update_print_order(
        &self,
        id: i64,
        form: PrintOrderEditForm,
    ) -> Result<print_orders::Model, StoreError> {
        let mut tables = self.inner.write().await;
        if !tables.print_orders.contains_key(&id) {
            return Err(StoreError::NotFound {
                entity: "print order",
                id,
            });
        }
        if !tables.clients.contains_key(&form.client_id) {
            return Err(StoreError::NotFound {
                entity: "client",
                id: form.client_id,
            });
        }
        if !tables.print_products.contains_key(&form.product_id) {
            return Err(StoreError::NotFound {
                entity: "print product",
                id: form.product_id,
            });
        }
        let order = tables.print_orders.get_mut(&id).ok_or(StoreError::NotFound {
            entity: "print order",
            id,
        })?;
        order.client_id = form.client_id;
        order.product_id = form.product_id;
        order.quantity = form.quantity;
        order.status = form.status;
        Ok(order.clone())
    }

    async fn delete_print_order(&self, id: i64) -> Result<(), StoreError> {
        let mut tables = self.inner.write().await;
        match tables.print_orders.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound {
                entity: "print order",
                id,
            }),
        }
    }

    async fn print_orders_for_client(
        &self,
        client_id: i64,
    ) -> Result<Vec<print_orders::Model>, StoreError> {
        let tables = self.inner.read().await;
        let mut owned: Vec<_> = tables
            .print_orders
            .values()
            .filter(|o| o.client_id == client_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(owned)
    }
}
