///! Integration tests for the in-memory store backend.
///!
///! Every test drives a fresh `MemoryStore` through the `Store` trait, the
///! same surface the HTTP handlers use. No running server or database is
///! needed.
///!
///! Run with: `cargo test --test store_test`
use chrono::NaiveDate;

use studiodesk::models::bookings::{BookingForm, NewBooking};
use studiodesk::models::clients::ClientForm;
use studiodesk::models::print_orders::{OrderStatus, PrintOrderEditForm, PrintOrderForm};
use studiodesk::models::print_products::PrintProductForm;
use studiodesk::models::services::ServiceForm;
use studiodesk::store::memory::MemoryStore;
use studiodesk::store::{Store, StoreError};

/// Helper: a client form with a throwaway phone number.
fn client_form(name: &str, email: &str) -> ClientForm {
    ClientForm {
        name: name.to_string(),
        email: email.to_string(),
        phone: "082 000 0000".to_string(),
    }
}

/// Helper: parse a booking input the same way the handlers do.
fn booking_input(date: &str, time: &str, client_id: i64, service_id: i64) -> NewBooking {
    BookingForm {
        booking_date: date.to_string(),
        booking_time: time.to_string(),
        client_id,
        service_id,
    }
    .parse()
    .expect("Date and time should parse")
}

/// Helper: a store preloaded with one client and one service, returning
/// their ids.
async fn store_with_client_and_service() -> (MemoryStore, i64, i64) {
    let store = MemoryStore::new();
    let client = store
        .create_client(client_form("Rebafenyi Mudau", "rebafenyi@example.com"))
        .await
        .expect("Client should be created");
    let service = store
        .create_service(ServiceForm {
            name: "Family Portrait Session".to_string(),
            price: 1500.0,
        })
        .await
        .expect("Service should be created");
    (store, client.id, service.id)
}

#[tokio::test]
async fn test_ids_skip_over_deleted_records() {
    let store = MemoryStore::new();

    let first = store
        .create_client(client_form("First", "first@example.com"))
        .await
        .unwrap();
    let second = store
        .create_client(client_form("Second", "second@example.com"))
        .await
        .unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    // Deleting a lower id must not cause it to be handed out again while a
    // higher one exists.
    store.delete_client(first.id).await.unwrap();
    let third = store
        .create_client(client_form("Third", "third@example.com"))
        .await
        .unwrap();
    assert_eq!(third.id, 3);
}

#[tokio::test]
async fn test_created_client_appears_in_list_once() {
    let store = MemoryStore::new();

    let created = store
        .create_client(client_form("Israel Vhadau", "israel@example.com"))
        .await
        .unwrap();

    let clients = store.list_clients().await.unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].id, created.id);
    assert_eq!(clients[0].name, "Israel Vhadau");
    assert_eq!(clients[0].email, "israel@example.com");
    assert_eq!(clients[0].phone, "082 000 0000");
}

#[tokio::test]
async fn test_update_client_replaces_fields_and_keeps_id() {
    let store = MemoryStore::new();
    let created = store
        .create_client(client_form("Before", "before@example.com"))
        .await
        .unwrap();

    let updated = store
        .update_client(created.id, client_form("After", "after@example.com"))
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "After");
    assert_eq!(updated.email, "after@example.com");
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn test_delete_client_cascades_to_bookings_and_orders() {
    let (store, client_id, service_id) = store_with_client_and_service().await;
    let product = store
        .create_print_product(PrintProductForm {
            name: "Photo Album".to_string(),
            price: 1500.0,
        })
        .await
        .unwrap();

    let booking = store
        .create_booking(booking_input("2025-09-01", "09:30", client_id, service_id))
        .await
        .unwrap();
    let order = store
        .create_print_order(PrintOrderForm {
            client_id,
            product_id: product.id,
            quantity: 2,
        })
        .await
        .unwrap();

    store.delete_client(client_id).await.unwrap();

    assert!(matches!(
        store.get_client(client_id).await,
        Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(
        store.get_booking(booking.id).await,
        Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(
        store.get_print_order(order.id).await,
        Err(StoreError::NotFound { .. })
    ));

    // The catalogue side is untouched.
    assert!(store.get_service(service_id).await.is_ok());
    assert!(store.get_print_product(product.id).await.is_ok());
}

#[tokio::test]
async fn test_booking_with_unknown_refs_is_rejected() {
    let (store, client_id, service_id) = store_with_client_and_service().await;

    let bad_service = store
        .create_booking(booking_input("2025-09-01", "10:00", client_id, 999))
        .await;
    assert!(matches!(
        bad_service,
        Err(StoreError::NotFound {
            entity: "service",
            id: 999
        })
    ));

    let bad_client = store
        .create_booking(booking_input("2025-09-01", "10:00", 999, service_id))
        .await;
    assert!(matches!(
        bad_client,
        Err(StoreError::NotFound {
            entity: "client",
            id: 999
        })
    ));

    // Nothing was half-written.
    assert!(store.list_bookings().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_booking_replaces_fields_and_keeps_id() {
    let (store, client_id, service_id) = store_with_client_and_service().await;
    let created = store
        .create_booking(booking_input("2025-09-01", "09:30", client_id, service_id))
        .await
        .unwrap();

    let updated = store
        .update_booking(
            created.id,
            booking_input("2025-08-15", "10:00", client_id, service_id),
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.date, NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
    assert_eq!(updated.time.format("%H:%M").to_string(), "10:00");
    assert_eq!(updated.created_at, created.created_at);

    // Pointing the edit at a missing service leaves the booking as it was.
    let rejected = store
        .update_booking(
            created.id,
            booking_input("2025-08-20", "11:00", client_id, 999),
        )
        .await;
    assert!(matches!(rejected, Err(StoreError::NotFound { .. })));
    let current = store.get_booking(created.id).await.unwrap();
    assert_eq!(current.date, NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
}

#[tokio::test]
async fn test_print_order_lifecycle() {
    let (store, client_id, _service_id) = store_with_client_and_service().await;
    let product = store
        .create_print_product(PrintProductForm {
            name: "Canvas Print (16x20)".to_string(),
            price: 750.0,
        })
        .await
        .unwrap();

    let order = store
        .create_print_order(PrintOrderForm {
            client_id,
            product_id: product.id,
            quantity: 3,
        })
        .await
        .unwrap();
    assert_eq!(order.quantity, 3);
    assert_eq!(order.status, OrderStatus::Ordered);

    let updated = store
        .update_print_order(
            order.id,
            PrintOrderEditForm {
                client_id,
                product_id: product.id,
                quantity: 3,
                status: OrderStatus::Printed,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, order.id);
    assert_eq!(updated.status, OrderStatus::Printed);

    store.delete_print_order(order.id).await.unwrap();
    assert!(matches!(
        store.get_print_order(order.id).await,
        Err(StoreError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_referenced_service_cannot_be_deleted() {
    let (store, client_id, service_id) = store_with_client_and_service().await;
    let booking = store
        .create_booking(booking_input("2025-09-01", "09:30", client_id, service_id))
        .await
        .unwrap();

    let blocked = store.delete_service(service_id).await;
    assert!(matches!(
        blocked,
        Err(StoreError::InUse {
            entity: "service",
            count: 1,
            ..
        })
    ));
    assert!(store.get_service(service_id).await.is_ok());

    // Once the dependent booking is gone the delete goes through.
    store.delete_booking(booking.id).await.unwrap();
    store.delete_service(service_id).await.unwrap();
    assert!(matches!(
        store.get_service(service_id).await,
        Err(StoreError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_referenced_print_product_cannot_be_deleted() {
    let (store, client_id, _service_id) = store_with_client_and_service().await;
    let product = store
        .create_print_product(PrintProductForm {
            name: "Photo Album".to_string(),
            price: 1500.0,
        })
        .await
        .unwrap();
    let order = store
        .create_print_order(PrintOrderForm {
            client_id,
            product_id: product.id,
            quantity: 1,
        })
        .await
        .unwrap();

    assert!(matches!(
        store.delete_print_product(product.id).await,
        Err(StoreError::InUse {
            entity: "print product",
            ..
        })
    ));

    store.delete_print_order(order.id).await.unwrap();
    store.delete_print_product(product.id).await.unwrap();
}

#[tokio::test]
async fn test_upcoming_bookings_filters_and_caps() {
    let (store, client_id, service_id) = store_with_client_and_service().await;
    let today = NaiveDate::from_ymd_opt(2025, 8, 12).unwrap();

    // One past booking plus six on or after today, inserted out of order.
    for (date, time) in [
        ("2025-08-10", "09:00"),
        ("2025-09-03", "14:00"),
        ("2025-08-12", "16:00"),
        ("2025-08-12", "08:00"),
        ("2025-08-20", "10:00"),
        ("2025-09-01", "11:00"),
        ("2025-08-15", "10:00"),
    ] {
        store
            .create_booking(booking_input(date, time, client_id, service_id))
            .await
            .unwrap();
    }

    let upcoming = store.upcoming_bookings(today, 5).await.unwrap();
    assert_eq!(upcoming.len(), 5);
    // Soonest first, the same-day pair ordered by time.
    let order: Vec<_> = upcoming
        .iter()
        .map(|b| (b.date.to_string(), b.time.format("%H:%M").to_string()))
        .collect();
    assert_eq!(
        order,
        [
            ("2025-08-12".to_string(), "08:00".to_string()),
            ("2025-08-12".to_string(), "16:00".to_string()),
            ("2025-08-15".to_string(), "10:00".to_string()),
            ("2025-08-20".to_string(), "10:00".to_string()),
            ("2025-09-01".to_string(), "11:00".to_string()),
        ]
    );
    assert!(upcoming.iter().all(|b| b.date >= today));
}

#[tokio::test]
async fn test_recent_clients_newest_first() {
    let store = MemoryStore::new();
    for n in 1..=3 {
        store
            .create_client(client_form(&format!("Client {n}"), &format!("c{n}@example.com")))
            .await
            .unwrap();
    }

    let recent = store.recent_clients(2).await.unwrap();
    let ids: Vec<_> = recent.iter().map(|c| c.id).collect();
    assert_eq!(ids, [3, 2]);
}

#[tokio::test]
async fn test_client_history_is_newest_first() {
    let (store, client_id, service_id) = store_with_client_and_service().await;
    for (date, time) in [
        ("2025-08-01", "10:00"),
        ("2025-08-20", "09:00"),
        ("2025-08-10", "12:00"),
    ] {
        store
            .create_booking(booking_input(date, time, client_id, service_id))
            .await
            .unwrap();
    }

    let history = store.bookings_for_client(client_id).await.unwrap();
    let dates: Vec<_> = history.iter().map(|b| b.date.to_string()).collect();
    assert_eq!(dates, ["2025-08-20", "2025-08-10", "2025-08-01"]);
}

#[tokio::test]
async fn test_missing_ids_return_not_found() {
    let store = MemoryStore::new();

    assert!(matches!(
        store.get_client(42).await,
        Err(StoreError::NotFound {
            entity: "client",
            id: 42
        })
    ));
    assert!(matches!(
        store.update_service(
            42,
            ServiceForm {
                name: "Ghost".to_string(),
                price: 1.0
            }
        )
        .await,
        Err(StoreError::NotFound { .. })
    ));
    assert!(matches!(
        store.delete_booking(42).await,
        Err(StoreError::NotFound {
            entity: "booking",
            id: 42
        })
    ));
    assert!(matches!(
        store.delete_print_order(42).await,
        Err(StoreError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_seed_demo_data_loads_catalogue() {
    let store = MemoryStore::new();
    store.seed_demo_data().await;

    assert_eq!(store.list_clients().await.unwrap().len(), 2);
    assert_eq!(store.list_services().await.unwrap().len(), 3);
    assert_eq!(store.list_print_products().await.unwrap().len(), 2);

    let bookings = store.list_bookings().await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(
        bookings[0].date,
        NaiveDate::from_ymd_opt(2025, 8, 15).unwrap()
    );
}
