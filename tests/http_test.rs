///! Integration tests for the page flows.
///!
///! Each test wires the full route table over a fresh in-memory store with
///! `actix_web::test`, keeping a handle on the store so the effect of every
///! request can be checked directly.
///!
///! Run with: `cargo test --test http_test`
use std::sync::Arc;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use chrono::{Duration, NaiveTime, Utc};

use studiodesk::handlers;
use studiodesk::models::bookings::NewBooking;
use studiodesk::models::clients::ClientForm;
use studiodesk::models::print_orders::PrintOrderForm;
use studiodesk::models::services::ServiceForm;
use studiodesk::store::memory::MemoryStore;
use studiodesk::store::{SharedStore, Store};

/// Helper: a fresh store wrapped the way `main` wraps it.
fn fresh_store() -> SharedStore {
    Arc::new(MemoryStore::new())
}

/// Helper: seed one client and one service, returning their ids.
async fn seed_client_and_service(store: &SharedStore) -> (i64, i64) {
    let client = store
        .create_client(ClientForm {
            name: "Rebafenyi Mudau".to_string(),
            email: "rebafenyi@example.com".to_string(),
            phone: "082 722 2080".to_string(),
        })
        .await
        .expect("Client should be created");
    let service = store
        .create_service(ServiceForm {
            name: "Family Portrait Session".to_string(),
            price: 1500.0,
        })
        .await
        .expect("Service should be created");
    (client.id, service.id)
}

#[actix_web::test]
async fn test_add_client_redirects_and_persists() {
    let store = fresh_store();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(store.clone()))
            .configure(handlers::init_routes),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/clients/add")
        .set_form([
            ("name", "Thandi Nkosi"),
            ("email", "thandi@example.com"),
            ("phone", "071 555 0199"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/clients"
    );

    let clients = store.list_clients().await.unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].name, "Thandi Nkosi");

    // The new client shows up on the list page.
    let req = test::TestRequest::get().uri("/clients").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("Thandi Nkosi"));
}

#[actix_web::test]
async fn test_invalid_booking_date_is_rejected() {
    let store = fresh_store();
    let (client_id, service_id) = seed_client_and_service(&store).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(store.clone()))
            .configure(handlers::init_routes),
    )
    .await;

    let client_field = client_id.to_string();
    let service_field = service_id.to_string();
    let req = test::TestRequest::post()
        .uri("/bookings/add")
        .set_form([
            ("booking_date", "not-a-date"),
            ("booking_time", "10:00"),
            ("client_id", client_field.as_str()),
            ("service_id", service_field.as_str()),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = test::read_body(resp).await;
    assert_eq!(String::from_utf8_lossy(&body), "Invalid date/time format");
    assert!(store.list_bookings().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_booking_against_unknown_client_is_rejected() {
    let store = fresh_store();
    let (_client_id, service_id) = seed_client_and_service(&store).await;
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(store.clone()))
            .configure(handlers::init_routes),
    )
    .await;

    let service_field = service_id.to_string();
    let req = test::TestRequest::post()
        .uri("/bookings/add")
        .set_form([
            ("booking_date", "2025-09-01"),
            ("booking_time", "10:00"),
            ("client_id", "999"),
            ("service_id", service_field.as_str()),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(store.list_bookings().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_unknown_client_page_is_404() {
    let store = fresh_store();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(store.clone()))
            .configure(handlers::init_routes),
    )
    .await;

    let req = test::TestRequest::get().uri("/clients/999").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = test::read_body(resp).await;
    assert_eq!(String::from_utf8_lossy(&body), "client 999 not found");
}

#[actix_web::test]
async fn test_dashboard_caps_upcoming_and_hides_past() {
    let store = fresh_store();
    let (client_id, service_id) = seed_client_and_service(&store).await;
    let today = Utc::now().date_naive();

    // One booking yesterday and six in the coming days.
    for days in [-1, 1, 2, 3, 4, 5, 6] {
        store
            .create_booking(NewBooking {
                date: today + Duration::days(days),
                time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                client_id,
                service_id,
            })
            .await
            .unwrap();
    }

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(store.clone()))
            .configure(handlers::init_routes),
    )
    .await;
    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let page = String::from_utf8_lossy(&body);
    for days in 1..=5 {
        assert!(page.contains(&(today + Duration::days(days)).to_string()));
    }
    // Yesterday's booking and the sixth upcoming one fall outside the panel.
    assert!(!page.contains(&(today - Duration::days(1)).to_string()));
    assert!(!page.contains(&(today + Duration::days(6)).to_string()));
}

#[actix_web::test]
async fn test_edit_booking_roundtrip() {
    let store = fresh_store();
    let (client_id, service_id) = seed_client_and_service(&store).await;
    let booking = store
        .create_booking(NewBooking {
            date: Utc::now().date_naive(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            client_id,
            service_id,
        })
        .await
        .unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(store.clone()))
            .configure(handlers::init_routes),
    )
    .await;

    // The prefilled edit form renders.
    let req = test::TestRequest::get()
        .uri(&format!("/bookings/edit/{}", booking.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let client_field = client_id.to_string();
    let service_field = service_id.to_string();
    let req = test::TestRequest::post()
        .uri(&format!("/bookings/edit/{}", booking.id))
        .set_form([
            ("booking_date", "2025-08-15"),
            ("booking_time", "10:00"),
            ("client_id", client_field.as_str()),
            ("service_id", service_field.as_str()),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/bookings"
    );

    let current = store.get_booking(booking.id).await.unwrap();
    assert_eq!(current.date.to_string(), "2025-08-15");
    assert_eq!(current.time.format("%H:%M").to_string(), "10:00");
}

#[actix_web::test]
async fn test_delete_client_cascades_over_http() {
    let store = fresh_store();
    let (client_id, service_id) = seed_client_and_service(&store).await;
    store
        .create_booking(NewBooking {
            date: Utc::now().date_naive(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            client_id,
            service_id,
        })
        .await
        .unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(store.clone()))
            .configure(handlers::init_routes),
    )
    .await;
    let req = test::TestRequest::post()
        .uri(&format!("/clients/delete/{client_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert!(store.list_clients().await.unwrap().is_empty());
    assert!(store.list_bookings().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_referenced_service_delete_conflicts() {
    let store = fresh_store();
    let (client_id, service_id) = seed_client_and_service(&store).await;
    store
        .create_booking(NewBooking {
            date: Utc::now().date_naive(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            client_id,
            service_id,
        })
        .await
        .unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(store.clone()))
            .configure(handlers::init_routes),
    )
    .await;
    let req = test::TestRequest::post()
        .uri(&format!("/services/delete/{service_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = test::read_body(resp).await;
    assert_eq!(
        String::from_utf8_lossy(&body),
        format!("service {service_id} is still referenced by 1 bookings")
    );
    assert!(store.get_service(service_id).await.is_ok());
}

#[actix_web::test]
async fn test_seeded_pages_all_render() {
    let memory = MemoryStore::new();
    memory.seed_demo_data().await;
    let store: SharedStore = Arc::new(memory);
    let order = store
        .create_print_order(PrintOrderForm {
            client_id: 1,
            product_id: 1,
            quantity: 2,
        })
        .await
        .unwrap();

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(store.clone()))
            .configure(handlers::init_routes),
    )
    .await;

    let edit_order_uri = format!("/prints/edit/{}", order.id);
    for uri in [
        "/",
        "/invoicing",
        "/clients",
        "/clients/add",
        "/clients/1",
        "/clients/edit/1",
        "/bookings",
        "/bookings/add",
        "/bookings/edit/1",
        "/services",
        "/services/add",
        "/services/edit/1",
        "/products",
        "/products/add",
        "/products/edit/1",
        "/prints",
        "/prints/add",
        edit_order_uri.as_str(),
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "GET {uri} should render");
    }

    // The client details page joins names across tables.
    let req = test::TestRequest::get().uri("/clients/1").to_request();
    let resp = test::call_service(&app, req).await;
    let body = test::read_body(resp).await;
    let page = String::from_utf8_lossy(&body);
    assert!(page.contains("Rebafenyi Mudau"));
    assert!(page.contains("Family Portrait Session"));
    assert!(page.contains("Canvas Print (16x20)"));
}
