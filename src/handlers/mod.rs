pub mod bookings;
pub mod clients;
pub mod dashboard;
pub mod print_orders;
pub mod print_products;
pub mod services;

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, web};

/// 200 response carrying a rendered page.
pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

/// 302 back to a list view, the page flows' answer to a successful mutation.
pub(crate) fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // ── Dashboard and read-only pages ──
    cfg.service(web::resource("/").route(web::get().to(dashboard::index)));
    cfg.service(web::resource("/invoicing").route(web::get().to(dashboard::invoicing)));

    // ── Client pages ──
    // Literal segments are registered before `/{id}` so `/clients/add`
    // never reaches the detail route.
    cfg.service(
        web::scope("/clients")
            .route("", web::get().to(clients::list_clients))
            .route("/add", web::get().to(clients::add_client_form))
            .route("/add", web::post().to(clients::add_client))
            .route("/edit/{id}", web::get().to(clients::edit_client_form))
            .route("/edit/{id}", web::post().to(clients::edit_client))
            .route("/delete/{id}", web::post().to(clients::delete_client))
            .route("/{id}", web::get().to(clients::client_details)),
    );

    // ── Booking pages ──
    cfg.service(
        web::scope("/bookings")
            .route("", web::get().to(bookings::list_bookings))
            .route("/add", web::get().to(bookings::add_booking_form))
            .route("/add", web::post().to(bookings::add_booking))
            .route("/edit/{id}", web::get().to(bookings::edit_booking_form))
            .route("/edit/{id}", web::post().to(bookings::edit_booking))
            .route("/delete/{id}", web::post().to(bookings::delete_booking)),
    );

    // ── Service pages ──
    cfg.service(
        web::scope("/services")
            .route("", web::get().to(services::list_services))
            .route("/add", web::get().to(services::add_service_form))
            .route("/add", web::post().to(services::add_service))
            .route("/edit/{id}", web::get().to(services::edit_service_form))
            .route("/edit/{id}", web::post().to(services::edit_service))
            .route("/delete/{id}", web::post().to(services::delete_service)),
    );

    // ── Print product pages ──
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(print_products::list_print_products))
            .route("/add", web::get().to(print_products::add_print_product_form))
            .route("/add", web::post().to(print_products::add_print_product))
            .route("/edit/{id}", web::get().to(print_products::edit_print_product_form))
            .route("/edit/{id}", web::post().to(print_products::edit_print_product))
            .route("/delete/{id}", web::post().to(print_products::delete_print_product)),
    );

    // ── Print order pages ──
    cfg.service(
        web::scope("/prints")
            .route("", web::get().to(print_orders::list_print_orders))
            .route("/add", web::get().to(print_orders::add_print_order_form))
            .route("/add", web::post().to(print_orders::add_print_order))
            .route("/edit/{id}", web::get().to(print_orders::edit_print_order_form))
            .route("/edit/{id}", web::post().to(print_orders::edit_print_order))
            .route("/delete/{id}", web::post().to(print_orders::delete_print_order)),
    );
}
