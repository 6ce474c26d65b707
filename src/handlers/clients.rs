use actix_web::{HttpResponse, web};

use crate::models::clients::ClientForm;
use crate::store::{SharedStore, Store, StoreError};
use crate::views;

use super::{html, redirect_to};

/// GET /clients — list all clients.
pub async fn list_clients(store: web::Data<SharedStore>) -> Result<HttpResponse, StoreError> {
    let clients = store.list_clients().await?;
    Ok(html(views::clients_page(&clients)))
}

/// GET /clients/{id} — a client's details with booking and print-order history.
pub async fn client_details(
    store: web::Data<SharedStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, StoreError> {
    let id = path.into_inner();
    let client = store.get_client(id).await?;
    let bookings = store.bookings_for_client(id).await?;
    let booking_rows = super::bookings::booking_rows(store.get_ref(), bookings).await?;
    let orders = store.print_orders_for_client(id).await?;
    let order_rows = super::print_orders::order_rows(store.get_ref(), orders).await?;
    Ok(html(views::client_details_page(
        &client,
        &booking_rows,
        &order_rows,
    )))
}

/// GET /clients/add — blank client form.
pub async fn add_client_form() -> HttpResponse {
    html(views::add_client_page())
}

/// POST /clients/add — create a client, then back to the list.
pub async fn add_client(
    store: web::Data<SharedStore>,
    form: web::Form<ClientForm>,
) -> Result<HttpResponse, StoreError> {
    store.create_client(form.into_inner()).await?;
    Ok(redirect_to("/clients"))
}

/// GET /clients/edit/{id} — prefilled client form; 404 if the id is unknown.
pub async fn edit_client_form(
    store: web::Data<SharedStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, StoreError> {
    let client = store.get_client(path.into_inner()).await?;
    Ok(html(views::edit_client_page(&client)))
}

/// POST /clients/edit/{id} — full replace of the client's editable fields.
pub async fn edit_client(
    store: web::Data<SharedStore>,
    path: web::Path<i64>,
    form: web::Form<ClientForm>,
) -> Result<HttpResponse, StoreError> {
    let id = path.into_inner();
    store.update_client(id, form.into_inner()).await?;
    Ok(redirect_to(&format!("/clients/{id}")))
}

/// POST /clients/delete/{id} — remove the client and cascade to their
/// bookings and print orders.
pub async fn delete_client(
    store: web::Data<SharedStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, StoreError> {
    store.delete_client(path.into_inner()).await?;
    Ok(redirect_to("/clients"))
}
