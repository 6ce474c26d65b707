use std::collections::HashMap;

use actix_web::{HttpResponse, web};

use crate::models::bookings::{self, BookingForm};
use crate::store::{SharedStore, Store, StoreError};
use crate::views::{self, BookingRow};

use super::{html, redirect_to};

/// Attach client and service names to bookings for rendering.
pub(crate) async fn booking_rows(
    store: &SharedStore,
    bookings: Vec<bookings::Model>,
) -> Result<Vec<BookingRow>, StoreError> {
    let clients: HashMap<i64, String> = store
        .list_clients()
        .await?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();
    let services: HashMap<i64, String> = store
        .list_services()
        .await?
        .into_iter()
        .map(|s| (s.id, s.name))
        .collect();
    Ok(bookings
        .into_iter()
        .map(|b| BookingRow {
            client_name: clients
                .get(&b.client_id)
                .cloned()
                .unwrap_or_else(|| format!("client {}", b.client_id)),
            service_name: services
                .get(&b.service_id)
                .cloned()
                .unwrap_or_else(|| format!("service {}", b.service_id)),
            booking: b,
        })
        .collect())
}

/// GET /bookings — list all bookings.
pub async fn list_bookings(store: web::Data<SharedStore>) -> Result<HttpResponse, StoreError> {
    let bookings = store.list_bookings().await?;
    let rows = booking_rows(store.get_ref(), bookings).await?;
    Ok(html(views::bookings_page(&rows)))
}

/// GET /bookings/add — blank form carrying the client and service pickers.
pub async fn add_booking_form(store: web::Data<SharedStore>) -> Result<HttpResponse, StoreError> {
    let clients = store.list_clients().await?;
    let services = store.list_services().await?;
    Ok(html(views::add_booking_page(&clients, &services)))
}

/// POST /bookings/add — create a booking. A malformed date or time is a 400;
/// an unresolvable client or service reference is a 404 and nothing is stored.
pub async fn add_booking(
    store: web::Data<SharedStore>,
    form: web::Form<BookingForm>,
) -> Result<HttpResponse, StoreError> {
    let input = form.parse().map_err(StoreError::Validation)?;
    store.create_booking(input).await?;
    Ok(redirect_to("/bookings"))
}

/// GET /bookings/edit/{id} — prefilled form with pickers; 404 if unknown.
pub async fn edit_booking_form(
    store: web::Data<SharedStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, StoreError> {
    let booking = store.get_booking(path.into_inner()).await?;
    let clients = store.list_clients().await?;
    let services = store.list_services().await?;
    Ok(html(views::edit_booking_page(&booking, &clients, &services)))
}

/// POST /bookings/edit/{id} — full replace of the booking's editable fields,
/// with the same parsing and reference checks as add.
pub async fn edit_booking(
    store: web::Data<SharedStore>,
    path: web::Path<i64>,
    form: web::Form<BookingForm>,
) -> Result<HttpResponse, StoreError> {
    let input = form.parse().map_err(StoreError::Validation)?;
    store.update_booking(path.into_inner(), input).await?;
    Ok(redirect_to("/bookings"))
}

/// POST /bookings/delete/{id} — remove a booking.
pub async fn delete_booking(
    store: web::Data<SharedStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, StoreError> {
    store.delete_booking(path.into_inner()).await?;
    Ok(redirect_to("/bookings"))
}
