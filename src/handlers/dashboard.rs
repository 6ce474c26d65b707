use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::store::{SharedStore, Store, StoreError};
use crate::views;

use super::bookings::booking_rows;
use super::html;

/// How many rows each dashboard panel shows.
const DASHBOARD_LIMIT: u64 = 5;

/// GET / — the next upcoming bookings (today onwards) and the newest clients.
pub async fn index(store: web::Data<SharedStore>) -> Result<HttpResponse, StoreError> {
    let today = Utc::now().date_naive();
    let upcoming = store.upcoming_bookings(today, DASHBOARD_LIMIT).await?;
    let rows = booking_rows(store.get_ref(), upcoming).await?;
    let recent = store.recent_clients(DASHBOARD_LIMIT).await?;
    Ok(html(views::dashboard_page(&rows, &recent)))
}

/// GET /invoicing — invoicing is not wired up yet; the page is an
/// intentional placeholder.
pub async fn invoicing() -> HttpResponse {
    html(views::invoicing_page())
}
