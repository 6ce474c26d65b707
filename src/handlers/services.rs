use actix_web::{HttpResponse, web};

use crate::models::services::ServiceForm;
use crate::store::{SharedStore, Store, StoreError};
use crate::views;

use super::{html, redirect_to};

/// GET /services — list the session catalogue.
pub async fn list_services(store: web::Data<SharedStore>) -> Result<HttpResponse, StoreError> {
    let services = store.list_services().await?;
    Ok(html(views::services_page(&services)))
}

/// GET /services/add — blank service form.
pub async fn add_service_form() -> HttpResponse {
    html(views::add_service_page())
}

/// POST /services/add — create a service; a negative price is a 400.
pub async fn add_service(
    store: web::Data<SharedStore>,
    form: web::Form<ServiceForm>,
) -> Result<HttpResponse, StoreError> {
    form.validate().map_err(StoreError::Validation)?;
    store.create_service(form.into_inner()).await?;
    Ok(redirect_to("/services"))
}

/// GET /services/edit/{id} — prefilled service form; 404 if unknown.
pub async fn edit_service_form(
    store: web::Data<SharedStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, StoreError> {
    let service = store.get_service(path.into_inner()).await?;
    Ok(html(views::edit_service_page(&service)))
}

/// POST /services/edit/{id} — full replace of the service's editable fields.
pub async fn edit_service(
    store: web::Data<SharedStore>,
    path: web::Path<i64>,
    form: web::Form<ServiceForm>,
) -> Result<HttpResponse, StoreError> {
    form.validate().map_err(StoreError::Validation)?;
    store.update_service(path.into_inner(), form.into_inner()).await?;
    Ok(redirect_to("/services"))
}

/// POST /services/delete/{id} — remove a service; 409 while bookings still
/// reference it.
pub async fn delete_service(
    store: web::Data<SharedStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, StoreError> {
    store.delete_service(path.into_inner()).await?;
    Ok(redirect_to("/services"))
}
