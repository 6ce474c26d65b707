use actix_web::{HttpResponse, web};

use crate::models::print_products::PrintProductForm;
use crate::store::{SharedStore, Store, StoreError};
use crate::views;

use super::{html, redirect_to};

/// GET /products — list the print catalogue.
pub async fn list_print_products(
    store: web::Data<SharedStore>,
) -> Result<HttpResponse, StoreError> {
    let products = store.list_print_products().await?;
    Ok(html(views::print_products_page(&products)))
}

/// GET /products/add — blank print-product form.
pub async fn add_print_product_form() -> HttpResponse {
    html(views::add_print_product_page())
}

/// POST /products/add — create a print product; a negative price is a 400.
pub async fn add_print_product(
    store: web::Data<SharedStore>,
    form: web::Form<PrintProductForm>,
) -> Result<HttpResponse, StoreError> {
    form.validate().map_err(StoreError::Validation)?;
    store.create_print_product(form.into_inner()).await?;
    Ok(redirect_to("/products"))
}

/// GET /products/edit/{id} — prefilled print-product form; 404 if unknown.
pub async fn edit_print_product_form(
    store: web::Data<SharedStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, StoreError> {
    let product = store.get_print_product(path.into_inner()).await?;
    Ok(html(views::edit_print_product_page(&product)))
}

/// POST /products/edit/{id} — full replace of the product's editable fields.
pub async fn edit_print_product(
    store: web::Data<SharedStore>,
    path: web::Path<i64>,
    form: web::Form<PrintProductForm>,
) -> Result<HttpResponse, StoreError> {
    form.validate().map_err(StoreError::Validation)?;
    store.update_print_product(path.into_inner(), form.into_inner()).await?;
    Ok(redirect_to("/products"))
}

/// POST /products/delete/{id} — remove a print product; 409 while print
/// orders still reference it.
pub async fn delete_print_product(
    store: web::Data<SharedStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, StoreError> {
    store.delete_print_product(path.into_inner()).await?;
    Ok(redirect_to("/products"))
}
