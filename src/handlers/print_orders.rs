use std::collections::HashMap;

use actix_web::{HttpResponse, web};

use crate::models::print_orders::{self, PrintOrderEditForm, PrintOrderForm};
use crate::store::{SharedStore, Store, StoreError};
use crate::views::{self, PrintOrderRow};

use super::{html, redirect_to};

/// Attach client and product names to print orders for rendering.
pub(crate) async fn order_rows(
    store: &SharedStore,
    orders: Vec<print_orders::Model>,
) -> Result<Vec<PrintOrderRow>, StoreError> {
    let clients: HashMap<i64, String> = store
        .list_clients()
        .await?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();
    let products: HashMap<i64, String> = store
        .list_print_products()
        .await?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect();
    Ok(orders
        .into_iter()
        .map(|o| PrintOrderRow {
            client_name: clients
                .get(&o.client_id)
                .cloned()
                .unwrap_or_else(|| format!("client {}", o.client_id)),
            product_name: products
                .get(&o.product_id)
                .cloned()
                .unwrap_or_else(|| format!("product {}", o.product_id)),
            order: o,
        })
        .collect())
}

/// GET /prints — list all print orders.
pub async fn list_print_orders(
    store: web::Data<SharedStore>,
) -> Result<HttpResponse, StoreError> {
    let orders = store.list_print_orders().await?;
    let rows = order_rows(store.get_ref(), orders).await?;
    Ok(html(views::print_orders_page(&rows)))
}

/// GET /prints/add — blank form carrying the client and product pickers.
pub async fn add_print_order_form(
    store: web::Data<SharedStore>,
) -> Result<HttpResponse, StoreError> {
    let clients = store.list_clients().await?;
    let products = store.list_print_products().await?;
    Ok(html(views::add_print_order_page(&clients, &products)))
}

/// POST /prints/add — create a print order (status starts as Ordered). An
/// unresolvable client or product reference is a 404 and nothing is stored.
pub async fn add_print_order(
    store: web::Data<SharedStore>,
    form: web::Form<PrintOrderForm>,
) -> Result<HttpResponse, StoreError> {
    form.validate().map_err(StoreError::Validation)?;
    store.create_print_order(form.into_inner()).await?;
    Ok(redirect_to("/prints"))
}

/// GET /prints/edit/{id} — prefilled form with pickers and the status set;
/// 404 if unknown.
pub async fn edit_print_order_form(
    store: web::Data<SharedStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, StoreError> {
    let order = store.get_print_order(path.into_inner()).await?;
    let clients = store.list_clients().await?;
    let products = store.list_print_products().await?;
    Ok(html(views::edit_print_order_page(&order, &clients, &products)))
}

/// POST /prints/edit/{id} — full replace of the order's editable fields,
/// status included.
pub async fn edit_print_order(
    store: web::Data<SharedStore>,
    path: web::Path<i64>,
    form: web::Form<PrintOrderEditForm>,
) -> Result<HttpResponse, StoreError> {
    form.validate().map_err(StoreError::Validation)?;
    store.update_print_order(path.into_inner(), form.into_inner()).await?;
    Ok(redirect_to("/prints"))
}

/// POST /prints/delete/{id} — remove a print order.
pub async fn delete_print_order(
    store: web::Data<SharedStore>,
    path: web::Path<i64>,
) -> Result<HttpResponse, StoreError> {
    store.delete_print_order(path.into_inner()).await?;
    Ok(redirect_to("/prints"))
}
