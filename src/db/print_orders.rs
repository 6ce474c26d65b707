use sea_orm::*;

use crate::models::print_orders::{self, OrderStatus, PrintOrderEditForm, PrintOrderForm};

/// Insert a new print order (always starts as `Ordered`).
pub async fn insert_print_order(
    db: &DatabaseConnection,
    input: PrintOrderForm,
) -> Result<print_orders::Model, DbErr> {
    let new_order = print_orders::ActiveModel {
        client_id: Set(input.client_id),
        product_id: Set(input.product_id),
        quantity: Set(input.quantity),
        status: Set(OrderStatus::Ordered),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    new_order.insert(db).await
}

/// Fetch all print orders in id order.
pub async fn get_all_print_orders(
    db: &DatabaseConnection,
) -> Result<Vec<print_orders::Model>, DbErr> {
    print_orders::Entity::find()
        .order_by_asc(print_orders::Column::Id)
        .all(db)
        .await
}

/// Fetch a single print order by id.
pub async fn get_print_order_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<print_orders::Model>, DbErr> {
    print_orders::Entity::find_by_id(id).one(db).await
}

/// Print orders for one client, newest first.
pub async fn get_print_orders_by_client_id(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<Vec<print_orders::Model>, DbErr> {
    print_orders::Entity::find()
        .filter(print_orders::Column::ClientId.eq(client_id))
        .order_by_desc(print_orders::Column::Id)
        .all(db)
        .await
}

/// Number of print orders referencing a client.
pub async fn count_print_orders_by_client_id(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<u64, DbErr> {
    print_orders::Entity::find()
        .filter(print_orders::Column::ClientId.eq(client_id))
        .count(db)
        .await
}

/// Number of print orders referencing a product.
pub async fn count_print_orders_by_product_id(
    db: &DatabaseConnection,
    product_id: i64,
) -> Result<u64, DbErr> {
    print_orders::Entity::find()
        .filter(print_orders::Column::ProductId.eq(product_id))
        .count(db)
        .await
}

/// Replace a print order's editable fields, status included. Returns `None`
/// if the id is absent.
pub async fn update_print_order(
    db: &DatabaseConnection,
    id: i64,
    input: PrintOrderEditForm,
) -> Result<Option<print_orders::Model>, DbErr> {
    let order = match print_orders::Entity::find_by_id(id).one(db).await? {
        Some(order) => order,
        None => return Ok(None),
    };

    let mut active: print_orders::ActiveModel = order.into();
    active.client_id = Set(input.client_id);
    active.product_id = Set(input.product_id);
    active.quantity = Set(input.quantity);
    active.status = Set(input.status);

    active.update(db).await.map(Some)
}

/// Delete a print order by id.
pub async fn delete_print_order(db: &DatabaseConnection, id: i64) -> Result<DeleteResult, DbErr> {
    print_orders::Entity::delete_by_id(id).exec(db).await
}
