use sea_orm::*;

use crate::models::print_products::{self, PrintProductForm};

/// Insert a new print product.
pub async fn insert_print_product(
    db: &DatabaseConnection,
    input: PrintProductForm,
) -> Result<print_products::Model, DbErr> {
    let new_product = print_products::ActiveModel {
        name: Set(input.name),
        price: Set(input.price),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    new_product.insert(db).await
}

/// Fetch all print products in id order.
pub async fn get_all_print_products(
    db: &DatabaseConnection,
) -> Result<Vec<print_products::Model>, DbErr> {
    print_products::Entity::find()
        .order_by_asc(print_products::Column::Id)
        .all(db)
        .await
}

/// Fetch a single print product by id.
pub async fn get_print_product_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<print_products::Model>, DbErr> {
    print_products::Entity::find_by_id(id).one(db).await
}

/// Replace a print product's editable fields. Returns `None` if the id is
/// absent.
pub async fn update_print_product(
    db: &DatabaseConnection,
    id: i64,
    input: PrintProductForm,
) -> Result<Option<print_products::Model>, DbErr> {
    let product = match print_products::Entity::find_by_id(id).one(db).await? {
        Some(product) => product,
        None => return Ok(None),
    };

    let mut active: print_products::ActiveModel = product.into();
    active.name = Set(input.name);
    active.price = Set(input.price);

    active.update(db).await.map(Some)
}

/// Delete a print product by id. Fails at the database level if print orders
/// still reference it (RESTRICT foreign key); the store checks first.
pub async fn delete_print_product(
    db: &DatabaseConnection,
    id: i64,
) -> Result<DeleteResult, DbErr> {
    print_products::Entity::delete_by_id(id).exec(db).await
}
