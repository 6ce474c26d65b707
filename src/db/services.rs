use sea_orm::*;

use crate::models::services::{self, ServiceForm};

/// Insert a new service.
pub async fn insert_service(
    db: &DatabaseConnection,
    input: ServiceForm,
) -> Result<services::Model, DbErr> {
    let new_service = services::ActiveModel {
        name: Set(input.name),
        price: Set(input.price),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    new_service.insert(db).await
}

/// Fetch all services in id order.
pub async fn get_all_services(db: &DatabaseConnection) -> Result<Vec<services::Model>, DbErr> {
    services::Entity::find()
        .order_by_asc(services::Column::Id)
        .all(db)
        .await
}

/// Fetch a single service by id.
pub async fn get_service_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<services::Model>, DbErr> {
    services::Entity::find_by_id(id).one(db).await
}

/// Replace a service's editable fields. Returns `None` if the id is absent.
pub async fn update_service(
    db: &DatabaseConnection,
    id: i64,
    input: ServiceForm,
) -> Result<Option<services::Model>, DbErr> {
    let service = match services::Entity::find_by_id(id).one(db).await? {
        Some(service) => service,
        None => return Ok(None),
    };

    let mut active: services::ActiveModel = service.into();
    active.name = Set(input.name);
    active.price = Set(input.price);

    active.update(db).await.map(Some)
}

/// Delete a service by id. Fails at the database level if bookings still
/// reference it (RESTRICT foreign key); the store checks first.
pub async fn delete_service(db: &DatabaseConnection, id: i64) -> Result<DeleteResult, DbErr> {
    services::Entity::delete_by_id(id).exec(db).await
}
