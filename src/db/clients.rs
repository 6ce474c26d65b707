use sea_orm::*;

use crate::models::clients::{self, ClientForm};

/// Insert a new client. The id comes from the table's BIGSERIAL column.
pub async fn insert_client(
    db: &DatabaseConnection,
    input: ClientForm,
) -> Result<clients::Model, DbErr> {
    let new_client = clients::ActiveModel {
        name: Set(input.name),
        email: Set(input.email),
        phone: Set(input.phone),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    new_client.insert(db).await
}

/// Fetch all clients in id order.
pub async fn get_all_clients(db: &DatabaseConnection) -> Result<Vec<clients::Model>, DbErr> {
    clients::Entity::find()
        .order_by_asc(clients::Column::Id)
        .all(db)
        .await
}

/// Fetch a single client by id.
pub async fn get_client_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<clients::Model>, DbErr> {
    clients::Entity::find_by_id(id).one(db).await
}

/// The `limit` most recently created clients, newest first.
pub async fn get_recent_clients(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<clients::Model>, DbErr> {
    clients::Entity::find()
        .order_by_desc(clients::Column::CreatedAt)
        .order_by_desc(clients::Column::Id)
        .limit(limit)
        .all(db)
        .await
}

/// Replace a client's editable fields. Returns `None` if the id is absent.
pub async fn update_client(
    db: &DatabaseConnection,
    id: i64,
    input: ClientForm,
) -> Result<Option<clients::Model>, DbErr> {
    let client = match clients::Entity::find_by_id(id).one(db).await? {
        Some(client) => client,
        None => return Ok(None),
    };

    let mut active: clients::ActiveModel = client.into();
    active.name = Set(input.name);
    active.email = Set(input.email);
    active.phone = Set(input.phone);

    active.update(db).await.map(Some)
}

/// Delete a client by id. Bookings and print orders cascade via the
/// foreign keys.
pub async fn delete_client(db: &DatabaseConnection, id: i64) -> Result<DeleteResult, DbErr> {
    clients::Entity::delete_by_id(id).exec(db).await
}
