use chrono::NaiveDate;
use sea_orm::*;

use crate::models::bookings::{self, NewBooking};

/// Insert a new booking. References are checked by the store before this
/// runs; the foreign keys are the backstop.
pub async fn insert_booking(
    db: &DatabaseConnection,
    input: NewBooking,
) -> Result<bookings::Model, DbErr> {
    let new_booking = bookings::ActiveModel {
        date: Set(input.date),
        time: Set(input.time),
        client_id: Set(input.client_id),
        service_id: Set(input.service_id),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    new_booking.insert(db).await
}

/// Fetch all bookings in id order.
pub async fn get_all_bookings(db: &DatabaseConnection) -> Result<Vec<bookings::Model>, DbErr> {
    bookings::Entity::find()
        .order_by_asc(bookings::Column::Id)
        .all(db)
        .await
}

/// Fetch a single booking by id.
pub async fn get_booking_by_id(
    db: &DatabaseConnection,
    id: i64,
) -> Result<Option<bookings::Model>, DbErr> {
    bookings::Entity::find_by_id(id).one(db).await
}

/// Bookings for one client, newest date first.
pub async fn get_bookings_by_client_id(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<Vec<bookings::Model>, DbErr> {
    bookings::Entity::find()
        .filter(bookings::Column::ClientId.eq(client_id))
        .order_by_desc(bookings::Column::Date)
        .order_by_desc(bookings::Column::Time)
        .all(db)
        .await
}

/// Bookings on or after `today`, soonest first, capped at `limit`.
pub async fn get_upcoming_bookings(
    db: &DatabaseConnection,
    today: NaiveDate,
    limit: u64,
) -> Result<Vec<bookings::Model>, DbErr> {
    bookings::Entity::find()
        .filter(bookings::Column::Date.gte(today))
        .order_by_asc(bookings::Column::Date)
        .order_by_asc(bookings::Column::Time)
        .limit(limit)
        .all(db)
        .await
}

/// Number of bookings referencing a client.
pub async fn count_bookings_by_client_id(
    db: &DatabaseConnection,
    client_id: i64,
) -> Result<u64, DbErr> {
    bookings::Entity::find()
        .filter(bookings::Column::ClientId.eq(client_id))
        .count(db)
        .await
}

/// Number of bookings referencing a service.
pub async fn count_bookings_by_service_id(
    db: &DatabaseConnection,
    service_id: i64,
) -> Result<u64, DbErr> {
    bookings::Entity::find()
        .filter(bookings::Column::ServiceId.eq(service_id))
        .count(db)
        .await
}

/// Replace a booking's editable fields. Returns `None` if the id is absent.
pub async fn update_booking(
    db: &DatabaseConnection,
    id: i64,
    input: NewBooking,
) -> Result<Option<bookings::Model>, DbErr> {
    let booking = match bookings::Entity::find_by_id(id).one(db).await? {
        Some(booking) => booking,
        None => return Ok(None),
    };

    let mut active: bookings::ActiveModel = booking.into();
    active.date = Set(input.date);
    active.time = Set(input.time);
    active.client_id = Set(input.client_id);
    active.service_id = Set(input.service_id);

    active.update(db).await.map(Some)
}

/// Delete a booking by id.
pub async fn delete_booking(db: &DatabaseConnection, id: i64) -> Result<DeleteResult, DbErr> {
    bookings::Entity::delete_by_id(id).exec(db).await
}
