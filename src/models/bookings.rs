use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `bookings` table.
///
/// A booking ties exactly one client to one service on a calendar date and
/// time-of-day. Both references are validated at the store boundary.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub date: Date,
    pub time: Time,
    pub client_id: i64,
    pub service_id: i64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::clients::Entity",
        from = "Column::ClientId",
        to = "super::clients::Column::Id"
    )]
    Client,
    #[sea_orm(
        belongs_to = "super::services::Entity",
        from = "Column::ServiceId",
        to = "super::services::Column::Id"
    )]
    Service,
}

impl Related<super::clients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::services::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── Form DTOs ──

/// Raw fields submitted by the add/edit booking forms. Date and time arrive
/// as strings and must be parsed before they reach the store.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingForm {
    pub booking_date: String,
    pub booking_time: String,
    pub client_id: i64,
    pub service_id: i64,
}

/// A booking form with its date and time parsed.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub date: Date,
    pub time: Time,
    pub client_id: i64,
    pub service_id: i64,
}

impl BookingForm {
    /// Parse `booking_date` as `%Y-%m-%d` and `booking_time` as `%H:%M`
    /// (seconds tolerated, which is what `<input type="time">` submits).
    pub fn parse(&self) -> Result<NewBooking, String> {
        let date = Date::parse_from_str(self.booking_date.trim(), "%Y-%m-%d");
        let time = self.booking_time.trim();
        let time = Time::parse_from_str(time, "%H:%M")
            .or_else(|_| Time::parse_from_str(time, "%H:%M:%S"));
        match (date, time) {
            (Ok(date), Ok(time)) => Ok(NewBooking {
                date,
                time,
                client_id: self.client_id,
                service_id: self.service_id,
            }),
            _ => Err("Invalid date/time format".to_string()),
        }
    }
}
