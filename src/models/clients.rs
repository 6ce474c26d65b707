use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `clients` table.
///
/// The same struct doubles as the record type held by the in-memory backend.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bookings::Entity")]
    Bookings,
    #[sea_orm(has_many = "super::print_orders::Entity")]
    PrintOrders,
}

impl Related<super::bookings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl Related<super::print_orders::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PrintOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── Form DTOs ──

/// Fields submitted by the add/edit client forms.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientForm {
    pub name: String,
    pub email: String,
    pub phone: String,
}
