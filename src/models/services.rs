use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// SeaORM entity for the `services` table (the studio's session catalogue).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bookings::Entity")]
    Bookings,
}

impl Related<super::bookings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── Form DTOs ──

/// Fields submitted by the add/edit service forms.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceForm {
    pub name: String,
    pub price: f64,
}

impl ServiceForm {
    /// Price must be a finite, non-negative number.
    pub fn validate(&self) -> Result<(), String> {
        if self.price.is_finite() && self.price >= 0.0 {
            Ok(())
        } else {
            Err(format!(
                "price must be a non-negative number, got {}",
                self.price
            ))
        }
    }
}
