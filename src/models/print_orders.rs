use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Print-order status stored as a string in the database. New orders always
/// start as `Ordered`; the status only changes through the edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum OrderStatus {
    #[sea_orm(string_value = "Ordered")]
    Ordered,
    #[sea_orm(string_value = "Printed")]
    Printed,
    #[sea_orm(string_value = "Collected")]
    Collected,
}

impl OrderStatus {
    /// Label shown on the print-order pages.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Ordered => "Ordered",
            OrderStatus::Printed => "Printed",
            OrderStatus::Collected => "Collected",
        }
    }
}

/// SeaORM entity for the `print_orders` table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "print_orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub client_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub status: OrderStatus,
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
        belongs_to = "super::print_products::Entity",
        from = "Column::ProductId",
        to = "super::print_products::Column::Id"
    )]
    Product,
}

impl Related<super::clients::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl Related<super::print_products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// ── Form DTOs ──

/// Fields submitted by the add print-order form. There is no status field;
/// new orders start as `Ordered`.
#[derive(Debug, Clone, Deserialize)]
pub struct PrintOrderForm {
    pub client_id: i64,
    pub product_id: i64,
    pub quantity: i32,
}

/// Fields submitted by the edit print-order form (full replace, including
/// the status picked from the fixed set).
#[derive(Debug, Clone, Deserialize)]
pub struct PrintOrderEditForm {
    pub client_id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub status: OrderStatus,
}

impl PrintOrderForm {
    /// Quantity must be a positive integer.
    pub fn validate(&self) -> Result<(), String> {
        validate_quantity(self.quantity)
    }
}

impl PrintOrderEditForm {
    /// Quantity must be a positive integer.
    pub fn validate(&self) -> Result<(), String> {
        validate_quantity(self.quantity)
    }
}

fn validate_quantity(quantity: i32) -> Result<(), String> {
    if quantity >= 1 {
        Ok(())
    } else {
        Err(format!("quantity must be at least 1, got {quantity}"))
    }
}
