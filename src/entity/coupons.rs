use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// How `discount_value` is applied, stored as the Postgres enum `discount_types`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "discount_types")]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    #[sea_orm(string_value = "percentage")]
    Percentage,
    #[sea_orm(string_value = "fixed")]
    Fixed,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "coupons")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: String,
    pub description: Option<String>,
    pub discount_type: DiscountType,
    /// Percent for `Percentage`, absolute amount for `Fixed`.
    pub discount_value: f64,
    pub max_uses: Option<i32>,
    pub max_discount_amount: Option<f64>,
    pub min_order_amount: Option<f64>,
    pub valid_from: Option<DateTimeWithTimeZone>,
    pub valid_to: Option<DateTimeWithTimeZone>,
    #[sea_orm(default_value = "true")]
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_discounts::Entity")]
    OrderDiscounts,
}

impl Related<super::order_discounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderDiscounts.def()
    }
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef {
        super::order_discounts::Relation::Orders.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::order_discounts::Relation::Coupons.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
