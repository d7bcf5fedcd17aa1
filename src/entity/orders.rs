use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    #[sea_orm(unique)]
    pub cart_id: Option<i32>,
    /// Free-form lifecycle tag such as `pending`, `paid` or `shipped`.
    #[sea_orm(default_value = "pending")]
    pub status: String,
    #[sea_orm(default_value = "0")]
    pub total_amount: f64,
    pub shipping_address: Option<String>,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeWithTimeZone,
    pub paid_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id",
        on_delete = "Cascade"
    )]
    Users,
    #[sea_orm(
        belongs_to = "super::carts::Entity",
        from = "Column::CartId",
        to = "super::carts::Column::Id",
        on_delete = "SetNull"
    )]
    Carts,
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
    #[sea_orm(has_one = "super::shipping_info::Entity")]
    ShippingInfo,
    #[sea_orm(has_many = "super::order_discounts::Entity")]
    OrderDiscounts,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::carts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Carts.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl Related<super::shipping_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShippingInfo.def()
    }
}

impl Related<super::order_discounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderDiscounts.def()
    }
}

// Coupons applied to this order, through `order_discounts`.
impl Related<super::coupons::Entity> for Entity {
    fn to() -> RelationDef {
        super::order_discounts::Relation::Coupons.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::order_discounts::Relation::Orders.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
