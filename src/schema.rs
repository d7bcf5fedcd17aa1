//! PostgreSQL DDL derived from the entity declarations.
//!
//! Tables, columns, defaults, unique constraints and foreign keys come
//! straight from [`crate::entity`], so the entities stay the only definition
//! of the data model. Only the secondary indexes are declared here.

use sea_orm::{
    ColumnTrait, DbBackend, EntityTrait, Schema,
    sea_query::{
        Index, IndexCreateStatement, TableCreateStatement,
        extension::postgres::TypeCreateStatement,
    },
};

use crate::entity::{
    self, cart_items, carts, coupons::DiscountType, order_discounts, orders, payments, products,
    refunds, user_cards, users::UserRole,
};

/// Every table, parents before the tables that reference them.
pub const TABLES: [&str; 13] = [
    "users",
    "categories",
    "payment_methods",
    "coupons",
    "products",
    "carts",
    "cart_items",
    "orders",
    "payments",
    "refunds",
    "shipping_info",
    "order_discounts",
    "user_cards",
];

/// Postgres enum backing `users.role`.
pub const ROLE_TYPE: &str = "user_roles";

/// Postgres enum backing `coupons.discount_type`.
pub const DISCOUNT_TYPE: &str = "discount_types";

/// Every enum type, created before the tables that use them.
pub const TYPES: [&str; 2] = [ROLE_TYPE, DISCOUNT_TYPE];

pub fn create_types(backend: DbBackend) -> Vec<TypeCreateStatement> {
    let schema = Schema::new(backend);
    vec![
        schema.create_enum_from_active_enum::<UserRole>(),
        schema.create_enum_from_active_enum::<DiscountType>(),
    ]
}

/// `CREATE TABLE IF NOT EXISTS` for every entity, in [`TABLES`] order.
pub fn create_tables(backend: DbBackend) -> Vec<TableCreateStatement> {
    let schema = Schema::new(backend);
    vec![
        table(&schema, entity::Users),
        table(&schema, entity::Categories),
        table(&schema, entity::PaymentMethods),
        table(&schema, entity::Coupons),
        table(&schema, entity::Products),
        table(&schema, entity::Carts),
        table(&schema, entity::CartItems),
        table(&schema, entity::Orders),
        table(&schema, entity::Payments),
        table(&schema, entity::Refunds),
        table(&schema, entity::ShippingInfo),
        table(&schema, entity::OrderDiscounts),
        table(&schema, entity::UserCards),
    ]
}

fn table<E: EntityTrait>(schema: &Schema, entity: E) -> TableCreateStatement {
    schema
        .create_table_from_entity(entity)
        .if_not_exists()
        .to_owned()
}

pub fn create_indexes() -> Vec<IndexCreateStatement> {
    vec![
        index(entity::Products, products::Column::CategoryId, "idx-products-category_id"),
        index(entity::Carts, carts::Column::UserId, "idx-carts-user_id"),
        index(entity::CartItems, cart_items::Column::CartId, "idx-cart_items-cart_id"),
        index(entity::CartItems, cart_items::Column::ProductId, "idx-cart_items-product_id"),
        index(entity::Orders, orders::Column::UserId, "idx-orders-user_id"),
        index(entity::Payments, payments::Column::OrderId, "idx-payments-order_id"),
        index(entity::Refunds, refunds::Column::PaymentId, "idx-refunds-payment_id"),
        index(entity::UserCards, user_cards::Column::UserId, "idx-user_cards-user_id"),
        index(
            entity::UserCards,
            user_cards::Column::PaymentMethodId,
            "idx-user_cards-payment_method_id",
        ),
        index(
            entity::OrderDiscounts,
            order_discounts::Column::CouponId,
            "idx-order_discounts-coupon_id",
        ),
        // A coupon applies to an order at most once.
        Index::create()
            .name("idx-order_discounts-order_id-coupon_id")
            .table(entity::OrderDiscounts)
            .col(order_discounts::Column::OrderId)
            .col(order_discounts::Column::CouponId)
            .unique()
            .if_not_exists()
            .to_owned(),
    ]
}

fn index<E, C>(entity: E, column: C, name: &str) -> IndexCreateStatement
where
    E: EntityTrait,
    C: ColumnTrait,
{
    Index::create()
        .name(name)
        .table(entity)
        .col(column)
        .if_not_exists()
        .to_owned()
}

/// The full schema as Postgres SQL, one statement per entry, in apply order.
pub fn render_ddl() -> Vec<String> {
    let backend = DbBackend::Postgres;
    let types = create_types(backend)
        .into_iter()
        .map(|stmt| backend.build(&stmt).to_string());
    let tables = create_tables(backend)
        .into_iter()
        .map(|stmt| backend.build(&stmt).to_string());
    let indexes = create_indexes()
        .into_iter()
        .map(|stmt| backend.build(&stmt).to_string());

    types.chain(tables).chain(indexes).collect()
}
