mod common;

use marketplace_schema::entity::{
    cart_items, carts, categories,
    coupons::{self, DiscountType},
    order_discounts, orders, payment_methods, payments, products, refunds, shipping_info,
    user_cards,
    users::{self, UserRole},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, PaginatorTrait, QueryFilter, Set,
};
use serde_json::json;

// One flow so the tests never race on the shared database: uniqueness first,
// then a full order graph that is torn down through the delete rules.
#[tokio::test]
async fn unique_and_delete_rules_hold_against_postgres() -> anyhow::Result<()> {
    let Some(orm) = common::fresh_database().await? else {
        return Ok(());
    };

    // Unique natural keys
    let jane = insert_user(&orm, "jane", "jane@example.com").await?;
    assert_eq!(jane.role, UserRole::User, "role defaults to user");
    assert!(jane.is_active, "users default to active");

    let err = insert_user(&orm, "jane", "other@example.com")
        .await
        .expect_err("duplicate username accepted");
    assert!(common::is_unique_violation(&err), "{err}");

    let err = insert_user(&orm, "janet", "jane@example.com")
        .await
        .expect_err("duplicate email accepted");
    assert!(common::is_unique_violation(&err), "{err}");

    let coupon = insert_coupon(&orm, "SPRING5").await?;
    let err = insert_coupon(&orm, "SPRING5")
        .await
        .expect_err("duplicate coupon code accepted");
    assert!(common::is_unique_violation(&err), "{err}");

    // The database itself rejects a discount type outside the enum
    let raw = orm
        .execute_unprepared(
            "INSERT INTO coupons (code, discount_type, discount_value) VALUES ('RAW1', 'bogus', 1)",
        )
        .await;
    assert!(raw.is_err(), "unknown discount type stored");
    let raw = orm
        .execute_unprepared(
            "INSERT INTO coupons (code, discount_type, discount_value) VALUES ('RAW2', 'fixed', 1)",
        )
        .await;
    assert!(raw.is_ok(), "{raw:?}");
    coupons::Entity::delete_many()
        .filter(coupons::Column::Code.eq("RAW2"))
        .exec(&orm)
        .await?;

    // Full graph owned by jane
    let category = categories::ActiveModel {
        name: Set("Toys".into()),
        ..Default::default()
    }
    .insert(&orm)
    .await?;

    let product = products::ActiveModel {
        title: Set("Wooden train".into()),
        price: Set(10),
        category_id: Set(category.id),
        images: Set(Some(vec!["https://img.example.com/train.png".into()])),
        ..Default::default()
    }
    .insert(&orm)
    .await?;
    assert!(!product.is_published, "products default to unpublished");
    assert_eq!(product.stock, 0);

    let cart = insert_cart(&orm, jane.id).await?;
    cart_items::ActiveModel {
        cart_id: Set(cart.id),
        product_id: Set(product.id),
        quantity: Set(2),
        subtotal: Set(20.0),
        ..Default::default()
    }
    .insert(&orm)
    .await?;

    let order = insert_order(&orm, jane.id, cart.id).await?;
    assert_eq!(order.status, "pending");

    let payment = payments::ActiveModel {
        order_id: Set(order.id),
        provider: Set("stripe".into()),
        transaction_id: Set(Some("pi_123".into())),
        amount: Set(20.0),
        payment_metadata: Set(Some(json!({ "intent": "pi_123" }))),
        ..Default::default()
    }
    .insert(&orm)
    .await?;
    assert_eq!(payment.currency, "USD");

    refunds::ActiveModel {
        payment_id: Set(payment.id),
        refund_amount: Set(5.0),
        reason: Set(Some("damaged".into())),
        ..Default::default()
    }
    .insert(&orm)
    .await?;

    insert_shipping(&orm, order.id).await?;
    let err = insert_shipping(&orm, order.id)
        .await
        .expect_err("second shipping row for one order accepted");
    assert!(common::is_unique_violation(&err), "{err}");

    insert_discount(&orm, order.id, coupon.id).await?;
    let err = insert_discount(&orm, order.id, coupon.id)
        .await
        .expect_err("coupon applied twice to one order");
    assert!(common::is_unique_violation(&err), "{err}");

    let applied = order.find_related(coupons::Entity).all(&orm).await?;
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].code, "SPRING5");

    let visa = payment_methods::ActiveModel {
        name: Set("Visa".into()),
        provider: Set(Some("stripe".into())),
        ..Default::default()
    }
    .insert(&orm)
    .await?;

    user_cards::ActiveModel {
        user_id: Set(jane.id),
        payment_method_id: Set(visa.id),
        card_number: Set("4242424242424242".into()),
        card_holder_name: Set("Jane".into()),
        expiry_month: Set(12),
        expiry_year: Set(2030),
        last4: Set("4242".into()),
        ..Default::default()
    }
    .insert(&orm)
    .await?;

    // Deleting the user removes everything it owns
    users::Entity::delete_by_id(jane.id).exec(&orm).await?;

    assert_eq!(carts::Entity::find().count(&orm).await?, 0);
    assert_eq!(cart_items::Entity::find().count(&orm).await?, 0);
    assert_eq!(orders::Entity::find().count(&orm).await?, 0);
    assert_eq!(payments::Entity::find().count(&orm).await?, 0);
    assert_eq!(refunds::Entity::find().count(&orm).await?, 0);
    assert_eq!(shipping_info::Entity::find().count(&orm).await?, 0);
    assert_eq!(order_discounts::Entity::find().count(&orm).await?, 0);
    assert_eq!(user_cards::Entity::find().count(&orm).await?, 0);

    // ...but not what it only referenced
    assert_eq!(products::Entity::find().count(&orm).await?, 1);
    assert_eq!(coupons::Entity::find().count(&orm).await?, 1);
    assert_eq!(payment_methods::Entity::find().count(&orm).await?, 1);

    // Dropping a cart keeps its order; dropping a coupon removes only its discounts
    let bob = insert_user(&orm, "bob", "bob@example.com").await?;
    let cart = insert_cart(&orm, bob.id).await?;
    let order = insert_order(&orm, bob.id, cart.id).await?;
    insert_discount(&orm, order.id, coupon.id).await?;

    carts::Entity::delete_by_id(cart.id).exec(&orm).await?;
    let order = orders::Entity::find_by_id(order.id)
        .one(&orm)
        .await?
        .expect("order survives its cart");
    assert_eq!(order.cart_id, None);

    coupons::Entity::delete_by_id(coupon.id).exec(&orm).await?;
    assert_eq!(order_discounts::Entity::find().count(&orm).await?, 0);
    assert_eq!(orders::Entity::find().count(&orm).await?, 1);

    // A category still holding products cannot be deleted
    let err = categories::Entity::delete_by_id(category.id)
        .exec(&orm)
        .await
        .expect_err("category with products deleted");
    assert!(common::is_foreign_key_violation(&err), "{err}");

    Ok(())
}

async fn insert_user(
    orm: &DatabaseConnection,
    username: &str,
    email: &str,
) -> Result<users::Model, DbErr> {
    users::ActiveModel {
        username: Set(username.to_string()),
        email: Set(email.to_string()),
        password: Set("dummy".into()),
        full_name: Set(username.to_string()),
        ..Default::default()
    }
    .insert(orm)
    .await
}

async fn insert_coupon(orm: &DatabaseConnection, code: &str) -> Result<coupons::Model, DbErr> {
    coupons::ActiveModel {
        code: Set(code.to_string()),
        discount_type: Set(DiscountType::Fixed),
        discount_value: Set(5.0),
        ..Default::default()
    }
    .insert(orm)
    .await
}

async fn insert_cart(orm: &DatabaseConnection, user_id: i32) -> Result<carts::Model, DbErr> {
    carts::ActiveModel {
        user_id: Set(user_id),
        total_amount: Set(20.0),
        ..Default::default()
    }
    .insert(orm)
    .await
}

async fn insert_order(
    orm: &DatabaseConnection,
    user_id: i32,
    cart_id: i32,
) -> Result<orders::Model, DbErr> {
    orders::ActiveModel {
        user_id: Set(user_id),
        cart_id: Set(Some(cart_id)),
        total_amount: Set(20.0),
        shipping_address: Set(Some("1 Main St".into())),
        ..Default::default()
    }
    .insert(orm)
    .await
}

async fn insert_shipping(
    orm: &DatabaseConnection,
    order_id: i32,
) -> Result<shipping_info::Model, DbErr> {
    shipping_info::ActiveModel {
        order_id: Set(order_id),
        full_name: Set("Jane".into()),
        phone: Set("555-0100".into()),
        address_line: Set("1 Main St".into()),
        city: Set("Springfield".into()),
        country: Set("US".into()),
        ..Default::default()
    }
    .insert(orm)
    .await
}

async fn insert_discount(
    orm: &DatabaseConnection,
    order_id: i32,
    coupon_id: i32,
) -> Result<order_discounts::Model, DbErr> {
    order_discounts::ActiveModel {
        order_id: Set(order_id),
        coupon_id: Set(coupon_id),
        discount_amount: Set(2.0),
        ..Default::default()
    }
    .insert(orm)
    .await
}
