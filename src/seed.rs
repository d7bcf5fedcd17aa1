//! Demonstration rows for development databases.
//!
//! Every insert skips rows whose natural key already exists, so running the
//! seed twice leaves the database unchanged.

use argon2::{
    Argon2, PasswordHasher,
    password_hash::SaltString,
};
use chrono::{Duration, Utc};
use password_hash::rand_core::OsRng;
use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, DatabaseConnection, EntityTrait, Insert, Set, TransactionTrait};

use crate::{
    entity::{
        categories,
        coupons::{self, DiscountType},
        users::{self, UserRole},
    },
    error::{AppError, AppResult},
};

pub struct DemoUser {
    pub username: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub full_name: &'static str,
    pub role: UserRole,
}

pub const DEMO_USERS: [DemoUser; 2] = [
    DemoUser {
        username: "john_doe",
        email: "john@example.com",
        password: "hashed123",
        full_name: "John Doe",
        role: UserRole::User,
    },
    DemoUser {
        username: "admin_user",
        email: "admin@example.com",
        password: "hashed456",
        full_name: "Admin User",
        role: UserRole::Admin,
    },
];

pub const DEMO_CATEGORIES: [&str; 2] = ["Electronics", "Books"];

pub const WELCOME_COUPON_CODE: &str = "WELCOME10";

/// Rows actually inserted by one [`run`], per table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub users: u64,
    pub categories: u64,
    pub coupons: u64,
}

pub async fn run(db: &DatabaseConnection) -> AppResult<SeedReport> {
    let txn = db.begin().await?;

    let report = SeedReport {
        users: seed_users(&txn).await?,
        categories: seed_categories(&txn).await?,
        coupons: seed_coupons(&txn).await?,
    };

    txn.commit().await?;

    tracing::info!(
        users = report.users,
        categories = report.categories,
        coupons = report.coupons,
        "seed completed"
    );
    Ok(report)
}

async fn seed_users<C: ConnectionTrait>(db: &C) -> AppResult<u64> {
    let inserted = demo_users_insert()?.exec_without_returning(db).await?;
    tracing::debug!(inserted, "seeded users");
    Ok(inserted)
}

fn demo_users_insert() -> AppResult<Insert<users::ActiveModel>> {
    let mut rows = Vec::with_capacity(DEMO_USERS.len());
    for user in &DEMO_USERS {
        rows.push(users::ActiveModel {
            id: NotSet,
            username: Set(user.username.to_string()),
            email: Set(user.email.to_string()),
            password: Set(hash_password(user.password)?),
            full_name: Set(user.full_name.to_string()),
            is_active: Set(true),
            role: Set(user.role),
            created_at: NotSet,
        });
    }

    // Username and email are both unique; skip a row that collides on either.
    Ok(users::Entity::insert_many(rows).on_conflict(OnConflict::new().do_nothing().to_owned()))
}

async fn seed_categories<C: ConnectionTrait>(db: &C) -> AppResult<u64> {
    let rows = DEMO_CATEGORIES.iter().map(|name| categories::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
    });

    let inserted = categories::Entity::insert_many(rows)
        .on_conflict(
            OnConflict::column(categories::Column::Name)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    tracing::debug!(inserted, "seeded categories");
    Ok(inserted)
}

async fn seed_coupons<C: ConnectionTrait>(db: &C) -> AppResult<u64> {
    let now = Utc::now().fixed_offset();
    let welcome = coupons::ActiveModel {
        id: NotSet,
        code: Set(WELCOME_COUPON_CODE.to_string()),
        description: Set(Some("10% off".to_string())),
        discount_type: Set(DiscountType::Percentage),
        discount_value: Set(10.0),
        max_uses: Set(Some(100)),
        max_discount_amount: Set(Some(50.0)),
        min_order_amount: Set(Some(100.0)),
        valid_from: Set(Some(now)),
        valid_to: Set(Some(now + Duration::days(30))),
        is_active: Set(true),
    };

    let inserted = coupons::Entity::insert(welcome)
        .on_conflict(
            OnConflict::column(coupons::Column::Code)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    tracing::debug!(inserted, "seeded coupons");
    Ok(inserted)
}

fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::PasswordHash(e.to_string()))?
        .to_string();
    Ok(hash)
}
