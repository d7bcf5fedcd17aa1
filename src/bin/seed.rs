use marketplace_schema::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    seed, telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let report = seed::run(&orm).await?;

    println!(
        "Seed completed. Inserted {} user(s), {} category(ies), {} coupon(s)",
        report.users, report.categories, report.coupons
    );
    Ok(())
}
