use marketplace_schema::{config::AppConfig, db::create_orm_conn, migration::Migrator};
use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use sea_orm_migration::MigratorTrait;

/// Connect to the test database and rebuild the schema from scratch.
/// Returns `None` when no database is configured.
pub async fn fresh_database() -> anyhow::Result<Option<DatabaseConnection>> {
    // Allow skipping when no DB is configured in the environment.
    let database_url = match std::env::var("TEST_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
    {
        Ok(url) => url,
        Err(_) => {
            eprintln!(
                "Skipping test: set TEST_DATABASE_URL or DATABASE_URL to run database tests."
            );
            return Ok(None);
        }
    };

    let orm = create_orm_conn(&AppConfig::new(database_url)).await?;
    Migrator::fresh(&orm).await?;
    Ok(Some(orm))
}

#[allow(dead_code)]
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[allow(dead_code)]
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}
