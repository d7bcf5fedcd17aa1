use clap::{Parser, Subcommand};
use marketplace_schema::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    migration::Migrator,
    schema, telemetry,
};
use sea_orm_migration::MigratorTrait;

#[derive(Parser)]
#[command(name = "migrate")]
#[command(about = "Apply, revert or print the marketplace schema")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply all pending migrations (default)
    Up,
    /// Revert applied migrations
    Down {
        /// Number of migrations to revert
        #[arg(short = 'n', long, default_value_t = 1)]
        steps: u32,
    },
    /// Drop every table and reapply all migrations
    Fresh,
    /// Show applied and pending migrations
    Status,
    /// Print the schema DDL without connecting to a database
    Sql,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let command = Cli::parse().command.unwrap_or(Command::Up);
    if let Command::Sql = command {
        for stmt in schema::render_ddl() {
            println!("{stmt};");
        }
        return Ok(());
    }

    let config = AppConfig::from_env()?;
    let orm = create_orm_conn(&config).await?;

    match command {
        Command::Up => {
            run_migrations(&orm).await?;
            println!("Migrations applied");
        }
        Command::Down { steps } => {
            Migrator::down(&orm, Some(steps)).await?;
            println!("Reverted {steps} migration(s)");
        }
        Command::Fresh => {
            Migrator::fresh(&orm).await?;
            println!("Schema recreated");
        }
        Command::Status => Migrator::status(&orm).await?,
        Command::Sql => {}
    }

    Ok(())
}
