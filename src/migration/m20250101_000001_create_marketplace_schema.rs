use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::extension::postgres::Type;

use crate::schema;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();

        for stmt in schema::create_types(backend) {
            manager.create_type(stmt).await?;
        }
        for stmt in schema::create_tables(backend) {
            manager.create_table(stmt).await?;
        }
        for stmt in schema::create_indexes() {
            manager.create_index(stmt).await?;
        }

        tracing::info!(tables = schema::TABLES.len(), "marketplace schema created");
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in schema::TABLES.iter().rev() {
            manager
                .drop_table(
                    Table::drop()
                        .table(Alias::new(*table))
                        .if_exists()
                        .cascade()
                        .to_owned(),
                )
                .await?;
        }
        for name in schema::TYPES {
            manager
                .drop_type(Type::drop().if_exists().name(Alias::new(name)).to_owned())
                .await?;
        }

        tracing::info!("marketplace schema dropped");
        Ok(())
    }
}
