use std::time::Duration;

use sea_orm::sea_query::{
    Index, IndexCreateStatement, MysqlQueryBuilder, PostgresQueryBuilder, SqliteQueryBuilder,
};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr};
use tracing::{info, warn};

use crate::config::DatabaseConfig;
use crate::entity::{employee, employee_asset, pc_laptop, system_asset};

/// Open the connection pool and synchronise the schema from the entity registry.
pub async fn init_db(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.url.to_owned());

    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(opt).await?;
    db.get_schema_registry("inventory_server::entity::*")
        .sync(&db)
        .await?;

    info!(backend = ?db.get_database_backend(), "Database schema synchronised");
    Ok(db)
}

/// Close the pool. Called by the entry point once the server has drained.
pub async fn close_db(db: DatabaseConnection) -> Result<(), DbErr> {
    db.close().await?;
    info!("Database connection closed");
    Ok(())
}

/// Ensure listing indexes exist.
///
/// Schema-sync only creates unique indexes, so the non-unique ones used by
/// the newest-first listings are created here.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    let indexes = [
        (
            "idx_system_asset_created",
            Index::create()
                .if_not_exists()
                .name("idx_system_asset_created")
                .table(system_asset::Entity)
                .col(system_asset::Column::CreatedAt)
                .to_owned(),
        ),
        (
            "idx_system_asset_category_created",
            Index::create()
                .if_not_exists()
                .name("idx_system_asset_category_created")
                .table(system_asset::Entity)
                .col(system_asset::Column::Category)
                .col(system_asset::Column::CreatedAt)
                .to_owned(),
        ),
        (
            "idx_pc_laptop_created",
            Index::create()
                .if_not_exists()
                .name("idx_pc_laptop_created")
                .table(pc_laptop::Entity)
                .col(pc_laptop::Column::CreatedAt)
                .to_owned(),
        ),
        (
            "idx_employee_created",
            Index::create()
                .if_not_exists()
                .name("idx_employee_created")
                .table(employee::Entity)
                .col(employee::Column::CreatedAt)
                .to_owned(),
        ),
        (
            "idx_employee_asset_asset",
            Index::create()
                .if_not_exists()
                .name("idx_employee_asset_asset")
                .table(employee_asset::Entity)
                .col(employee_asset::Column::AssetId)
                .to_owned(),
        ),
    ];

    let backend = db.get_database_backend();
    for (name, index) in &indexes {
        match db.execute_unprepared(&build_index(backend, index)).await {
            Ok(_) => info!("Ensured index {} exists", name),
            Err(e) => warn!("Failed to create index {}: {}", name, e),
        }
    }

    Ok(())
}

fn build_index(backend: DbBackend, index: &IndexCreateStatement) -> String {
    match backend {
        DbBackend::Postgres => index.to_string(PostgresQueryBuilder),
        DbBackend::Sqlite => index.to_string(SqliteQueryBuilder),
        _ => index.to_string(MysqlQueryBuilder),
    }
}
