use std::{cmp::max, time::Duration};

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

use crate::config::DatabaseConfig;

fn connect_options(config: &DatabaseConfig) -> ConnectOptions {
    let mut options = ConnectOptions::new(config.url());
    options
        .min_connections(max(num_cpus::get() as u32, 2))
        .max_connections(max(num_cpus::get() as u32 * 4, 10))
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(3600))
        .sqlx_logging(true)
        .set_schema_search_path(config.schema());
    options
}

pub async fn init(config: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(connect_options(config)).await?;
    db.ping().await?;

    tracing::info!("Database connected successfully");

    log_db_version(&db).await?;

    Ok(db)
}

async fn log_db_version(db: &DatabaseConnection) -> anyhow::Result<()> {
    let version = db
        .query_one(Statement::from_string(
            db.get_database_backend(),
            "SELECT version()".to_owned(),
        ))
        .await?
        .ok_or_else(|| anyhow::anyhow!("Could not retrieve database version"))?;

    let version_str: String = version.try_get_by_index::<String>(0)?;
    tracing::info!("Database version: {}", version_str);

    Ok(())
}
