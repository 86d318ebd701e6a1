use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::infra::config::AppConfig;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

pub async fn init_db(config: &AppConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(config.db.url.as_str())?
        .create_if_missing(true)
        .foreign_keys(true);
    // In-memory databases live as long as their connection, so connections are never recycled.
    let pool = SqlitePoolOptions::new()
        .max_connections(config.db.max_connections as u32)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;
    info!("Connected to database!");
    MIGRATOR.run(&pool).await?;
    info!("Database migrations applied");
    Ok(pool)
}
