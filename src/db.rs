use anyhow::{Context, Result};
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{Sqlite, SqlitePoolOptions};
use sqlx::Pool;

/// Opens a pool on `database_url`, creating the database file and applying
/// migrations first if needed. Shared by the server and the seed utility.
pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<Pool<Sqlite>> {
    // verify db exists
    let exists = Sqlite::database_exists(database_url)
        .await
        .context("Failed to check whether the database exists")?;
    if !exists {
        tracing::info!("Unable to find database at {}, creating...", database_url);
        Sqlite::create_database(database_url)
            .await
            .with_context(|| format!("Unable to create database at {}", database_url))?;
        tracing::info!("Successfully created database at {}.", database_url);
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .with_context(|| format!("Failed to create pool on {}", database_url))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    tracing::info!("Database migrations applied");

    Ok(pool)
}
