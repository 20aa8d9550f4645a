use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Builds the pool behind the settings store. Connections open on first use,
/// so the site boots even while the datastore is unreachable; affected pages
/// render "Failed to load resume" until it comes back.
pub fn create_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect_lazy(database_url)
        .context("DATABASE_URL is not a valid PostgreSQL connection string")?;

    info!("Settings store pool configured");
    Ok(pool)
}
