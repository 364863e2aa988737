//! Server configuration
//!
//! Configuration comes from environment variables:
//!
//! - `DATABASE_URL` - SQLite database URL, defaults to a local file
//! - `JWT_SECRET` - session token signing secret (read in `auth::sessions`)
//! - `SERVER_PORT` - listen port, defaults to 5000
//!
//! Unlike services that can degrade without storage, this server is
//! nothing but a front on its store: if the pool cannot be created or the
//! migrations cannot run, startup fails.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

const DEFAULT_DATABASE_URL: &str = "sqlite://taskboard.db?mode=rwc";

/// Connect to the database and bring the schema up to date.
pub async fn load_database() -> Result<SqlitePool, sqlx::Error> {
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    tracing::info!("Connecting to database...");
    let pool = SqlitePoolOptions::new().connect(&database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed");

    Ok(pool)
}

/// Listen port, `SERVER_PORT` or 5000.
pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000)
}
