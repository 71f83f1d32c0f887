use axum::extract::FromRef;
use shared_types::AppError;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

/// Shared application state passed to Axum handlers via `State`.
/// Derives `FromRef` so handlers can extract `State<PgPool>` directly.
#[derive(Clone, FromRef)]
pub struct AppState {
    pub pool: Pool<Postgres>,
}

/// Pool created lazily; no connections are opened until the first query, so
/// each `#[tokio::test]` runtime can share it.
static POOL: OnceLock<Pool<Postgres>> = OnceLock::new();
static MIGRATED: AtomicBool = AtomicBool::new(false);

/// Create a connection pool from `DATABASE_URL` / `DATABASE_MAX_CONNECTIONS`.
pub fn create_pool() -> Result<Pool<Postgres>, AppError> {
    // .env is optional; production sets the variables directly.
    let _ = dotenvy::dotenv();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| AppError::internal("DATABASE_URL must be set"))?;

    let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_lazy(&database_url)
        .map_err(|e| AppError::database(format!("Failed to create database pool: {e}")))
}

/// Apply pending migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &Pool<Postgres>) -> Result<(), AppError> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to run database migrations: {e}")))
}

/// Get or initialize the process-wide pool used by server functions.
/// Migrations run once on the first successful call.
///
/// REST handlers use `State<PgPool>` from `AppState` instead.
pub async fn get_db() -> Result<&'static Pool<Postgres>, AppError> {
    let pool = match POOL.get() {
        Some(pool) => pool,
        None => {
            let created = create_pool()?;
            // A concurrent caller may have won the race; either pool is fine.
            let _ = POOL.set(created);
            POOL.get()
                .ok_or_else(|| AppError::internal("Database pool unavailable"))?
        }
    };

    if !MIGRATED.swap(true, Ordering::SeqCst) {
        if let Err(e) = run_migrations(pool).await {
            MIGRATED.store(false, Ordering::SeqCst);
            tracing::error!(error = %e, "database migrations failed");
            return Err(e);
        }
    }

    Ok(pool)
}
