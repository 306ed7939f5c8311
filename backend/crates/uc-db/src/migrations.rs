use crate::Result as DbErrorResult;

use sqlx::SqlitePool;

/// Apply every pending migration under `uc-db/migrations`.
///
/// Already-applied versions are skipped, so this is safe to call on each startup.
pub async fn run_migrations(pool: &SqlitePool) -> DbErrorResult<()> {
    log::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    log::info!("Migrations complete");

    Ok(())
}
