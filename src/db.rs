use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;

use crate::config;
use crate::models::attendance;

pub type DbPool = Pool<SqliteConnectionManager>;

pub const MIGRATIONS: &str = include_str!("schema.sql");

pub fn init_pool(database_url: &str) -> DbPool {
    let manager = SqliteConnectionManager::file(database_url).with_init(|conn| {
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
        Ok(())
    });
    Pool::builder()
        .max_size(8)
        .build(manager)
        .expect("Failed to create DB pool")
}

pub fn run_migrations(pool: &DbPool) {
    let conn = pool.get().expect("Failed to get DB connection for migrations");
    conn.execute_batch(MIGRATIONS)
        .expect("Failed to run migrations");
    log::info!("Database migrations complete");
}

/// Seed the fixed roster if the store is empty. All participants and
/// their absent marks are created in one transaction; an already
/// seeded database is left untouched.
pub fn seed_roster(pool: &DbPool) {
    let mut conn = pool.get().expect("Failed to get DB connection for seeding");
    match attendance::seed(&mut conn, config::SEED_NAMES, config::date_count()) {
        Ok(true) => log::info!(
            "Seeded {} participants x {} dates",
            config::SEED_NAMES.len(),
            config::date_count()
        ),
        Ok(false) => log::info!("Database already seeded, skipping"),
        Err(e) => log::error!("Roster seed failed: {e}"),
    }
}
