pub mod migrations;
pub mod repository;
pub mod store;

use anyhow::Context;
use rusqlite::Connection;

pub use repository::AppointmentRepository;
pub use store::{KeyValueStore, MemoryStore, SqliteStore};

pub fn init_db(path: &str) -> anyhow::Result<Connection> {
    let conn = Connection::open(path).context("failed to open database")?;

    conn.execute_batch("PRAGMA journal_mode=WAL;")
        .context("failed to set database pragmas")?;

    migrations::run_migrations(&conn)?;

    Ok(conn)
}
