//! DuckDB database implementation.

use duckdb::Connection;
use log::{debug, info};
use crate::db::DbResult;
use crate::types::City;

mod fromdb;
mod read;

/// DuckDB [`Db`](crate::db::Db) implementation.
///
/// Holds the engine handle for the lifetime of the process.  Each
/// operation runs on a short-lived duplicate connection which is
/// released when the operation's scope ends, on success and failure
/// alike.
pub struct Db {
    conn: Connection,
    /// Latch set once a dataset import succeeds; holds the row count.
    /// Makes re-invocation of the import a no-op.
    loaded: Option<u64>,
}

/// Engine settings applied once at startup.
///
/// Extension auto-install is off so startup cannot depend on the
/// network; the bundled build already ships the JSON extension.
const ENGINE_SETTINGS: &str = "
    SET autoinstall_known_extensions = false;
    SET autoload_known_extensions = true;
";

/// Start the engine, in-memory for the `:memory:` sentinel and
/// file-backed otherwise, and apply the fixed engine settings.
pub fn open(db_path: &str) -> DbResult<impl crate::db::Db> {
    let conn = if db_path == ":memory:" {
        Connection::open_in_memory()
    } else {
        Connection::open(db_path)
    }
        .map_err(|e| format!("error opening database ({db_path}): {e}"))?;
    conn.execute_batch(ENGINE_SETTINGS)
        .map_err(|e| format!("error applying engine settings: {e}"))?;
    info!("engine started (db: {db_path})");
    Ok(Db { conn, loaded: None })
}

impl Db {
    /// Duplicate the engine connection for a single operation.  The
    /// duplicate shares the underlying database and is closed when
    /// dropped.
    fn connect(&self) -> DbResult<Connection> {
        self.conn.try_clone()
            .map_err(|e| format!("error opening connection: {e}"))
    }
}

impl crate::db::Db for Db {
    fn load_dataset(&mut self, source: &str) -> DbResult<u64> {
        if let Some(rows) = self.loaded {
            debug!("dataset already loaded ({rows} rows), skipping");
            return Ok(rows);
        }
        let conn = self.connect()?;
        let rows = read::create_cities_table(&conn, source)?;
        self.loaded = Some(rows);
        info!("dataset loaded from {source} ({rows} rows)");
        Ok(rows)
    }

    fn dataset_loaded(&self) -> bool {
        self.loaded.is_some()
    }

    fn dataset_rows(&self) -> u64 {
        self.loaded.unwrap_or(0)
    }

    fn find_cities(&self, id: i64) -> DbResult<Vec<City>> {
        let conn = self.connect()?;
        read::find_cities(&conn, id)
    }
}
