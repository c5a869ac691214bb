//! Gateway to the embedded analytical engine.
//!
//! All storage, schema inference and query execution is delegated to the
//! engine; this module owns only the bootstrap/import/lookup workflow.

use crate::config::{self, Config};
use crate::configrefs;
use crate::types::City;

mod duckdb;
pub mod util;

pub type DbResult<T> = Result<T, String>;
pub type DbResults<T> = DbResult<Vec<T>>;

/// Name of the table the dataset is imported into.
pub const CITIES_TABLE: &str = "cities";

pub trait Db {
    /// Import the JSON document at `source` (filesystem path or URL)
    /// into the cities table, inferring the schema automatically, and
    /// return the number of rows imported.
    ///
    /// A repeated call after a successful import is a no-op returning
    /// the already-imported row count.
    fn load_dataset(&mut self, source: &str) -> DbResult<u64>;

    /// Whether a dataset has been successfully imported.
    fn dataset_loaded(&self) -> bool;

    /// Number of rows imported, or 0 before a successful import.
    fn dataset_rows(&self) -> u64;

    /// All rows whose identifier equals `id`, in engine result order.
    ///
    /// An identifier matching no row yields an empty vector, not an
    /// error.
    fn find_cities(&self, id: i64) -> DbResults<City>;
}

/// Start the engine and return the long-lived handle.
///
/// The handle lives for the lifetime of the process and is reclaimed at
/// exit; it is never explicitly torn down.
pub fn open<C>(cfg: &C) -> DbResult<impl Db>
where
    C: Config + ?Sized,
{
    duckdb::open(&config::get_ref(cfg, &configrefs::DB_DUCKDB_PATH)?)
}

/// The dataset source configured for the import step.
pub fn dataset_source<C>(cfg: &C) -> DbResult<String>
where
    C: Config + ?Sized,
{
    config::get_ref(cfg, &configrefs::DB_DATASET_SOURCE)
}
