use duckdb::{params, Connection};
use crate::db::{DbResult, DbResults, CITIES_TABLE};
use crate::types::City;
use super::fromdb;

/// Quote a string as a single-quoted SQL literal.
///
/// The engine does not accept a bound parameter as a table function
/// argument inside CREATE TABLE AS, so the dataset source has to be
/// interpolated into the statement text.
fn quote_literal(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// Import the JSON document at `source` into the cities table with
/// automatic schema inference, replacing any previous table, and
/// return the imported row count.
pub fn create_cities_table(conn: &Connection, source: &str)
-> DbResult<u64> {
    // statically linked builds refuse INSTALL for extensions that are
    // already present, so failures here are not errors
    let _ = conn.execute_batch("INSTALL json; LOAD json;");

    conn.execute_batch(format!("
        CREATE OR REPLACE TABLE {CITIES_TABLE} AS
            SELECT * FROM read_json_auto({});
    ", quote_literal(source)).as_ref())
        .map_err(|e| format!("error importing dataset ({source}): {e}"))?;

    fromdb::internal_err(
        conn.query_row(
            format!("SELECT count(*) from {CITIES_TABLE}").as_ref(),
            [],
            |r| r.get::<_, i64>(0)))
        .map(|n| n as u64)
}

pub fn find_cities(conn: &Connection, id: i64) -> DbResults<City> {
    fromdb::internal_err_fn(|| {
        let mut stmt = conn.prepare(format!("
            SELECT {} from {CITIES_TABLE}
            WHERE id = ?
        ", fromdb::CITIES_SQL).as_ref())?;
        let rows = stmt.query_map(params![id], fromdb::city)?;
        rows.collect()
    })
}
