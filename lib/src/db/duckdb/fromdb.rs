use duckdb::Row;
use crate::db::DbResult;
use crate::types::City;

pub fn internal_err<T>(r: duckdb::Result<T>) -> DbResult<T> {
    r.map_err(|e| format!("internal error: {e}"))
}

pub fn internal_err_fn<T, F>(f: F) -> DbResult<T>
where
    F: FnOnce() -> duckdb::Result<T>,
{
    internal_err(f())
}

pub const CITIES_SQL: &str = "id, name, population";

/// for result selected by [`CITIES_SQL`]
pub fn city(r: &Row) -> duckdb::Result<City> {
    Ok(City {
        id: r.get(0)?,
        name: r.get(1)?,
        population: r.get(2)?,
    })
}
