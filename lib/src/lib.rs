//! Library for citylook, an application that imports a JSON city dataset
//! into an embedded DuckDB database and looks rows up by identifier.

pub mod config;
mod configrefs;
pub mod db;
pub mod types;
