use crate::config::{ValueRef, parse, validate};

pub const DB_DUCKDB_PATH: ValueRef<'static, String> = ValueRef {
    names: &["db", "duckdb", "db-path"],
    def: ":memory:",
    type_: &parse::STRING,
    validators: &[validate::NON_EMPTY],
};

pub const DB_DATASET_SOURCE: ValueRef<'static, String> = ValueRef {
    names: &["db", "duckdb", "dataset-source"],
    def: "./data.json",
    type_: &parse::DATASET_SOURCE,
    validators: &[validate::NON_EMPTY],
};
