use actix_web::web;
use actix_web::dev::HttpServiceFactory;
use citylook::config::{self, Config};
use crate::configrefs;

mod city;
pub mod notfound;
mod status;

pub const GET_CITY: &str = "get city";
pub const GET_STATUS: &str = "get status";

pub fn service<C>(cfg: &C) -> Result<impl HttpServiceFactory, String>
where
    C: Config + ?Sized,
{
    Ok(web::scope(&config::get_ref(cfg, &configrefs::SERVER_API_PATH)?)
        .service(web::resource("/status").name(GET_STATUS).get(status::get))
        .service(web::resource("/city").name(GET_CITY).get(city::get)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;
    use actix_web::{test, web, App};
    use actix_web::http::StatusCode;
    use citylook::config::{self, map::Entry, Config};
    use serde_json::json;
    use tempfile::NamedTempFile;
    use crate::server::State;

    const DATASET: &str = r#"[
        {"id": 1, "name": "Alpha", "population": 1000},
        {"id": 2, "name": "Beta", "population": 2000}
    ]"#;

    fn dataset_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn section(entries: &[(&str, Entry)]) -> Entry {
        Entry::Section(entries.iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect())
    }

    /// Config with an in-memory engine and the given dataset source;
    /// the webserver keys all take their defaults.
    fn test_cfg(source: &str) -> Box<dyn Config> {
        Box::new(config::map::new(HashMap::from([
            ("db".to_owned(), section(&[
                ("duckdb", section(&[
                    ("db-path", Entry::Value(":memory:".to_owned())),
                    ("dataset-source", Entry::Value(source.to_owned())),
                ])),
            ])),
        ])))
    }

    macro_rules! test_app {
        ($source:expr) => {{
            let state = State::new(test_cfg($source)).unwrap();
            let cfg = test_cfg($source);
            test::init_service(
                App::new()
                    .app_data(web::Data::new(state))
                    .service(super::service(cfg.as_ref()).unwrap()),
            ).await
        }};
    }

    #[actix_web::test]
    async fn city_lookup_returns_matching_row() {
        let file = dataset_file(DATASET);
        let app = test_app!(file.path().to_str().unwrap());

        let req = test::TestRequest::get()
            .uri("/api/city?id=1").to_request();
        let rows: serde_json::Value =
            test::call_and_read_body_json(&app, req).await;
        assert_eq!(rows,
                   json!([{"id": 1, "name": "Alpha", "population": 1000}]));
    }

    #[actix_web::test]
    async fn city_lookup_absent_id_returns_empty_array() {
        let file = dataset_file(DATASET);
        let app = test_app!(file.path().to_str().unwrap());

        let req = test::TestRequest::get()
            .uri("/api/city?id=3").to_request();
        let rows: serde_json::Value =
            test::call_and_read_body_json(&app, req).await;
        assert_eq!(rows, json!([]));
    }

    #[actix_web::test]
    async fn city_lookup_rejects_non_numeric_id() {
        let file = dataset_file(DATASET);
        let app = test_app!(file.path().to_str().unwrap());

        let req = test::TestRequest::get()
            .uri("/api/city?id=abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn status_reports_loaded_dataset() {
        let file = dataset_file(DATASET);
        let app = test_app!(file.path().to_str().unwrap());

        let req = test::TestRequest::get().uri("/api/status").to_request();
        let status: serde_json::Value =
            test::call_and_read_body_json(&app, req).await;
        assert_eq!(status,
                   json!({"dataset_loaded": true, "dataset_rows": 2}));
    }

    #[actix_web::test]
    async fn status_reports_not_loaded_on_failed_import() {
        let app = test_app!("/nonexistent/data.json");

        let req = test::TestRequest::get().uri("/api/status").to_request();
        let status: serde_json::Value =
            test::call_and_read_body_json(&app, req).await;
        assert_eq!(status,
                   json!({"dataset_loaded": false, "dataset_rows": 0}));
    }
}
