use actix_web::{web, Responder};
use serde::Serialize;
use crate::server;

/// Readiness of the dataset behind the lookup form.
#[derive(Debug, Serialize)]
pub struct Status {
    dataset_loaded: bool,
    dataset_rows: u64,
}

pub async fn get(data: web::Data<server::State>)
-> actix_web::Result<impl Responder> {
    Ok(web::Json(Status {
        dataset_loaded: data.db.dataset_loaded(),
        dataset_rows: data.db.dataset_rows(),
    }))
}
