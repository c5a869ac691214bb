use actix_web::error::{ErrorBadRequest, ErrorInternalServerError};
use actix_web::{web, Responder};
use serde::{Deserialize, Serialize};
use citylook::types::City;
use crate::server;

#[derive(Debug, Deserialize)]
pub struct Params {
    id: String,
}

#[derive(Debug, Serialize)]
pub struct Row {
    id: i64,
    name: String,
    population: i64,
}

impl From<City> for Row {
    fn from(city: City) -> Row {
        Row {
            id: city.id,
            name: city.name,
            population: city.population,
        }
    }
}

/// Look up all rows matching the `id` query parameter.
///
/// The identifier is validated here and passed to the engine as a
/// bound parameter; non-numeric input never reaches a statement.
pub async fn get(
    data: web::Data<server::State>,
    params: web::Query<Params>,
) -> actix_web::Result<impl Responder> {
    let id: i64 = params.id.trim().parse()
        .map_err(|_| ErrorBadRequest(
            format!("invalid city id: {}", params.id)))?;
    let rows = data.db
        .find_cities(id)
        .map_err(ErrorInternalServerError)?
        .into_iter()
        .map(Row::from)
        .collect::<Vec<_>>();
    Ok(web::Json(rows))
}
