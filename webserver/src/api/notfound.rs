use actix_web::http::StatusCode;
use actix_web::HttpResponse;

pub async fn get() -> HttpResponse {
    HttpResponse::new(StatusCode::NOT_FOUND)
}
