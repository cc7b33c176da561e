use crate::util::ResponseMessage;
use actix_web::HttpResponse;

pub async fn handler() -> HttpResponse {
    tracing::info!("Liveness probe");
    HttpResponse::Ok().json(ResponseMessage::new("Server is working!"))
}
