use crate::configuration::DatabaseSettings;
use crate::error::MovieError;
use crate::routes::hello_world::handler;
use crate::routes::movies::movie_source;
use crate::store::{MovieStore, StoreError};
use crate::util::ResponseMessage;

use actix_web::{
    dev::Server,
    error::{InternalError, JsonPayloadError, PathError, QueryPayloadError},
    web::{self, Data},
    App, HttpRequest, HttpResponse, HttpServer,
};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

use actix_cors::Cors;
use actix_web::http::header;
use serde_json::json;

fn configure_cors(frontend_url: &str) -> Cors {
    let mut cors = Cors::default();
    cors = if frontend_url == "*" {
        cors.allow_any_origin()
    } else {
        cors.allowed_origin(frontend_url)
    };
    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600)
}

/// Malformed, incomplete or mistyped bodies never reach a handler.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::error!("Rejected request body: {}", err);
    let response = HttpResponse::BadRequest().json(ResponseMessage::new(err.to_string()));
    InternalError::from_response(err, response).into()
}

/// Ids that match the route but not the id type (e.g. overflowing `i32`)
/// name no movie.
fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Rejected path: {}", err);
    MovieError::NotFound.into()
}

fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::error!("Rejected query string: {}", err);
    let response = HttpResponse::BadRequest().json(json!({
        "message": "Invalid filter parameters",
        "error": err.to_string(),
    }));
    InternalError::from_response(err, response).into()
}

/// Connects the pool, runs the one round-trip health check and applies
/// migrations. Nothing is bound until this succeeds.
pub async fn connect_store(settings: &DatabaseSettings) -> Result<MovieStore, StoreError> {
    let store = MovieStore::connect(settings).await.map_err(|err| {
        tracing::error!("Failed to connect to the database: {}", err);
        err
    })?;
    prepare_store(&store).await?;
    Ok(store)
}

pub async fn prepare_store(store: &MovieStore) -> Result<(), StoreError> {
    store.health_check().await.map_err(|err| {
        tracing::error!("Error executing test query: {}", err);
        err
    })?;
    store.migrate().await.map_err(|err| {
        tracing::error!("Failed to migrate the database: {}", err);
        err
    })
}

pub fn run_server(
    listener: TcpListener,
    store: MovieStore,
    frontend_url: String,
    jwt_secret: String,
) -> Result<Server, std::io::Error> {
    let store = Data::new(store);

    let server: Server = HttpServer::new(move || {
        let cors = configure_cors(frontend_url.as_str());
        App::new()
            .wrap(cors)
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .app_data(store.clone())
            .route("/test", web::get().to(handler))
            .service(movie_source(jwt_secret.as_str()))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
