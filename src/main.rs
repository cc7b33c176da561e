use dotenv::dotenv;
use movie_catalog_backend::configuration::get_configuration;
use movie_catalog_backend::startup;
use movie_catalog_backend::telemetry::{get_subscriber, init_subscriber};
use movie_catalog_backend::util::check_for_necessary_env;
use std::env;
use std::io::{Error, ErrorKind};
use std::net::TcpListener;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    let subscriber = get_subscriber("movie_catalog", "info", std::io::stdout);
    init_subscriber(subscriber).map_err(|err| Error::new(ErrorKind::Other, err))?;
    check_for_necessary_env()?;
    let jwt_secret =
        env::var("JWT_SECRET").map_err(|err| Error::new(ErrorKind::NotFound, err.to_string()))?;

    let configuration = get_configuration("configuration").map_err(|err| {
        Error::new(
            ErrorKind::Other,
            format!(
                "Failed to read `configuration.json`. Please make sure it exists and is valid JSON: {}",
                err
            ),
        )
    })?;

    // The listener is only bound once the database has answered.
    let store = startup::connect_store(&configuration.database)
        .await
        .map_err(|err| Error::new(ErrorKind::ConnectionRefused, err.to_string()))?;

    let listener = TcpListener::bind(configuration.address())?;
    tracing::info!("Server running on {}", configuration.address());
    let server = startup::run_server(
        listener,
        store.clone(),
        configuration.frontend_url.clone(),
        jwt_secret,
    )?;
    let result = server.await;
    store.close().await;
    result
}
