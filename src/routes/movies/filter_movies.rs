use actix_web::{
    web::{Data, Query},
    HttpResponse,
};

use crate::catalog::{FilterParams, MovieFilter};
use crate::error::MovieError;
use crate::store::MovieStore;

pub async fn filter_movies(
    store: Data<MovieStore>,
    params: Query<FilterParams>,
) -> Result<HttpResponse, MovieError> {
    let filter = MovieFilter::try_from(params.into_inner()).inspect_err(|err| {
        tracing::error!("Invalid filter: {}", err);
    })?;
    let movies = store
        .filter(&filter)
        .await
        .map_err(MovieError::store("Error filtering movies"))?;
    tracing::info!("Filter matched {} movies", movies.len());
    Ok(HttpResponse::Ok().json(movies))
}
