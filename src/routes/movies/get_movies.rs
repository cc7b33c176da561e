use actix_web::{
    web::{Data, Path},
    HttpResponse,
};

use crate::error::MovieError;
use crate::store::MovieStore;

pub async fn get_movies(store: Data<MovieStore>) -> Result<HttpResponse, MovieError> {
    let movies = store
        .list_all()
        .await
        .map_err(MovieError::store("Error fetching movies"))?;
    tracing::info!("Fetched {} movies", movies.len());
    Ok(HttpResponse::Ok().json(movies))
}

pub async fn get_movie(
    store: Data<MovieStore>,
    id: Path<i32>,
) -> Result<HttpResponse, MovieError> {
    let id = id.into_inner();
    let movie = store
        .find_by_id(id)
        .await
        .map_err(MovieError::store("Error fetching movie"))?;
    match movie {
        Some(movie) => {
            tracing::info!("Found movie {}", id);
            Ok(HttpResponse::Ok().json(movie))
        }
        None => {
            tracing::info!("Movie {} not found", id);
            Err(MovieError::NotFound)
        }
    }
}
