use actix_web::{
    web::{Data, Json},
    HttpResponse,
};
use serde_json::json;

use super::types::CreateMovieRequest;
use crate::error::MovieError;
use crate::store::{MovieStore, NewMovie};

pub async fn create_movie(
    store: Data<MovieStore>,
    body: Json<CreateMovieRequest>,
) -> Result<HttpResponse, MovieError> {
    let movie = NewMovie::try_from(body.into_inner()).inspect_err(|err| {
        tracing::error!("Rejected movie: {}", err);
    })?;
    let id = store
        .insert(&movie)
        .await
        .map_err(MovieError::store("Error creating movie"))?;
    tracing::info!("Movie {} created", id);
    Ok(HttpResponse::Created().json(json!({
        "message": "Movie created",
        "id": id
    })))
}
