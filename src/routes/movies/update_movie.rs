use actix_web::{
    web::{Data, Json, Path},
    HttpResponse,
};

use super::types::UpdateMovieRequest;
use crate::error::MovieError;
use crate::store::{MovieChanges, MovieStore};
use crate::util::ResponseMessage;

pub async fn update_movie(
    store: Data<MovieStore>,
    id: Path<i32>,
    body: Json<UpdateMovieRequest>,
) -> Result<HttpResponse, MovieError> {
    let id = id.into_inner();
    let changes = MovieChanges::try_from(body.into_inner()).inspect_err(|err| {
        tracing::error!("Rejected update of movie {}: {}", id, err);
    })?;
    let updated = store
        .update(id, &changes)
        .await
        .map_err(MovieError::store("Error updating movie"))?;
    if !updated {
        tracing::info!("Movie {} not found", id);
        return Err(MovieError::NotFound);
    }
    tracing::info!("Movie {} updated", id);
    Ok(HttpResponse::Ok().json(ResponseMessage::new("Movie updated")))
}
