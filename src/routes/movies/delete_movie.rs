use actix_web::{
    web::{Data, Path},
    HttpResponse,
};

use crate::error::MovieError;
use crate::store::MovieStore;
use crate::util::ResponseMessage;

pub async fn delete_movie(
    store: Data<MovieStore>,
    id: Path<i32>,
) -> Result<HttpResponse, MovieError> {
    let id = id.into_inner();
    let deleted = store
        .delete(id)
        .await
        .map_err(MovieError::store("Error deleting movie"))?;
    if !deleted {
        tracing::info!("Movie {} not found", id);
        return Err(MovieError::NotFound);
    }
    tracing::info!("Movie {} deleted", id);
    Ok(HttpResponse::Ok().json(ResponseMessage::new("Movie deleted")))
}
