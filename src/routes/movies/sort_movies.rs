use actix_web::{
    web::{Data, Path},
    HttpResponse,
};

use crate::catalog::SortSpec;
use crate::error::MovieError;
use crate::store::MovieStore;

pub async fn sort_movies(
    store: Data<MovieStore>,
    path: Path<(String, String)>,
) -> Result<HttpResponse, MovieError> {
    let (field, order) = path.into_inner();
    let sort = SortSpec::parse(&field, &order).inspect_err(|err| {
        tracing::error!("Invalid sort request: {}", err);
    })?;
    let movies = store
        .sorted(sort)
        .await
        .map_err(MovieError::store("Error sorting movies"))?;
    Ok(HttpResponse::Ok().json(movies))
}
