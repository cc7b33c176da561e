use actix_web::{
    web::{Data, Path},
    HttpResponse,
};
use serde::{Deserialize, Serialize};

use crate::catalog::{PageMetadata, PageRequest};
use crate::error::MovieError;
use crate::store::{Movie, MovieStore};

#[derive(Serialize, Deserialize, Debug)]
pub struct MoviePage {
    pub movies: Vec<Movie>,
    #[serde(flatten)]
    pub metadata: PageMetadata,
}

/// Pages through the whole collection; filters do not apply here.
pub async fn paginate_movies(
    store: Data<MovieStore>,
    path: Path<(String, String)>,
) -> Result<HttpResponse, MovieError> {
    let (page, limit) = path.into_inner();
    let request = PageRequest::parse(&page, &limit).inspect_err(|err| {
        tracing::error!("Invalid page request: {}", err);
    })?;
    let (movies, total) = tokio::try_join!(store.page(request), store.count())
        .map_err(MovieError::store("Error fetching paginated movies"))?;
    Ok(HttpResponse::Ok().json(MoviePage {
        movies,
        metadata: request.metadata(total),
    }))
}
