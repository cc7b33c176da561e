use super::{
    create_movie, delete_movie, filter_movies, get_movie, get_movies, paginate_movies,
    sort_movies, update_movie,
};
use crate::middleware::Authentication;
use actix_web::{web, Scope};
use std::borrow::Cow;
use validator::ValidationError;

use super::types::normalize_release_date;

const MAX_TITLE_LENGTH: usize = 255;

/// Named routes come before `{id}`, which only matches digits.
pub fn movie_source(jwt_secret: &str) -> Scope {
    web::scope("/movies")
        .route("", web::get().to(get_movies))
        .route(
            "",
            web::post()
                .to(create_movie)
                .wrap(Authentication::new(jwt_secret)),
        )
        .route("/filter", web::get().to(filter_movies))
        .route("/sort/{field}/{order}", web::get().to(sort_movies))
        .route("/page/{page}/{limit}", web::get().to(paginate_movies))
        .route(r"/{id:\d+}", web::get().to(get_movie))
        .route(
            r"/{id:\d+}",
            web::put()
                .to(update_movie)
                .wrap(Authentication::new(jwt_secret)),
        )
        .route(
            r"/{id:\d+}",
            web::delete()
                .to(delete_movie)
                .wrap(Authentication::new(jwt_secret)),
        )
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(
            ValidationError::new("Invalid length").with_message(Cow::from("Title can't be empty"))
        );
    }
    if title.trim().chars().count() > MAX_TITLE_LENGTH {
        return Err(ValidationError::new("Invalid length")
            .with_message(Cow::from("Title must be at most 255 characters long")));
    }
    Ok(())
}

pub fn validate_release_date(released: &str) -> Result<(), ValidationError> {
    if normalize_release_date(released).is_none() {
        return Err(ValidationError::new("Invalid date").with_message(Cow::from(
            "Release date must be a date (YYYY-MM-DD) or an ISO 8601 datetime",
        )));
    }
    Ok(())
}
