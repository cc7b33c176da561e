use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use validator::Validate;

use super::{validate_release_date, validate_title};
use crate::error::MovieError;
use crate::store::{MovieChanges, NewMovie};

const RELEASE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d %b %Y", "%Y-%m-%dT%H:%M:%S%.f"];

/// Accepts a plain date, an OMDb style date (`16 Jul 2010`) or a datetime,
/// which is truncated to its date.
pub fn normalize_release_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime.date_naive());
    }
    RELEASE_DATE_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(value, format)
            .ok()
            .or_else(|| NaiveDateTime::parse_from_str(value, format).ok().map(|dt| dt.date()))
    })
}

#[derive(Deserialize, Validate, Debug)]
#[serde(deny_unknown_fields)]
pub struct CreateMovieRequest {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[validate(range(
        min = 1888,
        max = 2100,
        message = "Release year must be between 1888 and 2100"
    ))]
    pub release_year: i32,
    pub rated: String,
    #[validate(custom(function = "validate_release_date"))]
    pub released: String,
    #[validate(range(min = 1, message = "Duration must be a positive number of minutes"))]
    pub duration: i32,
    pub genre: String,
    pub director: String,
    pub writer: String,
    pub actors: String,
    pub plot: String,
    pub language: String,
    pub country: String,
    pub awards: String,
    pub image_url: String,
    #[validate(range(min = 0, max = 100, message = "Metascore must be between 0 and 100"))]
    pub metascore: Option<i32>,
    #[validate(range(min = 0.0, max = 10.0, message = "IMDb rating must be between 0 and 10"))]
    pub imdb_rating: Option<f64>,
    #[validate(range(min = 0, message = "IMDb votes can't be negative"))]
    pub imdb_votes: Option<i32>,
    pub imdb_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub images: Option<Vec<String>>,
}

impl TryFrom<CreateMovieRequest> for NewMovie {
    type Error = MovieError;

    fn try_from(body: CreateMovieRequest) -> Result<Self, Self::Error> {
        body.validate()?;
        let released = normalize_release_date(&body.released).ok_or_else(|| {
            MovieError::Validation(format!("Invalid release date '{}'", body.released))
        })?;
        Ok(NewMovie {
            title: body.title.trim().to_string(),
            release_year: body.release_year,
            rated: body.rated,
            released,
            duration: body.duration,
            genre: body.genre,
            director: body.director,
            writer: body.writer,
            actors: body.actors,
            plot: body.plot,
            language: body.language,
            country: body.country,
            awards: body.awards,
            image_url: body.image_url,
            metascore: body.metascore,
            imdb_rating: body.imdb_rating,
            imdb_votes: body.imdb_votes,
            imdb_id: body.imdb_id,
            kind: body.kind,
            images: body.images,
        })
    }
}

/// Update body. `description` is stored as the plot and `rating` as the IMDb
/// rating.
#[derive(Deserialize, Validate, Debug)]
#[serde(deny_unknown_fields)]
pub struct UpdateMovieRequest {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    pub description: String,
    #[validate(range(
        min = 1888,
        max = 2100,
        message = "Release year must be between 1888 and 2100"
    ))]
    pub release_year: i32,
    #[validate(range(min = 1, message = "Duration must be a positive number of minutes"))]
    pub duration: i32,
    #[validate(range(min = 0.0, max = 10.0, message = "Rating must be between 0 and 10"))]
    pub rating: Option<f64>,
    pub image_url: String,
}

impl TryFrom<UpdateMovieRequest> for MovieChanges {
    type Error = MovieError;

    fn try_from(body: UpdateMovieRequest) -> Result<Self, Self::Error> {
        body.validate()?;
        Ok(MovieChanges {
            title: body.title.trim().to_string(),
            plot: body.description,
            release_year: body.release_year,
            duration: body.duration,
            imdb_rating: body.rating,
            image_url: body.image_url,
        })
    }
}
