use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::StoreError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub release_year: i32,
    pub rated: String,
    pub released: NaiveDate,
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
    pub metascore: Option<i32>,
    pub imdb_rating: Option<f64>,
    pub imdb_votes: Option<i32>,
    pub imdb_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub images: Option<Vec<String>>,
}

/// A `movies` row as stored. `images` is serialized JSON text.
#[derive(sqlx::FromRow, Debug)]
pub struct MovieRow {
    id: i32,
    title: String,
    release_year: i32,
    rated: String,
    released: NaiveDate,
    duration: i32,
    genre: String,
    director: String,
    writer: String,
    actors: String,
    plot: String,
    language: String,
    country: String,
    awards: String,
    image_url: String,
    metascore: Option<i32>,
    imdb_rating: Option<f64>,
    imdb_votes: Option<i32>,
    imdb_id: String,
    #[sqlx(rename = "type")]
    kind: String,
    images: Option<String>,
}

impl TryFrom<MovieRow> for Movie {
    type Error = StoreError;

    fn try_from(row: MovieRow) -> Result<Self, Self::Error> {
        let images = row
            .images
            .as_deref()
            .map(serde_json::from_str::<Vec<String>>)
            .transpose()
            .map_err(|source| StoreError::CorruptImages { id: row.id, source })?;
        Ok(Movie {
            id: row.id,
            title: row.title,
            release_year: row.release_year,
            rated: row.rated,
            released: row.released,
            duration: row.duration,
            genre: row.genre,
            director: row.director,
            writer: row.writer,
            actors: row.actors,
            plot: row.plot,
            language: row.language,
            country: row.country,
            awards: row.awards,
            image_url: row.image_url,
            metascore: row.metascore,
            imdb_rating: row.imdb_rating,
            imdb_votes: row.imdb_votes,
            imdb_id: row.imdb_id,
            kind: row.kind,
            images,
        })
    }
}

/// The full attribute set of a movie that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub release_year: i32,
    pub rated: String,
    pub released: NaiveDate,
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
    pub metascore: Option<i32>,
    pub imdb_rating: Option<f64>,
    pub imdb_votes: Option<i32>,
    pub imdb_id: String,
    pub kind: String,
    pub images: Option<Vec<String>>,
}

impl NewMovie {
    pub(crate) fn images_json(&self) -> Result<Option<String>, StoreError> {
        self.images
            .as_ref()
            .map(serde_json::to_string)
            .transpose()
            .map_err(StoreError::SerializeImages)
    }
}

/// The columns touched by an update.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieChanges {
    pub title: String,
    pub plot: String,
    pub release_year: i32,
    pub duration: i32,
    pub imdb_rating: Option<f64>,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(images: Option<&str>) -> MovieRow {
        MovieRow {
            id: 7,
            title: "Heat".into(),
            release_year: 1995,
            rated: "R".into(),
            released: NaiveDate::from_ymd_opt(1995, 12, 15).unwrap(),
            duration: 170,
            genre: "Crime, Drama".into(),
            director: "Michael Mann".into(),
            writer: "Michael Mann".into(),
            actors: "Al Pacino, Robert De Niro".into(),
            plot: "A heist crew and a detective.".into(),
            language: "English".into(),
            country: "USA".into(),
            awards: "N/A".into(),
            image_url: "https://img.example/heat.jpg".into(),
            metascore: Some(76),
            imdb_rating: Some(8.3),
            imdb_votes: None,
            imdb_id: "tt0113277".into(),
            kind: "movie".into(),
            images: images.map(String::from),
        }
    }

    #[test]
    fn stored_images_are_decoded_into_a_list() {
        let movie = Movie::try_from(row(Some(r#"["a.jpg","b.jpg"]"#))).unwrap();
        assert_eq!(movie.images, Some(vec!["a.jpg".into(), "b.jpg".into()]));
        assert_eq!(Movie::try_from(row(None)).unwrap().images, None);
    }

    #[test]
    fn malformed_stored_images_are_a_store_error() {
        let err = Movie::try_from(row(Some("not json"))).unwrap_err();
        assert!(matches!(err, StoreError::CorruptImages { id: 7, .. }));
    }

    #[test]
    fn movie_serializes_kind_as_type_and_released_as_date() {
        let value = serde_json::to_value(Movie::try_from(row(None)).unwrap()).unwrap();
        assert_eq!(value["type"], "movie");
        assert_eq!(value["released"], "1995-12-15");
        assert!(value["images"].is_null());
        assert!(value.get("kind").is_none());
    }
}
