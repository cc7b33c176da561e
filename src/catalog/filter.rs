use serde::Deserialize;
use thiserror::Error;

pub const FILTER_BASE_QUERY: &str = "SELECT DISTINCT m.* FROM movies m \
     LEFT JOIN movie_genres mg ON m.id = mg.movie_id \
     LEFT JOIN genres g ON mg.genre_id = g.id \
     WHERE 1=1";

/// Raw `?title=&genre=&min_rating=&max_rating=&release_year=` input.
#[derive(Deserialize, Debug, Default)]
pub struct FilterParams {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub min_rating: Option<String>,
    pub max_rating: Option<String>,
    pub release_year: Option<String>,
}

#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: &'static str, value: String },
    #[error("{field} must be a whole number, got '{value}'")]
    NotAnInteger { field: &'static str, value: String },
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct MovieFilter {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
    pub release_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    Float(f64),
    Integer(i32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterQuery {
    pub sql: String,
    pub params: Vec<FilterValue>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

fn parse_rating(field: &'static str, value: Option<String>) -> Result<Option<f64>, FilterError> {
    let Some(value) = present(value) else {
        return Ok(None);
    };
    match value.trim().parse::<f64>() {
        Ok(rating) if rating.is_finite() => Ok(Some(rating)),
        _ => Err(FilterError::NotANumber { field, value }),
    }
}

fn parse_year(field: &'static str, value: Option<String>) -> Result<Option<i32>, FilterError> {
    let Some(value) = present(value) else {
        return Ok(None);
    };
    value
        .trim()
        .parse::<i32>()
        .map(Some)
        .map_err(|_| FilterError::NotAnInteger { field, value })
}

impl TryFrom<FilterParams> for MovieFilter {
    type Error = FilterError;

    fn try_from(params: FilterParams) -> Result<Self, Self::Error> {
        Ok(MovieFilter {
            title: present(params.title),
            genre: present(params.genre),
            min_rating: parse_rating("min_rating", params.min_rating)?,
            max_rating: parse_rating("max_rating", params.max_rating)?,
            release_year: parse_year("release_year", params.release_year)?,
        })
    }
}

impl FilterQuery {
    fn new() -> Self {
        FilterQuery {
            sql: FILTER_BASE_QUERY.to_string(),
            params: Vec::new(),
        }
    }

    fn and(&mut self, predicate: &'static str, value: FilterValue) {
        self.params.push(value);
        self.sql
            .push_str(&format!(" AND {} ${}", predicate, self.params.len()));
    }

    pub fn predicate_count(&self) -> usize {
        self.params.len()
    }
}

impl MovieFilter {
    /// Builds the listing query. Predicates are appended in a fixed order
    /// (title, genre, min rating, max rating, release year) so placeholder
    /// numbers always line up with `params`.
    pub fn to_query(&self) -> FilterQuery {
        let mut query = FilterQuery::new();
        if let Some(title) = &self.title {
            query.and("m.title LIKE", FilterValue::Text(format!("%{}%", title)));
        }
        if let Some(genre) = &self.genre {
            query.and("g.name =", FilterValue::Text(genre.clone()));
        }
        if let Some(min_rating) = self.min_rating {
            query.and("m.imdb_rating >=", FilterValue::Float(min_rating));
        }
        if let Some(max_rating) = self.max_rating {
            query.and("m.imdb_rating <=", FilterValue::Float(max_rating));
        }
        if let Some(release_year) = self.release_year {
            query.and("m.release_year =", FilterValue::Integer(release_year));
        }
        query.sql.push_str(" ORDER BY m.id");
        query
    }
}
