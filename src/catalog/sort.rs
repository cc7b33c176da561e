use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SortError {
    #[error("unsupported sort field '{0}'")]
    UnknownField(String),
    #[error("unsupported sort order '{0}'")]
    UnknownOrder(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    ReleaseYear,
    Rating,
    Duration,
}

impl SortField {
    pub fn column(self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::ReleaseYear => "release_year",
            SortField::Rating => "imdb_rating",
            SortField::Duration => "duration",
        }
    }
}

impl FromStr for SortField {
    type Err = SortError;

    fn from_str(field: &str) -> Result<Self, Self::Err> {
        match field {
            "title" => Ok(SortField::Title),
            "release_year" => Ok(SortField::ReleaseYear),
            "rating" => Ok(SortField::Rating),
            "duration" => Ok(SortField::Duration),
            _ => Err(SortError::UnknownField(field.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = SortError;

    fn from_str(order: &str) -> Result<Self, Self::Err> {
        match order.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(SortError::UnknownOrder(order.to_string())),
        }
    }
}

/// A validated sort request. `ORDER BY` cannot take bound parameters, so the
/// clause is rendered from the enum variants only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn parse(field: &str, order: &str) -> Result<Self, SortError> {
        Ok(SortSpec {
            field: field.parse()?,
            order: order.parse()?,
        })
    }

    /// Rows sharing a sort key fall back to id order.
    pub fn order_by_clause(&self) -> String {
        format!(
            "ORDER BY {} {}, id ASC",
            self.field.column(),
            self.order.keyword()
        )
    }
}
