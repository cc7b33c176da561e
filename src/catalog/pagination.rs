use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PaginationError {
    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber { field: &'static str, value: String },
    #[error("{field} must be at least 1, got {value}")]
    BelowOne { field: &'static str, value: i64 },
    #[error("page {page} with limit {limit} is out of range")]
    OutOfRange { page: i64, limit: i64 },
}

/// A 1-based page of `limit` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    limit: i64,
    offset: i64,
}

/// Metadata returned next to a page of movies.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_movies: i64,
}

fn parse_number(field: &'static str, value: &str) -> Result<i64, PaginationError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| PaginationError::NotANumber {
            field,
            value: value.to_string(),
        })
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Result<Self, PaginationError> {
        if page < 1 {
            return Err(PaginationError::BelowOne {
                field: "page",
                value: page,
            });
        }
        if limit < 1 {
            return Err(PaginationError::BelowOne {
                field: "limit",
                value: limit,
            });
        }
        let offset = (page - 1)
            .checked_mul(limit)
            .ok_or(PaginationError::OutOfRange { page, limit })?;
        Ok(PageRequest {
            page,
            limit,
            offset,
        })
    }

    pub fn parse(page: &str, limit: &str) -> Result<Self, PaginationError> {
        Self::new(parse_number("page", page)?, parse_number("limit", limit)?)
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn metadata(&self, total_movies: i64) -> PageMetadata {
        let total_pages = total_movies / self.limit + i64::from(total_movies % self.limit != 0);
        PageMetadata {
            current_page: self.page,
            total_pages,
            total_movies,
        }
    }
}
