//! Query composition for the movie listing endpoints.
//!
//! Everything in here is pure: request input goes in, SQL text plus the
//! values to bind come out. Execution happens in [`crate::store`].

mod filter;
mod pagination;
mod sort;

pub use filter::*;
pub use pagination::*;
pub use sort::*;
