mod create_movie;
mod delete_movie;
mod filter_movies;
mod get_movies;
mod paginate_movies;
mod sort_movies;
pub mod types;
mod update_movie;
mod util;

pub use create_movie::*;
pub use delete_movie::*;
pub use filter_movies::*;
pub use get_movies::*;
pub use paginate_movies::*;
pub use sort_movies::*;
pub use update_movie::*;
pub use util::*;
