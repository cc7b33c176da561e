//! The movie repository: a store client owning the shared connection pool.

mod model;

pub use model::*;

use crate::catalog::{FilterValue, MovieFilter, PageRequest, SortSpec};
use crate::configuration::DatabaseSettings;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing::Instrument;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("stored images of movie {id} are not a valid list: {source}")]
    CorruptImages {
        id: i32,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize images: {0}")]
    SerializeImages(#[source] serde_json::Error),
}

const SELECT_MOVIES: &str = "SELECT * FROM movies";

/// Handlers receive this through `web::Data`; every query acquires a pooled
/// connection and releases it when done.
#[derive(Clone, Debug)]
pub struct MovieStore {
    pool: PgPool,
}

fn into_movies(rows: Vec<MovieRow>) -> Result<Vec<Movie>, StoreError> {
    rows.into_iter().map(Movie::try_from).collect()
}

impl MovieStore {
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(settings.acquire_timeout())
            .connect(settings.connection_string().as_str())
            .await?;
        tracing::info!(
            "Connected to postgres at {}:{} with up to {} connections",
            settings.host,
            settings.port,
            settings.max_connections
        );
        Ok(MovieStore { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        MovieStore { pool }
    }

    /// One round trip; the service must not start without it.
    pub async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .instrument(tracing::info_span!("Database health check"))
            .await?;
        tracing::info!("Test query executed successfully");
        Ok(())
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .instrument(tracing::info_span!("Running database migrations"))
            .await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }

    pub async fn list_all(&self) -> Result<Vec<Movie>, StoreError> {
        let rows = sqlx::query_as::<_, MovieRow>("SELECT * FROM movies ORDER BY id")
            .fetch_all(&self.pool)
            .instrument(tracing::info_span!("Fetching all movies"))
            .await?;
        into_movies(rows)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Movie>, StoreError> {
        let row = sqlx::query_as::<_, MovieRow>("SELECT * FROM movies WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .instrument(tracing::info_span!("Fetching movie", %id))
            .await?;
        row.map(Movie::try_from).transpose()
    }

    pub async fn insert(&self, movie: &NewMovie) -> Result<i32, StoreError> {
        let images = movie.images_json()?;
        let id = sqlx::query_scalar::<_, i32>(
            r#"
                INSERT INTO movies (
                    title, release_year, rated, released, duration, genre, director, writer,
                    actors, plot, language, country, awards, image_url, metascore, imdb_rating,
                    imdb_votes, imdb_id, type, images
                ) VALUES (
                    $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18, $19, $20
                )
                RETURNING id
            "#,
        )
        .bind(&movie.title)
        .bind(movie.release_year)
        .bind(&movie.rated)
        .bind(movie.released)
        .bind(movie.duration)
        .bind(&movie.genre)
        .bind(&movie.director)
        .bind(&movie.writer)
        .bind(&movie.actors)
        .bind(&movie.plot)
        .bind(&movie.language)
        .bind(&movie.country)
        .bind(&movie.awards)
        .bind(&movie.image_url)
        .bind(movie.metascore)
        .bind(movie.imdb_rating)
        .bind(movie.imdb_votes)
        .bind(&movie.imdb_id)
        .bind(&movie.kind)
        .bind(images)
        .fetch_one(&self.pool)
        .instrument(tracing::info_span!("Saving new movie", title = %movie.title))
        .await?;
        Ok(id)
    }

    /// Returns `false` when no movie has this id.
    pub async fn update(&self, id: i32, changes: &MovieChanges) -> Result<bool, StoreError> {
        let result = sqlx::query(
            r#"
                UPDATE movies
                SET title = $1, plot = $2, release_year = $3, duration = $4,
                    imdb_rating = $5, image_url = $6
                WHERE id = $7
            "#,
        )
        .bind(&changes.title)
        .bind(&changes.plot)
        .bind(changes.release_year)
        .bind(changes.duration)
        .bind(changes.imdb_rating)
        .bind(&changes.image_url)
        .bind(id)
        .execute(&self.pool)
        .instrument(tracing::info_span!("Updating movie", %id))
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns `false` when no movie has this id.
    pub async fn delete(&self, id: i32) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .instrument(tracing::info_span!("Deleting movie", %id))
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn filter(&self, filter: &MovieFilter) -> Result<Vec<Movie>, StoreError> {
        let query = filter.to_query();
        let span = tracing::info_span!(
            "Filtering movies",
            predicates = query.predicate_count()
        );
        let mut statement = sqlx::query_as::<_, MovieRow>(query.sql.as_str());
        for param in query.params {
            statement = match param {
                FilterValue::Text(value) => statement.bind(value),
                FilterValue::Float(value) => statement.bind(value),
                FilterValue::Integer(value) => statement.bind(value),
            };
        }
        let rows = statement.fetch_all(&self.pool).instrument(span).await?;
        into_movies(rows)
    }

    pub async fn sorted(&self, sort: SortSpec) -> Result<Vec<Movie>, StoreError> {
        let sql = format!("{} {}", SELECT_MOVIES, sort.order_by_clause());
        let rows = sqlx::query_as::<_, MovieRow>(sql.as_str())
            .fetch_all(&self.pool)
            .instrument(tracing::info_span!("Sorting movies", ?sort))
            .await?;
        into_movies(rows)
    }

    pub async fn page(&self, request: PageRequest) -> Result<Vec<Movie>, StoreError> {
        let rows = sqlx::query_as::<_, MovieRow>(
            "SELECT * FROM movies ORDER BY id LIMIT $1 OFFSET $2",
        )
        .bind(request.limit())
        .bind(request.offset())
        .fetch_all(&self.pool)
        .instrument(tracing::info_span!(
            "Fetching movie page",
            page = request.page(),
            limit = request.limit()
        ))
        .await?;
        into_movies(rows)
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .instrument(tracing::info_span!("Counting movies"))
            .await?;
        Ok(total)
    }
}
