
use movie_catalog_backend::routes::MoviePage;
use movie_catalog_backend::store::Movie;
use serde_json::Value;
use test_startup::*;

fn titles(movies: &[Movie]) -> Vec<&str> {
    movies.iter().map(|movie| movie.title.as_str()).collect()
}

async fn movies_at(app: &TestApp, path: &str) -> Vec<Movie> {
    let res = app.get(path).await;
    assert_eq!(res.status().as_u16(), 200, "GET {}", path);
    res.json::<Vec<Movie>>().await.expect("Failed to parse list")
}

#[actix_rt::test]
async fn sort_by_rating_ascending() {
    let app = spawn_app().await;
    app.seed_movie("Heat", 1995, Some(8.1), 170).await;
    app.seed_movie("Cats", 2019, Some(5.2), 110).await;
    app.seed_movie("Seven Samurai", 1954, Some(9.0), 207).await;

    let movies = movies_at(&app, "/movies/sort/rating/asc").await;
    let ratings: Vec<Option<f64>> = movies.iter().map(|movie| movie.imdb_rating).collect();
    assert_eq!(ratings, vec![Some(5.2), Some(8.1), Some(9.0)]);
}

#[actix_rt::test]
async fn sort_direction_is_case_insensitive() {
    let app = spawn_app().await;
    app.seed_movie("Heat", 1995, Some(8.1), 170).await;
    app.seed_movie("Cats", 2019, Some(5.2), 110).await;
    app.seed_movie("Seven Samurai", 1954, Some(9.0), 207).await;

    let movies = movies_at(&app, "/movies/sort/title/DESC").await;
    assert_eq!(titles(&movies), vec!["Seven Samurai", "Heat", "Cats"]);

    let movies = movies_at(&app, "/movies/sort/release_year/asc").await;
    assert_eq!(titles(&movies), vec!["Seven Samurai", "Heat", "Cats"]);

    let movies = movies_at(&app, "/movies/sort/duration/desc").await;
    assert_eq!(titles(&movies), vec!["Seven Samurai", "Heat", "Cats"]);
}

#[actix_rt::test]
async fn sort_outside_the_allow_list_is_a_client_error() {
    let app = spawn_app().await;
    app.seed_movie("Heat", 1995, Some(8.1), 170).await;

    for path in [
        "/movies/sort/id/asc",
        "/movies/sort/imdb_rating/asc",
        "/movies/sort/Title/asc",
        "/movies/sort/title/up",
        "/movies/sort/title;DROP%20TABLE%20movies/asc",
        "/movies/sort/rating/asc%20--",
    ] {
        let res = app.get(path).await;
        assert_eq!(res.status().as_u16(), 400, "GET {}", path);
        let body = res.json::<Value>().await.unwrap();
        assert_eq!(body["message"], "Invalid sort parameters");
    }

    assert_eq!(movies_at(&app, "/movies").await.len(), 1);
}

#[actix_rt::test]
async fn second_page_of_ten() {
    let app = spawn_app().await;
    let mut ids = Vec::new();
    for n in 0..25 {
        ids.push(
            app.seed_movie(&format!("Movie {:02}", n), 2000, Some(7.0), 100)
                .await,
        );
    }

    let res = app.get("/movies/page/2/10").await;
    assert_eq!(res.status().as_u16(), 200);
    let page = res.json::<MoviePage>().await.expect("Failed to parse page");
    let page_ids: Vec<i32> = page.movies.iter().map(|movie| movie.id).collect();
    assert_eq!(page_ids, ids[10..20].to_vec());
    assert_eq!(page.metadata.current_page, 2);
    assert_eq!(page.metadata.total_pages, 3);
    assert_eq!(page.metadata.total_movies, 25);

    let last = app
        .get("/movies/page/3/10")
        .await
        .json::<MoviePage>()
        .await
        .unwrap();
    assert_eq!(last.movies.len(), 5);
}

#[actix_rt::test]
async fn page_envelope_uses_camel_case_keys() {
    let app = spawn_app().await;
    app.seed_movie("Heat", 1995, Some(8.1), 170).await;

    let body = app
        .get("/movies/page/1/10")
        .await
        .json::<Value>()
        .await
        .unwrap();
    assert_eq!(body["currentPage"], 1);
    assert_eq!(body["totalPages"], 1);
    assert_eq!(body["totalMovies"], 1);
    assert_eq!(body["movies"].as_array().unwrap().len(), 1);
}

#[actix_rt::test]
async fn pagination_rejects_out_of_range_and_non_numeric_input() {
    let app = spawn_app().await;

    for path in [
        "/movies/page/0/10",
        "/movies/page/1/0",
        "/movies/page/-1/10",
        "/movies/page/one/10",
        "/movies/page/1/ten",
    ] {
        let res = app.get(path).await;
        assert_eq!(res.status().as_u16(), 400, "GET {}", path);
        let body = res.json::<Value>().await.unwrap();
        assert_eq!(body["message"], "Invalid pagination parameters");
    }
}

#[actix_rt::test]
async fn filter_without_criteria_returns_everything() {
    let app = spawn_app().await;
    app.seed_movie("Heat", 1995, Some(8.1), 170).await;
    app.seed_movie("Cats", 2019, Some(5.2), 110).await;

    assert_eq!(movies_at(&app, "/movies/filter").await.len(), 2);
    assert_eq!(movies_at(&app, "/movies/filter?title=&genre=").await.len(), 2);
}

#[actix_rt::test]
async fn filter_combines_criteria() {
    let app = spawn_app().await;
    app.seed_movie("The Dark Knight", 2008, Some(9.0), 152).await;
    app.seed_movie("The Dark Knight Rises", 2012, Some(8.4), 164).await;
    app.seed_movie("Dark Shadows", 2012, Some(6.2), 113).await;
    app.seed_movie("Heat", 1995, Some(8.3), 170).await;

    let movies = movies_at(&app, "/movies/filter?title=Dark").await;
    assert_eq!(
        titles(&movies),
        vec!["The Dark Knight", "The Dark Knight Rises", "Dark Shadows"]
    );

    let movies = movies_at(&app, "/movies/filter?title=Dark&min_rating=8").await;
    assert_eq!(titles(&movies), vec!["The Dark Knight", "The Dark Knight Rises"]);

    let movies = movies_at(&app, "/movies/filter?min_rating=6&max_rating=8.5").await;
    assert_eq!(
        titles(&movies),
        vec!["The Dark Knight Rises", "Dark Shadows", "Heat"]
    );

    let movies = movies_at(&app, "/movies/filter?release_year=2012&max_rating=7").await;
    assert_eq!(titles(&movies), vec!["Dark Shadows"]);
}

#[actix_rt::test]
async fn filter_by_genre_lists_each_movie_once() {
    let app = spawn_app().await;
    let knight = app.seed_movie("The Dark Knight", 2008, Some(9.0), 152).await;
    let heat = app.seed_movie("Heat", 1995, Some(8.3), 170).await;
    app.tag_genre(knight, "Action").await;
    app.tag_genre(knight, "Crime").await;
    app.tag_genre(knight, "Drama").await;
    app.tag_genre(heat, "Crime").await;

    let movies = movies_at(&app, "/movies/filter?genre=Crime").await;
    assert_eq!(titles(&movies), vec!["The Dark Knight", "Heat"]);

    let movies = movies_at(&app, "/movies/filter?genre=Action").await;
    assert_eq!(titles(&movies), vec!["The Dark Knight"]);

    let movies = movies_at(&app, "/movies/filter?title=Knight").await;
    assert_eq!(movies.len(), 1);
}

#[actix_rt::test]
async fn filter_rejects_malformed_numbers() {
    let app = spawn_app().await;

    for path in [
        "/movies/filter?min_rating=high",
        "/movies/filter?max_rating=abc",
        "/movies/filter?release_year=20x0",
    ] {
        let res = app.get(path).await;
        assert_eq!(res.status().as_u16(), 400, "GET {}", path);
        let body = res.json::<Value>().await.unwrap();
        assert_eq!(body["message"], "Invalid filter parameters");
        assert!(body["error"].is_string());
    }
}

#[actix_rt::test]
async fn unreadable_filter_query_is_a_json_client_error() {
    let app = spawn_app().await;

    let res = app.get("/movies/filter?title=a&title=b").await;
    assert_eq!(res.status().as_u16(), 400);
    let body = res.json::<Value>().await.expect("Body should be JSON");
    assert_eq!(body["message"], "Invalid filter parameters");
    assert!(body["error"].as_str().unwrap().contains("title"));
}
