#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::time::Duration;

use vidlens_api::tmdb::TmdbClient;
use vidlens_core::{LookupError, lookup, lookup_checked};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SEARCH_MONEY_HEIST: &str = include_str!("../../../fixtures/tmdb/search_multi_money_heist.json");
const SEARCH_INCEPTION: &str = include_str!("../../../fixtures/tmdb/search_multi_inception.json");
const SEARCH_EMPTY: &str = include_str!("../../../fixtures/tmdb/search_multi_empty.json");
const MOVIE_27205: &str = include_str!("../../../fixtures/tmdb/movie_details_27205.json");
const VIDEOS_27205: &str = include_str!("../../../fixtures/tmdb/videos_27205.json");
const PROVIDERS_27205: &str = include_str!("../../../fixtures/tmdb/watch_providers_27205.json");
const TV_71446: &str = include_str!("../../../fixtures/tmdb/tv_details_71446.json");
const SEASON_71446_2: &str = include_str!("../../../fixtures/tmdb/tv_season_71446_2.json");
const VIDEOS_71446: &str = include_str!("../../../fixtures/tmdb/videos_71446.json");
const PROVIDERS_71446: &str = include_str!("../../../fixtures/tmdb/watch_providers_71446.json");

fn client(server: &MockServer, timeout: Duration) -> TmdbClient {
    TmdbClient::builder()
        .base_url(format!("{}/3/", server.uri()).parse().unwrap())
        .api_token("test-token")
        .user_agent("vidlens-test/0.0.0")
        .min_interval(Duration::from_millis(0))
        .timeout(timeout)
        .build()
        .unwrap()
}

async fn mount_json(server: &MockServer, endpoint: &str, body: &'static str) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn mount_search(server: &MockServer, title: &str, body: &'static str) {
    Mock::given(method("GET"))
        .and(path("/3/search/multi"))
        .and(query_param("query", title))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_movie_lookup_over_http() {
    // Arrange
    let server = MockServer::start().await;
    mount_search(&server, "inception", SEARCH_INCEPTION).await;
    mount_json(&server, "/3/movie/27205", MOVIE_27205).await;
    mount_json(&server, "/3/movie/27205/videos", VIDEOS_27205).await;
    mount_json(&server, "/3/movie/27205/watch/providers", PROVIDERS_27205).await;
    let api = client(&server, Duration::from_secs(5));

    // Act
    let record = lookup(&api, "  INCEPTION ", "IN").await.unwrap();

    // Assert
    assert_eq!(
        record.caption(),
        "<b>Inception</b>\n\n\
         Type :- Movie\n\
         Release Date :- 2010-07-15 IN\n\
         Rating :- 8.4\n\
         Duration :- 2h 28m\n\
         Original Audio :- English\n\
         Genre :- #action #science fiction #adventure\n\
         Trailer :- <a href='https://www.youtube.com/watch?v=YoHD9XEInc0'>Click Here</a>\n\
         Platforms :- Netflix, Amazon Prime Video\n"
    );
}

#[tokio::test]
async fn test_episode_lookup_over_http() {
    // Arrange
    let server = MockServer::start().await;
    mount_search(&server, "money heist", SEARCH_MONEY_HEIST).await;
    mount_json(&server, "/3/tv/71446", TV_71446).await;
    mount_json(&server, "/3/tv/71446/season/2", SEASON_71446_2).await;
    mount_json(&server, "/3/tv/71446/videos", VIDEOS_71446).await;
    mount_json(&server, "/3/tv/71446/watch/providers", PROVIDERS_71446).await;
    let api = client(&server, Duration::from_secs(5));

    // Act
    let record = lookup(&api, "Money Heist S2E3", "IN").await.unwrap();

    // Assert
    assert_eq!(record.kind, "Series - Season 2 Episode 3");
    assert_eq!(record.name, "Money Heist - 48 Meters Underground");
    assert_eq!(record.release_line, "Air Date :- 2019-07-19 IN\n");
    assert_eq!(record.duration_line, "Duration :- 44m\n");
    assert_eq!(record.episode_line, "Episode :- S02E03\n");
    assert_eq!(record.platforms_line, "Platforms :- Netflix\n");
}

#[tokio::test]
async fn test_secondary_failures_degrade_to_empty_lines() {
    // Arrange
    let server = MockServer::start().await;
    mount_search(&server, "inception", SEARCH_INCEPTION).await;
    Mock::given(method("GET"))
        .and(path("/3/movie/27205"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    // videos and watch/providers are unmounted and answer 404
    let api = client(&server, Duration::from_secs(5));

    // Act
    let record = lookup(&api, "inception", "IN").await.unwrap();

    // Assert
    assert_eq!(record.kind, "Movie");
    assert_eq!(record.release_line, "Release Date :- 2010-07-15 IN\n");
    assert_eq!(record.rating_line, "Rating :- 8.4\n");
    assert_eq!(record.audio_line, "Original Audio :- English\n");
    assert!(record.duration_line.is_empty());
    assert!(record.genre_line.is_empty());
    assert!(record.trailer_line.is_empty());
    assert!(record.platforms_line.is_empty());
}

#[tokio::test]
async fn test_slow_secondary_lookup_times_out() {
    // Arrange
    let server = MockServer::start().await;
    mount_search(&server, "inception", SEARCH_INCEPTION).await;
    mount_json(&server, "/3/movie/27205", MOVIE_27205).await;
    mount_json(&server, "/3/movie/27205/watch/providers", PROVIDERS_27205).await;
    Mock::given(method("GET"))
        .and(path("/3/movie/27205/videos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(VIDEOS_27205)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    let api = client(&server, Duration::from_millis(500));

    // Act
    let record = lookup(&api, "inception", "IN").await.unwrap();

    // Assert
    assert!(record.trailer_line.is_empty());
    assert_eq!(record.duration_line, "Duration :- 2h 28m\n");
    assert_eq!(
        record.platforms_line,
        "Platforms :- Netflix, Amazon Prime Video\n"
    );
}

#[tokio::test]
async fn test_empty_search_is_not_found() {
    // Arrange
    let server = MockServer::start().await;
    mount_search(&server, "qwxzv", SEARCH_EMPTY).await;
    let api = client(&server, Duration::from_secs(5));

    // Act
    let result = lookup_checked(&api, "qwxzv", "IN").await;

    // Assert
    assert!(matches!(result, Err(LookupError::NotFound(q)) if q == "qwxzv"));
}

#[tokio::test]
async fn test_failed_search_is_upstream_error() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/search/multi"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let api = client(&server, Duration::from_secs(5));

    // Act
    let checked = lookup_checked(&api, "inception", "IN").await;
    let plain = lookup(&api, "inception", "IN").await;

    // Assert
    assert!(matches!(checked, Err(LookupError::Upstream { .. })));
    assert!(plain.is_none());
}
