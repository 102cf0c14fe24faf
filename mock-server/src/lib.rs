use std::collections::HashMap;

use axum::{
    extract::{Path, Query},
    http::{header, HeaderName, StatusCode},
    response::{AppendHeaders, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tokio::net::TcpListener;

/// Custom header the real API sets to report cache hits.
pub const REQUEST_CACHED: HeaderName = HeaderName::from_static("x-request-cached");

pub const SEASONS: [&str; 4] = ["winter", "spring", "summer", "fall"];
pub const DAYS: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Anime {
    pub mal_id: i64,
    pub title: String,
    pub episodes: u32,
    pub airing_day: String,
}

pub fn catalog() -> Vec<Anime> {
    [
        (1, "Cowboy Bebop", 26, "saturday"),
        (20, "Naruto", 220, "thursday"),
        (5114, "Fullmetal Alchemist: Brotherhood", 64, "sunday"),
    ]
    .into_iter()
    .map(|(mal_id, title, episodes, day)| Anime {
        mal_id,
        title: title.to_string(),
        episodes,
        airing_day: day.to_string(),
    })
    .collect()
}

pub fn app() -> Router {
    Router::new()
        .route("/anime/{id}", get(get_anime))
        .route("/anime/{id}/{extension}", get(get_anime_extension))
        .route("/anime/{id}/{extension}/{page}", get(get_anime_extension_page))
        .route("/search/{search_type}", get(search))
        .route("/season/{year}/{season}", get(season))
        .route("/schedule", get(schedule_all))
        .route("/schedule/{day}", get(schedule_day))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Headers attached to every JSON response. `Vary` is sent twice so clients
/// see a repeated header name.
fn jikan_headers() -> AppendHeaders<[(HeaderName, &'static str); 4]> {
    AppendHeaders([
        (header::CACHE_CONTROL, "max-age=86400"),
        (header::VARY, "Accept"),
        (header::VARY, "Accept-Encoding"),
        (REQUEST_CACHED, "false"),
    ])
}

fn ok(body: Value) -> Response {
    (jikan_headers(), Json(body)).into_response()
}

fn error(status: StatusCode, message: &str) -> Response {
    let body = json!({
        "status": status.as_u16(),
        "type": "BadResponseException",
        "error": message,
    });
    (status, jikan_headers(), Json(body)).into_response()
}

fn find_anime(id: i64) -> Option<Anime> {
    catalog().into_iter().find(|anime| anime.mal_id == id)
}

async fn get_anime(Path(id): Path<i64>) -> Response {
    log::debug!("anime {id}");
    match find_anime(id) {
        Some(anime) => ok(json!(anime)),
        None => error(StatusCode::NOT_FOUND, "Resource does not exist"),
    }
}

fn anime_extension(id: i64, extension: String, page: Option<u32>) -> Response {
    match find_anime(id) {
        Some(anime) => ok(json!({
            "mal_id": anime.mal_id,
            "request": extension,
            "page": page,
        })),
        None => error(StatusCode::NOT_FOUND, "Resource does not exist"),
    }
}

async fn get_anime_extension(Path((id, extension)): Path<(i64, String)>) -> Response {
    anime_extension(id, extension, None)
}

async fn get_anime_extension_page(
    Path((id, extension, page)): Path<(i64, String, u32)>,
) -> Response {
    anime_extension(id, extension, Some(page))
}

async fn search(
    Path(search_type): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let Some(query) = params.get("q") else {
        return error(StatusCode::BAD_REQUEST, "Missing query");
    };
    if search_type != "anime" {
        return error(StatusCode::BAD_REQUEST, "Invalid search type");
    }
    let needle = query.to_lowercase();
    let results: Vec<Anime> = catalog()
        .into_iter()
        .filter(|anime| anime.title.to_lowercase().contains(&needle))
        .collect();
    ok(json!({
        "request": search_type,
        "params": params,
        "results": results,
    }))
}

async fn season(Path((year, season)): Path<(i32, String)>) -> Response {
    if !SEASONS.contains(&season.as_str()) {
        return error(StatusCode::BAD_REQUEST, "Invalid season");
    }
    ok(json!({
        "season_name": season,
        "season_year": year,
        "anime": [],
    }))
}

async fn schedule_all() -> Response {
    let mut body = Map::new();
    for day in DAYS {
        let titles: Vec<String> = catalog()
            .into_iter()
            .filter(|anime| anime.airing_day == day)
            .map(|anime| anime.title)
            .collect();
        body.insert(day.to_string(), json!(titles));
    }
    ok(Value::Object(body))
}

/// Unknown days fail with a plain-text body, like an upstream proxy error.
async fn schedule_day(Path(day): Path<String>) -> Response {
    if !DAYS.contains(&day.as_str()) {
        return (StatusCode::SERVICE_UNAVAILABLE, "upstream unavailable").into_response();
    }
    let titles: Vec<String> = catalog()
        .into_iter()
        .filter(|anime| anime.airing_day == day)
        .map(|anime| anime.title)
        .collect();
    let mut body = Map::new();
    body.insert(day, json!(titles));
    ok(Value::Object(body))
}
