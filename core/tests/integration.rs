//! End-to-end tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then builds URLs with
//! `JikanClient`, fetches them over real HTTP using ureq and runs the
//! response pipeline on the result. Checks that headers, error bodies and
//! unparseable bodies come through the way the core expects.

use std::net::SocketAddr;

use jikan_core::{ErrorContext, HttpResponse, JikanClient, ParamValue};
use serde_json::json;

/// Execute a GET with ureq and describe the response as `HttpResponse`.
///
/// Disables ureq's automatic status-code-as-error behavior so 4xx/5xx
/// responses are returned as data rather than `Err`, letting the core
/// handle status interpretation.
fn execute(url: &str) -> HttpResponse {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = agent.get(url).call().expect("HTTP transport error");

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    let body = response.body_mut().read_to_string().unwrap_or_default();

    HttpResponse {
        status,
        headers,
        body,
    }
}

fn start_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn request_pipeline() {
    let addr = start_server();
    let client = JikanClient::new(&format!("http://{addr}"));

    // Step 1: plain lookup, annotated with url and headers.
    let url = client.main_url("anime", 1, None, None);
    let ctx = ErrorContext::new().with("type", "anime").with("id", 1);
    let body = client.process(&execute(&url), &url, &ctx).unwrap();
    assert_eq!(body["title"], "Cowboy Bebop");
    assert_eq!(body["jikan_url"], json!(url));
    assert_eq!(body["headers"]["cache-control"], "max-age=86400");
    assert_eq!(body["headers"]["x-request-cached"], "false");

    // Step 2: repeated headers collapse into one value.
    assert_eq!(body["headers"]["vary"], "Accept, Accept-Encoding");

    // Step 3: sub-resource with a page.
    let url = client.main_url("anime", 5114, Some("episodes"), Some(2));
    let body = client.process(&execute(&url), &url, &ErrorContext::new()).unwrap();
    assert_eq!(body["request"], "episodes");
    assert_eq!(body["page"], 2);

    // Step 4: search with page and extra parameters.
    let params = [("type", ParamValue::from("tv"))];
    let url = client.search_url("anime", "naruto", Some(2), Some(&params));
    let body = client.process(&execute(&url), &url, &ErrorContext::new()).unwrap();
    assert_eq!(body["params"], json!({"q": "naruto", "page": "2", "type": "tv"}));
    assert_eq!(body["results"][0]["mal_id"], 20);

    // Step 5: season name is lower-cased before it reaches the server.
    let url = client.season_url(2023, "Summer");
    let body = client.process(&execute(&url), &url, &ErrorContext::new()).unwrap();
    assert_eq!(body["season_name"], "summer");

    // Step 6: schedule for one day.
    let url = client.schedule_url(Some("Sunday"));
    let body = client.process(&execute(&url), &url, &ErrorContext::new()).unwrap();
    assert_eq!(body["sunday"][0], "Fullmetal Alchemist: Brotherhood");
}

#[test]
fn error_responses() {
    let addr = start_server();
    let client = JikanClient::new(&format!("http://{addr}"));

    // JSON error body: the server's error text lands in the message.
    let url = client.main_url("anime", 0, None, None);
    let ctx = ErrorContext::new().with("type", "anime").with("id", 0);
    let err = client.process(&execute(&url), &url, &ctx).unwrap_err();
    assert_eq!(err.status(), 404);
    assert_eq!(
        err.to_string(),
        "404 Resource does not exist: error for type=anime, id=0"
    );

    // 400 from a bad season.
    let url = format!("http://{addr}/season/2023/monsoon");
    let ctx = ErrorContext::new().with("year", 2023).with("season", "monsoon");
    let err = client.process(&execute(&url), &url, &ctx).unwrap_err();
    assert_eq!(err.to_string(), "400 Invalid season: error for year=2023, season=monsoon");

    // Plain-text error body: nothing to parse, empty error text.
    let url = client.schedule_url(Some("Someday"));
    let ctx = ErrorContext::new().with("day", "someday");
    let err = client.process(&execute(&url), &url, &ctx).unwrap_err();
    assert_eq!(err.status(), 503);
    assert_eq!(err.to_string(), "503 : error for day=someday");
}
