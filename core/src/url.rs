//! Request URL builders for each Jikan endpoint family.
//!
//! # Design
//! Every builder is an independent free function taking the base URL plus the
//! endpoint's own arguments and returning the full URL as a `String`. They
//! never fail and never validate argument legality; an out-of-range id simply
//! yields a well-formed URL the server will reject. The only shared piece is
//! [`url_with_page`], which all paginated endpoints go through.
//!
//! Query strings are not percent-encoded here. Callers that pass user input
//! into `query` or parameter values must encode it themselves.

use crate::types::{ParamValue, Params};

/// Delimiter used between a path and its page number on most endpoints.
pub const DEFAULT_PAGE_DELIMITER: &str = "/";

/// Append `page` to `url` behind `delimiter`, or return `url` as-is.
pub fn url_with_page(url: String, page: Option<u32>, delimiter: &str) -> String {
    match page {
        Some(page) => format!("{url}{delimiter}{page}"),
        None => url,
    }
}

/// Anime, manga, character, person and club lookups.
///
/// `page` only applies to a sub-resource, so it is dropped when `extension`
/// is `None`.
pub fn main_url(
    base_url: &str,
    endpoint: &str,
    id: i64,
    extension: Option<&str>,
    page: Option<u32>,
) -> String {
    let url = format!("{base_url}/{endpoint}/{id}");
    match extension {
        Some(extension) => url_with_page(format!("{url}/{extension}"), page, DEFAULT_PAGE_DELIMITER),
        None => url,
    }
}

/// Producer and magazine listings.
pub fn creator_url(base_url: &str, creator_type: &str, creator_id: i64, page: Option<u32>) -> String {
    url_with_page(
        format!("{base_url}/{creator_type}/{creator_id}"),
        page,
        DEFAULT_PAGE_DELIMITER,
    )
}

pub fn search_url(
    base_url: &str,
    search_type: &str,
    query: &str,
    page: Option<u32>,
    parameters: Option<&Params<'_>>,
) -> String {
    let mut url = url_with_page(
        format!("{base_url}/search/{search_type}?q={query}"),
        page,
        "&page=",
    );
    for (key, value) in parameters.unwrap_or_default() {
        url.push_str(&format!("&{key}={value}"));
    }
    url
}

pub fn season_url(base_url: &str, year: i32, season: &str) -> String {
    format!("{base_url}/season/{year}/{}", season.to_lowercase())
}

pub fn schedule_url(base_url: &str, day: Option<&str>) -> String {
    match day {
        Some(day) => format!("{base_url}/schedule/{}", day.to_lowercase()),
        None => format!("{base_url}/schedule"),
    }
}

pub fn season_archive_url(base_url: &str) -> String {
    format!("{base_url}/season/archive")
}

pub fn season_later_url(base_url: &str) -> String {
    format!("{base_url}/season/later")
}

/// Top lists. The page segment goes before the subtype:
/// `/top/anime/2/airing`.
pub fn top_url(base_url: &str, top_type: &str, page: Option<u32>, subtype: Option<&str>) -> String {
    let url = url_with_page(
        format!("{base_url}/top/{}", top_type.to_lowercase()),
        page,
        DEFAULT_PAGE_DELIMITER,
    );
    match subtype {
        Some(subtype) => format!("{url}/{}", subtype.to_lowercase()),
        None => url,
    }
}

pub fn genre_url(base_url: &str, genre_type: &str, genre_id: i64, page: Option<u32>) -> String {
    url_with_page(
        format!("{base_url}/genre/{}/{genre_id}", genre_type.to_lowercase()),
        page,
        DEFAULT_PAGE_DELIMITER,
    )
}

/// User profile and list endpoints.
///
/// `argument` and `page` are only rendered under a `request`; a
/// `ParamValue::Null` argument counts as absent. The
/// `?k=v&k=v` block from `parameters` is appended last, with or without a
/// request.
pub fn user_url(
    base_url: &str,
    username: &str,
    request: Option<&str>,
    argument: Option<&ParamValue>,
    page: Option<u32>,
    parameters: Option<&Params<'_>>,
) -> String {
    let mut url = format!("{base_url}/user/{}", username.to_lowercase());
    if let Some(request) = request {
        url.push('/');
        url.push_str(request);
        match argument {
            None | Some(ParamValue::Null) => {}
            Some(argument) => url.push_str(&format!("/{argument}")),
        }
        url = url_with_page(url, page, DEFAULT_PAGE_DELIMITER);
    }
    if let Some(parameters) = parameters {
        let query = parameters
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>()
            .join("&");
        url.push('?');
        url.push_str(&query);
    }
    url
}

/// Meta endpoints. `/{type}/{period}` is rendered only when both are given.
pub fn meta_url(
    base_url: &str,
    request: &str,
    meta_type: Option<&str>,
    period: Option<&str>,
    offset: Option<u32>,
) -> String {
    let mut url = format!("{base_url}/meta/{request}");
    if let (Some(meta_type), Some(period)) = (meta_type, period) {
        url.push_str(&format!("/{meta_type}/{period}"));
    }
    url_with_page(url, offset, DEFAULT_PAGE_DELIMITER)
}
