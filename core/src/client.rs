//! Stateless URL builder and response processor bound to one base URL.
//!
//! # Design
//! `JikanClient` holds only a `base_url` and carries no mutable state between
//! calls. Each endpoint has a method that renders its URL through the free
//! functions in [`crate::url`], and [`JikanClient::process`] runs the
//! parse/check/annotate pipeline on the response the caller brings back. The
//! caller executes the HTTP round-trip in between, so the core stays
//! deterministic and free of I/O.

use serde_json::{Map, Value};

use crate::error::{ErrorContext, Result};
use crate::http::HttpResponse;
use crate::response::{add_jikan_metadata, check_response, parse_body};
use crate::types::{ParamValue, Params};
use crate::url;

/// Public Jikan REST API root.
pub const BASE_URL: &str = "https://api.jikan.moe/v3";

#[derive(Debug, Clone)]
pub struct JikanClient {
    base_url: String,
}

impl Default for JikanClient {
    fn default() -> Self {
        Self::new(BASE_URL)
    }
}

impl JikanClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn built(url: String) -> String {
        log::debug!("jikan url: {url}");
        url
    }

    pub fn main_url(&self, endpoint: &str, id: i64, extension: Option<&str>, page: Option<u32>) -> String {
        Self::built(url::main_url(&self.base_url, endpoint, id, extension, page))
    }

    pub fn creator_url(&self, creator_type: &str, creator_id: i64, page: Option<u32>) -> String {
        Self::built(url::creator_url(&self.base_url, creator_type, creator_id, page))
    }

    pub fn search_url(
        &self,
        search_type: &str,
        query: &str,
        page: Option<u32>,
        parameters: Option<&Params<'_>>,
    ) -> String {
        Self::built(url::search_url(&self.base_url, search_type, query, page, parameters))
    }

    pub fn season_url(&self, year: i32, season: &str) -> String {
        Self::built(url::season_url(&self.base_url, year, season))
    }

    pub fn schedule_url(&self, day: Option<&str>) -> String {
        Self::built(url::schedule_url(&self.base_url, day))
    }

    pub fn season_archive_url(&self) -> String {
        Self::built(url::season_archive_url(&self.base_url))
    }

    pub fn season_later_url(&self) -> String {
        Self::built(url::season_later_url(&self.base_url))
    }

    pub fn top_url(&self, top_type: &str, page: Option<u32>, subtype: Option<&str>) -> String {
        Self::built(url::top_url(&self.base_url, top_type, page, subtype))
    }

    pub fn genre_url(&self, genre_type: &str, genre_id: i64, page: Option<u32>) -> String {
        Self::built(url::genre_url(&self.base_url, genre_type, genre_id, page))
    }

    pub fn user_url(
        &self,
        username: &str,
        request: Option<&str>,
        argument: Option<&ParamValue>,
        page: Option<u32>,
        parameters: Option<&Params<'_>>,
    ) -> String {
        Self::built(url::user_url(
            &self.base_url,
            username,
            request,
            argument,
            page,
            parameters,
        ))
    }

    pub fn meta_url(
        &self,
        request: &str,
        meta_type: Option<&str>,
        period: Option<&str>,
        offset: Option<u32>,
    ) -> String {
        Self::built(url::meta_url(&self.base_url, request, meta_type, period, offset))
    }

    /// Parse, check and annotate a response fetched from `url`.
    ///
    /// `context` only feeds the error message when the status is 400 or above.
    pub fn process(
        &self,
        response: &HttpResponse,
        url: &str,
        context: &ErrorContext,
    ) -> Result<Map<String, Value>> {
        log::debug!("jikan response: {} from {url}", response.status);
        let body = parse_body(&response.body);
        check_response(&body, response.status, context)?;
        Ok(add_jikan_metadata(response, body, url))
    }
}
