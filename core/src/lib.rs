//! Request URL construction and response checking for the Jikan API.
//!
//! # Overview
//! Renders endpoint URLs and validates/annotates parsed responses without
//! touching the network (host-does-IO pattern). The caller executes the HTTP
//! round-trip, keeping the core deterministic and testable.
//!
//! # Design
//! - [`url`] holds one pure builder per endpoint family, sharing only
//!   [`url::url_with_page`].
//! - [`response`] fails on status >= 400 via [`check_response`] and records
//!   `jikan_url` and `headers` on success via [`add_jikan_metadata`].
//! - [`JikanClient`] binds the builders to a base URL and chains the
//!   response steps.

pub mod client;
pub mod error;
pub mod http;
pub mod response;
pub mod types;
pub mod url;

pub use client::{JikanClient, BASE_URL};
pub use error::{ApiError, ErrorContext, Result};
pub use http::{normalize_headers, HttpResponse};
pub use response::{add_jikan_metadata, check_response, parse_body};
pub use types::{ParamValue, Params};
