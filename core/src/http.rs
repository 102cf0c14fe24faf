//! HTTP response data handed back by the host.
//!
//! # Design
//! The core never performs I/O. The host executes the request, then describes
//! the response as plain data: status, raw header pairs and body text. Header
//! pairs are kept as a list because real responses may repeat a name; they are
//! only collapsed into a map by [`normalize_headers`].

use serde_json::{Map, Value};

/// An HTTP response described as plain data.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// First value for `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Collapse a multi-valued header list into a single-valued JSON object.
///
/// Names match case-insensitively; the first spelling seen becomes the key and
/// repeated values are joined with `", "` in arrival order.
pub fn normalize_headers<'a, I>(pairs: I) -> Map<String, Value>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut headers: Map<String, Value> = Map::new();
    for (name, value) in pairs {
        let existing = headers
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, slot)| slot);
        match existing {
            Some(Value::String(joined)) => {
                joined.push_str(", ");
                joined.push_str(value);
            }
            _ => {
                headers.insert(name.to_string(), Value::String(value.to_string()));
            }
        }
    }
    headers
}
