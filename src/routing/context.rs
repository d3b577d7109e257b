//! Per-request data flowing into and out of dispatch.

use std::collections::HashMap;

use crate::identity::{Credential, Identity};

/// Parameter key to captured value.
pub type Params = HashMap<String, String>;

/// What the protocol layer hands to the router.
#[derive(Debug, Clone, Default)]
pub struct InboundRequest {
    /// Normalized (percent-decoded) request path.
    pub path: String,
    /// Query string without the leading `?`.
    pub raw_query: String,
    /// Client credential, empty when none was presented.
    pub credential: Credential,
}

impl InboundRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_query(mut self, raw_query: impl Into<String>) -> Self {
        self.raw_query = raw_query.into();
        self
    }

    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = credential;
        self
    }
}

/// Context passed to the winning route's handler.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub path: String,
    pub query_string: String,
    pub query_params: Params,
    pub path_params: Params,
    pub identity: Option<Identity>,
}

impl RequestContext {
    pub fn path_param(&self, key: &str) -> Option<&str> {
        self.path_params.get(key).map(String::as_str)
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query_params.get(key).map(String::as_str)
    }
}

/// Decode a query string into a flat map. The first value of a repeated key wins.
pub fn flatten_query(raw_query: &str) -> Params {
    let mut params = Params::new();
    for (key, value) in url::form_urlencoded::parse(raw_query.as_bytes()) {
        params
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_wins() {
        let params = flatten_query("a=1&b=2&a=3");
        assert_eq!(params.get("a").map(String::as_str), Some("1"));
        assert_eq!(params.get("b").map(String::as_str), Some("2"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn decodes_values() {
        let params = flatten_query("q=hello+world&path=%2Fhome");
        assert_eq!(params["q"], "hello world");
        assert_eq!(params["path"], "/home");
    }

    #[test]
    fn empty_query_is_empty_map() {
        assert!(flatten_query("").is_empty());
    }

    #[test]
    fn key_without_value() {
        assert_eq!(flatten_query("flag")["flag"], "");
    }
}
