//! Request extraction.
//!
//! # Responsibilities
//! - Percent-decode the request path for matching
//! - Carry the raw query string through untouched
//! - Lift the forwarded client certificate header into a credential
//!
//! # Design Decisions
//! - Undecodable paths are matched raw rather than rejected
//! - Missing or empty credential header means anonymous

use axum::http::{HeaderName, Request};

use crate::identity::Credential;
use crate::routing::InboundRequest;

/// Header used when none is configured.
pub const CLIENT_CERT_HEADER: &str = "x-client-cert";

/// Build the router's view of an HTTP request.
pub fn inbound_from_http<B>(request: &Request<B>, credential_header: Option<&HeaderName>) -> InboundRequest {
    let raw_path = request.uri().path();
    let path = urlencoding::decode(raw_path)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw_path.to_string());

    let credential = credential_header
        .and_then(|name| request.headers().get(name))
        .map(|value| Credential::new(urlencoding::decode_binary(value.as_bytes()).into_owned()))
        .unwrap_or_default();

    InboundRequest {
        path,
        raw_query: request.uri().query().unwrap_or_default().to_string(),
        credential,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn header() -> HeaderName {
        HeaderName::from_static(CLIENT_CERT_HEADER)
    }

    #[test]
    fn extracts_path_and_query() {
        let request = Request::builder()
            .uri("http://localhost/users/mplewis?tab=posts&tab=likes")
            .body(Body::empty())
            .unwrap();
        let inbound = inbound_from_http(&request, Some(&header()));
        assert_eq!(inbound.path, "/users/mplewis");
        assert_eq!(inbound.raw_query, "tab=posts&tab=likes");
        assert!(inbound.credential.is_empty());
    }

    #[test]
    fn decodes_path() {
        let request = Request::builder()
            .uri("/users/matt%20lewis")
            .body(Body::empty())
            .unwrap();
        assert_eq!(inbound_from_http(&request, None).path, "/users/matt lewis");
    }

    #[test]
    fn invalid_utf8_path_is_kept_raw() {
        let request = Request::builder().uri("/bad/%FF").body(Body::empty()).unwrap();
        assert_eq!(inbound_from_http(&request, None).path, "/bad/%FF");
    }

    #[test]
    fn decodes_credential_header() {
        let request = Request::builder()
            .uri("/")
            .header(CLIENT_CERT_HEADER, "-----BEGIN%20CERTIFICATE-----%0A")
            .body(Body::empty())
            .unwrap();
        let inbound = inbound_from_http(&request, Some(&header()));
        assert_eq!(inbound.credential.as_bytes(), b"-----BEGIN CERTIFICATE-----\n");
    }

    #[test]
    fn credential_ignored_without_header_name() {
        let request = Request::builder()
            .uri("/")
            .header(CLIENT_CERT_HEADER, "anything")
            .body(Body::empty())
            .unwrap();
        assert!(inbound_from_http(&request, None).credential.is_empty());
    }
}
