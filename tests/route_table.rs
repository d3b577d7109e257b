//! Table-driven matching checks over compiled routes.

use std::collections::HashMap;

use axum::response::{IntoResponse, Response};
use capsule_router::routing::{Params, PatternError, RequestContext};
use capsule_router::{Handler, Route};

struct Dummy;

impl Handler for Dummy {
    fn handle(&self, _ctx: RequestContext) -> Response {
        ().into_response()
    }
}

struct Expectation {
    path: &'static str,
    params: Option<&'static [(&'static str, &'static str)]>,
}

const fn hit(path: &'static str, params: &'static [(&'static str, &'static str)]) -> Expectation {
    Expectation {
        path,
        params: Some(params),
    }
}

const fn miss(path: &'static str) -> Expectation {
    Expectation { path, params: None }
}

fn table() -> Vec<(&'static str, Vec<Expectation>)> {
    vec![
        ("/", vec![hit("/", &[]), miss("/foo")]),
        (
            "/users/:name",
            vec![
                hit("/users/mplewis", &[("name", "mplewis")]),
                miss("/users/mplewis/"),
                miss("/"),
            ],
        ),
        (
            "/users/:name/posts/:id/comments",
            vec![hit(
                "/users/mplewis/posts/123/comments",
                &[("name", "mplewis"), ("id", "123")],
            )],
        ),
        (
            "/input/*next",
            vec![
                hit("/input/home", &[("next", "/home")]),
                hit("/input/some/very/long/path", &[("next", "/some/very/long/path")]),
                miss("/input"),
            ],
        ),
    ]
}

#[test]
fn route_table_expectations() {
    for (pattern, expectations) in table() {
        let route = Route::new(pattern, Dummy).unwrap();
        for expectation in expectations {
            let expected: Option<Params> = expectation.params.map(|pairs| {
                pairs
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect::<HashMap<_, _>>()
            });
            assert_eq!(
                route.matches(expectation.path),
                expected,
                "{pattern} -> {}",
                expectation.path
            );
        }
    }
}

#[test]
fn wildcard_must_be_last() {
    for pattern in ["/*next/home", "/input/*next/more", "/*a/*b"] {
        assert!(
            matches!(Route::new(pattern, Dummy), Err(PatternError::MisplacedSplat { .. })),
            "{pattern} should fail to compile"
        );
    }
}

#[test]
fn literal_routes_reject_any_changed_segment() {
    let route = Route::new("/docs/guide/intro", Dummy).unwrap();
    let path = ["docs", "guide", "intro"];
    for index in 0..path.len() {
        let mut changed = path;
        changed[index] = "other";
        let candidate = format!("/{}", changed.join("/"));
        assert_eq!(route.matches(&candidate), None, "{candidate}");
    }
}
