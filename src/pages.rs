//! Built-in pages served by the binary.
//!
//! Each handler fills an explicit view-model struct and returns it as JSON;
//! presentation is left to the client.

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::identity::{display_name, IdentityResolver};
use crate::routing::{Handler, PatternError, RequestContext, Router};

fn viewer(ctx: &RequestContext) -> String {
    display_name(ctx.identity.as_ref()).to_string()
}

fn param(ctx: &RequestContext, key: &str) -> String {
    ctx.path_param(key).unwrap_or_default().to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub name: String,
    /// Present only for identified clients.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,
}

pub struct Home;

impl Handler for Home {
    fn handle(&self, ctx: RequestContext) -> Response {
        Json(HomeView {
            name: viewer(&ctx),
            fingerprint: ctx.identity.map(|i| i.fingerprint),
        })
        .into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooView {
    pub name: String,
    pub bar: String,
}

pub struct Foo;

impl Handler for Foo {
    fn handle(&self, ctx: RequestContext) -> Response {
        Json(FooView {
            name: viewer(&ctx),
            bar: param(&ctx, "bar"),
        })
        .into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub viewer: String,
    pub user: String,
    pub tab: Option<String>,
}

pub struct UserProfile;

impl Handler for UserProfile {
    fn handle(&self, ctx: RequestContext) -> Response {
        Json(UserView {
            viewer: viewer(&ctx),
            user: param(&ctx, "name"),
            tab: ctx.query_param("tab").map(str::to_string),
        })
        .into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentsView {
    pub viewer: String,
    pub user: String,
    pub post_id: String,
}

pub struct PostComments;

impl Handler for PostComments {
    fn handle(&self, ctx: RequestContext) -> Response {
        Json(CommentsView {
            viewer: viewer(&ctx),
            user: param(&ctx, "name"),
            post_id: param(&ctx, "id"),
        })
        .into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputView {
    pub viewer: String,
    /// Where to continue after input, always starting with `/`.
    pub next: String,
    /// Raw user input carried in the query string.
    pub input: String,
}

pub struct Input;

impl Handler for Input {
    fn handle(&self, ctx: RequestContext) -> Response {
        Json(InputView {
            viewer: viewer(&ctx),
            next: param(&ctx, "next"),
            input: ctx.query_string.clone(),
        })
        .into_response()
    }
}

/// The route table served by the binary, in precedence order.
pub fn router(resolver: impl IdentityResolver + 'static) -> Result<Router, PatternError> {
    Router::builder()
        .identity(resolver)
        .route("/", Home)
        .route("/foo/:bar", Foo)
        .route("/users/:name", UserProfile)
        .route("/users/:name/posts/:id/comments", PostComments)
        .route("/input/*next", Input)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Anonymous;
    use crate::routing::{Dispatch, InboundRequest};

    #[test]
    fn every_page_is_reachable() {
        let router = router(Anonymous).unwrap();
        for path in [
            "/",
            "/foo/baz",
            "/users/mplewis",
            "/users/mplewis/posts/123/comments",
            "/input/some/path",
        ] {
            assert!(
                matches!(router.dispatch(&InboundRequest::new(path)), Dispatch::Handled(_)),
                "{path} should be handled"
            );
        }
    }

    #[test]
    fn unknown_paths_fall_through() {
        let router = router(Anonymous).unwrap();
        for path in ["/foo", "/input", "/users/mplewis/posts"] {
            assert!(matches!(router.dispatch(&InboundRequest::new(path)), Dispatch::NotFound));
        }
    }

    #[test]
    fn anonymous_home_has_no_fingerprint() {
        let view = HomeView {
            name: "anonymous".into(),
            fingerprint: None,
        };
        assert_eq!(serde_json::to_value(&view).unwrap(), serde_json::json!({"name": "anonymous"}));
    }
}
