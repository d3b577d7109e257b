//! Handler capability bound to each route.

use axum::response::Response;

use crate::routing::context::RequestContext;

/// Produces the response for a matched request.
///
/// Handlers run synchronously on the dispatching task and own the
/// context they receive.
pub trait Handler: Send + Sync {
    fn handle(&self, ctx: RequestContext) -> Response;
}

