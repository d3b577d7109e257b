//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store compiled routes in registration order
//! - Find the first route matching a request path
//! - Resolve the client identity and invoke the bound handler
//! - Return an explicit outcome for not-found and identity failures
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(n) scan in registration order; no specificity reordering
//! - Identity is resolved only after a route matches, before the handler runs

use std::sync::Arc;

use axum::response::Response;

use crate::identity::{Anonymous, IdentityError, IdentityResolver};
use crate::routing::context::{flatten_query, InboundRequest, RequestContext};
use crate::routing::handler::Handler;
use crate::routing::pattern::{Pattern, PatternError};
use crate::routing::route::Route;

/// Result of dispatching one request.
#[derive(Debug)]
pub enum Dispatch {
    /// A route matched and its handler produced this response.
    Handled(Response),
    /// No route matched the path.
    NotFound,
    /// The client credential could not be resolved.
    InternalError(IdentityError),
}

impl Dispatch {
    /// Short label used for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Dispatch::Handled(_) => "handled",
            Dispatch::NotFound => "not_found",
            Dispatch::InternalError(_) => "internal_error",
        }
    }
}

/// Ordered, immutable route table.
pub struct Router {
    routes: Vec<Route>,
    resolver: Arc<dyn IdentityResolver>,
}

impl Router {
    /// Build a router from already compiled routes, without identity resolution.
    pub fn new(routes: Vec<Route>) -> Self {
        Self {
            routes,
            resolver: Arc::new(Anonymous),
        }
    }

    pub fn builder() -> RouterBuilder {
        RouterBuilder::default()
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Dispatch a request to the first matching route.
    pub fn dispatch(&self, request: &InboundRequest) -> Dispatch {
        for route in &self.routes {
            let Some(path_params) = route.matches(&request.path) else {
                continue;
            };

            tracing::debug!(
                path = %request.path,
                pattern = %route.pattern(),
                "Route matched"
            );

            let identity = match self.resolver.resolve(&request.credential) {
                Ok(identity) => identity,
                Err(e) => {
                    tracing::error!(
                        path = %request.path,
                        pattern = %route.pattern(),
                        error = %e,
                        "Failed to resolve client identity"
                    );
                    return Dispatch::InternalError(e);
                }
            };

            let ctx = RequestContext {
                path: request.path.clone(),
                query_string: request.raw_query.clone(),
                query_params: flatten_query(&request.raw_query),
                path_params,
                identity,
            };
            return Dispatch::Handled(route.handler().handle(ctx));
        }

        tracing::debug!(path = %request.path, "No route matched");
        Dispatch::NotFound
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}

/// Collects `(pattern, handler)` pairs in order and compiles them on `build`.
#[derive(Default)]
pub struct RouterBuilder {
    entries: Vec<(String, Arc<dyn Handler>)>,
    resolver: Option<Arc<dyn IdentityResolver>>,
}

impl RouterBuilder {
    pub fn route(mut self, pattern: impl Into<String>, handler: impl Handler + 'static) -> Self {
        let handler: Arc<dyn Handler> = Arc::new(handler);
        self.entries.push((pattern.into(), handler));
        self
    }

    /// Resolver used to turn request credentials into identities.
    pub fn identity(mut self, resolver: impl IdentityResolver + 'static) -> Self {
        let resolver: Arc<dyn IdentityResolver> = Arc::new(resolver);
        self.resolver = Some(resolver);
        self
    }

    /// Compile every pattern, failing on the first invalid one.
    pub fn build(self) -> Result<Router, PatternError> {
        let routes = self
            .entries
            .into_iter()
            .map(|(pattern, handler)| -> Result<Route, PatternError> {
                Ok(Route::from_parts(Pattern::parse(&pattern)?, handler))
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!(routes = routes.len(), "Route table compiled");

        Ok(Router {
            routes,
            resolver: self
                .resolver
                .unwrap_or_else(|| Arc::new(Anonymous) as Arc<dyn IdentityResolver>),
        })
    }
}
