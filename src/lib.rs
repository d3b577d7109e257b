//! Path-pattern request router with first-match dispatch.

pub mod config;
pub mod http;
pub mod identity;
pub mod observability;
pub mod pages;
pub mod routing;

pub use config::AppConfig;
pub use http::HttpServer;
pub use routing::{Dispatch, Handler, RequestContext, Route, Router};
