//! Dispatch outcome to HTTP response mapping.
//!
//! # Design Decisions
//! - Handled responses pass through untouched
//! - Not-found and internal errors use fixed plain-text bodies
//! - Identity error details stay in the logs, never in the body

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::routing::Dispatch;

pub const NOT_FOUND_BODY: &str = "path not found";
pub const INTERNAL_ERROR_BODY: &str = "internal server error";

pub fn into_http_response(dispatch: Dispatch) -> Response {
    match dispatch {
        Dispatch::Handled(response) => response,
        Dispatch::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response(),
        Dispatch::InternalError(_) => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response(),
    }
}
