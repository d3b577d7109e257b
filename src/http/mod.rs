//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (decode path, lift credential header)
//!     → [routing layer dispatches to handler]
//!     → response.rs (outcome → status code)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{inbound_from_http, CLIENT_CERT_HEADER};
pub use server::{shutdown_signal, HttpServer};
