//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     (pattern, handler)[]
//!     → pattern.rs (split into literal / named / splat segments)
//!     → route.rs (bind compiled pattern to handler)
//!     → Freeze as immutable Router
//!
//! Incoming Request (path, query, credential):
//!     → router.rs (scan routes in registration order)
//!     → route.rs (segment-by-segment match, capture params)
//!     → identity resolver (credential → optional identity)
//!     → handler.rs (invoke with RequestContext)
//!     → Return: Handled, NotFound or InternalError
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Malformed patterns fail construction, never matching
//! - First match wins (registration order)
//! - Matching is pure and synchronous

pub mod context;
pub mod handler;
pub mod pattern;
pub mod route;
pub mod router;

pub use context::{InboundRequest, Params, RequestContext};
pub use handler::Handler;
pub use pattern::{Pattern, PatternError, Segment};
pub use route::Route;
pub use router::{Dispatch, Router, RouterBuilder};
