//! A compiled pattern bound to its handler.
//!
//! # Matching Rules
//! - Leading separators of the request path are ignored, trailing ones are not
//! - Without a splat the token count must equal the segment count
//! - With a splat the token count must be at least the segment count,
//!   so the splat always captures one token or more

use std::fmt;
use std::sync::Arc;

use crate::routing::context::Params;
use crate::routing::handler::Handler;
use crate::routing::pattern::{Pattern, PatternError, Segment, SEPARATOR};

/// Immutable route: compiled pattern plus handler.
#[derive(Clone)]
pub struct Route {
    pattern: Pattern,
    handler: Arc<dyn Handler>,
}

impl Route {
    /// Compile `pattern` and bind it to `handler`.
    pub fn new(pattern: &str, handler: impl Handler + 'static) -> Result<Self, PatternError> {
        Ok(Self::from_parts(Pattern::parse(pattern)?, Arc::new(handler)))
    }

    pub fn from_parts(pattern: Pattern, handler: Arc<dyn Handler>) -> Self {
        Self { pattern, handler }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub(crate) fn handler(&self) -> &dyn Handler {
        self.handler.as_ref()
    }

    /// Match a request path, returning the captured parameters.
    ///
    /// `Some` with an empty map means the route matched without captures.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let tokens = request_tokens(path);
        let segments = self.pattern.segments();

        if self.pattern.ends_in_splat() {
            if tokens.len() < segments.len() {
                return None;
            }
        } else if tokens.len() != segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (index, segment) in segments.iter().enumerate() {
            match segment {
                Segment::Splat(key) => {
                    let rest = tokens[index..].join("/");
                    params.insert(key.clone(), format!("{SEPARATOR}{rest}"));
                    break;
                }
                Segment::Named(key) => {
                    params.insert(key.clone(), tokens[index].to_string());
                }
                Segment::Literal(value) => {
                    if value != tokens[index] {
                        return None;
                    }
                }
            }
        }
        Some(params)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

/// Tokenize a request path. `/` and the empty string yield no tokens.
fn request_tokens(path: &str) -> Vec<&str> {
    let stripped = path.trim_start_matches(SEPARATOR);
    if stripped.is_empty() {
        Vec::new()
    } else {
        stripped.split(SEPARATOR).collect()
    }
}
