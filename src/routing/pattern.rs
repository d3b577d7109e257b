//! Pattern compilation.
//!
//! # Responsibilities
//! - Split a pattern string into typed segments
//! - Reject wildcard segments that are not in final position
//!
//! # Syntax
//! ```text
//! /users/:name/posts/:id     literal, named, literal, named
//! /input/*next               literal, splat
//! /                          zero segments
//! ```

use thiserror::Error;

/// Path separator shared by patterns and request paths.
pub const SEPARATOR: char = '/';

const NAMED_MARKER: char = ':';
const SPLAT_MARKER: char = '*';

/// One typed piece of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the request token exactly.
    Literal(String),
    /// Captures one request token under the key.
    Named(String),
    /// Captures every remaining request token under the key.
    Splat(String),
}

impl Segment {
    fn classify(token: &str) -> Self {
        if let Some(key) = token.strip_prefix(NAMED_MARKER) {
            Segment::Named(key.to_string())
        } else if let Some(key) = token.strip_prefix(SPLAT_MARKER) {
            Segment::Splat(key.to_string())
        } else {
            Segment::Literal(token.to_string())
        }
    }

    pub fn is_splat(&self) -> bool {
        matches!(self, Segment::Splat(_))
    }
}

/// Errors raised while compiling a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A splat segment was followed by more segments.
    #[error("misplaced wildcard segment `*{key}` at position {position} in pattern `{pattern}`")]
    MisplacedSplat {
        pattern: String,
        key: String,
        position: usize,
    },
}

/// A compiled route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Compile a pattern string.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let trimmed = pattern.trim_matches(SEPARATOR);
        let segments: Vec<Segment> = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.split(SEPARATOR).map(Segment::classify).collect()
        };

        let last = segments.len().saturating_sub(1);
        for (position, segment) in segments.iter().enumerate() {
            if let Segment::Splat(key) = segment {
                if position != last {
                    return Err(PatternError::MisplacedSplat {
                        pattern: pattern.to_string(),
                        key: key.clone(),
                        position,
                    });
                }
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    /// The pattern string as registered.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when the last segment is a splat.
    pub fn ends_in_splat(&self) -> bool {
        self.segments.last().is_some_and(Segment::is_splat)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_pattern_has_no_segments() {
        assert!(Pattern::parse("/").unwrap().segments().is_empty());
        assert!(Pattern::parse("").unwrap().segments().is_empty());
    }

    #[test]
    fn classifies_tokens() {
        let pattern = Pattern::parse("/users/:name/files/*rest").unwrap();
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Literal("users".into()),
                Segment::Named("name".into()),
                Segment::Literal("files".into()),
                Segment::Splat("rest".into()),
            ]
        );
        assert!(pattern.ends_in_splat());
    }

    #[test]
    fn trims_surrounding_separators() {
        let a = Pattern::parse("/foo/:bar/").unwrap();
        let b = Pattern::parse("foo/:bar").unwrap();
        assert_eq!(a.segments(), b.segments());
        assert_eq!(a.as_str(), "/foo/:bar/");
    }

    #[test]
    fn rejects_splat_before_other_segments() {
        let err = Pattern::parse("/input/*next/more").unwrap_err();
        assert_eq!(
            err,
            PatternError::MisplacedSplat {
                pattern: "/input/*next/more".into(),
                key: "next".into(),
                position: 1,
            }
        );
        assert!(err.to_string().contains("misplaced wildcard segment"));
    }

    #[test]
    fn rejects_two_splats() {
        assert!(Pattern::parse("/*a/*b").is_err());
    }

    #[test]
    fn lone_splat_is_valid() {
        let pattern = Pattern::parse("/*all").unwrap();
        assert_eq!(pattern.segments(), &[Segment::Splat("all".into())]);
    }
}
