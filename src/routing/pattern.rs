//! Route pattern module
//!
//! Container-style URL patterns:
//! - Exact path (`/hello-servlet`)
//! - Prefix wildcard (`/spring/*`, `/*`)
//! - Root catch-all (`/`)

use std::fmt;

use super::error::RouteError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoutePattern {
    /// Matches one literal path
    Exact(String),
    /// Matches the literal prefix and everything below it; holds the prefix without `/*`
    Prefix(String),
    /// Matches anything no other pattern matched
    CatchAll,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let invalid = |reason| RouteError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };

        if pattern.is_empty() {
            return Err(invalid("pattern is empty"));
        }
        if !pattern.starts_with('/') {
            return Err(invalid("pattern must start with '/'"));
        }
        if pattern == "/" {
            return Ok(Self::CatchAll);
        }
        if let Some(prefix) = pattern.strip_suffix("/*") {
            if prefix.contains('*') {
                return Err(invalid("wildcard is only allowed as a trailing '/*'"));
            }
            return Ok(Self::Prefix(prefix.to_string()));
        }
        if pattern.contains('*') {
            return Err(invalid("wildcard is only allowed as a trailing '/*'"));
        }

        Ok(Self::Exact(pattern.to_string()))
    }

    /// Patterns that may be bound at most once
    pub const fn is_literal(&self) -> bool {
        matches!(self, Self::Exact(_) | Self::CatchAll)
    }

    /// Length of the literal prefix, used to rank overlapping prefix patterns
    pub fn specificity(&self) -> usize {
        match self {
            Self::Exact(path) | Self::Prefix(path) => path.len(),
            Self::CatchAll => 0,
        }
    }

    /// For a prefix pattern, return the part of `path` below the prefix.
    ///
    /// Matching is segment-aware: `/spring/*` matches `/spring` and
    /// `/spring/x` but not `/springfield`. The remainder is empty when
    /// `path` equals the prefix.
    pub fn strip_prefix<'p>(&self, path: &'p str) -> Option<&'p str> {
        let Self::Prefix(prefix) = self else {
            return None;
        };
        let rest = path.strip_prefix(prefix.as_str())?;
        if rest.is_empty() || rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(path) => write!(f, "{path}"),
            Self::Prefix(prefix) => write!(f, "{prefix}/*"),
            Self::CatchAll => write!(f, "/"),
        }
    }
}
