//! Request path patterns.

use std::fmt;

/// A path matcher: either one exact path or a whole subtree.
///
/// Patterns ending in `/**` match the prefix itself and everything below
/// it; any other pattern matches only the identical path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathPattern {
    /// Matches one path exactly.
    Exact(String),
    /// Matches the prefix and any path beneath it.
    Subtree(String),
}

impl PathPattern {
    /// Parse a pattern such as `/actuator/health` or `/swagger-ui/**`.
    pub fn parse(pattern: &str) -> Self {
        match pattern.strip_suffix("/**") {
            Some(prefix) => Self::Subtree(prefix.to_string()),
            None => Self::Exact(pattern.to_string()),
        }
    }

    /// Whether `path` falls under this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Exact(exact) => path == exact,
            Self::Subtree(prefix) => path
                .strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/')),
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(exact) => write!(f, "{exact}"),
            Self::Subtree(prefix) => write!(f, "{prefix}/**"),
        }
    }
}
