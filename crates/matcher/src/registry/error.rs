//! Registry error types.

use std::fmt;

use crate::args::ArgumentError;

/// Which call path a matcher lookup went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Bare calls inside a test body.
    Instance,
    /// Class-level declarations (macros, `should_*` helpers).
    Class,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instance => f.write_str("instance-level"),
            Self::Class => f.write_str("class-level"),
        }
    }
}

/// Errors from capability lookups on a host.
///
/// A missing capability is a programmer error in the test definition, so it
/// surfaces loudly instead of silently skipping the assertion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RegistryError {
    /// No factory with this name was included at the requested level.
    #[error("no {level} matcher named '{name}' is available on this host")]
    MatcherNotFound {
        /// The requested factory name.
        name: String,
        /// The call path used.
        level: Level,
    },

    /// No macro helper with this name was included.
    #[error("no macro named '{name}' is available on this host")]
    MacroNotFound {
        /// The requested macro name.
        name: String,
    },

    /// The factory rejected its arguments.
    #[error("invalid matcher arguments: {0}")]
    InvalidArguments(#[from] ArgumentError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matcher_not_found_display() {
        let err = RegistryError::MatcherNotFound {
            name: "protect_attributes".into(),
            level: Level::Instance,
        };
        assert_eq!(
            err.to_string(),
            "no instance-level matcher named 'protect_attributes' is available on this host"
        );
    }

    #[test]
    fn macro_not_found_display() {
        let err = RegistryError::MacroNotFound {
            name: "should_validate".into(),
        };
        assert!(err.to_string().contains("should_validate"));
    }

    #[test]
    fn converts_argument_errors() {
        let err: RegistryError = ArgumentError::MisplacedOptions { position: 0 }.into();
        assert!(matches!(err, RegistryError::InvalidArguments(_)));
    }
}
