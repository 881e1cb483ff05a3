//! Failure diagnostics produced when a matcher rejects its subject.

use super::Matcher;

// ============================================================================
// MATCH FAILURE
// ============================================================================

/// A failed assertion, captured from a matcher after evaluation.
///
/// This is the expected "test failed" signal, not a fault: runners display
/// its message and move on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct MatchFailure {
    description: String,
    expectation: String,
    reason: Option<String>,
    message: String,
    negated: bool,
}

impl MatchFailure {
    /// Captures the failure of a positive assertion.
    pub fn positive<M: Matcher + ?Sized>(matcher: &M) -> Self {
        Self {
            description: matcher.description(),
            expectation: matcher.expectation(),
            reason: matcher.failure_reason().map(str::to_owned),
            message: matcher.failure_message(),
            negated: false,
        }
    }

    /// Captures the failure of a negated assertion (the matcher matched).
    pub fn negated<M: Matcher + ?Sized>(matcher: &M) -> Self {
        Self {
            description: matcher.description(),
            expectation: matcher.expectation(),
            reason: None,
            message: matcher.negative_failure_message(),
            negated: true,
        }
    }

    /// What the matcher asserts.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The expectation for the item that failed.
    pub fn expectation(&self) -> &str {
        &self.expectation
    }

    /// Reason recorded by the matcher, if any.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Full diagnostic for display.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this came from a negated assertion.
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}
