//! Core matcher types and traits
//!
//! This module contains the fundamental building blocks of the matcher
//! system:
//!
//! - **Traits**: [`Matcher`], [`BoxedMatcher`]
//! - **Aggregate checks**: [`assert_matcher_for`], [`Aggregate`], [`MatchState`]
//! - **Failures**: [`MatchFailure`]
//! - **Runner entry points**: [`evaluate`], [`evaluate_negated`]
//!
//! # Lifecycle
//!
//! A matcher is built by a factory inside a test, evaluated once against a
//! subject, and dropped. The runner entry points take the matcher by value,
//! so an instance cannot be evaluated twice through them.
//!
//! ```rust
//! use remarkable_matcher::foundation::{Matcher, MatchState, evaluate};
//!
//! struct AllShort {
//!     words: Vec<&'static str>,
//!     state: MatchState,
//! }
//!
//! impl Matcher for AllShort {
//!     type Subject = usize;
//!
//!     fn matches(&mut self, limit: &usize) -> bool {
//!         let limit = *limit;
//!         self.state.assert_matcher_for(&self.words, |word| {
//!             if word.len() <= limit {
//!                 Ok(())
//!             } else {
//!                 Err(format!("{word} has {} characters", word.len()))
//!             }
//!         })
//!     }
//!
//!     fn description(&self) -> String {
//!         "keep words short".to_owned()
//!     }
//!
//!     fn expectation(&self) -> String {
//!         format!("{} to be short", self.state.current().unwrap_or("every word"))
//!     }
//!
//!     fn failure_reason(&self) -> Option<&str> {
//!         self.state.reason()
//!     }
//! }
//!
//! let matcher = AllShort { words: vec!["ok", "fine", "enormous"], state: MatchState::new() };
//! let failure = evaluate(matcher, &4).unwrap_err();
//! assert_eq!(failure.message(), "Expected enormous to be short (enormous has 8 characters)");
//! ```

pub mod aggregate;
pub mod error;
pub mod traits;

pub use aggregate::{Aggregate, MatchState, assert_matcher_for};
pub use error::MatchFailure;
pub use traits::{BoxedMatcher, Matcher};

// ============================================================================
// RUNNER ENTRY POINTS
// ============================================================================

/// Evaluates a positive assertion, consuming the matcher.
///
/// Returns `Ok(())` when the subject matches. Success is silent; failure
/// carries the matcher's diagnostic.
pub fn evaluate<M>(mut matcher: M, subject: &M::Subject) -> Result<(), MatchFailure>
where
    M: Matcher,
{
    if matcher.matches(subject) {
        return Ok(());
    }

    let failure = MatchFailure::positive(&matcher);
    tracing::debug!(
        description = failure.description(),
        reason = failure.reason(),
        "matcher rejected subject"
    );
    Err(failure)
}

/// Evaluates a negated assertion, consuming the matcher.
///
/// Returns `Ok(())` when the subject does NOT match.
pub fn evaluate_negated<M>(mut matcher: M, subject: &M::Subject) -> Result<(), MatchFailure>
where
    M: Matcher,
{
    if !matcher.matches(subject) {
        return Ok(());
    }

    let failure = MatchFailure::negated(&matcher);
    tracing::debug!(
        description = failure.description(),
        "negated matcher unexpectedly matched"
    );
    Err(failure)
}

// ============================================================================
// TESTS
// ============================================================================
