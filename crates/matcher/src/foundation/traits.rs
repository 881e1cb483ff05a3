//! Core traits for the matcher system
//!
//! This module defines the contract every assertion matcher implements so a
//! runner can treat matchers polymorphically.

// ============================================================================
// CORE MATCHER TRAIT
// ============================================================================

/// The contract every assertion matcher implements.
///
/// A matcher is constructed with its configuration (typically a list of
/// field names), then evaluated exactly once against a subject. The subject
/// is borrowed only for the duration of [`matches`](Matcher::matches); the
/// matcher never keeps it.
///
/// When `matches` returns `false` the matcher must have recorded enough
/// state for [`failure_message`](Matcher::failure_message) to explain why.
///
/// The trait is object safe, so registries can store matchers as
/// [`BoxedMatcher`].
///
/// # Examples
///
/// ```rust
/// use remarkable_matcher::foundation::Matcher;
///
/// struct Even {
///     reason: Option<String>,
/// }
///
/// impl Matcher for Even {
///     type Subject = i64;
///
///     fn matches(&mut self, subject: &i64) -> bool {
///         if subject % 2 == 0 {
///             true
///         } else {
///             self.reason = Some(format!("{subject} is odd"));
///             false
///         }
///     }
///
///     fn description(&self) -> String {
///         "be even".to_owned()
///     }
///
///     fn expectation(&self) -> String {
///         "an even number".to_owned()
///     }
///
///     fn failure_reason(&self) -> Option<&str> {
///         self.reason.as_deref()
///     }
/// }
///
/// let mut even = Even { reason: None };
/// assert!(!even.matches(&3));
/// assert_eq!(even.failure_message(), "Expected an even number (3 is odd)");
/// ```
pub trait Matcher {
    /// The type of subject this matcher evaluates.
    ///
    /// Use `?Sized` subjects such as `str` or trait objects freely.
    type Subject: ?Sized;

    /// Evaluates the matcher against `subject`.
    ///
    /// Must not mutate the subject. On `false`, records a failure reason.
    /// A matcher is single-use: evaluating the same instance twice is not
    /// supported.
    fn matches(&mut self, subject: &Self::Subject) -> bool;

    /// One-line statement of what is being asserted, independent of outcome.
    fn description(&self) -> String;

    /// The specific condition expected for the item currently evaluated.
    fn expectation(&self) -> String;

    /// Reason recorded by the last failing sub-check, if any.
    fn failure_reason(&self) -> Option<&str>;

    /// Message shown when [`matches`](Matcher::matches) returned `false`.
    fn failure_message(&self) -> String {
        match self.failure_reason() {
            Some(reason) => format!("Expected {} ({reason})", self.expectation()),
            None => format!("Expected {}", self.expectation()),
        }
    }

    /// Message shown when a negated assertion unexpectedly matched.
    fn negative_failure_message(&self) -> String {
        format!("Did not expect {}", self.expectation())
    }
}

/// A type-erased matcher, the unit a registry factory hands out.
pub type BoxedMatcher<S> = Box<dyn Matcher<Subject = S>>;

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    type Subject = M::Subject;

    fn matches(&mut self, subject: &Self::Subject) -> bool {
        (**self).matches(subject)
    }

    fn description(&self) -> String {
        (**self).description()
    }

    fn expectation(&self) -> String {
        (**self).expectation()
    }

    fn failure_reason(&self) -> Option<&str> {
        (**self).failure_reason()
    }

    fn failure_message(&self) -> String {
        (**self).failure_message()
    }

    fn negative_failure_message(&self) -> String {
        (**self).negative_failure_message()
    }
}

// ============================================================================
// TESTS
// ============================================================================
