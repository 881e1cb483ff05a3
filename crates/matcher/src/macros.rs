//! Macros for writing assertions with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`args!`]: Build factory arguments from field tokens
//! - [`include_matchers!`]: Include one or more libraries into a host
//! - [`should!`] / [`should_not!`]: Evaluate a matcher and panic with its
//!   diagnostic on failure, for use inside `#[test]` functions

// ============================================================================
// ARGUMENTS
// ============================================================================

/// Builds [`Args`](crate::args::Args) from field tokens.
///
/// ```rust
/// use remarkable_matcher::args;
///
/// let args = args!["password", "admin_flag"];
/// assert_eq!(args.fields(), ["password", "admin_flag"]);
/// assert!(args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => {
        $crate::args::Args::default()
    };
    ($($field:expr),+ $(,)?) => {
        $crate::args::Args::from_fields([$(::std::string::String::from($field)),+])
    };
}

// ============================================================================
// INCLUDE
// ============================================================================

/// Includes each library into `host`, in order.
///
/// Expands to one [`include_matchers`](crate::registry::include_matchers)
/// call per library.
///
/// ```rust
/// use remarkable_matcher::include_matchers;
/// use remarkable_matcher::group::ExampleGroup;
/// use remarkable_matcher::registry::{MacroSet, MatcherHost, MatcherLibrary};
///
/// let helpers = MatcherLibrary::<str>::new("helpers").with_macros(MacroSet::new());
/// let nothing = MatcherLibrary::<str>::new("nothing");
///
/// let mut group = ExampleGroup::<str>::new("text");
/// include_matchers!(group, helpers, nothing);
///
/// assert_eq!(group.capabilities().libraries(), ["helpers", "nothing"]);
/// ```
#[macro_export]
macro_rules! include_matchers {
    ($host:expr, $($library:expr),+ $(,)?) => {{
        $( $crate::registry::include_matchers(&$library, &mut $host); )+
    }};
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Asserts that `subject` satisfies `matcher`, panicking with the matcher's
/// failure message otherwise.
///
/// `subject` must be a reference to the matcher's subject type.
#[macro_export]
macro_rules! should {
    ($subject:expr, $matcher:expr $(,)?) => {
        if let ::std::result::Result::Err(failure) =
            $crate::foundation::evaluate($matcher, $subject)
        {
            ::std::panic!("{}", failure);
        }
    };
}

/// Asserts that `subject` does NOT satisfy `matcher`.
#[macro_export]
macro_rules! should_not {
    ($subject:expr, $matcher:expr $(,)?) => {
        if let ::std::result::Result::Err(failure) =
            $crate::foundation::evaluate_negated($matcher, $subject)
        {
            ::std::panic!("{}", failure);
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::foundation::{MatchState, Matcher};

    struct Equals(i32, MatchState);

    impl Matcher for Equals {
        type Subject = i32;

        fn matches(&mut self, n: &i32) -> bool {
            self.1.begin();
            if *n == self.0 {
                true
            } else {
                self.1.fail(format!("got {n}"));
                false
            }
        }

        fn description(&self) -> String {
            format!("equal {}", self.0)
        }

        fn expectation(&self) -> String {
            format!("{}", self.0)
        }

        fn failure_reason(&self) -> Option<&str> {
            self.1.reason()
        }
    }

    #[test]
    fn should_passes_silently() {
        should!(&3, Equals(3, MatchState::new()));
        should_not!(&4, Equals(3, MatchState::new()));
    }

    #[test]
    #[should_panic(expected = "Expected 3 (got 4)")]
    fn should_panics_with_failure_message() {
        should!(&4, Equals(3, MatchState::new()));
    }

    #[test]
    #[should_panic(expected = "Did not expect 3")]
    fn should_not_panics_when_matched() {
        should_not!(&3, Equals(3, MatchState::new()));
    }

    #[test]
    fn args_accepts_owned_and_borrowed() {
        let owned = String::from("email");
        let args = args!["name", owned];
        assert_eq!(args.fields(), ["name", "email"]);
    }
}
