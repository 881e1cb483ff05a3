//! Matcher registry: capability groups and their injection into hosts.
//!
//! A [`MatcherLibrary`] bundles up to two optional capability groups:
//!
//! - **`Matchers`** ([`MatcherSet`]): named factories. Included at both
//!   instance level (bare calls inside test bodies, via [`Instance`]) and
//!   class level (declarations, via [`MatcherHost::matcher`]).
//! - **`Macros`** ([`MacroSet`]): class-level helpers only.
//!
//! [`include_matchers`] injects a library into any [`MatcherHost`] and also
//! installs the generic `should_*` / `should_not_*` helpers.
//!
//! # Examples
//!
//! ```rust
//! use remarkable_matcher::args;
//! use remarkable_matcher::foundation::{Matcher, MatchState};
//! use remarkable_matcher::group::ExampleGroup;
//! use remarkable_matcher::registry::{MatcherHost, MatcherLibrary, MatcherSet, include_matchers};
//!
//! struct StartsWith(String, MatchState);
//!
//! impl Matcher for StartsWith {
//!     type Subject = str;
//!
//!     fn matches(&mut self, s: &str) -> bool {
//!         self.1.begin();
//!         if s.starts_with(&self.0) {
//!             true
//!         } else {
//!             self.1.fail(format!("got '{s}'"));
//!             false
//!         }
//!     }
//!
//!     fn description(&self) -> String { format!("start with '{}'", self.0) }
//!     fn expectation(&self) -> String { format!("a string starting with '{}'", self.0) }
//!     fn failure_reason(&self) -> Option<&str> { self.1.reason() }
//! }
//!
//! let library = MatcherLibrary::new("strings").with_matchers(
//!     MatcherSet::new().with_matcher("start_with", |args: remarkable_matcher::args::Args| {
//!         StartsWith(args.fields().concat(), MatchState::new())
//!     }),
//! );
//!
//! let mut group = ExampleGroup::<str>::new("greeting");
//! include_matchers(&library, &mut group);
//!
//! group.call_macro("should_start_with", args!["hel"]).unwrap();
//! assert!(group.run("hello").is_success());
//! ```

mod error;
mod host;
mod library;

pub use error::{Level, RegistryError};
pub use host::{Capabilities, Declaration, Instance, MacroContext, MatcherHost, include_matchers};
pub use library::{MacroHelper, MacroSet, MatcherFactory, MatcherLibrary, MatcherSet};
