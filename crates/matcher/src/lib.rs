//! # remarkable-matcher
//!
//! A small extension architecture for assertion matchers.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use remarkable_matcher::prelude::*;
//! use remarkable_matcher::args;
//!
//! let mut group = ExampleGroup::<Record>::new("User");
//! include_matchers(&remarkable_active_record::library(), &mut group);
//! group.call_macro("should_protect_attributes", args!["password"])?;
//! println!("{}", group.run(&user_policy));
//! ```
//!
//! ## Writing Matchers
//!
//! Implement [`Matcher`](foundation::Matcher). Matchers that check several
//! targets delegate to [`MatchState::assert_matcher_for`](foundation::MatchState::assert_matcher_for),
//! which stops at the first failing target and records why.
//!
//! ## Sharing Matchers
//!
//! Bundle factories into a [`MatcherLibrary`](registry::MatcherLibrary) and
//! include it into a host with [`include_matchers`](registry::include_matchers).
//! Factories then work both as bare calls inside test bodies
//! ([`Instance::matcher`](registry::Instance::matcher)) and as class-level
//! declarations (`should_<name>` helpers).

#![warn(missing_docs)]

pub mod args;
pub mod foundation;
pub mod group;
mod macros;
pub mod prelude;
pub mod registry;
pub mod text;
