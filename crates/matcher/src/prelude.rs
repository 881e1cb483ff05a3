//! Prelude module for convenient imports.
//!
//! Provides a single `use remarkable_matcher::prelude::*;` import that brings
//! in the matcher contract, the registry types and the example group.
//! The `args!`, `include_matchers!`, `should!` and `should_not!` macros live
//! at the crate root.

// ============================================================================
// FOUNDATION: Core trait, aggregate checks, failures
// ============================================================================

pub use crate::foundation::{
    Aggregate, BoxedMatcher, MatchFailure, MatchState, Matcher, assert_matcher_for, evaluate,
    evaluate_negated,
};

// ============================================================================
// ARGUMENTS
// ============================================================================

pub use crate::args::{Arg, ArgumentError, Args, Options};

// ============================================================================
// REGISTRY: Capability groups, hosts, include
// ============================================================================

pub use crate::registry::{
    Capabilities, Declaration, Instance, Level, MacroContext, MacroSet, MatcherHost,
    MatcherLibrary, MatcherSet, RegistryError, include_matchers,
};

// ============================================================================
// GROUPS: Running examples
// ============================================================================

pub use crate::group::{ExampleError, ExampleGroup, ExampleOutcome, RunReport};

pub use crate::text::to_sentence;
