//! Aggregate checks - evaluate one predicate over an ordered list of targets
//!
//! Multi-target matchers ("protect `password` and `admin_flag`") all share
//! the same iterate-and-report loop. [`assert_matcher_for`] is that loop;
//! [`MatchState`] wraps it with the bookkeeping a matcher needs to build a
//! failure message afterwards.

use std::fmt::Display;

// ============================================================================
// AGGREGATE OUTCOME
// ============================================================================

/// Result of an aggregate check over an ordered list of items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregate<T> {
    /// Every item satisfied the predicate.
    Passed,
    /// The predicate rejected `item`, found at position `index`.
    ///
    /// Items after `index` were never evaluated.
    Failed {
        /// Position of the first failing item.
        index: usize,
        /// The first failing item.
        item: T,
    },
}

impl<T> Aggregate<T> {
    /// Returns `true` if every item passed.
    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// The first failing item, if any.
    pub fn failed_item(&self) -> Option<&T> {
        match self {
            Self::Passed => None,
            Self::Failed { item, .. } => Some(item),
        }
    }

    /// Position of the first failing item, if any.
    pub fn failed_index(&self) -> Option<usize> {
        match self {
            Self::Passed => None,
            Self::Failed { index, .. } => Some(*index),
        }
    }
}

/// Evaluates `predicate` for each item in order, stopping at the first
/// failure.
///
/// Returns [`Aggregate::Passed`] only if every item passed. An empty list
/// passes.
///
/// # Examples
///
/// ```rust
/// use remarkable_matcher::foundation::{Aggregate, assert_matcher_for};
///
/// let mut seen = Vec::new();
/// let outcome = assert_matcher_for([2, 4, 5, 7], |n| {
///     seen.push(*n);
///     n % 2 == 0
/// });
///
/// assert_eq!(outcome, Aggregate::Failed { index: 2, item: 5 });
/// assert_eq!(seen, vec![2, 4, 5]); // 7 is never evaluated
/// ```
pub fn assert_matcher_for<I, T, F>(items: I, mut predicate: F) -> Aggregate<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    for (index, item) in items.into_iter().enumerate() {
        if !predicate(&item) {
            tracing::trace!(index, "aggregate check stopped at first failure");
            return Aggregate::Failed { index, item };
        }
    }
    Aggregate::Passed
}

// ============================================================================
// MATCH STATE
// ============================================================================

/// Per-instance bookkeeping for multi-target matchers.
///
/// Tracks the item under evaluation and the reason recorded by the first
/// failing check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchState {
    current: Option<String>,
    reason: Option<String>,
    evaluations: usize,
}

impl MatchState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `check` over `items` with [`assert_matcher_for`] semantics.
    ///
    /// `check` returns `Err(reason)` to reject an item. The failing item and
    /// its reason are recorded; on success no reason is recorded and
    /// [`current`](Self::current) points at the last item checked.
    pub fn assert_matcher_for<I, T, F>(&mut self, items: I, mut check: F) -> bool
    where
        I: IntoIterator<Item = T>,
        T: Display,
        F: FnMut(&T) -> Result<(), String>,
    {
        self.begin();

        let current = &mut self.current;
        let mut reason = None;
        let outcome = assert_matcher_for(items, |item| {
            *current = Some(item.to_string());
            match check(item) {
                Ok(()) => true,
                Err(why) => {
                    reason = Some(why);
                    false
                }
            }
        });

        self.reason = reason;
        outcome.passed()
    }

    /// Records a failure for single-target matchers.
    pub fn fail(&mut self, reason: impl Into<String>) {
        self.reason = Some(reason.into());
    }

    /// Marks the start of an evaluation and clears the previous outcome.
    pub fn begin(&mut self) {
        if self.evaluations > 0 {
            tracing::warn!(
                evaluations = self.evaluations,
                "matcher evaluated more than once; matchers are single-use"
            );
        }
        self.evaluations += 1;
        self.current = None;
        self.reason = None;
    }

    /// The item most recently handed to the check.
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Reason recorded by the failing check.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Whether an evaluation has started on this state.
    pub fn is_evaluated(&self) -> bool {
        self.evaluations > 0
    }
}

// ============================================================================
// TESTS
// ============================================================================
