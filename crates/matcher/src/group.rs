//! Example groups: a concrete host that declares and runs assertions.
//!
//! An [`ExampleGroup`] plays the part of a test class. Libraries are
//! included into it, class-level helpers declare examples on it, and test
//! bodies reach matchers through the instance-level handle. Running the
//! group evaluates every example against one subject.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{MatchFailure, Matcher, evaluate, evaluate_negated};
use crate::registry::{Capabilities, Declaration, Instance, MatcherHost, RegistryError};

// ============================================================================
// EXAMPLE ERROR
// ============================================================================

/// Why an example did not pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExampleError {
    /// An assertion failed.
    #[error(transparent)]
    Failure(#[from] MatchFailure),

    /// A capability the example relied on is missing.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Body of an example written as code.
pub type ExampleBody<S> =
    Arc<dyn Fn(&Instance<'_, S>, &S) -> Result<(), ExampleError> + Send + Sync>;

enum Example<S: ?Sized + 'static> {
    Declared(Declaration<S>),
    Body {
        description: String,
        body: ExampleBody<S>,
    },
}

impl<S: ?Sized + 'static> Example<S> {
    fn run(&self, instance: &Instance<'_, S>, subject: &S) -> ExampleOutcome {
        match self {
            Self::Declared(declaration) => run_declaration(declaration, subject),
            Self::Body { description, body } => ExampleOutcome {
                description: description.clone(),
                failure: body(instance, subject).err().map(|e| e.to_string()),
            },
        }
    }
}

fn run_declaration<S: ?Sized + 'static>(declaration: &Declaration<S>, subject: &S) -> ExampleOutcome {
    let verb = if declaration.is_negated() { "should not" } else { "should" };

    let matcher = match declaration.build() {
        Ok(matcher) => matcher,
        Err(e) => {
            return ExampleOutcome {
                description: format!("{verb} {}", declaration.matcher_name()),
                failure: Some(e.to_string()),
            };
        }
    };

    let description = format!("{verb} {}", matcher.description());
    let result = if declaration.is_negated() {
        evaluate_negated(matcher, subject)
    } else {
        evaluate(matcher, subject)
    };

    ExampleOutcome {
        description,
        failure: result.err().map(|failure| failure.message().to_owned()),
    }
}

// ============================================================================
// EXAMPLE GROUP
// ============================================================================

/// A host standing in for a test class.
///
/// ```rust
/// use remarkable_matcher::args;
/// use remarkable_matcher::group::ExampleGroup;
///
/// let mut group = ExampleGroup::<str>::new("strings");
/// group.it("calls a matcher that was never included", |instance, _subject| {
///     instance.matcher("be_upper", args![])?;
///     Ok(())
/// });
///
/// let report = group.run("x");
/// assert_eq!(report.failed_count(), 1);
/// ```
pub struct ExampleGroup<S: ?Sized + 'static> {
    name: String,
    capabilities: Capabilities<S>,
    examples: Vec<Example<S>>,
}

impl<S: ?Sized + 'static> ExampleGroup<S> {
    /// Creates a group with no capabilities and no examples.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capabilities: Capabilities::new(),
            examples: Vec::new(),
        }
    }

    /// Group name, shown in reports.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds an example written as code.
    pub fn it<F>(&mut self, description: impl Into<String>, body: F) -> &mut Self
    where
        F: Fn(&Instance<'_, S>, &S) -> Result<(), ExampleError> + Send + Sync + 'static,
    {
        self.examples.push(Example::Body {
            description: description.into(),
            body: Arc::new(body),
        });
        self
    }

    /// Number of examples.
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Whether no examples were declared.
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Runs every example against `subject`.
    ///
    /// Each example builds its own matchers, so outcomes never share state.
    pub fn run(&self, subject: &S) -> RunReport {
        let instance = self.instance();
        let outcomes: Vec<ExampleOutcome> = self
            .examples
            .iter()
            .map(|example| example.run(&instance, subject))
            .collect();

        let report = RunReport {
            group: self.name.clone(),
            outcomes,
        };
        tracing::debug!(
            group = %self.name,
            examples = report.len(),
            failures = report.failed_count(),
            "ran example group"
        );
        report
    }
}

impl<S: ?Sized + 'static> MatcherHost for ExampleGroup<S> {
    type Subject = S;

    fn capabilities(&self) -> &Capabilities<S> {
        &self.capabilities
    }

    fn capabilities_mut(&mut self) -> &mut Capabilities<S> {
        &mut self.capabilities
    }

    fn declare(&mut self, declaration: Declaration<S>) {
        self.examples.push(Example::Declared(declaration));
    }
}

impl<S: ?Sized + 'static> fmt::Debug for ExampleGroup<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExampleGroup")
            .field("name", &self.name)
            .field("capabilities", &self.capabilities)
            .field("examples", &self.examples.len())
            .finish()
    }
}

// ============================================================================
// REPORTING
// ============================================================================

/// Outcome of one example.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleOutcome {
    description: String,
    failure: Option<String>,
}

impl ExampleOutcome {
    /// What the example asserted.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether it passed.
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }

    /// Diagnostic for a failed example.
    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }
}

/// Outcomes of one group run, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    group: String,
    outcomes: Vec<ExampleOutcome>,
}

impl RunReport {
    /// The group that ran.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// All outcomes.
    pub fn outcomes(&self) -> &[ExampleOutcome] {
        &self.outcomes
    }

    /// Failed outcomes only.
    pub fn failures(&self) -> impl Iterator<Item = &ExampleOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    /// Number of examples run.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether nothing ran.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of failed examples.
    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    /// Whether every example passed.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(ExampleOutcome::passed)
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.group)?;
        for outcome in &self.outcomes {
            match outcome.failure() {
                None => writeln!(f, "  ok   {}", outcome.description())?,
                Some(failure) => {
                    writeln!(f, "  FAIL {}", outcome.description())?;
                    writeln!(f, "       {failure}")?;
                }
            }
        }
        write!(f, "{} examples, {} failures", self.len(), self.failed_count())
    }
}
