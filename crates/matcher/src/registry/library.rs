//! Capability groups and the library bundle that carries them.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use super::error::{Level, RegistryError};
use super::host::MacroContext;
use crate::args::Args;
use crate::foundation::{BoxedMatcher, Matcher};

/// Shared constructor for one kind of matcher.
///
/// The same `Arc` backs both the instance-level and the class-level path of
/// a host, so both build identical matchers.
pub type MatcherFactory<S> =
    Arc<dyn Fn(Args) -> Result<BoxedMatcher<S>, RegistryError> + Send + Sync>;

/// A class-level helper. It may resolve class-level matchers and declare
/// examples through the [`MacroContext`].
pub type MacroHelper<S> =
    Arc<dyn Fn(&mut MacroContext<'_, S>, &Args) -> Result<(), RegistryError> + Send + Sync>;

// ============================================================================
// MATCHER SET
// ============================================================================

/// The `Matchers` capability group: an ordered name -> factory table.
pub struct MatcherSet<S: ?Sized + 'static> {
    factories: IndexMap<String, MatcherFactory<S>>,
}

impl<S: ?Sized + 'static> MatcherSet<S> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            factories: IndexMap::new(),
        }
    }

    /// Registers a fallible factory under `name`, returning the factory it
    /// replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Option<MatcherFactory<S>>
    where
        F: Fn(Args) -> Result<BoxedMatcher<S>, RegistryError> + Send + Sync + 'static,
    {
        self.insert(name, Arc::new(factory))
    }

    /// Inserts an already shared factory, returning the one it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        factory: MatcherFactory<S>,
    ) -> Option<MatcherFactory<S>> {
        self.factories.insert(name.into(), factory)
    }

    /// Adds a fallible factory.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(Args) -> Result<BoxedMatcher<S>, RegistryError> + Send + Sync + 'static,
    {
        self.register(name, factory);
        self
    }

    /// Adds an infallible constructor for a concrete matcher type.
    ///
    /// ```rust
    /// use remarkable_matcher::args::Args;
    /// use remarkable_matcher::foundation::{Matcher, MatchState};
    /// use remarkable_matcher::registry::MatcherSet;
    ///
    /// struct NonEmpty(MatchState);
    ///
    /// impl Matcher for NonEmpty {
    ///     type Subject = str;
    ///     fn matches(&mut self, s: &str) -> bool { !s.is_empty() }
    ///     fn description(&self) -> String { "be non-empty".into() }
    ///     fn expectation(&self) -> String { "a non-empty string".into() }
    ///     fn failure_reason(&self) -> Option<&str> { self.0.reason() }
    /// }
    ///
    /// let set = MatcherSet::<str>::new().with_matcher("non_empty", |_args: Args| NonEmpty(MatchState::new()));
    /// assert!(set.contains("non_empty"));
    /// ```
    #[must_use = "builder methods must be chained or built"]
    pub fn with_matcher<M, F>(self, name: impl Into<String>, build: F) -> Self
    where
        M: Matcher<Subject = S> + 'static,
        F: Fn(Args) -> M + Send + Sync + 'static,
    {
        self.with(name, move |args| Ok(Box::new(build(args)) as BoxedMatcher<S>))
    }

    /// Looks up a factory by name.
    pub fn get(&self, name: &str) -> Option<&MatcherFactory<S>> {
        self.factories.get(name)
    }

    /// Builds a matcher, reporting a missing factory at `level`.
    pub fn build(&self, name: &str, args: Args, level: Level) -> Result<BoxedMatcher<S>, RegistryError> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| RegistryError::MatcherNotFound {
                name: name.to_owned(),
                level,
            })?;
        factory(args)
    }

    /// Whether a factory with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    /// Name and factory pairs, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MatcherFactory<S>)> {
        self.factories.iter().map(|(name, f)| (name.as_str(), f))
    }

    /// Number of factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl<S: ?Sized + 'static> Default for MatcherSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized + 'static> Clone for MatcherSet<S> {
    fn clone(&self) -> Self {
        Self {
            factories: self.factories.clone(),
        }
    }
}

impl<S: ?Sized + 'static> fmt::Debug for MatcherSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

// ============================================================================
// MACRO SET
// ============================================================================

/// The `Macros` capability group: class-level helpers by name.
pub struct MacroSet<S: ?Sized + 'static> {
    helpers: IndexMap<String, MacroHelper<S>>,
}

impl<S: ?Sized + 'static> MacroSet<S> {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self {
            helpers: IndexMap::new(),
        }
    }

    /// Registers a helper under `name`, returning the one it replaced.
    pub fn register<F>(&mut self, name: impl Into<String>, helper: F) -> Option<MacroHelper<S>>
    where
        F: Fn(&mut MacroContext<'_, S>, &Args) -> Result<(), RegistryError> + Send + Sync + 'static,
    {
        self.insert(name, Arc::new(helper))
    }

    /// Inserts an already shared helper, returning the one it replaced.
    pub fn insert(&mut self, name: impl Into<String>, helper: MacroHelper<S>) -> Option<MacroHelper<S>> {
        self.helpers.insert(name.into(), helper)
    }

    /// Adds a helper.
    #[must_use = "builder methods must be chained or built"]
    pub fn with<F>(mut self, name: impl Into<String>, helper: F) -> Self
    where
        F: Fn(&mut MacroContext<'_, S>, &Args) -> Result<(), RegistryError> + Send + Sync + 'static,
    {
        self.register(name, helper);
        self
    }

    /// Looks up a helper by name.
    pub fn get(&self, name: &str) -> Option<&MacroHelper<S>> {
        self.helpers.get(name)
    }

    /// Whether a helper with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.helpers.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.helpers.keys().map(String::as_str)
    }

    /// Name and helper pairs, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MacroHelper<S>)> {
        self.helpers.iter().map(|(name, h)| (name.as_str(), h))
    }

    /// Number of helpers.
    pub fn len(&self) -> usize {
        self.helpers.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.helpers.is_empty()
    }
}

impl<S: ?Sized + 'static> Default for MacroSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized + 'static> Clone for MacroSet<S> {
    fn clone(&self) -> Self {
        Self {
            helpers: self.helpers.clone(),
        }
    }
}

impl<S: ?Sized + 'static> fmt::Debug for MacroSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

// ============================================================================
// MATCHER LIBRARY
// ============================================================================

/// A bundle of optional capability groups, ready to be included into a host.
///
/// Either group may be absent; [`include_matchers`](super::include_matchers)
/// skips absent groups.
///
/// ```rust
/// use remarkable_matcher::registry::{MacroSet, MatcherLibrary};
///
/// let library = MatcherLibrary::<str>::new("helpers").with_macros(MacroSet::new());
/// assert!(library.macros().is_some());
/// assert!(library.matchers().is_none());
/// ```
pub struct MatcherLibrary<S: ?Sized + 'static> {
    name: String,
    macros: Option<MacroSet<S>>,
    matchers: Option<MatcherSet<S>>,
}

impl<S: ?Sized + 'static> MatcherLibrary<S> {
    /// Creates a library with no capability groups.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            macros: None,
            matchers: None,
        }
    }

    /// Sets the `Matchers` group.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_matchers(mut self, matchers: MatcherSet<S>) -> Self {
        self.matchers = Some(matchers);
        self
    }

    /// Sets the `Macros` group.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_macros(mut self, macros: MacroSet<S>) -> Self {
        self.macros = Some(macros);
        self
    }

    /// Library name, used in logs and on the host's include list.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `Matchers` group, if present.
    pub fn matchers(&self) -> Option<&MatcherSet<S>> {
        self.matchers.as_ref()
    }

    /// The `Macros` group, if present.
    pub fn macros(&self) -> Option<&MacroSet<S>> {
        self.macros.as_ref()
    }
}

impl<S: ?Sized + 'static> Clone for MatcherLibrary<S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            macros: self.macros.clone(),
            matchers: self.matchers.clone(),
        }
    }
}

impl<S: ?Sized + 'static> fmt::Debug for MatcherLibrary<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherLibrary")
            .field("name", &self.name)
            .field("macros", &self.macros)
            .field("matchers", &self.matchers)
            .finish()
    }
}
