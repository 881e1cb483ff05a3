//! Hosts, the capabilities they gain, and the include operation.
//!
//! A host is any type that can receive matcher capabilities, typically an
//! example group standing in for a test class. Including a library is purely
//! additive: a host only ever gains factories and helpers.

use std::fmt;

use super::error::{Level, RegistryError};
use super::library::{MacroSet, MatcherFactory, MatcherLibrary, MatcherSet};
use crate::args::Args;
use crate::foundation::BoxedMatcher;

// ============================================================================
// CAPABILITIES
// ============================================================================

/// Everything a host has gained from included libraries.
pub struct Capabilities<S: ?Sized + 'static> {
    base_macros: bool,
    macros: MacroSet<S>,
    class_matchers: MatcherSet<S>,
    instance_matchers: MatcherSet<S>,
    libraries: Vec<String>,
}

impl<S: ?Sized + 'static> Capabilities<S> {
    /// Creates an empty capability table.
    pub fn new() -> Self {
        Self {
            base_macros: false,
            macros: MacroSet::new(),
            class_matchers: MatcherSet::new(),
            instance_matchers: MatcherSet::new(),
            libraries: Vec::new(),
        }
    }

    /// Whether the generic `should_*` / `should_not_*` helpers are installed.
    pub fn has_base_macros(&self) -> bool {
        self.base_macros
    }

    /// Class-level helpers from `Macros` groups.
    pub fn macros(&self) -> &MacroSet<S> {
        &self.macros
    }

    /// Factories callable as class-level declarations.
    pub fn class_matchers(&self) -> &MatcherSet<S> {
        &self.class_matchers
    }

    /// Factories callable inside test bodies.
    pub fn instance_matchers(&self) -> &MatcherSet<S> {
        &self.instance_matchers
    }

    /// Names of included libraries, in include order.
    pub fn libraries(&self) -> &[String] {
        &self.libraries
    }

    /// Whether a library with this name was included.
    pub fn includes(&self, library: &str) -> bool {
        self.libraries.iter().any(|name| name == library)
    }
}

impl<S: ?Sized + 'static> Default for Capabilities<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ?Sized + 'static> Clone for Capabilities<S> {
    fn clone(&self) -> Self {
        Self {
            base_macros: self.base_macros,
            macros: self.macros.clone(),
            class_matchers: self.class_matchers.clone(),
            instance_matchers: self.instance_matchers.clone(),
            libraries: self.libraries.clone(),
        }
    }
}

impl<S: ?Sized + 'static> fmt::Debug for Capabilities<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capabilities")
            .field("base_macros", &self.base_macros)
            .field("macros", &self.macros)
            .field("class_matchers", &self.class_matchers)
            .field("instance_matchers", &self.instance_matchers)
            .field("libraries", &self.libraries)
            .finish()
    }
}

// ============================================================================
// DECLARATIONS
// ============================================================================

/// A class-level assertion declared by a macro, evaluated when the host runs.
///
/// Holds the factory rather than a matcher so every run builds a fresh,
/// single-use instance.
pub struct Declaration<S: ?Sized + 'static> {
    matcher: String,
    args: Args,
    negated: bool,
    factory: MatcherFactory<S>,
}

impl<S: ?Sized + 'static> Declaration<S> {
    /// Declares an assertion built by `factory`.
    pub fn new(matcher: impl Into<String>, args: Args, negated: bool, factory: MatcherFactory<S>) -> Self {
        Self {
            matcher: matcher.into(),
            args,
            negated,
            factory,
        }
    }

    /// Builds a fresh matcher for one evaluation.
    pub fn build(&self) -> Result<BoxedMatcher<S>, RegistryError> {
        (self.factory)(self.args.clone())
    }

    /// The factory name this declaration resolved.
    pub fn matcher_name(&self) -> &str {
        &self.matcher
    }

    /// Arguments handed to the factory.
    pub fn args(&self) -> &Args {
        &self.args
    }

    /// Whether this is a `should_not` declaration.
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

impl<S: ?Sized + 'static> Clone for Declaration<S> {
    fn clone(&self) -> Self {
        Self {
            matcher: self.matcher.clone(),
            args: self.args.clone(),
            negated: self.negated,
            factory: self.factory.clone(),
        }
    }
}

impl<S: ?Sized + 'static> fmt::Debug for Declaration<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Declaration")
            .field("matcher", &self.matcher)
            .field("args", &self.args)
            .field("negated", &self.negated)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// MACRO CONTEXT
// ============================================================================

/// What a class-level helper sees while it runs.
pub struct MacroContext<'a, S: ?Sized + 'static> {
    capabilities: &'a Capabilities<S>,
    declarations: Vec<Declaration<S>>,
}

impl<'a, S: ?Sized + 'static> MacroContext<'a, S> {
    pub(crate) fn new(capabilities: &'a Capabilities<S>) -> Self {
        Self {
            capabilities,
            declarations: Vec::new(),
        }
    }

    /// The host's capabilities at the time the helper was called.
    pub fn capabilities(&self) -> &Capabilities<S> {
        self.capabilities
    }

    /// Declares that the subject should satisfy the named class-level matcher.
    pub fn should(&mut self, matcher: &str, args: Args) -> Result<(), RegistryError> {
        self.declare_matcher(matcher, args, false)
    }

    /// Declares that the subject should NOT satisfy the named matcher.
    pub fn should_not(&mut self, matcher: &str, args: Args) -> Result<(), RegistryError> {
        self.declare_matcher(matcher, args, true)
    }

    /// Adds a prepared declaration.
    pub fn declare(&mut self, declaration: Declaration<S>) {
        self.declarations.push(declaration);
    }

    fn declare_matcher(&mut self, matcher: &str, args: Args, negated: bool) -> Result<(), RegistryError> {
        let factory = self
            .capabilities
            .class_matchers()
            .get(matcher)
            .cloned()
            .ok_or_else(|| RegistryError::MatcherNotFound {
                name: matcher.to_owned(),
                level: Level::Class,
            })?;
        self.declare(Declaration::new(matcher, args, negated, factory));
        Ok(())
    }

    pub(crate) fn into_declarations(self) -> Vec<Declaration<S>> {
        self.declarations
    }
}

// ============================================================================
// INSTANCE HANDLE
// ============================================================================

/// Instance-level view of a host, handed to test bodies.
///
/// Only factories from `Matchers` groups are reachable here; class-level
/// helpers are not.
pub struct Instance<'a, S: ?Sized + 'static> {
    capabilities: &'a Capabilities<S>,
}

impl<'a, S: ?Sized + 'static> Instance<'a, S> {
    /// Wraps a capability table.
    pub fn new(capabilities: &'a Capabilities<S>) -> Self {
        Self { capabilities }
    }

    /// Calls a factory as a bare call inside a test body.
    ///
    /// Faults with [`RegistryError::MatcherNotFound`] when no included
    /// library provided a `Matchers` group with this name.
    pub fn matcher(&self, name: &str, args: Args) -> Result<BoxedMatcher<S>, RegistryError> {
        self.capabilities
            .instance_matchers()
            .build(name, args, Level::Instance)
    }

    /// Whether the named factory is callable here.
    pub fn has_matcher(&self, name: &str) -> bool {
        self.capabilities.instance_matchers().contains(name)
    }
}

impl<S: ?Sized + 'static> fmt::Debug for Instance<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("matchers", self.capabilities.instance_matchers())
            .finish()
    }
}

// ============================================================================
// HOST TRAIT
// ============================================================================

/// A type that can receive matcher capabilities.
///
/// Implementors provide storage; the lookup paths are provided methods.
pub trait MatcherHost {
    /// The subject type matchers on this host evaluate.
    type Subject: ?Sized + 'static;

    /// Capabilities gained so far.
    fn capabilities(&self) -> &Capabilities<Self::Subject>;

    /// Mutable access used by [`include_matchers`].
    fn capabilities_mut(&mut self) -> &mut Capabilities<Self::Subject>;

    /// Records a declaration produced by a class-level helper.
    fn declare(&mut self, declaration: Declaration<Self::Subject>);

    /// Calls a factory as a class-level declaration.
    fn matcher(&self, name: &str, args: Args) -> Result<BoxedMatcher<Self::Subject>, RegistryError> {
        self.capabilities()
            .class_matchers()
            .build(name, args, Level::Class)
    }

    /// Instance-level view for use inside test bodies.
    fn instance(&self) -> Instance<'_, Self::Subject> {
        Instance::new(self.capabilities())
    }

    /// Calls a class-level helper.
    ///
    /// Helpers from `Macros` groups take precedence. Otherwise, once base
    /// macros are installed, `should_<matcher>` and `should_not_<matcher>`
    /// declare an assertion using the class-level factory `<matcher>`.
    fn call_macro(&mut self, name: &str, args: Args) -> Result<(), RegistryError> {
        let declarations = {
            let capabilities = self.capabilities();
            let mut context = MacroContext::new(capabilities);

            if let Some(helper) = capabilities.macros().get(name) {
                helper(&mut context, &args)?;
            } else if let Some((matcher, negated)) = capabilities
                .has_base_macros()
                .then(|| base_macro_target(name))
                .flatten()
            {
                context.declare_matcher(matcher, args, negated)?;
            } else {
                return Err(RegistryError::MacroNotFound {
                    name: name.to_owned(),
                });
            }

            context.into_declarations()
        };

        for declaration in declarations {
            self.declare(declaration);
        }
        Ok(())
    }
}

/// Splits `should_<matcher>` / `should_not_<matcher>` into the matcher name
/// and whether it is negated.
fn base_macro_target(name: &str) -> Option<(&str, bool)> {
    if let Some(matcher) = name.strip_prefix("should_not_") {
        return Some((matcher, true));
    }
    name.strip_prefix("should_").map(|matcher| (matcher, false))
}

// ============================================================================
// INCLUDE
// ============================================================================

/// Injects a library's capability groups into `host`.
///
/// - base macros are installed unconditionally;
/// - a `Matchers` group is registered at both instance and class level,
///   sharing each factory;
/// - a `Macros` group is registered at class level only.
///
/// Absent groups are skipped. Repeated calls only add; a same-named entry
/// from a later library replaces the earlier one.
pub fn include_matchers<H>(library: &MatcherLibrary<H::Subject>, host: &mut H)
where
    H: MatcherHost + ?Sized,
{
    let capabilities = host.capabilities_mut();
    capabilities.base_macros = true;

    if let Some(matchers) = library.matchers() {
        for (name, factory) in matchers.iter() {
            capabilities.instance_matchers.insert(name, factory.clone());
            if capabilities.class_matchers.insert(name, factory.clone()).is_some() {
                tracing::debug!(library = library.name(), matcher = name, "replaced matcher factory");
            }
        }
    }

    if let Some(macros) = library.macros() {
        for (name, helper) in macros.iter() {
            if capabilities.macros.insert(name, helper.clone()).is_some() {
                tracing::debug!(library = library.name(), helper = name, "replaced macro helper");
            }
        }
    }

    capabilities.libraries.push(library.name().to_owned());
    tracing::debug!(
        library = library.name(),
        matchers = library.matchers().map_or(0, MatcherSet::len),
        macros = library.macros().map_or(0, MacroSet::len),
        "included matcher library"
    );
}
