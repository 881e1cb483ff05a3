//! Capability injection through `include_matchers`.

use pretty_assertions::assert_eq;
use remarkable_matcher::args;
use remarkable_matcher::args::Args;
use remarkable_matcher::foundation::{MatchState, Matcher, evaluate};
use remarkable_matcher::group::{ExampleError, ExampleGroup};
use remarkable_matcher::include_matchers;
use remarkable_matcher::registry::{
    Capabilities, Declaration, Level, MacroSet, MatcherHost, MatcherLibrary, MatcherSet,
    RegistryError, include_matchers,
};

// ============================================================================
// FIXTURES
// ============================================================================

struct Contains {
    needles: Vec<String>,
    state: MatchState,
}

impl Matcher for Contains {
    type Subject = str;

    fn matches(&mut self, haystack: &str) -> bool {
        self.state.assert_matcher_for(&self.needles, |needle| {
            if haystack.contains(needle.as_str()) {
                Ok(())
            } else {
                Err(format!("'{haystack}' lacks it"))
            }
        })
    }

    fn description(&self) -> String {
        format!("contain {}", self.needles.join(" and "))
    }

    fn expectation(&self) -> String {
        format!("to contain {}", self.state.current().unwrap_or("everything"))
    }

    fn failure_reason(&self) -> Option<&str> {
        self.state.reason()
    }
}

fn contains(args: Args) -> Contains {
    Contains {
        needles: args.into_fields(),
        state: MatchState::new(),
    }
}

fn matchers_library() -> MatcherLibrary<str> {
    MatcherLibrary::new("text").with_matchers(MatcherSet::new().with_matcher("contain", contains))
}

fn macros_library() -> MatcherLibrary<str> {
    MatcherLibrary::new("text_macros").with_macros(MacroSet::new().with(
        "should_mention_all",
        |context, args| {
            for word in args.fields() {
                context.should("contain", args![word.as_str()])?;
            }
            Ok(())
        },
    ))
}

// ============================================================================
// INCLUDE SEMANTICS
// ============================================================================

#[test]
fn matchers_group_is_reachable_at_both_levels() {
    let mut group = ExampleGroup::<str>::new("text");
    include_matchers(&matchers_library(), &mut group);

    let capabilities = group.capabilities();
    assert!(capabilities.has_base_macros());
    assert!(capabilities.instance_matchers().contains("contain"));
    assert!(capabilities.class_matchers().contains("contain"));
    assert!(capabilities.macros().is_empty());

    let class_level = group.matcher("contain", args!["a"]).unwrap();
    let instance_level = group.instance().matcher("contain", args!["a"]).unwrap();
    assert_eq!(class_level.description(), instance_level.description());
}

#[test]
fn macros_only_library_adds_no_instance_matchers() {
    let mut group = ExampleGroup::<str>::new("text");
    include_matchers(&macros_library(), &mut group);

    assert!(group.capabilities().macros().contains("should_mention_all"));
    assert!(group.capabilities().has_base_macros());

    let err = group.instance().matcher("contain", args!["a"]).err();
    assert_eq!(
        err,
        Some(RegistryError::MatcherNotFound {
            name: "contain".into(),
            level: Level::Instance,
        })
    );
}

#[test]
fn instance_call_without_matchers_fails_the_example() {
    let mut group = ExampleGroup::<str>::new("text");
    include_matchers(&macros_library(), &mut group);
    group.it("uses a bare matcher call", |instance, subject| {
        evaluate(instance.matcher("contain", args!["x"])?, subject)?;
        Ok(())
    });

    let report = group.run("xyz");
    assert_eq!(report.failed_count(), 1);
    assert_eq!(
        report.outcomes()[0].failure(),
        Some("no instance-level matcher named 'contain' is available on this host")
    );
}

#[test]
fn library_without_groups_installs_base_macros_only() {
    let mut group = ExampleGroup::<str>::new("text");
    include_matchers(&MatcherLibrary::new("empty"), &mut group);

    let capabilities = group.capabilities();
    assert!(capabilities.has_base_macros());
    assert!(capabilities.instance_matchers().is_empty());
    assert!(capabilities.class_matchers().is_empty());
    assert_eq!(capabilities.libraries(), ["empty"]);
}

#[test]
fn repeated_includes_only_add() {
    let mut group = ExampleGroup::<str>::new("text");
    include_matchers!(group, matchers_library(), macros_library());
    include_matchers(&MatcherLibrary::new("empty"), &mut group);

    let capabilities = group.capabilities();
    assert!(capabilities.instance_matchers().contains("contain"));
    assert!(capabilities.macros().contains("should_mention_all"));
    assert_eq!(capabilities.libraries(), ["text", "text_macros", "empty"]);
    assert!(capabilities.includes("text_macros"));
}

#[test]
fn later_library_replaces_same_named_factory() {
    let shouting = MatcherLibrary::new("shouting").with_matchers(MatcherSet::new().with_matcher(
        "contain",
        |args: Args| Contains {
            needles: args.fields().iter().map(|f| f.to_uppercase()).collect(),
            state: MatchState::new(),
        },
    ));

    let mut group = ExampleGroup::<str>::new("text");
    include_matchers!(group, matchers_library(), shouting);

    let matcher = group.instance().matcher("contain", args!["a"]).unwrap();
    assert_eq!(matcher.description(), "contain A");
    assert_eq!(group.capabilities().class_matchers().len(), 1);
}

// ============================================================================
// MACROS
// ============================================================================

#[test]
fn base_macros_declare_examples() {
    let mut group = ExampleGroup::<str>::new("text");
    include_matchers(&matchers_library(), &mut group);
    group.call_macro("should_contain", args!["ell"]).unwrap();
    group.call_macro("should_not_contain", args!["xyz"]).unwrap();

    assert_eq!(group.len(), 2);
    let report = group.run("hello");
    assert!(report.is_success(), "{report}");
}

#[test]
fn library_macro_expands_into_declarations() {
    let mut group = ExampleGroup::<str>::new("text");
    include_matchers!(group, matchers_library(), macros_library());
    group.call_macro("should_mention_all", args!["he", "lo", "zz"]).unwrap();

    assert_eq!(group.len(), 3);
    let report = group.run("hello");
    assert_eq!(report.failed_count(), 1);
    assert_eq!(
        report.failures().next().map(|o| o.description()),
        Some("should contain zz")
    );
}

#[test]
fn library_macro_shadows_base_macro_resolution() {
    let custom = MatcherLibrary::new("custom").with_macros(MacroSet::<str>::new().with(
        "should_contain",
        |context, _args| context.should("contain", args!["always"]),
    ));

    let mut group = ExampleGroup::<str>::new("text");
    include_matchers!(group, matchers_library(), custom);
    group.call_macro("should_contain", args!["ignored"]).unwrap();

    let report = group.run("always here");
    assert!(report.is_success());
    assert_eq!(report.outcomes()[0].description(), "should contain always");
}

#[test]
fn macros_are_unavailable_before_any_include() {
    let mut group = ExampleGroup::<str>::new("text");
    let err = group.call_macro("should_contain", args!["a"]).unwrap_err();
    assert_eq!(
        err,
        RegistryError::MacroNotFound {
            name: "should_contain".into()
        }
    );
    assert!(group.is_empty());
}

#[test]
fn base_macro_for_unknown_matcher_fails_at_declaration() {
    let mut group = ExampleGroup::<str>::new("text");
    include_matchers(&MatcherLibrary::new("empty"), &mut group);

    let err = group.call_macro("should_be_shiny", args![]).unwrap_err();
    assert_eq!(
        err,
        RegistryError::MatcherNotFound {
            name: "be_shiny".into(),
            level: Level::Class,
        }
    );
}

#[test]
fn failing_factory_is_reported_per_example() {
    let strict = MatcherLibrary::new("strict").with_matchers(MatcherSet::new().with(
        "contain",
        |args: Args| {
            if args.options().is_some() {
                return Err(RegistryError::InvalidArguments(
                    remarkable_matcher::args::ArgumentError::MisplacedOptions { position: 0 },
                ));
            }
            Ok(Box::new(contains(args)) as remarkable_matcher::foundation::BoxedMatcher<str>)
        },
    ));

    let mut group = ExampleGroup::<str>::new("text");
    include_matchers(&strict, &mut group);
    group
        .call_macro(
            "should_contain",
            args!["a"].with_options(remarkable_matcher::args::Options::new()),
        )
        .unwrap();

    let report = group.run("abc");
    assert_eq!(report.outcomes()[0].description(), "should contain");
    assert!(report.outcomes()[0].failure().unwrap().starts_with("invalid matcher arguments"));
}

// ============================================================================
// ARBITRARY HOSTS
// ============================================================================

/// A host that is not an example group: it just collects declarations.
#[derive(Default)]
struct Checklist {
    capabilities: Capabilities<str>,
    declarations: Vec<Declaration<str>>,
}

impl MatcherHost for Checklist {
    type Subject = str;

    fn capabilities(&self) -> &Capabilities<str> {
        &self.capabilities
    }

    fn capabilities_mut(&mut self) -> &mut Capabilities<str> {
        &mut self.capabilities
    }

    fn declare(&mut self, declaration: Declaration<str>) {
        self.declarations.push(declaration);
    }
}

#[test]
fn any_host_can_receive_capabilities() {
    let mut checklist = Checklist::default();
    include_matchers(&matchers_library(), &mut checklist);
    checklist.call_macro("should_not_contain", args!["secret"]).unwrap();

    let declaration = &checklist.declarations[0];
    assert!(declaration.is_negated());
    assert_eq!(declaration.matcher_name(), "contain");
    assert_eq!(declaration.args().fields(), ["secret"]);

    let matcher = declaration.build().unwrap();
    assert!(remarkable_matcher::foundation::evaluate_negated(matcher, "public text").is_ok());
}

#[test]
fn example_errors_convert_from_failures() {
    let failure = evaluate(contains(args!["q"]), "abc").unwrap_err();
    let err: ExampleError = failure.clone().into();
    assert_eq!(err.to_string(), failure.to_string());
    assert_eq!(err.to_string(), "Expected to contain q ('abc' lacks it)");
}
