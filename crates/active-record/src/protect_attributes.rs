//! PROTECT ATTRIBUTES matcher - fields cannot be set on mass update

use remarkable_matcher::args::Args;
use remarkable_matcher::foundation::{MatchState, Matcher};
use remarkable_matcher::text::to_sentence;

use crate::access::{FieldAccess, Record};

/// Ensures every listed field is protected from mass assignment.
///
/// A field passes when the model protects it explicitly, or when the model
/// declares an accessible allowlist that leaves it out. A field listed in
/// both collections passes. Fields are checked in order and evaluation stops
/// at the first unprotected one.
///
/// ```rust
/// use remarkable_active_record::{AccessPolicy, Record, protect_attributes};
/// use remarkable_matcher::{args, foundation::evaluate};
///
/// let user = AccessPolicy::new("User").protect(["password"]);
/// let subject: &Record = &user;
///
/// assert!(evaluate(protect_attributes(args!["password"]), subject).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ProtectAttributes {
    attributes: Vec<String>,
    state: MatchState,
}

impl ProtectAttributes {
    /// Creates the matcher. Trailing options are accepted and ignored.
    pub fn new(args: Args) -> Self {
        Self {
            attributes: args.into_fields(),
            state: MatchState::new(),
        }
    }

    /// Fields this matcher checks, in order.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }
}

impl Matcher for ProtectAttributes {
    type Subject = Record;

    fn matches(&mut self, subject: &Record) -> bool {
        let passed = self
            .state
            .assert_matcher_for(&self.attributes, |attribute| protect_from_mass_updates(subject, attribute));
        tracing::trace!(
            model = subject.model_name(),
            attribute = ?self.state.current(),
            passed,
            "checked mass-update protection"
        );
        passed
    }

    fn description(&self) -> String {
        format!("protect {} from mass updates", to_sentence(&self.attributes))
    }

    fn expectation(&self) -> String {
        let attribute = match self.state.current() {
            Some(attribute) => attribute.to_owned(),
            None => to_sentence(&self.attributes),
        };
        format!("that {attribute} cannot be set on mass update")
    }

    fn failure_reason(&self) -> Option<&str> {
        self.state.reason()
    }
}

fn protect_from_mass_updates(subject: &dyn FieldAccess, attribute: &str) -> Result<(), String> {
    let protected = subject.protected_attributes();
    let accessible = subject.accessible_attributes();

    if protected.is_some_and(|fields| fields.contains(attribute)) {
        return Ok(());
    }

    match accessible {
        Some(fields) if !fields.is_empty() => {
            if fields.contains(attribute) {
                Err(format!("{} has made {attribute} accessible", subject.model_name()))
            } else {
                Ok(())
            }
        }
        _ => Err(format!(
            "{} is protecting {}, but not {attribute}.",
            subject.model_name(),
            to_sentence(protected.into_iter().flatten()),
        )),
    }
}

/// Ensures that the listed fields cannot be set on mass update.
///
/// Registered as `protect_attributes`; declare it on a group with
/// `should_protect_attributes`.
pub fn protect_attributes(args: Args) -> ProtectAttributes {
    ProtectAttributes::new(args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::access::AccessPolicy;
    use pretty_assertions::assert_eq;
    use remarkable_matcher::args;

    #[test]
    fn description_lists_fields() {
        let matcher = protect_attributes(args!["password", "admin_flag", "token"]);
        assert_eq!(
            matcher.description(),
            "protect password, admin_flag, and token from mass updates"
        );
    }

    #[test]
    fn expectation_before_evaluation_covers_all_fields() {
        let matcher = protect_attributes(args!["password", "token"]);
        assert_eq!(
            matcher.expectation(),
            "that password and token cannot be set on mass update"
        );
    }

    #[test]
    fn reason_lists_protected_fields() {
        let policy = AccessPolicy::new("User").protect(["password", "salt"]);
        let reason = protect_from_mass_updates(&policy, "email").unwrap_err();
        assert_eq!(reason, "User is protecting password and salt, but not email.");
    }

    #[test]
    fn reason_without_any_declarations() {
        let policy = AccessPolicy::new("Post");
        let reason = protect_from_mass_updates(&policy, "title").unwrap_err();
        assert_eq!(reason, "Post is protecting , but not title.");
    }

    #[test]
    fn empty_allowlist_counts_as_absent() {
        let policy = AccessPolicy::new("Post").allow(Vec::<String>::new());
        assert!(protect_from_mass_updates(&policy, "title").is_err());
    }

    #[test]
    fn options_are_ignored() {
        let args = args!["password"].with_options(remarkable_matcher::args::Options::new());
        let matcher = protect_attributes(args);
        assert_eq!(matcher.attributes(), ["password"]);
    }
}
