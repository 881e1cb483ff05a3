//! Field-access metadata exposed by record models.
//!
//! Matchers only read two collections from a subject: the fields it
//! explicitly protects and the fields it explicitly makes accessible. A model
//! that declares neither simply reports `None`, which matchers treat as an
//! empty set.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Read access to a model's mass-assignment declarations.
pub trait FieldAccess {
    /// The model name, used in diagnostics.
    fn model_name(&self) -> &str;

    /// Fields explicitly protected from mass assignment.
    fn protected_attributes(&self) -> Option<&BTreeSet<String>> {
        None
    }

    /// Fields explicitly allowed in mass assignment.
    fn accessible_attributes(&self) -> Option<&BTreeSet<String>> {
        None
    }
}

/// The subject type matchers in this crate evaluate.
///
/// Bind subjects through this alias (`let user: &Record = &policy;`) so the
/// trait object carries the `'static` bound matchers expect.
pub type Record = dyn FieldAccess;

/// Errors raised while loading an [`AccessPolicy`].
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// The document is not a valid policy.
    #[error("invalid access policy: {0}")]
    Parse(#[from] serde_json::Error),

    /// The policy does not name its model.
    #[error("access policy has an empty model name")]
    MissingModel,
}

/// A declarative [`FieldAccess`] description of one model.
///
/// ```rust
/// use remarkable_active_record::{AccessPolicy, FieldAccess};
///
/// let policy = AccessPolicy::from_json(r#"{ "model": "User", "protected": ["password"] }"#).unwrap();
/// assert_eq!(policy.model_name(), "User");
/// assert!(policy.protected_attributes().unwrap().contains("password"));
/// assert!(policy.accessible_attributes().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    protected: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    accessible: Option<BTreeSet<String>>,
}

impl AccessPolicy {
    /// A model with no declarations.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            protected: None,
            accessible: None,
        }
    }

    /// Parses a policy from JSON.
    pub fn from_json(json: &str) -> Result<Self, PolicyError> {
        let policy: Self = serde_json::from_str(json)?;
        if policy.model.trim().is_empty() {
            return Err(PolicyError::MissingModel);
        }
        Ok(policy)
    }

    /// Declares fields as protected.
    #[must_use = "builder methods must be chained or built"]
    pub fn protect<I, T>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.protected
            .get_or_insert_with(BTreeSet::new)
            .extend(fields.into_iter().map(Into::into));
        self
    }

    /// Declares fields as accessible.
    #[must_use = "builder methods must be chained or built"]
    pub fn allow<I, T>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.accessible
            .get_or_insert_with(BTreeSet::new)
            .extend(fields.into_iter().map(Into::into));
        self
    }
}

impl FieldAccess for AccessPolicy {
    fn model_name(&self) -> &str {
        &self.model
    }

    fn protected_attributes(&self) -> Option<&BTreeSet<String>> {
        self.protected.as_ref()
    }

    fn accessible_attributes(&self) -> Option<&BTreeSet<String>> {
        self.accessible.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl FieldAccess for Bare {
        fn model_name(&self) -> &str {
            "Bare"
        }
    }

    #[test]
    fn missing_accessors_report_none() {
        assert!(Bare.protected_attributes().is_none());
        assert!(Bare.accessible_attributes().is_none());
    }

    #[test]
    fn builder_collects_fields() {
        let policy = AccessPolicy::new("User").protect(["password", "token"]).allow(["name"]);
        assert_eq!(policy.protected_attributes().map(BTreeSet::len), Some(2));
        assert_eq!(policy.accessible_attributes().map(BTreeSet::len), Some(1));
    }

    #[test]
    fn rejects_empty_model() {
        let err = AccessPolicy::from_json(r#"{ "model": "  " }"#).unwrap_err();
        assert!(matches!(err, PolicyError::MissingModel));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = AccessPolicy::from_json("{ model: User }").unwrap_err();
        assert!(matches!(err, PolicyError::Parse(_)));
        assert!(err.to_string().starts_with("invalid access policy"));
    }

    #[test]
    fn serializes_without_absent_sets() {
        let json = serde_json::to_string(&AccessPolicy::new("Post")).unwrap();
        assert_eq!(json, r#"{"model":"Post"}"#);
    }
}
