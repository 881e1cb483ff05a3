//! The matcher library this crate contributes to hosts.

use remarkable_matcher::registry::{MatcherLibrary, MatcherSet};

use crate::access::Record;
use crate::protect_attributes::protect_attributes;

/// Name the library is included under.
pub const LIBRARY_NAME: &str = "active_record";

/// Record matchers, exposing a `Matchers` group only.
///
/// ```rust
/// use remarkable_active_record::{AccessPolicy, Record, library};
/// use remarkable_matcher::{args, group::ExampleGroup, registry::{MatcherHost, include_matchers}};
///
/// let mut group = ExampleGroup::<Record>::new("User");
/// include_matchers(&library(), &mut group);
/// group.call_macro("should_protect_attributes", args!["password"]).unwrap();
///
/// let report = group.run(&AccessPolicy::new("User").protect(["password"]));
/// assert!(report.is_success());
/// ```
pub fn library() -> MatcherLibrary<Record> {
    MatcherLibrary::new(LIBRARY_NAME).with_matchers(matchers())
}

/// The factories in this crate, keyed by the name tests call them by.
pub fn matchers() -> MatcherSet<Record> {
    MatcherSet::new().with_matcher("protect_attributes", protect_attributes)
}
