//! # remarkable-active-record
//!
//! Matchers for record models' mass-assignment declarations.
//!
//! - [`FieldAccess`]: what a model must expose (both collections optional)
//! - [`AccessPolicy`]: a serde-loadable [`FieldAccess`] description
//! - [`ProtectAttributes`]: asserts fields cannot be set on mass update
//! - [`library`]: the bundle to include into a host

#![warn(missing_docs)]

mod access;
mod library;
mod protect_attributes;

pub use access::{AccessPolicy, FieldAccess, PolicyError, Record};
pub use library::{LIBRARY_NAME, library, matchers};
pub use protect_attributes::{ProtectAttributes, protect_attributes};
