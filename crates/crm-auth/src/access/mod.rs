//! Path-based access rules evaluated before routing.

pub mod pattern;
pub mod policy;

pub use pattern::PathPattern;
pub use policy::{AccessPolicy, AccessRule, Requirement};
