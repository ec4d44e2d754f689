//! Value object trait: equality by value, not identity.
//!
//! Attributes such as an animal's name are value objects: two names with the
//! same text are the same name.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "change" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Nickname(String);
///
/// impl ValueObject for Nickname {}
///
/// assert_eq!(Nickname("Rex".into()), Nickname("Rex".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
