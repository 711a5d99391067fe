//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two ticket
/// requests for two adults are the same request, whichever purchase they came
/// from. To "modify" a value object, build a new one.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: comparison is by attribute values
/// - **Debug**: useful for logging and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money(u64);
///
/// impl ValueObject for Money {}
///
/// assert_eq!(Money(25), Money(25));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
