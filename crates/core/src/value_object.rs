//! Value object trait: equality by value, not identity.
//!
//! Static entities are value objects that happen to carry a catalog key: two
//! instances with the same attributes are interchangeable, and none of them is
//! ever mutated after the manager has built it.

/// Marker trait for value objects.
///
/// The trait requires:
/// - **Clone**: catalog lookups hand out owned copies of cached entries
/// - **PartialEq**: instances are compared by their attribute values
/// - **Debug**: instances show up in test failures and log fields
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
