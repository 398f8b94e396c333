//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity; two with the same attributes are equal.
/// They are immutable: arithmetic on a value object returns a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Quantity(u64);
///
/// impl ValueObject for Quantity {}
///
/// assert_eq!(Quantity(7), Quantity(7));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
