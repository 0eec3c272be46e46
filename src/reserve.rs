//! Reservation tokens.
//!
//! A [`ReserveProxy`] carries a capacity request into the construction of a
//! [`SimpleVector`], so that an empty sequence can be created with room for a
//! known number of elements:
//!
//! ```
//! use simple_vector::{SimpleVector, reserve};
//!
//! let values: SimpleVector<u32> = reserve(16).into();
//! assert!(values.is_empty());
//! assert_eq!(values.capacity(), 16);
//! ```
//!
//! [`SimpleVector`]: crate::SimpleVector

/// A request for a specific capacity, consumed by
/// [`SimpleVector::with_reserve`] or the matching [`From`] conversion.
///
/// [`SimpleVector::with_reserve`]: crate::SimpleVector::with_reserve
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReserveProxy {
    capacity: usize,
}

impl ReserveProxy {
    /// Creates a token requesting `capacity` slots.
    #[inline]
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Returns the requested number of slots.
    #[inline]
    pub const fn capacity(self) -> usize {
        self.capacity
    }
}

/// Creates a [`ReserveProxy`] requesting `capacity` slots.
///
/// # Examples
///
/// ```
/// use simple_vector::{SimpleVector, reserve};
///
/// let mut values = SimpleVector::with_reserve(reserve(4));
/// let before = values.as_ptr();
/// for value in 0..4 {
///     values.push_back(value);
/// }
/// assert_eq!(values.as_ptr(), before);
/// ```
#[inline]
#[must_use]
pub const fn reserve(capacity: usize) -> ReserveProxy {
    ReserveProxy::new(capacity)
}
