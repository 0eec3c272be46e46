//! Recoverable errors reported by [`SimpleVector`].
//!
//! Precondition violations (an out-of-range subscript, or an invalid
//! [`insert`]/[`erase`] position) are programmer errors and panic. The types
//! in this module cover the failures callers are expected to handle:
//!
//! - [`IndexOutOfRange`]: returned by the checked accessors [`at`] and
//!   [`at_mut`].
//! - [`AllocError`]: returned by [`try_reserve`] when the storage cannot grow.
//!
//! [`SimpleVector`]: crate::SimpleVector
//! [`insert`]: crate::SimpleVector::insert
//! [`erase`]: crate::SimpleVector::erase
//! [`at`]: crate::SimpleVector::at
//! [`at_mut`]: crate::SimpleVector::at_mut
//! [`try_reserve`]: crate::SimpleVector::try_reserve

pub use simple_vector_internals::AllocError;

/// A checked access named an index that holds no live element.
///
/// # Examples
///
/// ```
/// use simple_vector::{IndexOutOfRange, simple_vector};
///
/// let values = simple_vector![1, 2, 3];
/// let error = values.at(5).unwrap_err();
/// assert_eq!(error, IndexOutOfRange { index: 5, len: 3 });
/// assert_eq!(
///     error.to_string(),
///     "index 5 is out of range for a sequence of length 3"
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("index {index} is out of range for a sequence of length {len}")]
pub struct IndexOutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// The length of the sequence at the time of the access.
    pub len: usize,
}
