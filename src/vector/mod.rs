//! The growable sequence and its companion types.
//!
//! - [`owned`]: [`SimpleVector`] itself, its field encapsulation and all
//!   mutating operations.
//! - [`iter`]: [`IntoIter`], the owning iterator.
//! - [`cmp`]: Equality, ordering and hashing.
//! - [`convert`]: Standard trait implementations for construction,
//!   conversion and borrowing.

mod cmp;
mod convert;
mod iter;
mod owned;

pub use iter::IntoIter;
pub use owned::SimpleVector;
