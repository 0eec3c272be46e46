#![cfg_attr(not(doc), no_std)]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    clippy::as_ptr_cast_mut,
    clippy::ptr_as_ptr,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Extra checks on nightly
#![cfg_attr(nightly_extra_checks, feature(rustdoc_missing_doc_code_examples))]
#![cfg_attr(nightly_extra_checks, forbid(rustdoc::missing_doc_code_examples))]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A growable sequence container with explicit control over capacity,
//! storage ownership and element lifetimes.
//!
//! ## Overview
//!
//! [`SimpleVector<T>`] is a minimal dynamic array in the spirit of the
//! standard library's `Vec<T>`. It keeps two counts apart:
//!
//! - the **capacity**, the number of slots currently allocated, and
//! - the **length**, the number of those slots holding live elements.
//!
//! Every element is constructed exactly once when it enters a slot and
//! dropped exactly once when it leaves, whichever operation moves it.
//!
//! ## Quick Example
//!
//! ```
//! use simple_vector::SimpleVector;
//!
//! let mut values = SimpleVector::new();
//! assert_eq!((values.len(), values.capacity()), (0, 0));
//!
//! values.push_back(1);
//! values.push_back(2);
//! values.push_back(3);
//! assert_eq!(values, [1, 2, 3]);
//! assert_eq!(values.capacity(), 4);
//!
//! let at = values.insert(1, 9);
//! assert_eq!(values, [1, 9, 2, 3]);
//!
//! values.erase(at + 1);
//! assert_eq!(values, [1, 9, 3]);
//!
//! assert!(values.at(5).is_err());
//! ```
//!
//! ## Core Concepts
//!
//! The container is built from two cooperating pieces:
//!
//! - A **storage owner**, [`RawArray<T>`], which exclusively owns one
//!   contiguous block of slots. It allocates and frees memory but never runs
//!   element destructors.
//! - The **sequence** itself, [`SimpleVector<T>`], which owns a storage owner
//!   together with the live length, and is responsible for constructing,
//!   relocating and dropping elements.
//!
//! All capacity growth goes through [`SimpleVector::reserve`]: it allocates a
//! new block of exactly the requested size, relocates the live elements into
//! it and releases the old block. [`push_back`] and [`insert`] grow a full
//! sequence to `max(2 × capacity, 1)`, which makes appending amortized
//! constant time.
//!
//! For implementation details, see the [`simple-vector-internals`] crate.
//!
//! [`RawArray<T>`]: simple_vector_internals::RawArray
//! [`simple-vector-internals`]: simple_vector_internals
//! [`push_back`]: SimpleVector::push_back
//! [`insert`]: SimpleVector::insert
//!
//! ## Checked and Unchecked Access
//!
//! - [`at`] and [`at_mut`] return an [`IndexOutOfRange`] error for an index
//!   past the end.
//! - Indexing with `values[i]` panics for an index past the end.
//! - [`get_unchecked`] skips the check entirely and is `unsafe`.
//!
//! [`at`]: SimpleVector::at
//! [`at_mut`]: SimpleVector::at_mut
//! [`get_unchecked`]: SimpleVector::get_unchecked
//!
//! ## Views and Reallocation
//!
//! Slices and iterators borrowed from a [`SimpleVector`] point into its
//! current block. Any operation that may reallocate takes `&mut self`, so the
//! borrow checker rejects code that would keep such a view alive across a
//! reallocation. Positions that must survive growth are plain indices, which
//! is why [`insert`] and [`erase`] take and return `usize`.
//!
//! [`erase`]: SimpleVector::erase
//!
//! ## Cargo Features
//!
//! - **`std`**: Implements `std::io::Write` for `SimpleVector<u8>`.
//! - **`tracing`**: Emits [`tracing`] events whenever the storage is
//!   reallocated, and when a fallible reservation fails.
//! - **`serde`**: Implements `Serialize` and `Deserialize`, using the
//!   sequence representation.
//!
//! [`tracing`]: https://docs.rs/tracing

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod macros;

pub mod error;
#[cfg(feature = "std")]
mod io;
pub mod prelude;
mod reserve;
#[cfg(feature = "serde")]
mod serde;
mod vector;

pub use self::{
    error::{AllocError, IndexOutOfRange},
    reserve::{ReserveProxy, reserve},
    vector::{IntoIter, SimpleVector},
};
