#![no_std]
#![forbid(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::missing_docs_in_private_items,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
#![allow(rustdoc::private_intra_doc_links)]
//! Internal implementation crate for [`simple-vector`].
//!
//! # Overview
//!
//! This crate contains the raw storage owner that backs
//! [`SimpleVector`]: a single type, [`RawArray`], which exclusively owns one
//! contiguous heap block of `T` slots and performs every allocation and
//! deallocation in the workspace.
//!
//! **This crate is an implementation detail.** No semantic versioning
//! guarantees are provided. Users should depend on the [`simple-vector`]
//! crate, not this one.
//!
//! # Architecture
//!
//! - **[`array`]**: Raw storage ownership
//!   - [`RawArray`]: Owned block of possibly-uninitialized slots
//!   - Layout computation shared by the fallible and infallible allocation
//!     paths
//! - **[`error`]**: [`AllocError`], the failure type of fallible allocation
//!
//! # Division of Responsibility
//!
//! A [`RawArray`] knows how many *slots* it holds, but not how many of them
//! contain live values. It therefore never runs element destructors: dropping
//! a [`RawArray`] only returns the memory to the global allocator. Tracking
//! which slots are live, and dropping them exactly once, is the job of the
//! owning container.
//!
//! # Safety Strategy
//!
//! - **Module-based encapsulation**: The pointer and capacity fields of
//!   [`RawArray`] are private to [`array::raw`], so the invariant "the block
//!   came from the global allocator with `Layout::array::<T>(capacity)`" can
//!   be verified by reading a single file.
//! - **Slot-level primitives**: Reading, writing, shifting and relocating
//!   slots are `unsafe fn`s whose contracts are stated in terms of slot
//!   indices and the caller's live range. Bounds are `debug_assert!`ed.
//!
//! [`simple-vector`]: https://docs.rs/simple-vector/latest/simple_vector/
//! [`SimpleVector`]: https://docs.rs/simple-vector/latest/simple_vector/struct.SimpleVector.html

extern crate alloc;

mod array;
mod error;

pub use array::RawArray;
pub use error::AllocError;
