//! Allocation failure reporting.

use core::alloc::Layout;

/// The error returned by fallible allocation of a [`RawArray`].
///
/// [`RawArray`]: crate::RawArray
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AllocError {
    /// The requested number of slots cannot be described by a [`Layout`],
    /// because its size in bytes would exceed `isize::MAX`.
    #[error("capacity overflow: cannot allocate {requested} slots")]
    CapacityOverflow {
        /// The number of slots that was requested.
        requested: usize,
    },
    /// The global allocator returned a null pointer.
    #[error("memory allocation of {} bytes failed", .layout.size())]
    OutOfMemory {
        /// The layout of the allocation that failed.
        layout: Layout,
    },
}
