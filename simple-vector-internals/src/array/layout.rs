//! Layout computation for slot arrays.

use core::alloc::Layout;

use crate::error::AllocError;

/// Computes the layout of a block holding `capacity` slots of `T`.
///
/// Fails with [`AllocError::CapacityOverflow`] if the block would be larger
/// than `isize::MAX` bytes.
#[inline]
pub(super) fn array_layout<T>(capacity: usize) -> Result<Layout, AllocError> {
    Layout::array::<T>(capacity).map_err(|_| AllocError::CapacityOverflow {
        requested: capacity,
    })
}

/// Returns `true` if a block of this layout needs the global allocator.
///
/// Zero-sized blocks (an empty array, or any number of zero-sized `T`s) are
/// represented by a dangling pointer and never allocated.
#[inline]
pub(super) fn needs_allocation(layout: Layout) -> bool {
    layout.size() != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_layout_sizes() {
        assert_eq!(array_layout::<u32>(0).unwrap().size(), 0);
        assert_eq!(array_layout::<u32>(3).unwrap().size(), 12);
        assert_eq!(array_layout::<u64>(2).unwrap().align(), core::mem::align_of::<u64>());
        assert_eq!(array_layout::<()>(usize::MAX).unwrap().size(), 0);
    }

    #[test]
    fn test_array_layout_overflow() {
        assert_eq!(
            array_layout::<u64>(usize::MAX),
            Err(AllocError::CapacityOverflow {
                requested: usize::MAX
            })
        );
    }

    #[test]
    fn test_needs_allocation() {
        assert!(!needs_allocation(array_layout::<u8>(0).unwrap()));
        assert!(!needs_allocation(array_layout::<()>(10).unwrap()));
        assert!(needs_allocation(array_layout::<u8>(1).unwrap()));
    }
}
