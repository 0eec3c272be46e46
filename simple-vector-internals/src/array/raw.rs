//! The exclusively owned slot block.
//!
//! This module encapsulates the `ptr` and `capacity` fields of [`RawArray`],
//! ensuring they are only visible within this module. This visibility
//! restriction guarantees the safety invariant: **a non-zero-sized block
//! always comes from the global allocator with
//! `Layout::array::<T>(capacity)`**.
//!
//! # Safety Invariant
//!
//! The fields can only be set by [`RawArray::try_with_capacity`] (which
//! allocates with exactly that layout), by [`RawArray::from_raw_parts`]
//! (whose caller must guarantee it), or reset to the empty state by
//! [`RawArray::release`]. The [`Drop`] implementation relies on this
//! invariant to hand the block back to the allocator with the right layout.
//!
//! # Slot States
//!
//! The array does not track which slots are initialized. Every primitive
//! that touches slot contents is an `unsafe fn` whose contract names the
//! slots that must be live (initialized and owned) before the call and the
//! slots that are live after it. The owning container keeps that bookkeeping.

use alloc::alloc::{alloc, dealloc, handle_alloc_error};
use core::{marker::PhantomData, ops::Range, ptr::NonNull};

use crate::{
    array::layout::{array_layout, needs_allocation},
    error::AllocError,
};

/// An exclusively owned, contiguous block of `capacity` slots of `T`.
///
/// A [`RawArray`] is the storage half of a growable sequence: it allocates
/// and deallocates, but never constructs or drops elements on its own.
/// Dropping a [`RawArray`] releases the memory without running any element
/// destructors, so whoever initialized slots must drop them first.
///
/// The array is movable but not [`Clone`]: two owners of the same block
/// would free it twice. Deep copies are made element by element by the
/// owning container.
///
/// # Examples
///
/// ```
/// use simple_vector_internals::RawArray;
///
/// let mut array = RawArray::<String>::with_capacity(4);
/// assert!(array.is_allocated());
/// assert_eq!(array.capacity(), 4);
///
/// // SAFETY: slot 0 is in bounds and uninitialized.
/// unsafe { array.write(0, String::from("hello")) };
/// // SAFETY: slot 0 is live, and is uninitialized again afterwards.
/// let value = unsafe { array.read(0) };
/// assert_eq!(value, "hello");
/// ```
pub struct RawArray<T> {
    /// Pointer to the first slot
    ///
    /// # Safety
    ///
    /// The following safety invariants are guaranteed to be upheld as long as
    /// this struct exists:
    ///
    /// 1. If `Layout::array::<T>(capacity)` has a non-zero size, the pointer
    ///    was returned by the global allocator for exactly that layout and
    ///    has not been deallocated.
    /// 2. Otherwise the pointer is non-null and well-aligned for `T`, and
    ///    is never passed to the allocator.
    /// 3. No other [`RawArray`] points to the same block.
    ptr: NonNull<T>,

    /// Number of slots in the block
    ///
    /// # Safety
    ///
    /// `Layout::array::<T>(capacity)` is always `Ok`.
    capacity: usize,

    /// Marker telling the drop checker that values of `T` may be stored here
    _marker: PhantomData<T>,
}

impl<T> RawArray<T> {
    /// Creates an empty [`RawArray`] without allocating.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        // SAFETY: We must uphold the safety invariants of this type:
        // 1. A zero capacity always has a zero-sized layout.
        // 2. `NonNull::dangling` is non-null and well-aligned.
        // 3. A dangling pointer owns no block.
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates a block of `capacity` uninitialized slots.
    ///
    /// A capacity of zero (or a zero-sized `T`) does not allocate.
    ///
    /// # Panics
    ///
    /// Panics with `"capacity overflow"` if the block would exceed
    /// `isize::MAX` bytes. Allocation failure is reported through
    /// [`handle_alloc_error`], which aborts by default.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(array) => array,
            Err(AllocError::CapacityOverflow { .. }) => capacity_overflow(),
            Err(AllocError::OutOfMemory { layout }) => handle_alloc_error(layout),
        }
    }

    /// Allocates a block of `capacity` uninitialized slots, returning an
    /// error instead of panicking or aborting on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector_internals::{AllocError, RawArray};
    ///
    /// let array = RawArray::<u64>::try_with_capacity(16).unwrap();
    /// assert_eq!(array.capacity(), 16);
    ///
    /// let too_big = RawArray::<u64>::try_with_capacity(usize::MAX);
    /// assert!(matches!(too_big, Err(AllocError::CapacityOverflow { .. })));
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self, AllocError> {
        if capacity == 0 {
            return Ok(Self::new());
        }

        let layout = array_layout::<T>(capacity)?;
        if !needs_allocation(layout) {
            // SAFETY: We must uphold the safety invariants of this type:
            // 1. The layout is zero-sized, so invariant 1 does not apply.
            // 2. `NonNull::dangling` is non-null and well-aligned.
            // 3. A dangling pointer owns no block.
            return Ok(Self {
                ptr: NonNull::dangling(),
                capacity,
                _marker: PhantomData,
            });
        }

        // SAFETY: `needs_allocation` returned true, so the layout has a
        // non-zero size.
        let raw = unsafe { alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(AllocError::OutOfMemory { layout })?;

        // SAFETY: We must uphold the safety invariants of this type:
        // 1. The pointer was just returned by the global allocator for
        //    `Layout::array::<T>(capacity)`.
        // 2. Not applicable, the layout is not zero-sized.
        // 3. The block is fresh, so nothing else points to it.
        Ok(Self {
            ptr,
            capacity,
            _marker: PhantomData,
        })
    }

    /// Adopts a block previously handed out by [`RawArray::release`].
    ///
    /// No allocation takes place; the returned array owns the block and
    /// will deallocate it when dropped.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. If `Layout::array::<T>(capacity)` has a non-zero size, `ptr` was
    ///    allocated by the global allocator with exactly that layout (as
    ///    returned by [`RawArray::release`]), and has not been freed.
    /// 2. Otherwise, `ptr` is well-aligned for `T` and `capacity` is a valid
    ///    argument to `Layout::array::<T>`.
    /// 3. Ownership of the block is transferred: nothing else will use or
    ///    free it afterwards.
    #[inline]
    pub unsafe fn from_raw_parts(ptr: NonNull<T>, capacity: usize) -> Self {
        debug_assert!(array_layout::<T>(capacity).is_ok());

        // SAFETY: We must uphold the safety invariants of this type:
        // 1. Guaranteed by the caller
        // 2. Guaranteed by the caller
        // 3. Guaranteed by the caller
        Self {
            ptr,
            capacity,
            _marker: PhantomData,
        }
    }

    /// Relinquishes ownership of the block without deallocating it.
    ///
    /// Returns the block pointer and its slot count, and leaves `self` empty.
    /// The caller becomes responsible for the block, typically by passing
    /// both values back to [`RawArray::from_raw_parts`].
    ///
    /// An empty array returns a dangling pointer and a capacity of zero.
    #[inline]
    #[must_use = "the released block is leaked unless it is given back to `RawArray::from_raw_parts`"]
    pub fn release(&mut self) -> (NonNull<T>, usize) {
        let parts = (self.ptr, self.capacity);

        // SAFETY: We must uphold the safety invariants of this type:
        // 1. A zero capacity always has a zero-sized layout.
        // 2. `NonNull::dangling` is non-null and well-aligned.
        // 3. The released block is no longer referenced by `self`.
        self.ptr = NonNull::dangling();
        self.capacity = 0;

        parts
    }

    /// Returns `true` if the array currently holds a block from the global
    /// allocator.
    ///
    /// Arrays of zero-sized `T` never hold a block, whatever their capacity.
    #[inline]
    pub const fn is_allocated(&self) -> bool {
        self.capacity != 0 && size_of::<T>() != 0
    }

    /// Returns the number of slots in the block.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a pointer to the first slot.
    ///
    /// The pointer is dangling (but non-null and aligned) when the array is
    /// empty.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Returns a mutable pointer to the first slot.
    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Exchanges the blocks of two arrays. No slot is touched.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Returns a pointer to the slot at `index`.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `index < self.capacity()`
    #[inline]
    pub unsafe fn slot(&self, index: usize) -> NonNull<T> {
        debug_assert!(
            index < self.capacity,
            "slot index {index} is out of bounds for capacity {}",
            self.capacity
        );

        // SAFETY: `index < capacity` (guaranteed by the caller), so the offset
        // stays inside the block.
        unsafe { self.ptr.add(index) }
    }

    /// Constructs `value` in place in the slot at `index`.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `index < self.capacity()`
    /// 2. The slot is not live. A live value there would be overwritten
    ///    without being dropped.
    #[inline]
    pub unsafe fn write(&mut self, index: usize, value: T) {
        // SAFETY:
        // 1. Guaranteed by the caller
        let slot = unsafe { self.slot(index) };

        // SAFETY: The slot is in bounds and aligned, and overwriting it does
        // not leak a live value (guaranteed by the caller).
        unsafe { slot.write(value) };
    }

    /// Moves the value out of the slot at `index`.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `index < self.capacity()`
    /// 2. The slot is live. After the call it must be treated as not live.
    #[inline]
    pub unsafe fn read(&self, index: usize) -> T {
        // SAFETY:
        // 1. Guaranteed by the caller
        let slot = unsafe { self.slot(index) };

        // SAFETY: The slot is in bounds, aligned and initialized (guaranteed by
        // the caller). The caller treats it as moved-from afterwards, so the
        // value is not duplicated.
        unsafe { slot.read() }
    }

    /// Drops the values in the slots of `range` in place.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `range.start <= range.end <= self.capacity()`
    /// 2. Every slot in `range` is live. After the call they must be treated
    ///    as not live.
    pub unsafe fn drop_in_place(&mut self, range: Range<usize>) {
        debug_assert!(range.start <= range.end && range.end <= self.capacity);

        let count = range.len();
        // SAFETY: `range.start <= capacity` (guaranteed by the caller), so the
        // offset is at most one past the end of the block.
        let first = unsafe { self.ptr.add(range.start) };
        let live = core::ptr::slice_from_raw_parts_mut(first.as_ptr(), count);

        // SAFETY: All `count` slots starting at `first` are initialized and
        // owned by us (guaranteed by the caller), and will not be used again.
        unsafe { core::ptr::drop_in_place(live) };
    }

    /// Moves the values in slots `[index, len)` one slot toward the back,
    /// into `[index + 1, len + 1)`.
    ///
    /// Afterwards the slot at `index` is no longer live, even though it still
    /// holds a bitwise copy of its old value.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `index <= len < self.capacity()`
    /// 2. Slots `[index, len)` are live and slot `len` is not.
    #[inline]
    pub unsafe fn shift_toward_back(&mut self, index: usize, len: usize) {
        debug_assert!(index <= len && len < self.capacity);

        // SAFETY: `index <= len < capacity` (guaranteed by the caller)
        let src = unsafe { self.ptr.add(index) };
        // SAFETY: `index + 1 <= len + 1 <= capacity`, so the offset is at most
        // one past the end of the block.
        let dst = unsafe { self.ptr.add(index + 1) };

        // SAFETY: Both ranges of `len - index` slots lie inside the block.
        // `ptr::copy` permits the overlap and copies as if through a temporary
        // buffer, so no value is read after being overwritten.
        unsafe { core::ptr::copy(src.as_ptr(), dst.as_ptr(), len - index) };
    }

    /// Moves the values in slots `[index + 1, len)` one slot toward the
    /// front, into `[index, len - 1)`.
    ///
    /// Afterwards the slot at `len - 1` is no longer live.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `index < len <= self.capacity()`
    /// 2. Slots `[index + 1, len)` are live and the slot at `index` is not
    ///    (its value was already dropped or moved out).
    #[inline]
    pub unsafe fn shift_toward_front(&mut self, index: usize, len: usize) {
        debug_assert!(index < len && len <= self.capacity);

        // SAFETY: `index + 1 <= len <= capacity` (guaranteed by the caller)
        let src = unsafe { self.ptr.add(index + 1) };
        // SAFETY: `index < len <= capacity` (guaranteed by the caller)
        let dst = unsafe { self.ptr.add(index) };

        // SAFETY: Both ranges of `len - index - 1` slots lie inside the block
        // and `ptr::copy` permits the overlap.
        unsafe { core::ptr::copy(src.as_ptr(), dst.as_ptr(), len - index - 1) };
    }

    /// Relocates the values in slots `[0, len)` into the same slots of
    /// `dst`.
    ///
    /// This is a bitwise move and cannot fail. Afterwards the slots of `self`
    /// are no longer live and the slots of `dst` are.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `len <= self.capacity()` and `len <= dst.capacity()`
    /// 2. Slots `[0, len)` of `self` are live and those of `dst` are not.
    #[inline]
    pub unsafe fn relocate_into(&mut self, dst: &mut RawArray<T>, len: usize) {
        debug_assert!(len <= self.capacity && len <= dst.capacity);

        // SAFETY: Both blocks hold at least `len` slots (guaranteed by the
        // caller). The blocks cannot overlap: each `RawArray` exclusively owns
        // its block, and we hold two distinct mutable borrows.
        unsafe { core::ptr::copy_nonoverlapping(self.ptr.as_ptr(), dst.ptr.as_ptr(), len) };
    }

    /// Borrows slots `[0, len)` as a slice.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `len <= self.capacity()`
    /// 2. Slots `[0, len)` are live.
    #[inline]
    pub unsafe fn as_slice(&self, len: usize) -> &[T] {
        debug_assert!(len <= self.capacity);

        // SAFETY: The pointer is non-null and aligned, and the first `len` slots
        // are initialized (guaranteed by the caller). The returned borrow is
        // tied to `&self`, so the block cannot be freed or mutated meanwhile.
        unsafe { core::slice::from_raw_parts(self.ptr.as_ptr(), len) }
    }

    /// Mutably borrows slots `[0, len)` as a slice.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `len <= self.capacity()`
    /// 2. Slots `[0, len)` are live.
    #[inline]
    pub unsafe fn as_mut_slice(&mut self, len: usize) -> &mut [T] {
        debug_assert!(len <= self.capacity);

        // SAFETY: As for `as_slice`; the borrow is additionally unique because
        // it is tied to `&mut self`.
        unsafe { core::slice::from_raw_parts_mut(self.ptr.as_ptr(), len) }
    }
}

impl<T> Default for RawArray<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for RawArray<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawArray")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}

impl<T> Drop for RawArray<T> {
    fn drop(&mut self) {
        // The layout was valid when the block was created, so this only skips
        // zero-sized blocks.
        if let Ok(layout) = array_layout::<T>(self.capacity)
            && needs_allocation(layout)
        {
            // SAFETY: By invariant 1 the pointer was returned by the global
            // allocator for this exact layout and has not been freed. We are in
            // `drop`, so it is not used afterwards.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

// SAFETY: A `RawArray<T>` owns its slots like a `Box<[T]>` does, so sending it
// to another thread is sound exactly when sending the values is.
unsafe impl<T: Send> Send for RawArray<T> {}

// SAFETY: Shared access only hands out `&T` (through `as_slice`), so sharing is
// sound exactly when `T` is `Sync`.
unsafe impl<T: Sync> Sync for RawArray<T> {}

/// Reports a request for more slots than any allocation can describe.
#[cold]
#[inline(never)]
#[track_caller]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}
