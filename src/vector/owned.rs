use core::{mem::ManuallyDrop, slice};

use simple_vector_internals::RawArray;

use crate::{
    error::{AllocError, IndexOutOfRange},
    macros::trace_event,
    reserve::ReserveProxy,
};

/// FIXME: Once rust-lang/rust#132922 gets resolved, we can make the `raw` and
/// `len` fields unsafe fields and remove this module.
mod limit_field_access {
    use simple_vector_internals::RawArray;

    /// A growable, contiguous sequence of `T`.
    ///
    /// A [`SimpleVector`] owns a block of `capacity` slots, of which the first
    /// `len` hold live elements. Slots past `len` are allocated but never
    /// read or dropped. Growth reallocates to a block of exactly the requested
    /// capacity; appending grows by doubling.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::SimpleVector;
    ///
    /// let mut values = SimpleVector::from_elem(3, 7);
    /// assert_eq!(values, [7, 7, 7]);
    ///
    /// values.resize(5);
    /// assert_eq!(values, [7, 7, 7, 0, 0]);
    ///
    /// values.resize(2);
    /// assert_eq!(values, [7, 7]);
    /// ```
    pub struct SimpleVector<T> {
        /// # Safety
        ///
        /// The following safety invariants must be upheld as long as this
        /// struct exists:
        ///
        /// 1. Slots `[0, len)` of the storage hold live values of `T` owned by
        ///    this sequence.
        /// 2. Slots `[len, capacity)` are not live.
        raw: RawArray<T>,

        /// # Safety
        ///
        /// `len <= raw.capacity()`
        len: usize,
    }

    impl<T> SimpleVector<T> {
        /// Creates a sequence from its storage and live length.
        ///
        /// # Safety
        ///
        /// The caller must ensure:
        ///
        /// 1. `len <= raw.capacity()`
        /// 2. Slots `[0, len)` of `raw` are live and slots `[len, capacity)`
        ///    are not.
        #[inline]
        pub(crate) const unsafe fn from_raw_parts(raw: RawArray<T>, len: usize) -> Self {
            // SAFETY: We must uphold the safety invariants of this type:
            // 1. Guaranteed by the caller
            // 2. Guaranteed by the caller
            Self { raw, len }
        }

        /// Returns a reference to the underlying storage.
        #[inline]
        pub(crate) const fn raw(&self) -> &RawArray<T> {
            &self.raw
        }

        /// Returns a mutable reference to the underlying storage.
        ///
        /// # Safety
        ///
        /// The caller must ensure:
        ///
        /// 1. When the borrow ends, slots `[0, len())` are live and all other
        ///    slots are not. If the live range changes, the caller restores
        ///    this with [`set_len`](Self::set_len) before relying on it.
        /// 2. The storage is only replaced by one holding at least `len()`
        ///    slots.
        #[inline]
        pub(crate) const unsafe fn raw_mut(&mut self) -> &mut RawArray<T> {
            &mut self.raw
        }

        /// Sets the live length.
        ///
        /// # Safety
        ///
        /// The caller must ensure:
        ///
        /// 1. `len <= self.capacity()`
        /// 2. Slots `[0, len)` are live and slots `[len, capacity)` are not.
        #[inline]
        pub(crate) const unsafe fn set_len(&mut self, len: usize) {
            debug_assert!(len <= self.raw.capacity());

            // SAFETY: We must uphold the safety invariants of this type:
            // 1. Guaranteed by the caller
            // 2. Guaranteed by the caller
            self.len = len;
        }

        /// Returns the number of live elements.
        ///
        /// # Examples
        ///
        /// ```
        /// use simple_vector::simple_vector;
        ///
        /// let values = simple_vector![1, 2, 3];
        /// assert_eq!(values.len(), 3);
        /// ```
        #[inline]
        pub const fn len(&self) -> usize {
            self.len
        }
    }
}
pub use limit_field_access::SimpleVector;

impl<T> SimpleVector<T> {
    /// Creates an empty sequence without allocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::SimpleVector;
    ///
    /// let values: SimpleVector<String> = SimpleVector::new();
    /// assert!(values.is_empty());
    /// assert_eq!(values.capacity(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        // SAFETY:
        // 1. `0 <= 0`
        // 2. There are no slots, so none are live.
        unsafe { Self::from_raw_parts(RawArray::new(), 0) }
    }

    /// Creates an empty sequence with exactly `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if the capacity exceeds `isize::MAX` bytes.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        // SAFETY:
        // 1. `0 <= capacity`
        // 2. A freshly allocated block has no live slots.
        unsafe { Self::from_raw_parts(RawArray::with_capacity(capacity), 0) }
    }

    /// Creates an empty sequence with the capacity requested by a
    /// [`ReserveProxy`].
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::{SimpleVector, reserve};
    ///
    /// let values: SimpleVector<u64> = SimpleVector::with_reserve(reserve(10));
    /// assert_eq!(values.len(), 0);
    /// assert_eq!(values.capacity(), 10);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_reserve(proxy: ReserveProxy) -> Self {
        Self::with_capacity(proxy.capacity())
    }

    /// Creates a sequence of `len` default values, with a capacity of exactly
    /// `len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::SimpleVector;
    ///
    /// let values: SimpleVector<i32> = SimpleVector::with_len(3);
    /// assert_eq!(values, [0, 0, 0]);
    /// assert_eq!(values.capacity(), 3);
    /// ```
    #[must_use]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut values = Self::with_capacity(len);
        values.resize_with(len, T::default);
        values
    }

    /// Creates a sequence of `len` copies of `value`, with a capacity of
    /// exactly `len`.
    ///
    /// The last slot receives `value` itself; the others receive clones.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::SimpleVector;
    ///
    /// let values = SimpleVector::from_elem(3, String::from("ab"));
    /// assert_eq!(values, ["ab", "ab", "ab"]);
    /// ```
    #[must_use]
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut values = Self::with_capacity(len);
        if len > 0 {
            values.resize_with(len - 1, || value.clone());
            values.push_back(value);
        }
        values
    }

    /// Returns the number of slots available before the next reallocation.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.raw().capacity()
    }

    /// Returns `true` if the sequence holds no live elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrows the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY:
        // 1. `len <= capacity` by the invariants of this type
        // 2. Slots `[0, len)` are live by the invariants of this type
        unsafe { self.raw().as_slice(self.len()) }
    }

    /// Mutably borrows the live elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len();
        // SAFETY: The live range is not changed through this borrow.
        let raw = unsafe { self.raw_mut() };
        // SAFETY:
        // 1. `len <= capacity` by the invariants of this type
        // 2. Slots `[0, len)` are live by the invariants of this type
        unsafe { raw.as_mut_slice(len) }
    }

    /// Returns a pointer to the first slot.
    ///
    /// The pointer is only valid until the next reallocation.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.raw().as_ptr()
    }

    /// Returns a mutable pointer to the first slot.
    ///
    /// The pointer is only valid until the next reallocation.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        // SAFETY: Handing out a raw pointer does not change the live range.
        let raw = unsafe { self.raw_mut() };
        raw.as_mut_ptr()
    }

    /// Returns an iterator over shared references to the live elements.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over mutable references to the live elements.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is
    /// out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if
    /// it is out of range.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::{IndexOutOfRange, simple_vector};
    ///
    /// let values = simple_vector![10, 20];
    /// assert_eq!(values.at(1), Ok(&20));
    /// assert_eq!(values.at(2), Err(IndexOutOfRange { index: 2, len: 2 }));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        let len = self.len();
        self.get(index).ok_or(IndexOutOfRange { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] if `index >= len()`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        let len = self.len();
        self.get_mut(index).ok_or(IndexOutOfRange { index, len })
    }

    /// Returns a reference to the element at `index` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `index < self.len()`
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len());

        // SAFETY:
        // 1. Guaranteed by the caller
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// The caller must ensure:
    ///
    /// 1. `index < self.len()`
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len());

        // SAFETY:
        // 1. Guaranteed by the caller
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }

    /// Ensures the sequence has at least `new_capacity` slots.
    ///
    /// Does nothing if the capacity is already large enough. Otherwise the
    /// sequence moves to a new block of exactly `new_capacity` slots, and all
    /// pointers into the old block become invalid.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity exceeds `isize::MAX` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::simple_vector;
    ///
    /// let mut values = simple_vector![1];
    /// values.reserve(10);
    /// assert_eq!(values.capacity(), 10);
    ///
    /// values.reserve(5);
    /// assert_eq!(values.capacity(), 10);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity <= self.capacity() {
            return;
        }
        self.relocate(RawArray::with_capacity(new_capacity));
    }

    /// Ensures the sequence has at least `new_capacity` slots, returning an
    /// error instead of panicking or aborting if the storage cannot grow.
    ///
    /// On error the sequence is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`AllocError::CapacityOverflow`] if the new capacity exceeds
    /// `isize::MAX` bytes, and [`AllocError::OutOfMemory`] if the allocator
    /// fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::{AllocError, simple_vector};
    ///
    /// let mut values = simple_vector![1u64, 2];
    /// assert!(values.try_reserve(8).is_ok());
    ///
    /// let error = values.try_reserve(usize::MAX).unwrap_err();
    /// assert!(matches!(error, AllocError::CapacityOverflow { .. }));
    /// assert_eq!(values, [1, 2]);
    /// assert_eq!(values.capacity(), 8);
    /// ```
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        match RawArray::try_with_capacity(new_capacity) {
            Ok(fresh) => {
                self.relocate(fresh);
                Ok(())
            }
            Err(error) => {
                trace_event!(
                    debug,
                    len = self.len(),
                    capacity = self.capacity(),
                    new_capacity,
                    %error,
                    "failed to reserve storage"
                );
                Err(error)
            }
        }
    }

    /// Moves the live elements into `fresh` and adopts it, releasing the old
    /// block.
    fn relocate(&mut self, mut fresh: RawArray<T>) {
        let len = self.len();
        debug_assert!(fresh.capacity() >= len);

        trace_event!(
            trace,
            len,
            old_capacity = self.capacity(),
            new_capacity = fresh.capacity(),
            "relocating storage"
        );

        // SAFETY: The storage is replaced by `fresh`, which holds at least `len`
        // slots and has `[0, len)` live once the relocation below is done.
        let raw = unsafe { self.raw_mut() };
        // SAFETY:
        // 1. `len <= raw.capacity()` by the invariants of this type, and
        //    `len <= fresh.capacity()` was checked above.
        // 2. Slots `[0, len)` of `raw` are live; `fresh` was just allocated.
        unsafe { raw.relocate_into(&mut fresh, len) };

        // The old block holds no live slots any more, so dropping it only
        // frees memory.
        *raw = fresh;
    }

    /// Grows a full sequence by the doubling policy.
    fn grow_for_one(&mut self) {
        let doubled = match self.capacity().checked_mul(2) {
            Some(doubled) => doubled,
            None => capacity_overflow(),
        };
        self.reserve(doubled.max(1));
    }

    /// Appends `value` to the back of the sequence.
    ///
    /// A full sequence first grows to `max(2 × capacity, 1)` slots, so
    /// appending is amortized O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::SimpleVector;
    ///
    /// let mut values = SimpleVector::new();
    /// let mut capacities = Vec::new();
    /// for value in 1..=5 {
    ///     values.push_back(value);
    ///     capacities.push(values.capacity());
    /// }
    /// assert_eq!(values, [1, 2, 3, 4, 5]);
    /// assert_eq!(capacities, [1, 2, 4, 4, 8]);
    /// ```
    pub fn push_back(&mut self, value: T) {
        if self.len() == self.capacity() {
            self.grow_for_one();
        }
        let len = self.len();

        // SAFETY: Slot `len` becomes live below, and `set_len` records it.
        let raw = unsafe { self.raw_mut() };
        // SAFETY:
        // 1. `len < capacity`, as the sequence was grown if it was full.
        // 2. Slot `len` is not live by the invariants of this type.
        unsafe { raw.write(len, value) };

        // SAFETY:
        // 1. `len + 1 <= capacity`
        // 2. Slots `[0, len)` were live and slot `len` was just written.
        unsafe { self.set_len(len + 1) };
    }

    /// Removes the last element and returns it, or [`None`] if the sequence
    /// is empty.
    ///
    /// The capacity is unchanged.
    pub fn pop_back(&mut self) -> Option<T> {
        let new_len = self.len().checked_sub(1)?;

        // SAFETY:
        // 1. `new_len < len <= capacity`
        // 2. Slot `new_len` is read out below, so only `[0, new_len)` stays
        //    live.
        unsafe { self.set_len(new_len) };

        // SAFETY:
        // 1. `new_len < capacity`
        // 2. Slot `new_len` was live and is now outside the live range.
        let value = unsafe { self.raw().read(new_len) };
        Some(value)
    }

    /// Inserts `value` at `index`, shifting every later element one position
    /// toward the back.
    ///
    /// Inserting at `len()` is equivalent to [`push_back`]. A full sequence
    /// grows by the same doubling policy. Returns the index of the inserted
    /// element, which is `index` itself.
    ///
    /// [`push_back`]: Self::push_back
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::simple_vector;
    ///
    /// let mut values = simple_vector![1, 2, 3];
    /// let at = values.insert(1, 9);
    /// assert_eq!(at, 1);
    /// assert_eq!(values, [1, 9, 2, 3]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        let len = self.len();
        if index > len {
            insertion_index_out_of_range(index, len);
        }

        if len == self.capacity() {
            self.grow_for_one();
        }

        // SAFETY: Slots `[index, len]` are rearranged below so that `[0, len]`
        // is live, and `set_len` records it.
        let raw = unsafe { self.raw_mut() };
        // SAFETY:
        // 1. `index <= len < capacity`, as the sequence was grown if it was full.
        // 2. Slots `[index, len)` are live and slot `len` is not.
        unsafe { raw.shift_toward_back(index, len) };
        // SAFETY:
        // 1. `index < capacity`
        // 2. The value at `index` was moved to `index + 1`, so the slot is not
        //    live.
        unsafe { raw.write(index, value) };

        // SAFETY:
        // 1. `len + 1 <= capacity`
        // 2. Slots `[0, len + 1)` are live after the shift and the write.
        unsafe { self.set_len(len + 1) };

        index
    }

    /// Removes the element at `index` and returns it, shifting every later
    /// element one position toward the front.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.len();
        if index >= len {
            removal_index_out_of_range(index, len);
        }

        // SAFETY: Slots `[index, len)` are rearranged below so that
        // `[0, len - 1)` is live, and `set_len` records it.
        let raw = unsafe { self.raw_mut() };
        // SAFETY:
        // 1. `index < len <= capacity`
        // 2. Slot `index` is live and is treated as moved-from afterwards.
        let value = unsafe { raw.read(index) };
        // SAFETY:
        // 1. `index < len <= capacity`
        // 2. Slots `[index + 1, len)` are live and slot `index` was just read
        //    out.
        unsafe { raw.shift_toward_front(index, len) };

        // SAFETY:
        // 1. `len - 1 <= capacity`
        // 2. Slots `[0, len - 1)` are live after the shift.
        unsafe { self.set_len(len - 1) };

        value
    }

    /// Drops the element at `index`, shifting every later element one
    /// position toward the front.
    ///
    /// Returns the index that now holds the element that followed the erased
    /// one. This is `len()` if the erased element was the last.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::simple_vector;
    ///
    /// let mut values = simple_vector![1, 9, 2, 3];
    /// let next = values.erase(2);
    /// assert_eq!(values, [1, 9, 3]);
    /// assert_eq!(values[next], 3);
    ///
    /// let next = values.erase(2);
    /// assert_eq!(next, values.len());
    /// ```
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Shortens the sequence to `new_len` elements, dropping the rest.
    ///
    /// Does nothing if `new_len >= len()`. The capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        let len = self.len();
        if new_len >= len {
            return;
        }

        // The length is lowered before dropping, so a panicking destructor
        // cannot lead to a double drop.
        // SAFETY:
        // 1. `new_len < len <= capacity`
        // 2. Slots `[new_len, len)` are dropped below.
        unsafe { self.set_len(new_len) };

        // SAFETY: Only slots outside the recorded live range are touched.
        let raw = unsafe { self.raw_mut() };
        // SAFETY:
        // 1. `new_len < len <= capacity`
        // 2. Slots `[new_len, len)` were live and are now outside the live
        //    range.
        unsafe { raw.drop_in_place(new_len..len) };
    }

    /// Drops every element. The capacity is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::simple_vector;
    ///
    /// let mut values = simple_vector![1, 2, 3];
    /// values.clear();
    /// assert!(values.is_empty());
    /// assert_eq!(values.capacity(), 3);
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes the sequence to `new_len` elements, filling new slots with
    /// values returned by `fill`.
    ///
    /// Shrinking drops the elements past `new_len`. Growing reserves exactly
    /// `new_len` slots (the doubling policy does not apply) and calls `fill`
    /// once per new element, in order.
    pub fn resize_with<F>(&mut self, new_len: usize, mut fill: F)
    where
        F: FnMut() -> T,
    {
        let len = self.len();
        if new_len <= len {
            self.truncate(new_len);
            return;
        }

        self.reserve(new_len);
        for index in len..new_len {
            let value = fill();

            // SAFETY: Slot `index` becomes live below, and `set_len` records it.
            let raw = unsafe { self.raw_mut() };
            // SAFETY:
            // 1. `index < new_len <= capacity`
            // 2. `index` equals the current length, so the slot is not live.
            unsafe { raw.write(index, value) };

            // The length advances per element, so a panic in `fill` leaves the
            // already written elements owned by the sequence.
            // SAFETY:
            // 1. `index + 1 <= capacity`
            // 2. Slots `[0, index + 1)` are live.
            unsafe { self.set_len(index + 1) };
        }
    }

    /// Resizes the sequence to `new_len` elements, filling new slots with
    /// `T::default()`.
    ///
    /// Growing reserves exactly `new_len` slots.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::simple_vector;
    ///
    /// let mut values = simple_vector![7; 3];
    /// values.resize(5);
    /// assert_eq!(values, [7, 7, 7, 0, 0]);
    /// assert_eq!(values.capacity(), 5);
    ///
    /// values.resize(2);
    /// assert_eq!(values, [7, 7]);
    /// assert_eq!(values.capacity(), 5);
    /// ```
    #[inline]
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Exchanges the contents of two sequences in O(1) without touching any
    /// element.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Moves the contents out of `self`, leaving it empty with no capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_vector::simple_vector;
    ///
    /// let mut source = simple_vector![1, 2, 3];
    /// let target = source.take();
    /// assert_eq!(target, [1, 2, 3]);
    /// assert_eq!((source.len(), source.capacity()), (0, 0));
    /// ```
    #[inline]
    #[must_use = "use `clear` to drop the elements instead"]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Splits the sequence into its storage and live length without dropping
    /// anything.
    pub(crate) fn into_raw_parts(self) -> (RawArray<T>, usize) {
        let mut this = ManuallyDrop::new(self);
        let len = this.len();
        // SAFETY: The sequence is never used or dropped again, so leaving an
        // empty storage behind cannot be observed.
        let raw = unsafe { this.raw_mut() };
        (core::mem::take(raw), len)
    }
}

impl<T> Drop for SimpleVector<T> {
    fn drop(&mut self) {
        let len = self.len();
        // SAFETY: The sequence is being dropped, so the live range is not
        // observed afterwards.
        let raw = unsafe { self.raw_mut() };
        // SAFETY:
        // 1. `len <= capacity` by the invariants of this type
        // 2. Slots `[0, len)` are live and are never used again.
        unsafe { raw.drop_in_place(0..len) };
    }
}

/// Reports a capacity that cannot be doubled without overflowing.
#[cold]
#[inline(never)]
#[track_caller]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

#[cold]
#[inline(never)]
#[track_caller]
fn insertion_index_out_of_range(index: usize, len: usize) -> ! {
    panic!("insertion index (is {index}) should be <= len (is {len})")
}

#[cold]
#[inline(never)]
#[track_caller]
fn removal_index_out_of_range(index: usize, len: usize) -> ! {
    panic!("removal index (is {index}) should be < len (is {len})")
}

#[cfg(test)]
mod tests {
    use alloc::{rc::Rc, string::String, vec::Vec};
    use core::cell::Cell;

    use super::*;
    use crate::{reserve, simple_vector};

    #[derive(Debug)]
    struct DropCounter<'a>(&'a Cell<usize>);

    impl Drop for DropCounter<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[allow(dead_code)]
    struct NonSend(*const ());
    static_assertions::assert_not_impl_any!(NonSend: Send, Sync);

    #[test]
    fn test_simple_vector_send_sync() {
        static_assertions::assert_impl_all!(SimpleVector<u32>: Send, Sync);
        static_assertions::assert_impl_all!(SimpleVector<String>: Send, Sync);
        static_assertions::assert_not_impl_any!(SimpleVector<NonSend>: Send, Sync);
        static_assertions::assert_not_impl_any!(SimpleVector<Rc<u32>>: Send, Sync);
    }

    #[test]
    fn test_simple_vector_copy_clone() {
        static_assertions::assert_impl_all!(SimpleVector<u32>: Clone);
        static_assertions::assert_not_impl_any!(SimpleVector<u32>: Copy);
        static_assertions::assert_not_impl_any!(SimpleVector<NonSend>: Clone);
    }

    #[test]
    fn test_push_back_doubling() {
        let mut values = SimpleVector::new();
        assert_eq!((values.len(), values.capacity()), (0, 0));

        values.push_back(1);
        assert_eq!(values.capacity(), 1);
        values.push_back(2);
        assert_eq!(values.capacity(), 2);
        values.push_back(3);
        assert_eq!(values.capacity(), 4);
        assert_eq!(values.as_slice(), [1, 2, 3]);
    }

    #[test]
    fn test_push_back_into_reserved_does_not_move() {
        let mut values = SimpleVector::with_reserve(reserve(3));
        let base = values.as_ptr();
        values.push_back(1u8);
        values.push_back(2);
        values.push_back(3);
        assert_eq!(values.as_ptr(), base);
        assert_eq!(values.capacity(), 3);
    }

    #[test]
    fn test_pop_back() {
        let mut values = simple_vector![String::from("a"), String::from("b")];
        assert_eq!(values.pop_back().as_deref(), Some("b"));
        assert_eq!(values.pop_back().as_deref(), Some("a"));
        assert_eq!(values.pop_back(), None);
        assert_eq!(values.capacity(), 2);
    }

    #[test]
    fn test_insert_positions() {
        let mut values = SimpleVector::new();
        assert_eq!(values.insert(0, 2), 0);
        assert_eq!(values.insert(0, 1), 0);
        assert_eq!(values.insert(2, 4), 2);
        assert_eq!(values.insert(2, 3), 2);
        assert_eq!(values.as_slice(), [1, 2, 3, 4]);
        assert_eq!(values.capacity(), 4);
    }

    #[test]
    #[should_panic(expected = "insertion index (is 4) should be <= len (is 3)")]
    fn test_insert_out_of_range_panics() {
        let mut values = simple_vector![1, 2, 3];
        values.insert(4, 0);
    }

    #[test]
    #[should_panic(expected = "removal index (is 0) should be < len (is 0)")]
    fn test_erase_empty_panics() {
        let mut values: SimpleVector<i32> = SimpleVector::new();
        values.erase(0);
    }

    #[test]
    fn test_erase_returns_following_index() {
        let mut values = simple_vector![1, 2, 3, 4];
        assert_eq!(values.erase(0), 0);
        assert_eq!(values.as_slice(), [2, 3, 4]);
        assert_eq!(values.erase(2), 2);
        assert_eq!(values.as_slice(), [2, 3]);
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_remove_returns_value() {
        let mut values = simple_vector![String::from("x"), String::from("y")];
        assert_eq!(values.remove(0), "x");
        assert_eq!(values.as_slice(), ["y"]);
    }

    #[test]
    fn test_at_checked_access() {
        let mut values = simple_vector![1, 2, 3];
        assert_eq!(values.at(0), Ok(&1));
        assert_eq!(values.at(3), Err(IndexOutOfRange { index: 3, len: 3 }));

        *values.at_mut(2).unwrap() = 30;
        assert_eq!(values.as_slice(), [1, 2, 30]);
        assert_eq!(
            values.at_mut(5).unwrap_err(),
            IndexOutOfRange { index: 5, len: 3 }
        );
    }

    #[test]
    fn test_get_unchecked() {
        let mut values = simple_vector![5, 6];
        unsafe {
            assert_eq!(*values.get_unchecked(1), 6);
            *values.get_unchecked_mut(0) = 50;
        }
        assert_eq!(values.as_slice(), [50, 6]);
    }

    #[test]
    fn test_reserve_is_exact_and_monotonic() {
        let mut values = simple_vector![1, 2];
        values.reserve(1);
        assert_eq!(values.capacity(), 2);
        values.reserve(7);
        assert_eq!(values.capacity(), 7);
        assert_eq!(values.as_slice(), [1, 2]);
    }

    #[test]
    fn test_try_reserve_overflow_leaves_untouched() {
        let mut values = simple_vector![1u32, 2, 3];
        let base = values.as_ptr();
        assert!(matches!(
            values.try_reserve(usize::MAX),
            Err(AllocError::CapacityOverflow { .. })
        ));
        assert_eq!(values.as_ptr(), base);
        assert_eq!(values.as_slice(), [1, 2, 3]);
        assert_eq!(values.try_reserve(2), Ok(()));
    }

    #[test]
    fn test_resize_exact_growth() {
        let mut values: SimpleVector<i32> = SimpleVector::with_len(2);
        values.resize(9);
        assert_eq!(values.capacity(), 9);
        assert_eq!(values.len(), 9);
        assert!(values.iter().all(|value| *value == 0));
    }

    #[test]
    fn test_resize_with_calls_in_order() {
        let mut values = SimpleVector::new();
        let mut next = 0;
        values.resize_with(4, || {
            next += 1;
            next
        });
        assert_eq!(values.as_slice(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let drops = Cell::new(0);
        let mut values = SimpleVector::new();
        for _ in 0..5 {
            values.push_back(DropCounter(&drops));
        }
        let capacity = values.capacity();
        values.clear();
        assert_eq!(drops.get(), 5);
        assert!(values.is_empty());
        assert_eq!(values.capacity(), capacity);
    }

    #[test]
    fn test_truncate_drops_tail_once() {
        let drops = Cell::new(0);
        let mut values = SimpleVector::new();
        for _ in 0..4 {
            values.push_back(DropCounter(&drops));
        }
        values.truncate(1);
        assert_eq!(drops.get(), 3);
        values.truncate(3);
        assert_eq!(drops.get(), 3);
        drop(values);
        assert_eq!(drops.get(), 4);
    }

    #[test]
    fn test_relocation_does_not_drop() {
        let drops = Cell::new(0);
        let mut values = SimpleVector::new();
        for _ in 0..17 {
            values.push_back(DropCounter(&drops));
        }
        assert_eq!(drops.get(), 0);
        values.insert(3, DropCounter(&drops));
        assert_eq!(drops.get(), 0);
        values.erase(3);
        assert_eq!(drops.get(), 1);
        drop(values);
        assert_eq!(drops.get(), 18);
    }

    #[test]
    fn test_swap_and_take() {
        let mut a = simple_vector![1, 2, 3];
        let mut b = SimpleVector::with_capacity(10);
        b.push_back(9);

        a.swap(&mut b);
        assert_eq!(a.as_slice(), [9]);
        assert_eq!(a.capacity(), 10);
        assert_eq!(b.as_slice(), [1, 2, 3]);

        let taken = b.take();
        assert_eq!(taken.as_slice(), [1, 2, 3]);
        assert_eq!((b.len(), b.capacity()), (0, 0));
    }

    #[test]
    fn test_from_elem_and_with_len() {
        let values = SimpleVector::from_elem(3, 7);
        assert_eq!(values.as_slice(), [7, 7, 7]);
        assert_eq!(values.capacity(), 3);

        let empty = SimpleVector::from_elem(0, String::from("unused"));
        assert!(empty.is_empty());
        assert_eq!(empty.capacity(), 0);

        let defaults: SimpleVector<String> = SimpleVector::with_len(2);
        assert_eq!(defaults.as_slice(), ["", ""]);
    }

    #[test]
    fn test_zero_sized_elements() {
        let mut values = SimpleVector::new();
        for _ in 0..10 {
            values.push_back(());
        }
        values.insert(5, ());
        values.erase(0);
        assert_eq!(values.len(), 10);
        assert_eq!(values.capacity(), 16);
        assert_eq!(values.as_ptr(), core::ptr::dangling::<()>());
        assert_eq!(values.pop_back(), Some(()));
    }

    #[test]
    fn test_iter_mut_updates_in_place() {
        let mut values = simple_vector![1, 2, 3];
        for value in values.iter_mut() {
            *value *= 10;
        }
        assert_eq!(values.iter().copied().collect::<Vec<_>>(), [10, 20, 30]);
    }
}
