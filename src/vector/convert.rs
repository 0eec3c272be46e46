use alloc::vec::Vec;
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    ops::{Deref, DerefMut, Index, IndexMut},
    slice::{self, SliceIndex},
};

use crate::{
    reserve::ReserveProxy,
    vector::{IntoIter, SimpleVector},
};

impl<T> Default for SimpleVector<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for SimpleVector<T> {
    /// Deep-copies the sequence into a new block of the same capacity.
    ///
    /// If a clone panics, the elements copied so far are dropped and the
    /// source is left untouched.
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        for value in self {
            copy.push_back(value.clone());
        }
        copy
    }

    /// Replaces `self` with a deep copy of `source`.
    ///
    /// The copy is built completely before anything in `self` is touched, so
    /// a panicking clone leaves `self` unchanged.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: fmt::Debug> fmt::Debug for SimpleVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Deref for SimpleVector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for SimpleVector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for SimpleVector<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for SimpleVector<T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for SimpleVector<T> {
    #[inline]
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for SimpleVector<T> {
    #[inline]
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Unchecked-style indexing: panics if the index or range is out of bounds.
/// Use [`SimpleVector::at`] for a recoverable error instead.
impl<T, I: SliceIndex<[T]>> Index<I> for SimpleVector<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for SimpleVector<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T, const N: usize> From<[T; N]> for SimpleVector<T> {
    /// Moves the array's elements into a sequence with a capacity of exactly
    /// `N`.
    fn from(values: [T; N]) -> Self {
        let mut sequence = Self::with_capacity(N);
        sequence.extend(values);
        sequence
    }
}

impl<T: Clone> From<&[T]> for SimpleVector<T> {
    fn from(values: &[T]) -> Self {
        let mut sequence = Self::with_capacity(values.len());
        sequence.extend(values.iter().cloned());
        sequence
    }
}

impl<T> From<Vec<T>> for SimpleVector<T> {
    fn from(values: Vec<T>) -> Self {
        let mut sequence = Self::with_capacity(values.len());
        sequence.extend(values);
        sequence
    }
}

impl<T> From<SimpleVector<T>> for Vec<T> {
    fn from(values: SimpleVector<T>) -> Self {
        let mut vec = Vec::with_capacity(values.len());
        vec.extend(values);
        vec
    }
}

impl<T> From<ReserveProxy> for SimpleVector<T> {
    #[inline]
    fn from(proxy: ReserveProxy) -> Self {
        Self::with_reserve(proxy)
    }
}

impl<T> FromIterator<T> for SimpleVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut sequence = Self::with_capacity(iter.size_hint().0);
        sequence.extend(iter);
        sequence
    }
}

impl<T> Extend<T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if lower > self.capacity() - self.len() {
            let needed = self.len().saturating_add(lower);
            self.reserve(needed.max(self.capacity().saturating_mul(2)));
        }
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for SimpleVector<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for SimpleVector<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a SimpleVector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> slice::Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SimpleVector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> slice::IterMut<'a, T> {
        self.iter_mut()
    }
}
