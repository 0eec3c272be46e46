use core::{fmt, iter::FusedIterator, ops::Range};

use simple_vector_internals::RawArray;

use crate::vector::SimpleVector;

/// An iterator that moves elements out of a [`SimpleVector`].
///
/// Created by the [`IntoIterator`] implementation of [`SimpleVector`]. The
/// iterator takes over the sequence's storage; elements that are not
/// yielded are dropped together with the iterator.
///
/// # Examples
///
/// ```
/// use simple_vector::simple_vector;
///
/// let values = simple_vector![String::from("a"), String::from("b")];
/// let mut iter = values.into_iter();
/// assert_eq!(iter.next().as_deref(), Some("a"));
/// assert_eq!(iter.as_slice(), ["b"]);
/// ```
pub struct IntoIter<T> {
    raw: RawArray<T>,
    /// Slots still owned by the iterator. Everything outside is moved out or
    /// was never live.
    remaining: Range<usize>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(values: SimpleVector<T>) -> Self {
        let (raw, len) = values.into_raw_parts();
        Self {
            raw,
            remaining: 0..len,
        }
    }

    /// Returns the elements not yet yielded as a slice.
    pub fn as_slice(&self) -> &[T] {
        let Range { start, end } = self.remaining;
        // SAFETY:
        // 1. `end <= capacity`, as it started out as the sequence length.
        // 2. Slots `[start, end)` are live and owned by the iterator.
        let live = unsafe { self.raw.as_slice(end) };
        &live[start..]
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        let index = self.remaining.next()?;
        // SAFETY:
        // 1. `index < end <= capacity`
        // 2. Slot `index` was live and has just left the owned range.
        Some(unsafe { self.raw.read(index) })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        let index = self.remaining.next_back()?;
        // SAFETY:
        // 1. `index < end <= capacity`
        // 2. Slot `index` was live and has just left the owned range.
        Some(unsafe { self.raw.read(index) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = core::mem::replace(&mut self.remaining, 0..0);
        // SAFETY:
        // 1. `remaining.end <= capacity`
        // 2. Slots in `remaining` are live, and the owned range is emptied
        //    before they are dropped.
        unsafe { self.raw.drop_in_place(remaining) };
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec::Vec};
    use core::cell::Cell;

    use crate::simple_vector;

    struct DropCounter<'a>(&'a Cell<usize>);

    impl Drop for DropCounter<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_into_iter_both_ends() {
        let values = simple_vector![1, 2, 3, 4];
        let mut iter = values.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.as_slice(), [2, 3]);
        assert_eq!(iter.collect::<Vec<_>>(), [2, 3]);
    }

    #[test]
    fn test_into_iter_drops_remaining() {
        let drops = Cell::new(0);
        let values = simple_vector![
            DropCounter(&drops),
            DropCounter(&drops),
            DropCounter(&drops)
        ];
        let mut iter = values.into_iter();
        drop(iter.next());
        assert_eq!(drops.get(), 1);
        drop(iter);
        assert_eq!(drops.get(), 3);
    }

    #[test]
    fn test_into_iter_fused() {
        let mut iter = simple_vector![String::from("only")].into_iter();
        assert_eq!(iter.next().as_deref(), Some("only"));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
        assert_eq!(iter.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_into_iter_debug() {
        let iter = simple_vector![1, 2].into_iter();
        assert_eq!(alloc::format!("{iter:?}"), "IntoIter([1, 2])");
    }
}
