//! Integration tests for the simple-vector-internals crate.
//!
//! These tests drive [`RawArray`] the way an owning container does: they keep
//! their own live-range bookkeeping and check that every value written into a
//! slot is dropped exactly once, no matter how it moved between slots and
//! blocks.
//!
//! ## Lifecycle Tests
//! - `test_grow_by_relocation`: Repeated growth into fresh blocks
//! - `test_release_hand_off`: Ownership hand-off through release/adopt
//! - `test_take_leaves_empty`: `mem::take` as the moved-from state
//!
//! ## Slot Manipulation Tests
//! - `test_insert_and_erase_sequence`: Shifting in both directions
//! - `test_zero_sized_elements`: Slot operations on zero-sized types
//!
//! ## Memory Management Tests
//! - `test_exactly_once_drop`: Drop tracking across all operations
//! - `test_fallible_allocation`: Error reporting of `try_with_capacity`

use std::{cell::RefCell, rc::Rc};

use simple_vector_internals::{AllocError, RawArray};

/// Records the name of every value when it is dropped.
#[derive(Debug)]
struct Tracked {
    name: &'static str,
    log: Rc<RefCell<Vec<&'static str>>>,
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.name);
    }
}

/// Minimal owner that pairs a [`RawArray`] with a live length.
struct Owner<T> {
    storage: RawArray<T>,
    len: usize,
}

impl<T> Owner<T> {
    fn new() -> Self {
        Self {
            storage: RawArray::new(),
            len: 0,
        }
    }

    fn grow_to(&mut self, capacity: usize) {
        let mut fresh = RawArray::with_capacity(capacity);
        unsafe { self.storage.relocate_into(&mut fresh, self.len) };
        self.storage = fresh;
    }

    fn push(&mut self, value: T) {
        if self.len == self.storage.capacity() {
            self.grow_to((self.storage.capacity() * 2).max(1));
        }
        unsafe { self.storage.write(self.len, value) };
        self.len += 1;
    }

    fn insert(&mut self, index: usize, value: T) {
        if self.len == self.storage.capacity() {
            self.grow_to((self.storage.capacity() * 2).max(1));
        }
        unsafe {
            self.storage.shift_toward_back(index, self.len);
            self.storage.write(index, value);
        }
        self.len += 1;
    }

    fn remove(&mut self, index: usize) -> T {
        let value = unsafe { self.storage.read(index) };
        unsafe { self.storage.shift_toward_front(index, self.len) };
        self.len -= 1;
        value
    }

    fn as_slice(&self) -> &[T] {
        unsafe { self.storage.as_slice(self.len) }
    }
}

impl<T> Drop for Owner<T> {
    fn drop(&mut self) {
        unsafe { self.storage.drop_in_place(0..self.len) };
    }
}

fn tracked(name: &'static str, log: &Rc<RefCell<Vec<&'static str>>>) -> Tracked {
    Tracked {
        name,
        log: Rc::clone(log),
    }
}

#[test]
fn test_grow_by_relocation() {
    let mut owner = Owner::new();
    let mut capacities = Vec::new();
    for value in 0..9u32 {
        owner.push(value);
        capacities.push(owner.storage.capacity());
    }

    assert_eq!(owner.as_slice(), [0, 1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);
}

#[test]
fn test_release_hand_off() {
    let mut owner = Owner::new();
    owner.push(String::from("kept"));
    let len = std::mem::replace(&mut owner.len, 0);

    let (ptr, capacity) = owner.storage.release();
    assert!(!owner.storage.is_allocated());
    drop(owner);

    let mut adopted = Owner {
        storage: unsafe { RawArray::from_raw_parts(ptr, capacity) },
        len,
    };
    assert_eq!(adopted.as_slice(), ["kept"]);
    adopted.push(String::from("more"));
    assert_eq!(adopted.as_slice(), ["kept", "more"]);
}

#[test]
fn test_take_leaves_empty() {
    let mut storage = RawArray::<u16>::with_capacity(8);
    let taken = std::mem::take(&mut storage);

    assert_eq!(taken.capacity(), 8);
    assert_eq!(storage.capacity(), 0);
    assert!(!storage.is_allocated());
}

#[test]
fn test_insert_and_erase_sequence() {
    let mut owner = Owner::new();
    for value in [1, 2, 3] {
        owner.push(value);
    }

    owner.insert(1, 9);
    assert_eq!(owner.as_slice(), [1, 9, 2, 3]);

    owner.insert(4, 4);
    assert_eq!(owner.as_slice(), [1, 9, 2, 3, 4]);

    owner.insert(0, 0);
    assert_eq!(owner.as_slice(), [0, 1, 9, 2, 3, 4]);

    assert_eq!(owner.remove(2), 9);
    assert_eq!(owner.as_slice(), [0, 1, 2, 3, 4]);

    assert_eq!(owner.remove(4), 4);
    assert_eq!(owner.remove(0), 0);
    assert_eq!(owner.as_slice(), [1, 2, 3]);
}

#[test]
fn test_zero_sized_elements() {
    let mut owner = Owner::new();
    for _ in 0..100 {
        owner.push(());
    }
    owner.insert(50, ());
    owner.remove(0);
    assert_eq!(owner.as_slice().len(), 100);
    assert!(owner.storage.capacity() >= 100);
    assert!(!owner.storage.is_allocated());
}

#[test]
fn test_exactly_once_drop() {
    let log = Rc::new(RefCell::new(Vec::new()));
    {
        let mut owner = Owner::new();
        owner.push(tracked("a", &log));
        owner.push(tracked("b", &log));
        owner.push(tracked("c", &log));
        owner.insert(1, tracked("x", &log));
        assert!(log.borrow().is_empty(), "relocation must not drop anything");

        drop(owner.remove(2));
        assert_eq!(*log.borrow(), ["b"]);
    }

    let mut dropped = log.borrow().clone();
    dropped.sort_unstable();
    assert_eq!(dropped, ["a", "b", "c", "x"]);
}

#[test]
fn test_fallible_allocation() {
    assert!(matches!(
        RawArray::<u32>::try_with_capacity(usize::MAX / 2),
        Err(AllocError::CapacityOverflow { requested }) if requested == usize::MAX / 2
    ));

    let array = RawArray::<u32>::try_with_capacity(0).unwrap();
    assert!(!array.is_allocated());

    let array = RawArray::<u32>::try_with_capacity(5).unwrap();
    assert_eq!(array.capacity(), 5);
}
