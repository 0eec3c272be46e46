/// Creates a [`SimpleVector`] from a literal sequence of elements.
///
/// This macro can be invoked in three different ways.
///
/// - `simple_vector![]` creates an empty sequence without allocating.
/// - `simple_vector![a, b, c]` creates a sequence holding the given
///   elements, with a capacity equal to their count.
/// - `simple_vector![value; len]` creates a sequence of `len` clones of
///   `value`, as [`SimpleVector::from_elem`] does. `value` is evaluated
///   before `len`.
///
/// [`SimpleVector`]: crate::SimpleVector
/// [`SimpleVector::from_elem`]: crate::SimpleVector::from_elem
///
/// # Examples
///
/// ```
/// use simple_vector::{SimpleVector, simple_vector};
///
/// let empty: SimpleVector<i32> = simple_vector![];
/// assert!(empty.is_empty());
///
/// let listed = simple_vector![1, 2, 3];
/// assert_eq!(listed, [1, 2, 3]);
/// assert_eq!(listed.capacity(), 3);
///
/// let filled = simple_vector![7; 3];
/// assert_eq!(filled, [7, 7, 7]);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($value:expr; $len:expr) => {{
        let value = $value;
        $crate::SimpleVector::from_elem($len, value)
    }};
    ($($value:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($value),+])
    };
}

/// Emits a `tracing` event when the `tracing` feature is enabled, and
/// nothing otherwise.
macro_rules! trace_event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::$level!($($arg)+);
        }
    };
}

pub(crate) use trace_event;
