//! Raw, exclusively owned slot storage.
//!
//! The [`RawArray`] type lives in [`raw`], which is the only module allowed
//! to see its fields. The layout helpers in [`layout`] are shared by the
//! fallible and infallible constructors.

mod layout;
pub(crate) mod raw;

pub use raw::RawArray;
