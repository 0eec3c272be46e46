//! Commonly used items for convenient importing.
//!
//! # Usage
//!
//! ```rust
//! use simple_vector::prelude::*;
//!
//! let mut values: SimpleVector<u8> = reserve(2).into();
//! values.push_back(1);
//! assert_eq!(values.at(0), Ok(&1));
//! assert_eq!(values.at(1), Err(IndexOutOfRange { index: 1, len: 1 }));
//! ```
//!
//! # What's Included
//!
//! - **[`SimpleVector`]**: The growable sequence
//! - **[`ReserveProxy`]** and **[`reserve`]**: Capacity reservation tokens
//! - **[`simple_vector!`]**: Literal construction
//! - **[`IndexOutOfRange`]** and **[`AllocError`]**: Recoverable errors

pub use crate::{
    ReserveProxy, SimpleVector,
    error::{AllocError, IndexOutOfRange},
    reserve::reserve,
    simple_vector,
};
