#![no_std]

//! `DynArray`: a growable array of borrowed handles.
//!
//! `DynArray` stores [`Handle`]s, non-owning references to data that lives
//! elsewhere. The array owns only its slot storage; the caller keeps owning
//! whatever the handles point at, and the borrow checker makes sure that data
//! outlives the array.
//!
//! This crate is `no_std` compatible and needs only `alloc`.
//!
//! # Growth
//!
//! A new array starts with [`DEFAULT_CAPACITY`] slots. When a push finds the
//! array full, the slot storage at least doubles. Growth is reserved with
//! fallible allocation, so running out of memory is reported as
//! [`DynArrayError::AllocationError`] and the array keeps its previous contents.
//!
//! ## Time Complexity
//! - `push()`: amortized O(1)
//! - `get()`, `set()`: O(1)
//! - `clear()`: O(1), capacity is kept
//!
//! # Example
//!
//! ```
//! use dynarray::{DynArray, DynArrayError, Handle};
//!
//! let (x, y, z) = (0, 1, 2);
//! let mut array = DynArray::new().unwrap();
//!
//! array.push(Handle::new(&x)).unwrap();
//! array.push(Handle::new(&y)).unwrap();
//! array.push(Handle::new(&z)).unwrap();
//!
//! for handle in &array {
//!     println!("{}", *handle);
//! }
//!
//! // Overwrite, never insert
//! array.set(0, Handle::new(&z)).unwrap();
//! assert_eq!(*array.get(0).unwrap(), 2);
//! assert_eq!(
//!     array.set(3, Handle::new(&x)),
//!     Err(DynArrayError::IndexOutOfRange { index: 3, length: 3 })
//! );
//!
//! array.clear();
//! assert!(array.is_empty());
//! array.release();
//! ```
//!
//! Enable the optional `std` feature to get `std::error::Error` through
//! `thiserror/std`:
//! ```toml
//! [dependencies]
//! dynarray = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod core;
mod error;
mod handle;
mod iter;

pub use crate::core::{DynArray, DEFAULT_CAPACITY};
pub use error::DynArrayError;
pub use handle::Handle;
pub use iter::DynArrayIter;
