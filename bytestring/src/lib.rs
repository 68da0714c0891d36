#![no_std]

//! `ByteString`: a growable, zero-terminated byte string.
//!
//! `ByteString` keeps an explicit length and a trailing zero byte after its
//! content, so it can be handed to consumers that expect a terminated byte
//! sequence. All operations use the length; content may contain zero bytes.
//! Strings are byte-oriented and make no Unicode assumptions.
//!
//! Growth uses fallible allocation. Running out of memory is reported as
//! [`ByteStringError::AllocationError`] and leaves the string as it was.
//!
//! This crate is `no_std` compatible and needs only `alloc`. I/O goes through
//! the [`embedded_io`] traits.
//!
//! # Example
//!
//! ```
//! use bytestring::ByteString;
//!
//! let mut hello = ByteString::from_bytes(b"hello").unwrap();
//! let world = ByteString::from_bytes(b"world").unwrap();
//!
//! hello.push(b' ').unwrap();
//! hello.push_buffer(&world).unwrap();
//! hello.push(b'!').unwrap();
//!
//! assert_eq!(hello.as_bytes(), b"hello world!");
//! assert_eq!(hello.len(), 12);
//! assert_eq!(hello.as_bytes_with_nul().last(), Some(&0));
//!
//! // Print routine: content plus newline into any embedded-io writer
//! let mut out = [0u8; 32];
//! let mut sink = &mut out[..];
//! hello.write_line(&mut sink).unwrap();
//! assert_eq!(&out[..13], b"hello world!\n");
//!
//! world.release();
//! hello.release();
//! ```
//!
//! # Reading lines
//!
//! ```
//! use bytestring::{read_line, LineReader};
//!
//! let mut input: &[u8] = b"first\n\nlast";
//! assert_eq!(read_line(&mut input).unwrap().as_bytes(), b"first");
//!
//! let lines: Vec<_> = LineReader::new(input)
//!     .map(|line| line.unwrap().as_bytes().to_vec())
//!     .collect();
//! assert_eq!(lines, vec![b"".to_vec(), b"last".to_vec()]);
//! ```
//!
//! Enable the optional `std` feature for `std::error::Error` and the
//! `embedded-io` std adapters:
//! ```toml
//! [dependencies]
//! bytestring = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod buffer;
mod error;
mod line;

pub use buffer::{ByteString, DEFAULT_CAPACITY};
pub use error::ByteStringError;
pub use line::{read_line, LineReader};
