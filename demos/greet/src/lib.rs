//! Greeting demo on top of `bytestring` and `dynarray`
//!
//! Builds `hello <name>!` by appending to a `ByteString`, keeps borrowed
//! handles to the result in a `DynArray`, and prints every handle as a line.

#![no_std]

use bytestring::{read_line, ByteString, ByteStringError};
use dynarray::{DynArray, DynArrayError, Handle};
use embedded_io::{Error as _, ErrorKind, Read, Write};
use thiserror::Error;

/// Name used when none is read from input
pub const DEFAULT_NAME: &[u8] = b"world";

/// Error types for the greeting demo
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GreetError {
    /// Reading, building or printing a byte string failed
    #[error(transparent)]
    ByteString(#[from] ByteStringError),
    /// The handle array could not be created or grown
    #[error(transparent)]
    DynArray(#[from] DynArrayError),
    /// The output writer failed to flush
    #[error("Flush error: {kind:?}")]
    FlushError {
        /// Kind reported by the writer
        kind: ErrorKind,
    },
}

/// Reads the name to greet from the first line of `reader`.
///
/// # Errors
///
/// Propagates read and allocation failures.
pub fn read_name<R: Read + ?Sized>(reader: &mut R) -> Result<ByteString, GreetError> {
    Ok(read_line(reader)?)
}

/// Builds `hello <name>!`.
///
/// # Errors
///
/// Returns an allocation error if the greeting cannot grow.
pub fn greeting(name: &ByteString) -> Result<ByteString, GreetError> {
    let mut hello = ByteString::from_bytes(b"hello")?;
    hello.push(b' ')?;
    hello.push_buffer(name)?;
    hello.push(b'!')?;
    Ok(hello)
}

/// Prints `message` `repeat` times, one line each, then flushes `out`.
///
/// # Errors
///
/// Returns the first write or allocation failure. A failing flush is
/// reported as `GreetError::FlushError`.
pub fn write_greetings<W: Write + ?Sized>(
    message: &ByteString,
    repeat: usize,
    out: &mut W,
) -> Result<(), GreetError> {
    let mut lines = DynArray::new()?;
    for _ in 0..repeat {
        lines.push(Handle::new(message))?;
    }

    for line in &lines {
        line.write_line(out)?;
    }
    out.flush()
        .map_err(|e| GreetError::FlushError { kind: e.kind() })?;

    lines.release();
    Ok(())
}
