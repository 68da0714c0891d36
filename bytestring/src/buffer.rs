use alloc::vec::Vec;
use core::fmt;

use embedded_io::{Error as _, Write};

use crate::error::ByteStringError;

/// Byte capacity of a string created with [`ByteString::new`].
pub const DEFAULT_CAPACITY: usize = 8;

/// A growable byte string that keeps a zero terminator after its content.
///
/// # Invariants
///
/// `0 <= len <= cap`, `storage.len() == len + 1`, `storage[len] == 0` and the
/// allocation holds at least `cap + 1` bytes. Length is tracked explicitly;
/// the terminator is never scanned for, so content may contain zero bytes.
pub struct ByteString {
    /// Content followed by exactly one terminator byte.
    storage: Vec<u8>,
    /// Logical capacity, terminator excluded. Never shrinks.
    cap: usize,
}

fn allocation_error(requested: usize) -> ByteStringError {
    ByteStringError::AllocationError { requested }
}

/// Allocates room for `cap` content bytes plus the terminator, already terminated.
fn terminated_storage(cap: usize) -> Result<Vec<u8>, ByteStringError> {
    let total = cap.checked_add(1).ok_or_else(|| allocation_error(cap))?;
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(total)
        .map_err(|_| allocation_error(cap))?;
    storage.push(0);
    Ok(storage)
}

impl ByteString {
    /// Creates an empty string with [`DEFAULT_CAPACITY`].
    ///
    /// # Errors
    ///
    /// Returns `ByteStringError::AllocationError` if the storage cannot be obtained.
    pub fn new() -> Result<Self, ByteStringError> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty string with room for `cap` bytes before it has to grow.
    ///
    /// # Errors
    ///
    /// Returns `ByteStringError::AllocationError` if the storage cannot be obtained.
    pub fn with_capacity(cap: usize) -> Result<Self, ByteStringError> {
        Ok(Self {
            storage: terminated_storage(cap)?,
            cap,
        })
    }

    /// Creates a string whose content is exactly `bytes`.
    ///
    /// # Errors
    ///
    /// Returns `ByteStringError::AllocationError` if the storage cannot be obtained.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ByteStringError> {
        let mut string = Self::with_capacity(bytes.len().max(DEFAULT_CAPACITY))?;
        string.append_reserved(bytes);
        Ok(string)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of content bytes that fit before the next reallocation.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the content, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.storage
            .split_last()
            .map_or(&[][..], |(_terminator, content)| content)
    }

    /// Returns the content followed by its zero terminator.
    ///
    /// The last byte is always `0`; earlier bytes may be `0` too.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.storage
    }

    /// Makes sure `extra` more bytes fit, growing to twice the required size if not.
    fn reserve(&mut self, extra: usize) -> Result<(), ByteStringError> {
        let required = self
            .len()
            .checked_add(extra)
            .ok_or_else(|| allocation_error(usize::MAX))?;
        if required <= self.cap {
            return Ok(());
        }

        let new_cap = match self.cap.max(required).checked_mul(2) {
            Some(doubled) if doubled < usize::MAX => doubled,
            _ => required,
        };
        let total = new_cap.checked_add(1).ok_or_else(|| allocation_error(new_cap))?;

        // try_reserve_exact leaves the storage untouched on failure
        self.storage
            .try_reserve_exact(total - self.storage.len())
            .map_err(|_| allocation_error(new_cap))?;
        self.cap = new_cap;
        Ok(())
    }

    /// Copies `bytes` after the content. Room must already be reserved.
    fn append_reserved(&mut self, bytes: &[u8]) {
        let len = self.len();
        self.storage.truncate(len);
        self.storage.extend_from_slice(bytes);
        self.storage.push(0);
    }

    /// Appends a single byte.
    ///
    /// # Errors
    ///
    /// Returns `ByteStringError::AllocationError` if the storage cannot grow.
    /// The string is left unchanged in that case.
    pub fn push(&mut self, byte: u8) -> Result<(), ByteStringError> {
        self.reserve(1)?;
        // Shifts the terminator one place right
        let len = self.len();
        self.storage.insert(len, byte);
        Ok(())
    }

    /// Appends the whole content of `other`, growing once for its full length.
    ///
    /// # Errors
    ///
    /// Returns `ByteStringError::AllocationError` if the storage cannot grow.
    /// The string is left unchanged in that case.
    pub fn push_buffer(&mut self, other: &ByteString) -> Result<(), ByteStringError> {
        let bytes = other.as_bytes();
        self.reserve(bytes.len())?;
        self.append_reserved(bytes);
        Ok(())
    }

    /// Byte-wise equality. Strings of different length are rejected before
    /// any byte is compared.
    #[must_use]
    pub fn equals(&self, other: &ByteString) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.as_bytes()
            .iter()
            .zip(other.as_bytes())
            .all(|(a, b)| a == b)
    }

    /// Writes the content followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns `ByteStringError::WriteError` with the writer's error kind.
    pub fn write_line<W: Write + ?Sized>(&self, out: &mut W) -> Result<(), ByteStringError> {
        out.write_all(self.as_bytes())
            .map_err(|e| ByteStringError::WriteError { kind: e.kind() })?;
        out.write_all(b"\n")
            .map_err(|e| ByteStringError::WriteError { kind: e.kind() })
    }

    /// Copies the content into a new string with the same capacity.
    ///
    /// # Errors
    ///
    /// Returns `ByteStringError::AllocationError` if the storage cannot be obtained.
    pub fn try_clone(&self) -> Result<Self, ByteStringError> {
        let mut copy = Self::with_capacity(self.cap)?;
        copy.append_reserved(self.as_bytes());
        Ok(copy)
    }

    /// Frees the storage. Equivalent to dropping the string.
    pub fn release(self) {
        drop(self);
    }
}

impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for ByteString {}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ByteString(\"")?;
        for &byte in self.as_bytes() {
            write!(f, "{}", core::ascii::escape_default(byte))?;
        }
        f.write_str("\")")
    }
}
