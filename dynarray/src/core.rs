use alloc::vec::Vec;

use crate::error::DynArrayError;
use crate::handle::Handle;
use crate::iter::DynArrayIter;

/// Slot capacity of an array created with [`DynArray::new`].
pub const DEFAULT_CAPACITY: usize = 8;

/// A growable array of borrowed handles
#[derive(Debug)]
pub struct DynArray<'a, T: ?Sized> {
    slots: Vec<Handle<'a, T>>,
    cap: usize,
}

impl<'a, T: ?Sized> DynArray<'a, T> {
    /// Creates an empty array with [`DEFAULT_CAPACITY`] slots.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationError` if the slot storage cannot be reserved.
    pub fn new() -> Result<Self, DynArrayError> {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty array with room for `cap` handles.
    ///
    /// A capacity of zero is allowed; the first push grows it.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationError` if the slot storage cannot be reserved.
    pub fn with_capacity(cap: usize) -> Result<Self, DynArrayError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(cap)
            .map_err(|_| DynArrayError::AllocationError { requested: cap })?;
        Ok(Self { slots, cap })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots available before the next reallocation.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    fn grow(&mut self) -> Result<(), DynArrayError> {
        let new_cap = self.cap.saturating_mul(2).max(self.cap.saturating_add(1));
        if new_cap <= self.cap {
            return Err(DynArrayError::AllocationError { requested: new_cap });
        }

        // try_reserve_exact leaves the vector untouched on failure
        self.slots
            .try_reserve_exact(new_cap - self.slots.len())
            .map_err(|_| DynArrayError::AllocationError { requested: new_cap })?;
        self.cap = new_cap;
        Ok(())
    }

    /// Appends a handle to the end of the array, growing the slot storage when full.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::AllocationError` if the storage cannot grow.
    /// The array is left unchanged in that case.
    pub fn push(&mut self, handle: Handle<'a, T>) -> Result<(), DynArrayError> {
        if self.slots.len() == self.cap {
            self.grow()?;
        }
        self.slots.push(handle);
        Ok(())
    }

    /// Returns the handle stored at `index`.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfRange` if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<Handle<'a, T>, DynArrayError> {
        self.slots
            .get(index)
            .copied()
            .ok_or(DynArrayError::IndexOutOfRange {
                index,
                length: self.slots.len(),
            })
    }

    /// Overwrites the handle stored at `index`.
    ///
    /// Never inserts: length and capacity are unchanged.
    ///
    /// # Errors
    ///
    /// Returns `DynArrayError::IndexOutOfRange` if `index >= len()`.
    pub fn set(&mut self, index: usize, handle: Handle<'a, T>) -> Result<(), DynArrayError> {
        let length = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(DynArrayError::IndexOutOfRange { index, length })?;
        *slot = handle;
        Ok(())
    }

    /// Forgets all handles, keeping the slot storage for reuse.
    ///
    /// The referenced data is not touched.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Frees the slot storage.
    ///
    /// The referenced data stays with its owners. Equivalent to dropping the array.
    pub fn release(self) {
        drop(self);
    }

    /// Returns an iterator over the stored handles.
    #[must_use]
    pub fn iter(&self) -> DynArrayIter<'_, 'a, T> {
        self.into_iter()
    }

    pub(crate) fn slots(&self) -> &[Handle<'a, T>] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_grow_leaves_array_unchanged() {
        let value = 7;
        let handle = Handle::new(&value);
        let mut array = DynArray::with_capacity(1).unwrap();
        array.push(handle).unwrap();

        // doubling this overflows any allocation of slots
        array.cap = usize::MAX / 2;

        assert!(matches!(
            array.grow(),
            Err(DynArrayError::AllocationError { .. })
        ));
        assert_eq!(array.len(), 1);
        assert_eq!(array.capacity(), usize::MAX / 2);
        assert!(array.get(0).unwrap().ptr_eq(handle));
    }
}
