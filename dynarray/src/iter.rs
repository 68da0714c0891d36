use core::slice;

use crate::core::DynArray;
use crate::handle::Handle;

/// Iterator over the handles in a `DynArray`, in push order
///
/// This iterator implements `Clone`.
pub struct DynArrayIter<'s, 'a, T: ?Sized> {
    slots: slice::Iter<'s, Handle<'a, T>>,
}

impl<T: ?Sized> Clone for DynArrayIter<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T: ?Sized> Iterator for DynArrayIter<'_, 'a, T> {
    type Item = Handle<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.slots.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T: ?Sized> DoubleEndedIterator for DynArrayIter<'_, '_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.slots.next_back().copied()
    }
}

impl<T: ?Sized> ExactSizeIterator for DynArrayIter<'_, '_, T> {}

impl<'s, 'a, T: ?Sized> IntoIterator for &'s DynArray<'a, T> {
    type Item = Handle<'a, T>;
    type IntoIter = DynArrayIter<'s, 'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        DynArrayIter {
            slots: self.slots().iter(),
        }
    }
}
