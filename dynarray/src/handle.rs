use core::fmt;
use core::ops::Deref;

/// A borrowed, non-owning reference to caller data stored in a `DynArray`.
///
/// The array only owns the slots that hold handles. The data behind a handle
/// belongs to the caller and must outlive `'a`, which the borrow checker
/// enforces.
///
/// Two handles are equal when they point at the same referent, not when the
/// referents compare equal.
pub struct Handle<'a, T: ?Sized> {
    referent: &'a T,
}

impl<'a, T: ?Sized> Handle<'a, T> {
    #[must_use]
    pub const fn new(referent: &'a T) -> Self {
        Self { referent }
    }

    /// Returns the referenced data with the full borrow lifetime.
    #[must_use]
    pub const fn get(self) -> &'a T {
        self.referent
    }

    /// Returns `true` if both handles point at the same referent.
    #[must_use]
    pub fn ptr_eq(self, other: Self) -> bool {
        core::ptr::eq(self.referent, other.referent)
    }
}

// Manual impls: deriving would demand `T: Clone`, but only the reference is copied.
impl<T: ?Sized> Clone for Handle<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Handle<'_, T> {}

impl<T: ?Sized> PartialEq for Handle<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(*other)
    }
}

impl<T: ?Sized> Eq for Handle<'_, T> {}

impl<'a, T: ?Sized> From<&'a T> for Handle<'a, T> {
    fn from(referent: &'a T) -> Self {
        Self::new(referent)
    }
}

impl<T: ?Sized> Deref for Handle<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.referent
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Handle<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Handle").field(&self.referent).finish()
    }
}
