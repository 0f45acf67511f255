//! The optional-value wrapper used for nullable record fields.

use std::fmt;

/// A field slot that is either absent or holds one value.
///
/// An absent slot still owns a default-constructed backing value, so a
/// `Nullable<T>` is always fully initialized. Absent slots map to JSON
/// `null`, and a `null` node always decodes to an absent slot.
///
/// ```rust
/// use recordtree_record::Nullable;
///
/// let mut slot: Nullable<u32> = Nullable::default();
/// assert!(slot.is_null());
///
/// slot.set(7);
/// assert!(slot.holds(&7));
///
/// slot.clear();
/// assert_eq!(slot, Nullable::null());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Nullable<T> {
    value: T,
    present: bool,
}

impl<T> Nullable<T> {
    /// A present slot holding `value`.
    pub fn new(value: T) -> Self {
        Nullable {
            value,
            present: true,
        }
    }

    pub fn has_value(&self) -> bool {
        self.present
    }

    pub fn is_null(&self) -> bool {
        !self.present
    }

    /// The held value, if present.
    pub fn value(&self) -> Option<&T> {
        self.present.then_some(&self.value)
    }

    pub fn value_mut(&mut self) -> Option<&mut T> {
        if self.present {
            Some(&mut self.value)
        } else {
            None
        }
    }

    /// True iff the slot is present and holds a value equal to `other`.
    pub fn holds(&self, other: &T) -> bool
    where
        T: PartialEq,
    {
        self.present && self.value == *other
    }

    /// Store `value`, making the slot present.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.present = true;
    }

    pub fn into_option(self) -> Option<T> {
        self.present.then_some(self.value)
    }
}

impl<T: Default> Nullable<T> {
    /// An absent slot.
    pub fn null() -> Self {
        Nullable::default()
    }

    /// Build a slot from an `Option`, `None` becoming absent.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Nullable::new(v),
            None => Nullable::null(),
        }
    }

    /// Make the slot absent, resetting the backing value to its default.
    pub fn clear(&mut self) {
        self.value = T::default();
        self.present = false;
    }

    /// Take the value out, leaving the slot absent.
    pub fn take(&mut self) -> Option<T> {
        let present = std::mem::replace(&mut self.present, false);
        let value = std::mem::take(&mut self.value);
        present.then_some(value)
    }
}

impl<T> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Nullable::new(value)
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(slot: Nullable<T>) -> Self {
        slot.into_option()
    }
}

impl<T: PartialEq> PartialEq for Nullable<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.present, other.present) {
            (true, true) => self.value == other.value,
            (false, false) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Nullable<T> {}

impl<T: fmt::Display> fmt::Display for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) => write!(f, "{}", v),
            None => Ok(()),
        }
    }
}
