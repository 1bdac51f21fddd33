//! References and shared cells that alias one piece of storage
//!
//! With `&mut`, the alias and the referent are the same place: a write
//! through the reference is what the owner reads afterwards. `Shared` gives
//! the same behavior to handles that outlive a single borrow.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::kdebug;

/// Opaque rendering of where `value` lives
pub fn address_of<T: ?Sized>(value: &T) -> String {
    format!("{:p}", value)
}

/// Replace the referent through a mutable reference
pub fn write_through<T>(target: &mut T, value: T) {
    *target = value;
}

/// Shared-ownership cell; every handle sees every write
pub struct Shared<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Another handle to the same storage
    pub fn handle(&self) -> Self {
        kdebug!("new handle, {} total", Rc::strong_count(&self.inner) + 1);
        Self {
            inner: Rc::clone(&self.inner),
        }
    }

    pub fn set(&self, value: T) {
        *self.inner.borrow_mut() = value;
    }

    /// Run `f` against the current value
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.inner.borrow())
    }

    /// True when both handles point at the same storage
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn address(&self) -> String {
        format!("{:p}", Rc::as_ptr(&self.inner))
    }
}

impl<T: Clone> Shared<T> {
    pub fn get(&self) -> T {
        self.inner.borrow().clone()
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&self.inner.borrow()).finish()
    }
}
