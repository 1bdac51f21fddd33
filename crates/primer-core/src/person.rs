//! Value vs. reference receivers
//!
//! `greet` takes `self` by value and so works on its own copy; anything it
//! writes is dropped with that copy. `set_name` takes `&mut self` and writes
//! the caller's storage.

use std::io::Write;

use crate::kdebug;

/// A person with a name, street address and age
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub address: String,
    pub age: i32,
}

impl Person {
    pub fn new(name: impl Into<String>, address: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            age,
        }
    }

    /// Greet by value
    ///
    /// Call on a clone (`person.clone().greet(out)`) to keep the original.
    /// The rename to "Jane" only affects the receiver's own copy.
    pub fn greet<W: Write + ?Sized>(mut self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Hello, {}", self.name)?;
        self.name = String::from("Jane");
        kdebug!("greet: private copy renamed to {}", self.name);
        Ok(())
    }

    /// Rename through the caller's storage
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
