//! String transformers dispatched through a trait object
//!
//! `Transformer` is the capability; `Reverser` and `Uppercaser` are the two
//! variants. `transform_data` only sees `&dyn Transformer`.

use std::io::Write;

use crate::kdebug;

/// Something that turns its data into a new string
pub trait Transformer {
    fn transform(&self) -> String;

    /// Short name used in debug logs
    fn name(&self) -> &'static str;
}

/// Reverses its data by character, not by byte
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reverser {
    pub data: String,
}

impl Reverser {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl Transformer for Reverser {
    fn transform(&self) -> String {
        self.data.chars().rev().collect()
    }

    fn name(&self) -> &'static str {
        "reverser"
    }
}

/// Uppercases its data (full Unicode mapping, so it may change length)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uppercaser {
    pub data: String,
}

impl Uppercaser {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }
}

impl Transformer for Uppercaser {
    fn transform(&self) -> String {
        self.data.to_uppercase()
    }

    fn name(&self) -> &'static str {
        "uppercaser"
    }
}

/// Write the result of any transformer as a single line
pub fn transform_data<W: Write + ?Sized>(out: &mut W, t: &dyn Transformer) -> std::io::Result<()> {
    kdebug!("dispatching through {}", t.name());
    writeln!(out, "{}", t.transform())
}
