//! The nine lessons and their registry
//!
//! Each lesson writes its whole output to `out` and returns. The `cmd/`
//! binaries hand in locked stdout; tests hand in a `Vec<u8>`.

use std::io::Write;

use primer_core::{kdebug, PrimerError, PrimerResult};

pub mod interfaces;
pub mod loops;
pub mod methods;
pub mod multiple_return_values;
pub mod passing_a_function;
pub mod pointers;
pub mod ranges;
pub mod user_defined_types;
pub mod variadic_functions;

/// Entry point shared by every lesson
pub type LessonFn = fn(&mut dyn Write) -> PrimerResult<()>;

/// A registered lesson
#[derive(Clone, Copy)]
pub struct Lesson {
    /// Binary name under `cmd/`
    pub name: &'static str,

    /// One line on what the lesson shows
    pub summary: &'static str,

    pub run: LessonFn,
}

/// All lessons, in tour order
pub const LESSONS: &[Lesson] = &[
    Lesson {
        name: "interfaces",
        summary: "dispatch through a trait implemented by two types",
        run: interfaces::run,
    },
    Lesson {
        name: "loops",
        summary: "index over a fixed array and a growable vector",
        run: loops::run,
    },
    Lesson {
        name: "methods",
        summary: "by-value vs. by-reference receivers",
        run: methods::run,
    },
    Lesson {
        name: "multiple-return-values",
        summary: "return two values from one call",
        run: multiple_return_values::run,
    },
    Lesson {
        name: "passing-a-function",
        summary: "pass a function as an argument",
        run: passing_a_function::run,
    },
    Lesson {
        name: "pointers",
        summary: "a reference and its referent share storage",
        run: pointers::run,
    },
    Lesson {
        name: "ranges",
        summary: "slice a vector into views and iterate them",
        run: ranges::run,
    },
    Lesson {
        name: "user-defined-types",
        summary: "build a struct three ways",
        run: user_defined_types::run,
    },
    Lesson {
        name: "variadic-functions",
        summary: "take any number of trailing arguments",
        run: variadic_functions::run,
    },
];

/// Look up a lesson by name
pub fn find(name: &str) -> Option<&'static Lesson> {
    LESSONS.iter().find(|l| l.name == name)
}

/// Run one lesson by name
pub fn run_named(out: &mut dyn Write, name: &str) -> PrimerResult<()> {
    let lesson = find(name).ok_or_else(|| PrimerError::UnknownLesson(name.to_string()))?;
    (lesson.run)(out)
}

/// Run several lessons with a header line before each and a blank line after
///
/// An empty `names` runs every lesson. Names are all checked before any
/// lesson runs, so an unknown name produces no output.
pub fn run_tour<S: AsRef<str>>(out: &mut dyn Write, names: &[S]) -> PrimerResult<()> {
    let selected: Vec<&'static Lesson> = if names.is_empty() {
        LESSONS.iter().collect()
    } else {
        names
            .iter()
            .map(|n| find(n.as_ref()).ok_or_else(|| PrimerError::UnknownLesson(n.as_ref().to_string())))
            .collect::<PrimerResult<_>>()?
    };

    for lesson in selected {
        kdebug!("running lesson {}", lesson.name);
        writeln!(out, "=== {} ===", lesson.name)?;
        (lesson.run)(out)?;
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) fn capture(run: LessonFn) -> String {
    let mut out = Vec::new();
    run(&mut out).expect("lesson failed");
    String::from_utf8(out).expect("lesson wrote invalid UTF-8")
}
