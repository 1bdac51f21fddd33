//! # primer - language features in nine small programs
//!
//! Each lesson is a function that writes a fixed block of text. The
//! binaries under `cmd/` print one lesson each to stdout; `tour` prints
//! any selection of them.
//!
//! ## Quick Start
//!
//! ```ignore
//! use primer::lessons;
//!
//! fn main() {
//!     primer::init();
//!     let stdout = std::io::stdout();
//!     primer::exit_on_error(lessons::methods::run(&mut stdout.lock()));
//! }
//! ```
//!
//! ## Lessons
//!
//! | Lesson | Shows |
//! |--------|-------|
//! | `interfaces` | trait objects over two implementations |
//! | `loops` | index loops over an array and a `Vec` |
//! | `methods` | `self` vs. `&mut self` receivers |
//! | `multiple-return-values` | tuple returns |
//! | `passing-a-function` | functions as arguments |
//! | `pointers` | aliasing through `&mut` |
//! | `ranges` | half-open slice views |
//! | `user-defined-types` | three ways to build a struct |
//! | `variadic-functions` | slices and a macro for trailing arguments |
//!
//! Logging goes to stderr and is controlled by `PRIMER_LOG_LEVEL`,
//! `PRIMER_FLUSH_EPRINT` and `PRIMER_KPRINT_TIME`.

pub mod config;
pub mod lessons;

// Re-export core types
pub use primer_core::{
    PrimerError,
    PrimerResult,
    SliceError,
    Person,
    Record,
    Reverser,
    Uppercaser,
    Transformer,
    Shared,
};

// Re-export kprint macros for debug logging
pub use primer_core::{kprint, kprintln, kerror, kwarn, kinfo, kdebug, ktrace, greet};
pub use primer_core::kprint::{LogLevel, init as init_logging, set_log_level, set_flush_enabled, set_time_enabled};

// Re-export env utilities
pub use primer_core::{env_get, env_get_bool, env_get_list, env_get_opt, env_get_str, env_is_set};

pub use config::PrimerConfig;
pub use lessons::{Lesson, LessonFn, LESSONS};

/// Exit code for a failed write to stdout
pub const EXIT_OUTPUT_ERROR: i32 = 1;

/// Exit code for an unknown lesson name
pub const EXIT_USAGE: i32 = 2;

/// Configure logging from the environment
pub fn init() -> PrimerConfig {
    let config = PrimerConfig::from_env();
    config.apply();
    config
}

/// Exit code for a lesson result
pub fn exit_code(result: &PrimerResult<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(PrimerError::UnknownLesson(_)) => EXIT_USAGE,
        Err(_) => EXIT_OUTPUT_ERROR,
    }
}

/// Log a failed result and exit with its code; return normally on success
pub fn exit_on_error(result: PrimerResult<()>) {
    if let Err(e) = &result {
        kerror!("{}", e);
        std::process::exit(exit_code(&result));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code(&Ok(())), 0);
        assert_eq!(exit_code(&Err(PrimerError::UnknownLesson("x".into()))), EXIT_USAGE);
        assert_eq!(
            exit_code(&Err(PrimerError::Io(std::io::ErrorKind::BrokenPipe))),
            EXIT_OUTPUT_ERROR
        );
    }
}
