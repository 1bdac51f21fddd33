//! # primer-core
//!
//! Building blocks for the primer lessons, plus the logging, environment
//! and error plumbing the lesson binaries share.
//!
//! ## Modules
//!
//! - `transform` - `Transformer` trait with reversing and uppercasing variants
//! - `seq` - Append-and-reassign growth and checked `[start, end)` views
//! - `person` - By-value and by-reference receivers
//! - `greeting` - Multiple returns, function arguments, variadic messages
//! - `record` - Two-field record with a canonical rendering
//! - `alias` - References and shared cells over one piece of storage
//! - `error` - Error types
//! - `kprint` - Kernel-style stderr logging macros
//! - `env` - Environment variable utilities

pub mod transform;
pub mod seq;
pub mod person;
pub mod greeting;
pub mod record;
pub mod alias;
pub mod error;
pub mod kprint;
pub mod env;

// Re-exports for convenience
pub use transform::{transform_data, Reverser, Transformer, Uppercaser};
pub use seq::{append, slice, try_slice};
pub use person::Person;
pub use greeting::{create_greeting, create_greetings, exclaimed_greeting, greet_each, plain_greeting};
pub use record::Record;
pub use alias::{address_of, write_through, Shared};
pub use error::{PrimerError, PrimerResult, SliceError, SliceResult};
pub use env::{env_get, env_get_bool, env_get_list, env_get_opt, env_get_str, env_is_set};
