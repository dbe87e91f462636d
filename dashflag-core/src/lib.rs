//! A small command line flag parser.
//!
//! Callers own their [`Flag`] descriptors, register them with a
//! [`FlagRegistry`] under a long name (`--verbose`), a short name (`-v`) or
//! both, then parse the process arguments once. Parsed values are read back
//! from the descriptors.
//!
//! ```
//! use dashflag_core::{Flag, FlagKind, FlagRegistry};
//!
//! let mut verbose = Flag::default();
//! let mut message = Flag::default();
//!
//! let mut registry = FlagRegistry::new();
//! registry.add_flag(&mut verbose, Some("verbose"), Some('v'), FlagKind::Bool);
//! registry.add_flag(&mut message, None, Some('m'), FlagKind::String);
//! registry.parse(&["prog", "--verbose", "-m", "Hello, World!"]).unwrap();
//!
//! assert!(verbose.as_bool());
//! assert_eq!(message.as_str(), Some("Hello, World!"));
//! ```

mod error;
mod flag;
mod options;
mod parser;
mod registry;
mod token;

// Re-export core types
pub use error::{FlagError, Result};
pub use flag::{Flag, FlagKind, FlagValue};
pub use options::{ParseOptions, UnknownFlagPolicy};
pub use registry::FlagRegistry;
pub use token::Token;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
