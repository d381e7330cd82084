//! Lexer resolution for program listings.
//!
//! Every documented source file is rendered as a program listing whose body
//! sits under a `.. code-block:: <lexer>` directive. This crate decides which
//! lexer that directive names.
//!
//! # Architecture
//!
//! * [`pattern`]: Validated path regular expressions
//! * [`mapping`]: Ordered pattern-to-lexer overrides and the resolution rule
//! * [`language`]: Default lexers derived from Doxygen's language classification
//! * [`config`]: Loading the override table from TOML
//!
//! # Resolution
//!
//! Overrides are tried in declaration order and the first pattern found
//! anywhere in the project-relative path wins. When nothing matches, the
//! caller-supplied default applies:
//!
//! ```
//! use lexmap_lexer::LexerMapping;
//!
//! let mapping = LexerMapping::from_pairs([(r"include/declare\.cuh", "cuda")])?;
//! assert_eq!(mapping.resolve("include/declare.cuh", "cpp"), "cuda");
//! assert_eq!(mapping.resolve("include/declare.hpp", "cpp"), "cpp");
//! # Ok::<(), lexmap_lexer::ConfigurationError>(())
//! ```

pub mod config;
pub mod error;
pub mod language;
pub mod mapping;
pub mod pattern;

pub use config::{LexerConfig, LoadError};
pub use error::{ConfigurationError, Result};
pub use language::{FALLBACK_LEXER, lexer_for_language};
pub use mapping::{LexerMapping, LexerName, LexerOverride, resolve};
pub use pattern::PathPattern;
