//! Error types for lexer override configuration.

use thiserror::Error;

/// Errors raised while building a lexer override table.
///
/// These surface when the table is constructed, never when a path is
/// resolved against it.
#[derive(Debug, Error)]
pub enum ConfigurationError {
	/// A path pattern did not compile as a regular expression.
	#[error("lexer mapping key [{pattern}] is not a valid regular expression: {source}")]
	InvalidPattern {
		/// The pattern as written in the configuration.
		pattern: String,
		/// The underlying regex compilation error.
		#[source]
		source: regex::Error,
	},

	/// A pattern was mapped to an empty lexer name.
	#[error("lexer mapping key [{pattern}] maps to an empty lexer name")]
	EmptyLexer {
		/// The pattern as written in the configuration.
		pattern: String,
	},
}

/// Result type for override table construction.
pub type Result<T> = std::result::Result<T, ConfigurationError>;
