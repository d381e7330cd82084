//! Lexer configuration loading from TOML.
//!
//! # Format
//!
//! ```toml
//! # Lexer for files whose language has no known highlighter.
//! fallback-lexer = "none"
//!
//! # Tried top to bottom; the first pattern found in the path wins.
//! [lexer-mapping]
//! 'include/declare\.cuh' = "cuda"
//! '.*\.f90' = "fortran"
//! ```
//!
//! Keys are regular expressions, so literal TOML keys (single quotes) avoid
//! double escaping. Both entries are optional; an empty document yields an
//! empty override set.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::error::ConfigurationError;
use crate::language::{FALLBACK_LEXER, lexer_for_language};
use crate::mapping::{LexerMapping, LexerName};

/// Errors from loading a lexer configuration file.
#[derive(Debug, Error)]
pub enum LoadError {
	/// Error reading the configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// TOML syntax error or unexpected value types.
	#[error("failed to parse TOML: {0}")]
	Toml(#[from] toml::de::Error),

	/// The override table itself is invalid.
	#[error(transparent)]
	Configuration(#[from] ConfigurationError),

	/// `fallback-lexer` was set to an empty string.
	#[error("fallback-lexer must not be empty")]
	EmptyFallback,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawLexerConfig {
	#[serde(default)]
	fallback_lexer: Option<String>,
	#[serde(default)]
	lexer_mapping: IndexMap<String, String>,
}

/// Validated lexer configuration for one documentation build.
#[derive(Debug, Clone)]
pub struct LexerConfig {
	mapping: LexerMapping,
	fallback: LexerName,
}

impl Default for LexerConfig {
	fn default() -> Self {
		Self::new(LexerMapping::default())
	}
}

impl LexerConfig {
	pub fn new(mapping: LexerMapping) -> Self {
		Self {
			mapping,
			fallback: LexerName(FALLBACK_LEXER.to_string()),
		}
	}

	/// Replaces the lexer used for unrecognized languages.
	pub fn with_fallback(mut self, fallback: LexerName) -> Self {
		self.fallback = fallback;
		self
	}

	/// Parses and validates a configuration from a TOML string.
	pub fn from_toml_str(input: &str) -> Result<Self, LoadError> {
		let raw: RawLexerConfig = toml::from_str(input)?;
		let mapping = LexerMapping::from_pairs(raw.lexer_mapping)?;

		let mut config = Self::new(mapping);
		if let Some(fallback) = raw.fallback_lexer {
			config.fallback = LexerName::new(fallback).ok_or(LoadError::EmptyFallback)?;
		}
		Ok(config)
	}

	/// Reads and validates a configuration file.
	pub fn load(path: &Path) -> Result<Self, LoadError> {
		let input = std::fs::read_to_string(path).map_err(|error| LoadError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml_str(&input)?;
		debug!(path = %path.display(), overrides = config.mapping.len(), "loaded lexer config");
		Ok(config)
	}

	pub fn mapping(&self) -> &LexerMapping {
		&self.mapping
	}

	pub fn fallback_lexer(&self) -> &str {
		&self.fallback
	}

	/// Returns the default lexer for a file Doxygen classified as `language`.
	pub fn default_lexer_for(&self, language: &str) -> &str {
		lexer_for_language(language).unwrap_or(self.fallback.as_str())
	}

	/// Resolves the lexer for `path`: overrides first, then the language default.
	pub fn lexer_for(&self, path: &str, language: &str) -> &str {
		self.mapping.resolve(path, self.default_lexer_for(language))
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn test_empty_document() {
		let config = LexerConfig::from_toml_str("").unwrap();
		assert!(config.mapping().is_empty());
		assert_eq!(config.fallback_lexer(), "none");
	}

	#[test]
	fn test_declaration_order_preserved() {
		let config = LexerConfig::from_toml_str(
			r#"
			[lexer-mapping]
			'include/.*' = "fortran"
			'.*\.cuh' = "cuda"
			'^src/' = "c"
			"#,
		)
		.unwrap();

		let patterns: Vec<_> = config.mapping().overrides().iter().map(|rule| rule.pattern.as_str()).collect();
		assert_eq!(patterns, vec!["include/.*", r".*\.cuh", "^src/"]);
		assert_eq!(config.lexer_for("include/declare.cuh", "C++"), "fortran");
	}

	#[test]
	fn test_lexer_for_falls_back_to_language() {
		let config = LexerConfig::from_toml_str(
			r#"
			[lexer-mapping]
			'include/declare\.cuh' = "cuda"
			"#,
		)
		.unwrap();

		assert_eq!(config.lexer_for("include/declare.cuh", "C++"), "cuda");
		assert_eq!(config.lexer_for("include/declare.hpp", "C++"), "cpp");
		assert_eq!(config.lexer_for("README", "Unknown"), "none");
	}

	#[test]
	fn test_custom_fallback() {
		let config = LexerConfig::from_toml_str(r#"fallback-lexer = "text""#).unwrap();
		assert_eq!(config.default_lexer_for("Unknown"), "text");
		assert_eq!(config.default_lexer_for("C"), "c");
	}

	#[test]
	fn test_empty_fallback_rejected() {
		let err = LexerConfig::from_toml_str(r#"fallback-lexer = """#).unwrap_err();
		assert!(matches!(err, LoadError::EmptyFallback));
	}

	#[test]
	fn test_bad_regex_rejected_on_load() {
		let err = LexerConfig::from_toml_str(
			r#"
			[lexer-mapping]
			'*\.cuh' = "cuda"
			"#,
		)
		.unwrap_err();
		assert!(matches!(err, LoadError::Configuration(ConfigurationError::InvalidPattern { .. })));
		assert!(err.to_string().contains(r"[*\.cuh]"));
	}

	#[test]
	fn test_non_string_lexer_rejected() {
		let err = LexerConfig::from_toml_str("[lexer-mapping]\n'x' = 3\n").unwrap_err();
		assert!(matches!(err, LoadError::Toml(_)));
	}

	#[test]
	fn test_unknown_key_rejected() {
		let err = LexerConfig::from_toml_str("lexer-mappings = {}\n").unwrap_err();
		assert!(matches!(err, LoadError::Toml(_)));
	}

	#[test]
	fn test_load_from_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("lexers.toml");
		std::fs::write(&path, "[lexer-mapping]\n'.*\\.cuh' = \"cuda\"\n").unwrap();

		let config = LexerConfig::load(&path).unwrap();
		assert_eq!(config.lexer_for("include/declare.cuh", "C++"), "cuda");
	}

	#[test]
	fn test_load_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("missing.toml");

		let err = LexerConfig::load(&path).unwrap_err();
		assert!(matches!(err, LoadError::Io { path: ref p, .. } if p == &path));
	}
}
