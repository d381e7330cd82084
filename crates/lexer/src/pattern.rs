//! Path patterns.

use std::fmt;

use regex::Regex;

use crate::error::{ConfigurationError, Result};

/// A compiled regular expression matched against project-relative paths.
///
/// Matching is unanchored: `include/declare\.cuh` and `.*\.cuh` both match
/// `include/declare.cuh`, and so does `declare`.
#[derive(Debug, Clone)]
pub struct PathPattern {
	regex: Regex,
}

impl PathPattern {
	/// Compiles `pattern`, failing with [`ConfigurationError::InvalidPattern`].
	pub fn new(pattern: &str) -> Result<Self> {
		Regex::new(pattern)
			.map(|regex| Self { regex })
			.map_err(|source| ConfigurationError::InvalidPattern {
				pattern: pattern.to_string(),
				source,
			})
	}

	/// Returns the pattern as written.
	pub fn as_str(&self) -> &str {
		self.regex.as_str()
	}

	/// Returns true if the pattern matches anywhere in `path`.
	#[inline]
	pub fn is_match(&self, path: &str) -> bool {
		self.regex.is_match(path)
	}
}

impl fmt::Display for PathPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
