//! Ordered lexer overrides.
//!
//! A [`LexerMapping`] is built once from configuration and then queried for
//! every file of a documentation build. Declaration order is the only
//! tie-break: when several patterns match a path, the earliest one wins.

use std::fmt;
use std::ops::Deref;

use tracing::{debug, trace};

use crate::error::{ConfigurationError, Result};
use crate::pattern::PathPattern;

/// A non-empty lexer identifier (e.g., "cpp", "cuda", "fortran").
///
/// Names are opaque: nothing here checks them against a lexer registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LexerName(pub(crate) String);

impl LexerName {
	/// Creates a lexer name, returning `None` if `name` is empty.
	pub fn new(name: impl Into<String>) -> Option<Self> {
		let name = name.into();
		(!name.is_empty()).then_some(Self(name))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Deref for LexerName {
	type Target = str;

	fn deref(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for LexerName {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl PartialEq<str> for LexerName {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for LexerName {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

impl fmt::Display for LexerName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// A single pattern-to-lexer rule.
#[derive(Debug, Clone)]
pub struct LexerOverride {
	pub pattern: PathPattern,
	pub lexer: LexerName,
}

/// Ordered, immutable set of lexer overrides.
#[derive(Debug, Clone, Default)]
pub struct LexerMapping {
	overrides: Vec<LexerOverride>,
}

impl LexerMapping {
	/// Creates an empty mapping; every path resolves to its default.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a mapping from `(pattern, lexer)` pairs in iteration order.
	///
	/// Every pattern is compiled up front. The first pattern that fails to
	/// compile, or the first empty lexer name, aborts construction.
	pub fn from_pairs<I, P, L>(pairs: I) -> Result<Self>
	where
		I: IntoIterator<Item = (P, L)>,
		P: AsRef<str>,
		L: Into<String>,
	{
		let overrides = pairs
			.into_iter()
			.map(|(pattern, lexer)| compile_override(pattern.as_ref(), lexer.into()))
			.collect::<Result<Vec<_>>>()?;

		debug!(count = overrides.len(), "compiled lexer overrides");
		Ok(Self { overrides })
	}

	/// Returns the lexer of the first override whose pattern matches `path`,
	/// or `default` when none does.
	///
	/// `path` is expected to be a forward-slash, project-relative path.
	pub fn resolve<'a>(&'a self, path: &str, default: &'a str) -> &'a str {
		match self.find(path) {
			Some(rule) => {
				trace!(path, pattern = %rule.pattern, lexer = %rule.lexer, "lexer override matched");
				rule.lexer.as_str()
			}
			None => {
				trace!(path, lexer = default, "no lexer override matched");
				default
			}
		}
	}

	/// Returns the first override matching `path`.
	pub fn find(&self, path: &str) -> Option<&LexerOverride> {
		self.overrides.iter().find(|rule| rule.pattern.is_match(path))
	}

	/// Returns the overrides in declaration order.
	pub fn overrides(&self) -> &[LexerOverride] {
		&self.overrides
	}

	pub fn len(&self) -> usize {
		self.overrides.len()
	}

	pub fn is_empty(&self) -> bool {
		self.overrides.is_empty()
	}
}

/// Resolves the lexer for `path`. See [`LexerMapping::resolve`].
pub fn resolve<'a>(path: &str, overrides: &'a LexerMapping, default: &'a str) -> &'a str {
	overrides.resolve(path, default)
}

fn compile_override(pattern: &str, lexer: String) -> Result<LexerOverride> {
	let compiled = PathPattern::new(pattern)?;
	let lexer = LexerName::new(lexer).ok_or_else(|| ConfigurationError::EmptyLexer {
		pattern: pattern.to_string(),
	})?;
	Ok(LexerOverride {
		pattern: compiled,
		lexer,
	})
}
