//! Checking written listings against expected lexers.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::record::FileRecord;
use crate::render::read_lexer;

/// Why a listing failed its check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingFailure {
	/// The listing file could not be read.
	Unreadable { path: PathBuf, reason: String },
	/// The listing has no `.. code-block::` line.
	Unannotated { path: PathBuf },
	/// The listing names a different lexer.
	Mismatch { expected: String, actual: String },
}

/// A failed check for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCheck {
	pub location: String,
	pub failure: ListingFailure,
}

impl fmt::Display for ListingCheck {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.failure {
			ListingFailure::Unreadable { path, reason } => {
				write!(f, "{}: cannot read {}: {reason}", self.location, path.display())
			}
			ListingFailure::Unannotated { path } => {
				write!(f, "{}: no code-block directive in {}", self.location, path.display())
			}
			ListingFailure::Mismatch { expected, actual } => {
				write!(f, "{}: expected '{expected}' but got '{actual}' language lexer.", self.location)
			}
		}
	}
}

/// Outcome of [`verify_listings`].
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
	pub checked: usize,
	pub failures: Vec<ListingCheck>,
}

impl VerifyReport {
	pub fn is_ok(&self) -> bool {
		self.failures.is_empty()
	}
}

/// Checks that each record's listing under `root` names the expected lexer.
pub fn verify_listings<'a, I>(root: &Path, expectations: I) -> VerifyReport
where
	I: IntoIterator<Item = (&'a FileRecord, &'a str)>,
{
	let mut report = VerifyReport::default();

	for (record, expected) in expectations {
		report.checked += 1;
		if let Some(failure) = check_listing(root, record, expected) {
			let check = ListingCheck {
				location: record.location.clone(),
				failure,
			};
			debug!("{check}");
			report.failures.push(check);
		}
	}

	report
}

fn check_listing(root: &Path, record: &FileRecord, expected: &str) -> Option<ListingFailure> {
	let path = root.join(&record.program_file);
	let text = match fs::read_to_string(&path) {
		Ok(text) => text,
		Err(e) => {
			return Some(ListingFailure::Unreadable {
				path,
				reason: e.to_string(),
			});
		}
	};

	match read_lexer(&text) {
		None => Some(ListingFailure::Unannotated { path }),
		Some(actual) if actual == expected => None,
		Some(actual) => Some(ListingFailure::Mismatch {
			expected: expected.to_string(),
			actual: actual.to_string(),
		}),
	}
}
