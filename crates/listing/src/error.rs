//! Error types for listing generation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading sources or writing listings.
#[derive(Debug, Error)]
pub enum ListingError {
	/// Error reading a source file or writing a listing.
	#[error("I/O error on {path}: {error}")]
	Io {
		/// Path to the file that failed.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// A location was requested that the project does not document.
	#[error("could not find {location} in the documented files")]
	UnknownFile {
		/// Project-relative location that was looked up.
		location: String,
	},
}

impl ListingError {
	pub(crate) fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
		Self::Io {
			path: path.into(),
			error,
		}
	}
}

/// Result type for listing operations.
pub type Result<T> = std::result::Result<T, ListingError>;
