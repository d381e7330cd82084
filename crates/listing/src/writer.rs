//! Writing program listings to disk.

use std::fs;
use std::path::{Path, PathBuf};

use lexmap_lexer::LexerConfig;
use tracing::{debug, info};

use crate::error::{ListingError, Result};
use crate::record::{FileRecord, Project};
use crate::render::render_listing;

/// Writes program listings for documented files.
///
/// Sources are read from `source_root` joined with each record's location;
/// listings land in `output_root` joined with each record's `program_file`.
#[derive(Debug)]
pub struct ListingWriter<'a> {
	config: &'a LexerConfig,
	source_root: PathBuf,
	output_root: PathBuf,
}

impl<'a> ListingWriter<'a> {
	pub fn new(config: &'a LexerConfig, source_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
		Self {
			config,
			source_root: source_root.into(),
			output_root: output_root.into(),
		}
	}

	pub fn output_root(&self) -> &Path {
		&self.output_root
	}

	/// Writes the listing for a single record and returns its path.
	pub fn write(&self, record: &FileRecord) -> Result<PathBuf> {
		let source_path = self.source_root.join(&record.location);
		let source = fs::read_to_string(&source_path).map_err(|e| ListingError::io(&source_path, e))?;

		let lexer = record.lexer(self.config);
		let text = render_listing(record, lexer, &source);

		fs::create_dir_all(&self.output_root).map_err(|e| ListingError::io(&self.output_root, e))?;
		let listing_path = self.output_root.join(&record.program_file);
		fs::write(&listing_path, text).map_err(|e| ListingError::io(&listing_path, e))?;

		debug!(location = %record.location, lexer, path = %listing_path.display(), "wrote program listing");
		Ok(listing_path)
	}

	/// Writes listings for every file of `project`, stopping at the first error.
	pub fn write_all(&self, project: &Project) -> Result<Vec<PathBuf>> {
		let written = project
			.files()
			.iter()
			.map(|record| self.write(record))
			.collect::<Result<Vec<_>>>()?;

		info!(count = written.len(), root = %self.output_root.display(), "program listings written");
		Ok(written)
	}
}
