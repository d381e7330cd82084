//! Documented file records.

use lexmap_lexer::LexerConfig;

/// A source file documented by Doxygen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
	/// Forward-slash, project-relative path (e.g., `include/declare.hpp`).
	pub location: String,
	/// Language Doxygen parsed the file as (e.g., `C++`).
	pub language: String,
	/// Listing artifact path, relative to the output root.
	pub program_file: String,
}

impl FileRecord {
	/// Creates a record, deriving the listing file name from `location`.
	///
	/// Backslashes in `location` are normalized to forward slashes.
	pub fn new(location: impl Into<String>, language: impl Into<String>) -> Self {
		let location = location.into().replace('\\', "/");
		let program_file = format!("{}.rst", Self::listing_name(&location));
		Self {
			location,
			language: language.into(),
			program_file,
		}
	}

	/// Resolves the lexer this file's listing is rendered with.
	pub fn lexer<'c>(&self, config: &'c LexerConfig) -> &'c str {
		config.lexer_for(&self.location, &self.language)
	}

	/// Returns the final path component.
	pub fn name(&self) -> &str {
		self.location.rsplit('/').next().unwrap_or(&self.location)
	}

	/// Reference label of the file's documentation page.
	pub fn link_name(&self) -> String {
		format!("file_{}", mangle(&self.location))
	}

	/// Reference label of the file's program listing.
	pub fn listing_link_name(&self) -> String {
		Self::listing_name(&self.location)
	}

	fn listing_name(location: &str) -> String {
		format!("program_listing_file_{}", mangle(location))
	}
}

fn mangle(location: &str) -> String {
	location
		.chars()
		.map(|c| match c {
			'/' | '.' | ' ' => '_',
			c => c,
		})
		.collect()
}

/// The documented files of one project, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct Project {
	files: Vec<FileRecord>,
}

impl Project {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a file. A record with the same location replaces the old one.
	pub fn insert(&mut self, record: FileRecord) {
		match self.files.iter_mut().find(|f| f.location == record.location) {
			Some(existing) => *existing = record,
			None => self.files.push(record),
		}
	}

	pub fn file(&self, location: &str) -> Option<&FileRecord> {
		self.files.iter().find(|f| f.location == location)
	}

	/// Like [`Project::file`], but a missing location is an error.
	pub fn require(&self, location: &str) -> crate::Result<&FileRecord> {
		self.file(location).ok_or_else(|| crate::ListingError::UnknownFile {
			location: location.to_string(),
		})
	}

	pub fn files(&self) -> &[FileRecord] {
		&self.files
	}

	pub fn len(&self) -> usize {
		self.files.len()
	}

	pub fn is_empty(&self) -> bool {
		self.files.is_empty()
	}
}

impl FromIterator<FileRecord> for Project {
	fn from_iter<I: IntoIterator<Item = FileRecord>>(iter: I) -> Self {
		let mut project = Self::new();
		for record in iter {
			project.insert(record);
		}
		project
	}
}
