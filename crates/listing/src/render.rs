//! Listing text.
//!
//! A rendered listing looks like:
//!
//! ```rst
//! .. _program_listing_file_include_declare_cuh:
//!
//! Program Listing for File declare.cuh
//! ====================================
//!
//! :ref:`Return to documentation for file <file_include_declare_cuh>` (``include/declare.cuh``)
//!
//! .. code-block:: cuda
//!
//!    #pragma once
//! ```

use std::fmt::Write as _;

use crate::record::FileRecord;

/// Directive prefix that carries the lexer name.
pub const CODE_BLOCK_DIRECTIVE: &str = ".. code-block:: ";

const INDENT: &str = "   ";

/// Renders the listing page for `record` highlighted with `lexer`.
pub fn render_listing(record: &FileRecord, lexer: &str, source: &str) -> String {
	let title = format!("Program Listing for File {}", record.name());
	let mut out = String::with_capacity(source.len() + 256);

	let _ = writeln!(out, ".. _{}:\n", record.listing_link_name());
	let _ = writeln!(out, "{title}");
	let _ = writeln!(out, "{}\n", "=".repeat(title.chars().count()));
	let _ = writeln!(
		out,
		":ref:`Return to documentation for file <{}>` (``{}``)\n",
		record.link_name(),
		record.location
	);
	let _ = writeln!(out, "{CODE_BLOCK_DIRECTIVE}{lexer}\n");

	for line in source.lines() {
		if line.trim().is_empty() {
			out.push('\n');
		} else {
			out.push_str(INDENT);
			out.push_str(line);
			out.push('\n');
		}
	}
	out
}

/// Returns the lexer named by the first `.. code-block::` line in `text`.
///
/// Only lines that start with the directive count; an indented directive
/// inside the listed source does not.
pub fn read_lexer(text: &str) -> Option<&str> {
	text.lines()
		.find_map(|line| line.strip_prefix(CODE_BLOCK_DIRECTIVE))
		.map(str::trim)
		.filter(|lexer| !lexer.is_empty())
}
