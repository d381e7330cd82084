//! `lexmap` binary.
//!
//! Resolves listing lexers for project files, writes program listings, and
//! checks written listings against expected lexers.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use lexmap_lexer::LexerConfig;
use lexmap_listing::{FileRecord, ListingWriter, Project, verify_listings};
use tracing::{debug, info};

use crate::cli::{Cli, Command, LexerArgs};

fn main() -> ExitCode {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	match run(cli.command, &mut io::stdout().lock()) {
		Ok(code) => code,
		Err(err) => {
			eprintln!("error: {err:#}");
			ExitCode::FAILURE
		}
	}
}

/// Executes `command`, writing its report lines to `out`.
fn run(command: Command, out: &mut impl Write) -> Result<ExitCode> {
	match command {
		Command::Resolve { lexers, paths } => {
			let config = load_config(&lexers)?;
			for path in &paths {
				let record = FileRecord::new(path.as_str(), lexers.language.as_str());
				writeln!(out, "{path}\t{}", record.lexer(&config))?;
			}
		}
		Command::Render {
			lexers,
			project,
			out: out_dir,
			paths,
		} => {
			let config = load_config(&lexers)?;
			let files: Project = paths
				.iter()
				.map(|path| FileRecord::new(path.as_str(), lexers.language.as_str()))
				.collect();

			let written = ListingWriter::new(&config, &project, &out_dir)
				.write_all(&files)
				.with_context(|| format!("writing listings to {}", out_dir.display()))?;
			for path in written {
				writeln!(out, "{}", path.display())?;
			}
		}
		Command::Check { root, expect } => {
			let records: Vec<_> = expect
				.iter()
				.map(|(location, lexer)| (FileRecord::new(location.as_str(), ""), lexer.as_str()))
				.collect();
			let report = verify_listings(&root, records.iter().map(|(record, lexer)| (record, *lexer)));

			for failure in &report.failures {
				writeln!(out, "{failure}")?;
			}
			info!(checked = report.checked, failed = report.failures.len(), "listing check finished");
			if !report.is_ok() {
				return Ok(ExitCode::FAILURE);
			}
		}
	}
	Ok(ExitCode::SUCCESS)
}

fn load_config(args: &LexerArgs) -> Result<LexerConfig> {
	match &args.config {
		Some(path) => LexerConfig::load(path).with_context(|| format!("loading lexer config {}", path.display())),
		None => {
			debug!("no lexer config given, using language defaults");
			Ok(LexerConfig::default())
		}
	}
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("LEXMAP_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("lexmap=debug,lexmap_lexer=trace,lexmap_listing=debug")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.init();
}
