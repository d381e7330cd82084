//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Default Doxygen language assumed for paths given on the command line.
pub const DEFAULT_LANGUAGE: &str = "C++";

#[derive(Parser, Debug)]
#[command(name = "lexmap")]
#[command(about = "Resolve, render and check program listing lexers")]
#[command(version)]
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Print the lexer each path resolves to
	Resolve {
		#[command(flatten)]
		lexers: LexerArgs,

		/// Project-relative paths
		#[arg(required = true)]
		paths: Vec<String>,
	},

	/// Write program listings for project files
	Render {
		#[command(flatten)]
		lexers: LexerArgs,

		/// Project root the paths are relative to
		#[arg(short, long, value_name = "DIR")]
		project: PathBuf,

		/// Directory the listings are written to
		#[arg(short, long, value_name = "DIR")]
		out: PathBuf,

		/// Project-relative paths
		#[arg(required = true)]
		paths: Vec<String>,
	},

	/// Check written listings against expected lexers
	Check {
		/// Directory holding the listings
		#[arg(short, long, value_name = "DIR")]
		root: PathBuf,

		/// Expectations as LOCATION=LEXER
		#[arg(required = true, value_parser = parse_expectation)]
		expect: Vec<(String, String)>,
	},
}

#[derive(Args, Debug)]
pub struct LexerArgs {
	/// Lexer configuration file (TOML)
	#[arg(short, long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// Doxygen language of the given paths
	#[arg(short, long, default_value = DEFAULT_LANGUAGE)]
	pub language: String,
}

fn parse_expectation(arg: &str) -> Result<(String, String), String> {
	match arg.rsplit_once('=') {
		Some((location, lexer)) if !location.is_empty() && !lexer.is_empty() => {
			Ok((location.to_string(), lexer.to_string()))
		}
		_ => Err(format!("expected LOCATION=LEXER, got '{arg}'")),
	}
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn test_cli_definition() {
		Cli::command().debug_assert();
	}

	#[test]
	fn test_parse_expectation() {
		assert_eq!(
			parse_expectation("include/declare.cuh=cuda"),
			Ok(("include/declare.cuh".to_string(), "cuda".to_string()))
		);
		assert!(parse_expectation("include/declare.cuh").is_err());
		assert!(parse_expectation("=cuda").is_err());
		assert!(parse_expectation("include/declare.cuh=").is_err());
	}

	#[test]
	fn test_resolve_defaults() {
		let cli = Cli::parse_from(["lexmap", "resolve", "include/declare.hpp"]);
		match cli.command {
			Command::Resolve { lexers, paths } => {
				assert!(lexers.config.is_none());
				assert_eq!(lexers.language, "C++");
				assert_eq!(paths, vec!["include/declare.hpp"]);
			}
			other => panic!("unexpected command: {other:?}"),
		}
	}
}
