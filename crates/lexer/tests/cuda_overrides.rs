#![allow(unused_crate_dependencies)]

use lexmap_lexer::{ConfigurationError, LexerConfig, LexerMapping, LoadError, resolve};

const HPP: &str = "include/declare.hpp";
const CUH: &str = "include/declare.cuh";

#[test]
fn no_overrides_keep_doxygen_language() {
	let config = LexerConfig::default();
	assert_eq!(config.lexer_for(HPP, "C++"), "cpp");
	assert_eq!(config.lexer_for(CUH, "C++"), "cpp");
}

#[test]
fn broad_and_narrow_patterns_agree() {
	for pattern in [r".*\.cuh", r"include/declare\.cuh"] {
		let mapping = LexerMapping::from_pairs([(pattern, "cuda")]).unwrap();
		assert_eq!(resolve(CUH, &mapping, "cpp"), "cuda", "pattern {pattern}");
		assert_eq!(resolve(HPP, &mapping, "cpp"), "cpp", "pattern {pattern}");
	}
}

#[test]
fn earlier_pattern_takes_precedence() {
	let mapping = LexerMapping::from_pairs([(r"declare", "fortran"), (r"\.cuh$", "cuda")]).unwrap();
	assert_eq!(resolve(CUH, &mapping, "cpp"), "fortran");
}

#[test]
fn invalid_pattern_is_a_load_error() {
	let err = LexerConfig::from_toml_str("[lexer-mapping]\n'*\\.cuh' = \"cuda\"\n").unwrap_err();
	assert!(matches!(err, LoadError::Configuration(ConfigurationError::InvalidPattern { .. })));
}
