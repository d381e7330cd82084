//! Default lexers from Doxygen's language classification.
//!
//! Doxygen tags every file compound with the language it parsed it as
//! (`language="C++"` in the XML). That classification, not the file
//! extension, decides the default lexer: a `.cuh` header parsed through
//! `EXTENSION_MAPPING = cuh=c++` is reported as `C++` and so defaults to
//! `cpp`.

/// Lexer used when the language is unknown or has no highlighter.
pub const FALLBACK_LEXER: &str = "none";

/// Returns the lexer for a Doxygen language name, if one is known.
pub fn lexer_for_language(language: &str) -> Option<&'static str> {
	let lexer = match language.trim() {
		"IDL" => "idl",
		"Java" => "java",
		"JavaScript" | "Javascript" => "js",
		"C#" => "csharp",
		"C" => "c",
		"C++" => "cpp",
		"D" => "d",
		"PHP" => "php",
		"Objective-C" => "objective-c",
		"Python" => "py",
		"Fortran" | "FortranFree" => "fortran",
		"FortranFixed" => "fortranfixed",
		"VHDL" => "vhdl",
		"Verilog" => "verilog",
		"Slice" => "slice",
		"Markdown" => "markdown",
		"XML" => "xml",
		"SQL" => "sql",
		"Tcl" => "tcl",
		_ => return None,
	};
	Some(lexer)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_common_languages() {
		assert_eq!(lexer_for_language("C++"), Some("cpp"));
		assert_eq!(lexer_for_language("C"), Some("c"));
		assert_eq!(lexer_for_language("Python"), Some("py"));
		assert_eq!(lexer_for_language("FortranFixed"), Some("fortranfixed"));
		assert_eq!(lexer_for_language("FortranFree"), Some("fortran"));
	}

	#[test]
	fn test_unknown_language() {
		assert_eq!(lexer_for_language("Unknown"), None);
		assert_eq!(lexer_for_language(""), None);
		assert_eq!(lexer_for_language("c++"), None);
	}

	#[test]
	fn test_surrounding_whitespace_ignored() {
		assert_eq!(lexer_for_language(" C# "), Some("csharp"));
	}
}
