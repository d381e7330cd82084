//! Program listings.
//!
//! A program listing is a reStructuredText page holding one source file's
//! text under a `.. code-block:: <lexer>` directive. This crate models the
//! files a Doxygen run documents, writes their listings with lexers resolved
//! through [`lexmap_lexer::LexerConfig`], and checks existing listings
//! against expected lexers.
//!
//! * [`record`]: File records and the project they belong to
//! * [`render`]: Listing text generation and annotation parsing
//! * [`writer`]: Writing listings for a project to disk
//! * [`verify`]: Comparing written listings with expected lexers

pub mod error;
pub mod record;
pub mod render;
pub mod verify;
pub mod writer;

pub use error::{ListingError, Result};
pub use record::{FileRecord, Project};
pub use render::{CODE_BLOCK_DIRECTIVE, read_lexer, render_listing};
pub use verify::{ListingCheck, ListingFailure, VerifyReport, verify_listings};
pub use writer::ListingWriter;
