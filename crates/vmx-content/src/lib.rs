//! Layout-preserving parsing and editing of VMX dictionary files
//!
//! A VMX file is a list of `KEY = "VALUE"` lines mixed with blank lines,
//! `#` comments and trailing inline comments. [`Document`] keeps every line
//! it does not touch byte-for-byte and rewrites the ones it does in the
//! canonical quoted form.

pub mod assignment;
pub mod diff;
pub mod document;
pub mod error;
pub mod escape;
pub mod line;

pub use assignment::parse_assignment;
pub use diff::LineChange;
pub use document::Document;
pub use error::{Error, Result};
pub use line::{Entry, InlineComment, Line, LineKind};
