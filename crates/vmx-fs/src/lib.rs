//! Filesystem access for vmxtool
//!
//! Whole-file reads that treat a missing file as "no content yet", and
//! replace-on-write saves that never leave a truncated target behind.

pub mod error;
pub mod io;

pub use error::{Error, Result};
pub use io::{read_text_if_exists, write_atomic, write_text};
