//! The in-memory dictionary document

use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};
use crate::line::{Entry, Line};

/// An ordered list of classified lines
///
/// Keys are compared case-insensitively and the first matching entry wins.
/// Lookups are a linear scan; files are at most a few hundred lines.
#[derive(Debug, Clone, Default)]
pub struct Document {
    lines: Vec<Line>,
    modified: bool,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify every line of `source`.
    ///
    /// Lines are split on `\n`; a trailing `\r` is dropped.
    pub fn parse(source: &str) -> Self {
        Self {
            lines: source.lines().map(Line::parse).collect(),
            modified: false,
        }
    }

    /// Load a document from disk.
    ///
    /// A file that does not exist yields an empty document so that `add`
    /// and `set` can create it on save.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let doc = match vmx_fs::read_text_if_exists(path)? {
            Some(source) => Self::parse(&source),
            None => Self::new(),
        };

        tracing::debug!(
            path = %path.display(),
            lines = doc.lines.len(),
            entries = doc.entries().count(),
            "loaded document"
        );
        Ok(doc)
    }

    /// Write the rendered document to `path`, replacing its contents.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        vmx_fs::write_text(path, &self.render())?;
        tracing::debug!(path = %path.display(), lines = self.lines.len(), "saved document");
        Ok(())
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All assignment entries in file order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.lines.iter().filter_map(Line::as_entry)
    }

    /// True once an add, set or remove has changed a line
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.as_entry().is_some_and(|e| e.matches_key(key)))
    }

    /// First entry whose key matches `key` ignoring case.
    pub fn find(&self, key: &str) -> Option<&Entry> {
        self.position(key).and_then(|idx| self.lines[idx].as_entry())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Value stored for `key`.
    pub fn query(&self, key: &str) -> Result<&str> {
        self.find(key)
            .map(Entry::value)
            .ok_or_else(|| Error::key_not_found(key))
    }

    /// Append a new entry.
    ///
    /// Fails with [`Error::DuplicateKey`] if the key already exists in any
    /// case, and with [`Error::InvalidInput`] for an empty key.
    pub fn add(&mut self, key: &str, value: &str) -> Result<()> {
        if key.trim().is_empty() {
            return Err(Error::invalid_input(key, "key cannot be empty"));
        }
        if let Some(existing) = self.find(key) {
            return Err(Error::DuplicateKey {
                key: key.to_string(),
                existing: existing.key().to_string(),
            });
        }

        self.lines.push(Line::entry(key, value));
        self.modified = true;
        tracing::debug!(key, "added entry");
        Ok(())
    }

    /// Update the value of an existing entry, or append a new one.
    ///
    /// An existing entry keeps its stored key spelling and inline comment.
    /// If the updated line renders exactly as before, the document does not
    /// count as modified. An empty key matches nothing and is ignored.
    pub fn set(&mut self, key: &str, value: &str) {
        if key.trim().is_empty() {
            tracing::debug!("ignoring set with empty key");
            return;
        }

        match self.position(key) {
            Some(idx) => {
                let line = &mut self.lines[idx];
                let before = line.render().into_owned();
                line.set_value(value);
                if line.render() == before {
                    tracing::debug!(key, line = idx + 1, "entry unchanged");
                    return;
                }
                tracing::debug!(key, line = idx + 1, "updated entry");
            }
            None => {
                self.lines.push(Line::entry(key, value));
                tracing::debug!(key, "added entry");
            }
        }
        self.modified = true;
    }

    /// Delete the entry for `key`. Other lines keep their order.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        let idx = self.position(key).ok_or_else(|| Error::key_not_found(key))?;
        self.lines.remove(idx);
        self.modified = true;
        tracing::debug!(key, line = idx + 1, "removed entry");
        Ok(())
    }

    /// Each output line, without terminators
    pub fn rendered_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lines.iter().map(|line| line.render().into_owned())
    }

    /// Full file text. Every line, including the last, ends in `\n`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.render());
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.render())?;
        }
        Ok(())
    }
}
