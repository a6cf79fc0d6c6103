//! Line classification
//!
//! Every physical line of a VMX file becomes a [`Line`]. Classification never
//! fails: anything that does not look like an assignment is kept as an opaque
//! comment so it can be written back untouched.

use std::borrow::Cow;

use crate::escape::{find_closing_quote, quote, unescape};

/// One physical line, without its line terminator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Text exactly as read (or as last synthesized by an edit)
    raw: String,
    kind: LineKind,
}

/// What a line turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace only
    Blank,
    /// A `#` comment, or a line that could not be read as an assignment
    Comment,
    /// A `KEY = VALUE` assignment
    Entry(Entry),
}

/// A parsed key/value assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: String,
    value: String,
    comment: Option<InlineComment>,
}

/// A `# ...` comment trailing a value on the same line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineComment {
    /// Exact text between the end of the value and the `#`
    pub gap: String,
    /// Comment text, starting with `#`
    pub text: String,
}

impl Line {
    /// Classify a single line of text.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let kind = if trimmed.is_empty() {
            LineKind::Blank
        } else if trimmed.starts_with('#') {
            LineKind::Comment
        } else {
            match parse_assignment_line(trimmed) {
                Some(entry) => LineKind::Entry(entry),
                None => LineKind::Comment,
            }
        };

        Self {
            raw: raw.to_string(),
            kind,
        }
    }

    /// Build a new assignment line in canonical `key = "value"` form.
    pub fn entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let entry = Entry {
            key: key.into(),
            value: value.into(),
            comment: None,
        };
        Self {
            raw: entry.canonical(&entry.key),
            kind: LineKind::Entry(entry),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> &LineKind {
        &self.kind
    }

    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, LineKind::Comment)
    }

    pub fn as_entry(&self) -> Option<&Entry> {
        match &self.kind {
            LineKind::Entry(entry) => Some(entry),
            _ => None,
        }
    }

    /// Replace the value of an assignment line.
    ///
    /// `raw` is resynthesized from the stored key, so any indentation or
    /// alignment before `=` is dropped; an inline comment is kept with its
    /// original spacing. Returns `false` (and does nothing) for non-entries.
    pub fn set_value(&mut self, value: impl Into<String>) -> bool {
        let LineKind::Entry(entry) = &mut self.kind else {
            return false;
        };
        entry.value = value.into();
        self.raw = entry.canonical(&entry.key);
        true
    }

    /// Text to write back for this line.
    ///
    /// Blank lines become empty and comments come back verbatim. Entries
    /// keep whatever preceded `=` in `raw` (minus trailing spaces and tabs),
    /// then ` = `, the re-quoted value and any inline comment.
    pub fn render(&self) -> Cow<'_, str> {
        match &self.kind {
            LineKind::Blank => Cow::Borrowed(""),
            LineKind::Comment => Cow::Borrowed(&self.raw),
            LineKind::Entry(entry) => {
                let key_part = match self.raw.split_once('=') {
                    Some((left, _)) => left.trim_end_matches([' ', '\t']),
                    None => entry.key.as_str(),
                };
                Cow::Owned(entry.canonical(key_part))
            }
        }
    }
}

impl Entry {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The unescaped value
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn comment(&self) -> Option<&InlineComment> {
        self.comment.as_ref()
    }

    /// Case-insensitive key comparison.
    pub fn matches_key(&self, key: &str) -> bool {
        eq_ignore_case(&self.key, key)
    }

    fn canonical(&self, key_part: &str) -> String {
        let mut line = format!("{} = {}", key_part, quote(&self.value));
        if let Some(comment) = &self.comment {
            line.push_str(&comment.gap);
            line.push_str(&comment.text);
        }
        line
    }
}

pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Split an already trimmed, non-comment line into key, value and comment.
fn parse_assignment_line(trimmed: &str) -> Option<Entry> {
    let (left, right) = trimmed.split_once('=')?;
    let key = left.trim();
    if key.is_empty() {
        return None;
    }

    let rest = right.trim();
    let (value, comment) = if rest.starts_with('"') {
        parse_quoted(rest)
    } else {
        parse_unquoted(rest)
    };

    Some(Entry {
        key: key.to_string(),
        value,
        comment,
    })
}

fn parse_quoted(rest: &str) -> (String, Option<InlineComment>) {
    let Some(end) = find_closing_quote(rest, 1) else {
        // Unterminated: keep everything, quote included
        return (rest.to_string(), None);
    };

    let value = unescape(&rest[1..end]);
    let after = &rest[end + 1..];
    let comment = after.find('#').map(|pos| InlineComment {
        gap: after[..pos].to_string(),
        text: after[pos..].to_string(),
    });

    (value, comment)
}

fn parse_unquoted(rest: &str) -> (String, Option<InlineComment>) {
    let Some(pos) = rest.find('#') else {
        return (rest.to_string(), None);
    };

    let before = &rest[..pos];
    let value = before.trim_end();
    let comment = InlineComment {
        gap: before[value.len()..].to_string(),
        text: rest[pos..].to_string(),
    };

    (value.to_string(), Some(comment))
}
