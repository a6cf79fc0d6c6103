//! Line diffs between two renderings of a document

use similar::{ChangeTag, TextDiff};

/// A line that differs between two texts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineChange {
    Added(String),
    Removed(String),
}

/// Added and removed lines going from `old` to `new`, in diff order.
pub fn line_changes(old: &str, new: &str) -> Vec<LineChange> {
    if old == new {
        return Vec::new();
    }

    TextDiff::from_lines(old, new)
        .iter_all_changes()
        .filter_map(|change| {
            let text = change.value().trim_end_matches(['\r', '\n']).to_string();
            match change.tag() {
                ChangeTag::Delete => Some(LineChange::Removed(text)),
                ChangeTag::Insert => Some(LineChange::Added(text)),
                ChangeTag::Equal => None,
            }
        })
        .collect()
}

/// Unified diff with three lines of context, or `None` when the texts match.
pub fn unified_diff(old: &str, new: &str, label: &str) -> Option<String> {
    if old == new {
        return None;
    }

    let diff = TextDiff::from_lines(old, new);
    let rendered = diff
        .unified_diff()
        .context_radius(3)
        .header(&format!("{label} (current)"), &format!("{label} (edited)"))
        .to_string();
    Some(rendered)
}
