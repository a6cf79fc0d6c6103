//! Commands that change a file: add, set and remove

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use vmx_content::{Document, diff, parse_assignment};

use crate::error::Result;

/// Add a new entry, failing if the key is already present.
pub fn run_add(out: &mut impl Write, file: &Path, assignment: &str, dry_run: bool) -> Result<()> {
    let (key, value) = parse_assignment(assignment)?;
    edit(out, file, dry_run, |doc| Ok(doc.add(&key, &value)?))
}

/// Set an entry, adding it when missing.
pub fn run_set(out: &mut impl Write, file: &Path, assignment: &str, dry_run: bool) -> Result<()> {
    let (key, value) = parse_assignment(assignment)?;
    edit(out, file, dry_run, |doc| {
        doc.set(&key, &value);
        Ok(())
    })
}

/// Remove an entry, failing if the key is absent.
pub fn run_remove(out: &mut impl Write, file: &Path, key: &str, dry_run: bool) -> Result<()> {
    edit(out, file, dry_run, |doc| Ok(doc.remove(key)?))
}

/// Load, apply `change`, then save or (with `dry_run`) show the diff.
///
/// A change that leaves the document unmodified does not rewrite the file.
fn edit<F>(out: &mut impl Write, file: &Path, dry_run: bool, change: F) -> Result<()>
where
    F: FnOnce(&mut Document) -> Result<()>,
{
    let mut doc = Document::load(file)?;
    let before = doc.render();

    change(&mut doc)?;
    let after = doc.render();

    for line_change in diff::line_changes(&before, &after) {
        tracing::debug!(change = ?line_change, "edit");
    }

    if dry_run {
        let label = file.display().to_string();
        match diff::unified_diff(&before, &after, &label) {
            Some(diff) => write_colored_diff(out, &diff)?,
            None => writeln!(out, "No changes")?,
        }
        return Ok(());
    }

    if !doc.is_modified() {
        tracing::debug!(path = %file.display(), "nothing changed, not saving");
        return Ok(());
    }

    doc.save(file)?;
    Ok(())
}

fn write_colored_diff(out: &mut impl Write, diff: &str) -> Result<()> {
    for line in diff.lines() {
        if line.starts_with("+++") || line.starts_with("---") {
            writeln!(out, "{}", line.bold())?;
        } else if line.starts_with('+') {
            writeln!(out, "{}", line.green())?;
        } else if line.starts_with('-') {
            writeln!(out, "{}", line.red())?;
        } else if line.starts_with("@@") {
            writeln!(out, "{}", line.cyan())?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}
