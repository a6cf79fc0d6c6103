//! Read-only commands: print and query

use std::io::Write;
use std::path::Path;

use serde_json::json;
use vmx_content::Document;

use crate::error::Result;

/// Write the rendered file, or its entries as JSON.
pub fn run_print(out: &mut impl Write, file: &Path, json: bool) -> Result<()> {
    let doc = Document::load(file)?;

    if json {
        let entries: Vec<_> = doc
            .entries()
            .map(|entry| {
                json!({
                    "key": entry.key(),
                    "value": entry.value(),
                    "comment": entry.comment().map(|c| c.text.as_str()),
                })
            })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
        return Ok(());
    }

    for line in doc.rendered_lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Write the value stored for `key`.
pub fn run_query(out: &mut impl Write, file: &Path, key: &str) -> Result<()> {
    let doc = Document::load(file)?;
    writeln!(out, "{}", doc.query(key)?)?;
    Ok(())
}
