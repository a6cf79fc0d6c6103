//! Whole-file text I/O

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Read a file as UTF-8 text, treating a missing file as `None`.
///
/// Any other failure (permission denied, a directory at `path`, invalid
/// UTF-8) is reported as [`Error::Io`].
pub fn read_text_if_exists(path: impl AsRef<Path>) -> Result<Option<String>> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), bytes = content.len(), "read file");
            Ok(Some(content))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "file does not exist");
            Ok(None)
        }
        Err(e) => Err(Error::io(path, e)),
    }
}

/// Write content to a file, replacing whatever was there.
///
/// The content goes to a temporary sibling first and is renamed over the
/// target, so a failed write leaves the previous file intact. Permissions
/// and (where allowed) ownership of an existing target carry over to the
/// replacement. No lock is taken: concurrent writers race and the last
/// rename wins.
///
/// A symlink at `path` is followed and the file it points to is replaced;
/// the link itself stays. A file with more than one hard link is rewritten
/// in place instead, so every link keeps seeing the same content.
///
/// The parent directory must already exist.
pub fn write_atomic(path: impl AsRef<Path>, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let target = resolve_symlink(path)?;

    if is_hard_linked(&target)? {
        write_in_place(&target, content)?;
        tracing::debug!(path = %target.display(), bytes = content.len(), "wrote hard-linked file in place");
        return Ok(());
    }

    let temp_path = temp_path_for(&target);
    let result = write_temp(&temp_path, &target, content)
        .and_then(|()| fs::rename(&temp_path, &target).map_err(|e| Error::io(&target, e)));

    if result.is_err() {
        // The temp file may never have been created
        let _ = fs::remove_file(&temp_path);
    }
    result?;

    tracing::debug!(path = %target.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Write text content to a file atomically.
pub fn write_text(path: impl AsRef<Path>, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// The file a write to `path` should land in.
///
/// Non-links are returned unchanged. A dangling link resolves to its
/// (relative-to-the-link) destination so the write creates that file.
fn resolve_symlink(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => match fs::canonicalize(path) {
            Ok(resolved) => Ok(resolved),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let dest = fs::read_link(path).map_err(|e| Error::io(path, e))?;
                Ok(match path.parent() {
                    Some(parent) => parent.join(dest),
                    None => dest,
                })
            }
            Err(e) => Err(Error::io(path, e)),
        },
        Ok(_) => Ok(path.to_path_buf()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(Error::io(path, e)),
    }
}

#[cfg(unix)]
fn is_hard_linked(path: &Path) -> Result<bool> {
    use std::os::unix::fs::MetadataExt;

    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file() && meta.nlink() > 1),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(Error::io(path, e)),
    }
}

#[cfg(not(unix))]
fn is_hard_linked(_path: &Path) -> Result<bool> {
    Ok(false)
}

fn write_in_place(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| Error::io(path, e))?;
    file.write_all(content).map_err(|e| Error::io(path, e))?;
    file.sync_all().map_err(|e| Error::io(path, e))
}

/// Temp file in the same directory as `path`, so the rename stays on one filesystem.
fn temp_path_for(path: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    path.with_file_name(temp_name)
}

fn write_temp(temp_path: &Path, target: &Path, content: &[u8]) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;

    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    match fs::metadata(target) {
        Ok(meta) => {
            fs::set_permissions(temp_path, meta.permissions())
                .map_err(|e| Error::io(temp_path, e))?;
            copy_owner(temp_path, &meta);
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(target, e)),
    }

    Ok(())
}

/// Give the temp file the target's owner and group.
///
/// Only privileged processes may hand a file to another user; for anyone
/// else the call fails and the temp file keeps the writer as owner.
#[cfg(unix)]
fn copy_owner(temp_path: &Path, target_meta: &fs::Metadata) {
    use std::os::unix::fs::MetadataExt;

    if let Err(e) = std::os::unix::fs::chown(
        temp_path,
        Some(target_meta.uid()),
        Some(target_meta.gid()),
    ) {
        tracing::debug!(path = %temp_path.display(), error = %e, "could not copy owner");
    }
}

#[cfg(not(unix))]
fn copy_owner(_temp_path: &Path, _target_meta: &fs::Metadata) {}
