use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Anchor a relative path at the current directory. The path is not
/// canonicalised, so it may name something that does not exist.
pub(super) fn absolute(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().context("Could not determine current directory")?;
    Ok(join_clean(&cwd, &path))
}

/// `--workspace`, else the current directory.
pub(super) fn workspace_root(explicit: Option<PathBuf>) -> Result<Option<PathBuf>> {
    match explicit {
        Some(dir) => absolute(dir).map(Some),
        None => Ok(std::env::current_dir().ok()),
    }
}

/// `base.join(rel)` without a leading `./` segment, so `./notes.md` renders
/// as `/cwd/notes.md` rather than `/cwd/./notes.md`.
fn join_clean(base: &Path, rel: &Path) -> PathBuf {
    let rel = rel.strip_prefix(".").unwrap_or(rel);
    if rel.as_os_str().is_empty() {
        base.to_path_buf()
    } else {
        base.join(rel)
    }
}
