//! Placeholder substitution in command templates.

use std::path::is_separator;

use crate::target::EntryKind;

/// Current placeholder, replaced everywhere with the target path.
pub const ITEM: &str = "${item}";
/// Deprecated: the path for files, empty for directories.
pub const LEGACY_FILE: &str = "${file}";
/// Deprecated: the path for directories, the parent for files.
pub const LEGACY_DIRECTORY: &str = "${directory}";

/// Substitute `path` into `template`.
///
/// Every `${item}` is replaced. Afterwards only the first remaining
/// `${file}` and the first remaining `${directory}` are replaced. The path is
/// inserted verbatim: templates that need quoting must quote the placeholder
/// themselves, and whatever the path contains reaches the shell as is.
pub fn render_command(template: &str, path: &str, kind: EntryKind) -> String {
    let mut command = template.replace(ITEM, path);

    if command.contains(LEGACY_FILE) {
        let value = match kind {
            EntryKind::File => path,
            EntryKind::Directory => "",
        };
        command = command.replacen(LEGACY_FILE, value, 1);
    }

    if command.contains(LEGACY_DIRECTORY) {
        let value = match kind {
            EntryKind::Directory => path,
            EntryKind::File => parent_segment(path),
        };
        command = command.replacen(LEGACY_DIRECTORY, value, 1);
    }

    command
}

/// Everything before the last path separator, or `""` when there is none.
fn parent_segment(path: &str) -> &str {
    path.rfind(is_separator).map_or("", |i| &path[..i])
}
