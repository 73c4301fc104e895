//! What gets opened, and whether it is a file or a directory.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use crate::host::Notifier;

/// Whether a target is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum EntryKind {
    /// A regular file (or anything that is not a directory).
    File,
    /// A directory.
    Directory,
}

impl EntryKind {
    /// The other kind.
    pub const fn opposite(self) -> Self {
        match self {
            Self::File => Self::Directory,
            Self::Directory => Self::File,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => f.write_str("file"),
            Self::Directory => f.write_str("directory"),
        }
    }
}

/// Stat-style access to the file system.
pub trait FileSystem {
    /// Report whether `path` is a file or a directory.
    fn kind(&self, path: &Path) -> io::Result<EntryKind>;
}

/// [`FileSystem`] backed by `std::fs::metadata`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn kind(&self, path: &Path) -> io::Result<EntryKind> {
        let meta = std::fs::metadata(path)?;
        Ok(if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        })
    }
}

/// Classify `path`, guessing from its name when the stat query fails.
///
/// The guess treats the path as a directory iff its final segment contains
/// no `.`, so `.bashrc` reads as a file and `Makefile` as a directory.
pub fn classify(path: &Path, fs: &dyn FileSystem, notifier: &dyn Notifier) -> EntryKind {
    match fs.kind(path) {
        Ok(kind) => kind,
        Err(e) => {
            let kind = guess_kind(path);
            notifier.trace(&format!(
                "stat failed for {}: {e}; treating it as a {kind}",
                path.display()
            ));
            kind
        }
    }
}

fn guess_kind(path: &Path) -> EntryKind {
    let name = path
        .file_name()
        .unwrap_or_else(|| path.as_os_str())
        .to_string_lossy();
    if name.contains('.') {
        EntryKind::File
    } else {
        EntryKind::Directory
    }
}

/// A resolved target: path plus classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Absolute path of the file or directory.
    pub path: PathBuf,
    /// File or directory.
    pub kind: EntryKind,
}

/// Where the "open selected item" entry point looks for its target.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// The explicitly selected item.
    pub item: Option<PathBuf>,
    /// Known kind of `item`, which skips the stat query.
    pub kind_hint: Option<EntryKind>,
    /// The document currently open in the caller's editor.
    pub active_document: Option<PathBuf>,
    /// Root of the current workspace.
    pub workspace_root: Option<PathBuf>,
}

impl Selection {
    /// First available path in the order item, active document, workspace
    /// root. The kind hint only travels with the explicit item.
    pub fn resolve(&self) -> Option<(&Path, Option<EntryKind>)> {
        if let Some(item) = &self.item {
            return Some((item, self.kind_hint));
        }
        self.active_document
            .as_deref()
            .or(self.workspace_root.as_deref())
            .map(|p| (p, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Traces(RefCell<Vec<String>>);

    impl Notifier for Traces {
        fn info(&self, _message: &str) {}
        fn error(&self, _message: &str) {}
        fn trace(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    struct Unreadable;

    impl FileSystem for Unreadable {
        fn kind(&self, _path: &Path) -> io::Result<EntryKind> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
        }
    }

    #[test]
    fn test_classify_real_entries() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes");
        std::fs::write(&file, "x").unwrap();
        let sub = dir.path().join("v1.2");
        std::fs::create_dir(&sub).unwrap();

        let log = Traces::default();
        // Stat wins over the name heuristic in both directions.
        assert_eq!(classify(&file, &StdFileSystem, &log), EntryKind::File);
        assert_eq!(classify(&sub, &StdFileSystem, &log), EntryKind::Directory);
        assert!(log.0.borrow().is_empty());
    }

    #[test]
    fn test_classify_falls_back_to_name() {
        let log = Traces::default();
        assert_eq!(
            classify(Path::new("/repo/main.go"), &Unreadable, &log),
            EntryKind::File
        );
        assert_eq!(
            classify(Path::new("/repo/src"), &Unreadable, &log),
            EntryKind::Directory
        );
        assert_eq!(log.0.borrow().len(), 2);
        assert!(log.0.borrow()[0].contains("/repo/main.go"));
    }

    #[test]
    fn test_guess_only_looks_at_final_segment() {
        assert_eq!(guess_kind(Path::new("/home/me/v1.0/src")), EntryKind::Directory);
        assert_eq!(guess_kind(Path::new("/home/me/.bashrc")), EntryKind::File);
        assert_eq!(guess_kind(Path::new("/usr/bin/make")), EntryKind::Directory);
    }

    #[test]
    fn test_selection_fallback_chain() {
        let mut sel = Selection {
            item: Some("/a/item.txt".into()),
            kind_hint: Some(EntryKind::File),
            active_document: Some("/a/active.rs".into()),
            workspace_root: Some("/a".into()),
        };
        assert_eq!(
            sel.resolve(),
            Some((Path::new("/a/item.txt"), Some(EntryKind::File)))
        );

        sel.item = None;
        assert_eq!(sel.resolve(), Some((Path::new("/a/active.rs"), None)));

        sel.active_document = None;
        assert_eq!(sel.resolve(), Some((Path::new("/a"), None)));

        sel.workspace_root = None;
        assert_eq!(sel.resolve(), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(EntryKind::File.to_string(), "file");
        assert_eq!(EntryKind::Directory.to_string(), "directory");
        assert_eq!(EntryKind::File.opposite(), EntryKind::Directory);
    }
}
