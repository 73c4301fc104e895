use super::{KindTemplates, ProgramEntry, Registry};

/// Platform families with their own default programs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// macOS.
    MacOs,
    /// Windows.
    Windows,
    /// Linux, the BSDs and anything else.
    Unix,
}

impl Platform {
    /// Map an OS identifier as found in `std::env::consts::OS`.
    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => Self::MacOs,
            "windows" => Self::Windows,
            _ => Self::Unix,
        }
    }

    /// The platform this binary was built for.
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }
}

fn plain(template: &str) -> ProgramEntry {
    ProgramEntry::Plain(template.to_string())
}

fn per_kind(file: Option<&str>, directory: Option<&str>) -> ProgramEntry {
    ProgramEntry::PerKind(KindTemplates {
        file: file.map(str::to_string),
        directory: directory.map(str::to_string),
    })
}

/// Built-in programs for `platform`, merged under the user's own.
pub fn default_programs(platform: Platform) -> Registry {
    let entries: [(&str, ProgramEntry); 3] = match platform {
        Platform::MacOs => [
            ("VS Code", plain(r#"code "${item}""#)),
            (
                "Finder",
                per_kind(Some(r#"open -R "${item}""#), Some(r#"open "${item}""#)),
            ),
            (
                "Terminal",
                per_kind(None, Some(r#"open -a Terminal "${item}""#)),
            ),
        ],
        Platform::Windows => [
            ("VS Code", plain(r#"code "${item}""#)),
            (
                "Explorer",
                per_kind(
                    Some(r#"explorer /select,"${item}""#),
                    Some(r#"explorer "${item}""#),
                ),
            ),
            (
                "Windows Terminal",
                per_kind(None, Some(r#"wt -d "${item}""#)),
            ),
        ],
        Platform::Unix => [
            ("VS Code", plain(r#"code "${item}""#)),
            ("Default Application", plain(r#"xdg-open "${item}""#)),
            (
                "Terminal",
                per_kind(None, Some(r#"gnome-terminal --working-directory="${item}""#)),
            ),
        ],
    };
    entries
        .into_iter()
        .map(|(name, entry)| (name.to_string(), entry))
        .collect()
}
