use anyhow::Result;
use open_in::{
    config::Config,
    registry::{build_registry, filter_by_applicability, Platform},
    EntryKind,
};

pub fn cmd_list(kind: Option<EntryKind>) -> Result<()> {
    let config = Config::load()?;
    let registry = build_registry(&config, Platform::current());
    let shown = match kind {
        Some(kind) => filter_by_applicability(&registry, kind)?,
        None => registry,
    };

    let width = shown.keys().map(|name| name.chars().count()).max().unwrap_or(0);
    for (name, entry) in &shown {
        println!("{name:<width$}  {entry}");
    }
    Ok(())
}
