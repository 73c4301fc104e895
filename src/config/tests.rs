use std::time::Duration;

use super::*;
use crate::registry::{KindTemplates, ProgramEntry};

const SAMPLE: &str = r#"
[defaults]
enabled = false

[exec]
timeout = "30s"

[programs]
Cursor = 'cursor "${item}"'

[programs.Reveal]
file = 'open -R "${item}"'
directory = 'open "${item}"'
"#;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert!(config.defaults.enabled);
    assert!(config.exec.timeout.is_none());
    assert!(config.programs.is_empty());
}

#[test]
fn test_parse_sample() {
    let config: Config = toml::from_str(SAMPLE).unwrap();
    assert!(!config.defaults.enabled);
    assert_eq!(config.exec.timeout, Some(Duration::from_secs(30)));
    assert_eq!(
        config.programs["Cursor"],
        ProgramEntry::Plain(r#"cursor "${item}""#.into())
    );
    assert_eq!(
        config.programs["Reveal"],
        ProgramEntry::PerKind(KindTemplates {
            file: Some(r#"open -R "${item}""#.into()),
            directory: Some(r#"open "${item}""#.into()),
        })
    );
}

#[test]
fn test_parse_error_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[programs]\nBroken = 42\n").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{err}").contains("config.toml"));
}

#[test]
fn test_save_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let config: Config = toml::from_str(SAMPLE).unwrap();
    config.save_to(&path).unwrap();
    let back = Config::load_from(&path).unwrap();
    assert_eq!(back, config);
    assert!(back.programs.keys().eq(config.programs.keys()));
}

#[test]
fn test_save_keeps_program_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let mut config: Config =
        toml::from_str("[programs.Reveal]\nfile = 'open -R \"${item}\"'\n").unwrap();
    config.set_value("programs.Zed", "zed \"${item}\"").unwrap();
    config.set_value("programs.VS Code", "code \"${item}\"").unwrap();
    config.save_to(&path).unwrap();

    let back = Config::load_from(&path).unwrap();
    let names: Vec<&str> = back.programs.keys().map(String::as_str).collect();
    assert_eq!(names, ["Reveal", "Zed", "VS Code"]);
    assert_eq!(back, config);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("Reveal = {"));
    assert!(!text.contains("[programs.Reveal]"));
}

#[test]
fn test_get_set_scalars() {
    let mut config = Config::default();
    assert_eq!(config.get_value("defaults.enabled").unwrap(), "true");
    assert_eq!(config.get_value("exec.timeout").unwrap(), "");

    config.set_value("defaults.enabled", "false").unwrap();
    config.set_value("exec.timeout", "1m 30s").unwrap();
    assert!(!config.defaults.enabled);
    assert_eq!(config.exec.timeout, Some(Duration::from_secs(90)));
    assert_eq!(config.get_value("exec.timeout").unwrap(), "1m 30s");

    config.set_value("exec.timeout", "").unwrap();
    assert!(config.exec.timeout.is_none());

    assert!(config.set_value("defaults.enabled", "maybe").is_err());
    assert!(config.set_value("exec.timeout", "soon").is_err());
    assert!(config.get_value("editor.command").is_err());
}

#[test]
fn test_set_program_templates() {
    let mut config = Config::default();
    config.set_value("programs.Zed", "zed \"${item}\"").unwrap();
    assert_eq!(config.get_value("programs.Zed").unwrap(), "zed \"${item}\"");

    // Narrowing one kind keeps the plain template for the other.
    config.set_value("programs.Zed.directory", "zed -n \"${item}\"").unwrap();
    assert_eq!(
        config.programs["Zed"],
        ProgramEntry::PerKind(KindTemplates {
            file: Some("zed \"${item}\"".into()),
            directory: Some("zed -n \"${item}\"".into()),
        })
    );
    assert_eq!(config.get_value("programs.Zed.file").unwrap(), "zed \"${item}\"");

    config.set_value("programs.Zed.file", "").unwrap();
    config.set_value("programs.Zed.directory", "").unwrap();
    assert!(!config.programs.contains_key("Zed"));
}

#[test]
fn test_clear_program() {
    let mut config: Config = toml::from_str(SAMPLE).unwrap();
    config.set_value("programs.Cursor", "").unwrap();
    assert!(!config.programs.contains_key("Cursor"));
    assert_eq!(config.get_value("programs.Cursor").unwrap(), "");
    assert!(config.set_value("programs.", "x").is_err());
}
