use anyhow::Result;
use clap::Subcommand;
use open_in::{config::Config, host::Settings, settings::FileSettings};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a commented starter configuration if none exists
    Init,
    /// Open the configuration file in $VISUAL / $EDITOR
    Edit,
    /// Set a configuration value (e.g. programs.Zed 'zed "${item}"')
    Set { key: String, value: String },
    /// Get a configuration value
    Get { key: String },
}

pub fn cmd_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Path => {
            let path = Config::path()?;
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let settings = FileSettings::from_env()?;
            if settings.ensure_exists()? {
                println!("Wrote starter config to {}", settings.path().display());
            } else {
                println!("Config already exists at {}", settings.path().display());
            }
        }
        ConfigAction::Edit => FileSettings::from_env()?.open()?,
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set_value(&key, &value)?;
            config.save()?;
            println!("Set {key} = {value}");
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get_value(&key)?);
        }
    }
    Ok(())
}
