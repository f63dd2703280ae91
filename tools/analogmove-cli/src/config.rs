//! Config commands - show or create config.toml

use analogmove_core::Config;
use analogmove_core::app::config;
use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show(ShowArgs),
    /// Write the default configuration
    Init(InitArgs),
}

/// Arguments for `config show`
#[derive(Args)]
pub struct ShowArgs {
    /// Config file to read instead of the platform default
    #[arg(short, long)]
    pub path: Option<PathBuf>,
}

/// Arguments for `config init`
#[derive(Args)]
pub struct InitArgs {
    /// Where to write (defaults to the platform config directory)
    #[arg(short, long)]
    pub path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

/// Execute a config command
pub fn execute(command: ConfigCommand) -> Result<()> {
    match command {
        ConfigCommand::Show(args) => {
            let config = effective(args.path.as_deref())?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        ConfigCommand::Init(args) => {
            let path = match args.path {
                Some(path) => path,
                None => config::config_path().context("could not determine config directory")?,
            };
            init(&path, args.force)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

/// Configuration from an explicit file, or the platform default.
///
/// An explicit file must exist and be valid. The platform default falls back
/// to built-in defaults.
pub fn effective(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(config::load()),
    }
}

fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    config::save_to(&Config::default(), path)
        .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        init(&path, false).unwrap();
        let config = effective(Some(&path)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        assert!(init(&path, false).is_err());
        assert!(init(&path, true).is_ok());
    }

    #[test]
    fn test_effective_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(effective(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
