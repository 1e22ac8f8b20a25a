use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::config::{AppConfig, StorageBackend};
use crate::skin::SkinSelector;

/// Crix - landing page for the skin-first Crix UI framework
#[derive(Parser, Debug)]
#[command(name = "crix")]
#[command(about = "Boot splash and skinnable landing page for the Crix UI framework")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log file path
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Select a skin before starting (y2k, terminal, dark, neocities)
    #[arg(long, global = true)]
    pub skin: Option<String>,

    /// Remember the skin for this run only
    #[arg(long, global = true, conflicts_with = "no_persist")]
    pub ephemeral: bool,

    /// Never read or write the skin preference
    #[arg(long, global = true)]
    pub no_persist: bool,

    /// Start directly on the landing page
    #[arg(long)]
    pub skip_splash: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// List the available skins
    Skins,

    /// Print the id of the skin that would be used on start
    Current,
}

impl Cli {
    /// Apply flags that override values from the config file
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if self.ephemeral {
            config.storage.backend = StorageBackend::Memory;
        } else if self.no_persist {
            config.storage.backend = StorageBackend::None;
        }
    }
}

/// Runs the non-interactive subcommands
pub struct CliHandler<'a> {
    selector: &'a SkinSelector,
}

impl<'a> CliHandler<'a> {
    pub fn new(selector: &'a SkinSelector) -> Self {
        Self { selector }
    }

    pub fn handle_command(&self, command: Commands, out: &mut impl Write) -> Result<()> {
        match command {
            Commands::Skins => self.handle_skins(out),
            Commands::Current => self.handle_current(out),
        }
    }

    fn handle_skins(&self, out: &mut impl Write) -> Result<()> {
        let registry = self.selector.registry();
        let active = self.selector.active_id();

        for (index, skin) in registry.skins().iter().enumerate() {
            let marker = if skin.id == active { '*' } else { ' ' };
            let default = if skin.id == registry.default_id() {
                " (default)"
            } else {
                ""
            };
            writeln!(
                out,
                "{} {}  {:<10} {}{}",
                marker,
                index + 1,
                skin.id,
                skin.name,
                default
            )?;
            if !skin.description.is_empty() {
                writeln!(out, "       {}", skin.description)?;
            }
        }
        Ok(())
    }

    fn handle_current(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "{}", self.selector.active_id())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skin::{SkinRegistry, SkinSelector};
    use crate::storage::{MemoryStore, PreferenceStore};
    use std::sync::Arc;

    fn selector_with(stored: Option<&str>) -> SkinSelector {
        let store = Arc::new(MemoryStore::new());
        if let Some(value) = stored {
            store.set("crix-skin", value).unwrap();
        }
        SkinSelector::new(Arc::new(SkinRegistry::builtin().unwrap()), store)
    }

    fn run(selector: &SkinSelector, command: Commands) -> String {
        let mut out = Vec::new();
        CliHandler::new(selector).handle_command(command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["crix", "--skin", "dark", "--skip-splash", "--debug"]);
        assert_eq!(cli.skin.as_deref(), Some("dark"));
        assert!(cli.skip_splash);
        assert!(cli.debug);
        assert!(cli.command.is_none());

        let cli = Cli::parse_from(["crix", "skins", "--no-persist"]);
        assert_eq!(cli.command, Some(Commands::Skins));
        assert!(cli.no_persist);
    }

    #[test]
    fn test_ephemeral_conflicts_with_no_persist() {
        assert!(Cli::try_parse_from(["crix", "--ephemeral", "--no-persist"]).is_err());
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig::default();
        Cli::parse_from(["crix", "--ephemeral"]).apply_overrides(&mut config);
        assert_eq!(config.storage.backend, StorageBackend::Memory);

        let mut config = AppConfig::default();
        Cli::parse_from(["crix", "--no-persist"]).apply_overrides(&mut config);
        assert_eq!(config.storage.backend, StorageBackend::None);

        let mut config = AppConfig::default();
        Cli::parse_from(["crix"]).apply_overrides(&mut config);
        assert_eq!(config.storage.backend, StorageBackend::File);
    }

    #[test]
    fn test_skins_lists_all_and_marks_active() {
        let output = run(&selector_with(Some("neocities")), Commands::Skins);

        assert!(output.contains("Y2K Gloss (default)"));
        assert!(output.contains("Dark Glass"));
        assert!(output.contains("* 4  neocities"));
        assert!(output.contains("  1  y2k"));
    }

    #[test]
    fn test_current() {
        assert_eq!(run(&selector_with(Some("terminal")), Commands::Current), "terminal\n");
        assert_eq!(run(&selector_with(Some("bogus")), Commands::Current), "y2k\n");
        assert_eq!(run(&selector_with(None), Commands::Current), "y2k\n");
    }
}
