#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::ports::{ConfigProvider, LogFormat};
#[cfg(feature = "cli")]
use clap::Parser;

pub use toml_config::ServiceConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "cockpit-design")]
#[command(about = "Cockpit instrument taxonomy lookups and prompt context for image generation")]
pub struct CliConfig {
    /// Path to a TOML service configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Load the taxonomy from this file instead of the built-in dataset
    #[arg(long, global = true)]
    pub taxonomy: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON lines on stderr")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

/// CLI flags layered over the optional config file.
#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct EffectiveConfig {
    pub cli: CliConfig,
    pub file: ServiceConfig,
}

#[cfg(feature = "cli")]
impl ConfigProvider for EffectiveConfig {
    fn taxonomy_path(&self) -> Option<&str> {
        self.cli.taxonomy.as_deref().or(self.file.taxonomy_path())
    }

    fn log_format(&self) -> LogFormat {
        if self.cli.json_logs {
            LogFormat::Json
        } else {
            self.file.log_format()
        }
    }

    fn log_level(&self) -> Option<&str> {
        self.file.log_level()
    }
}
