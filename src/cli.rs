//! Command-line argument parsing.
//!
//! CLI flags take precedence over the config file, which takes precedence
//! over built-in defaults.

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for college-tui.
#[derive(Debug, Parser)]
#[command(
    name = "college-tui",
    about = "Search, sort and scroll through a college listing in the terminal",
    version
)]
pub struct Cli {
    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Dataset JSON file to browse instead of the bundled listing
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Directory for log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Write the effective configuration to the config path and exit
    #[arg(long)]
    pub write_config: bool,
}

impl Cli {
    /// Overlay CLI flags onto a loaded configuration.
    pub fn apply(&self, config: &mut Config) {
        if let Some(ref dataset) = self.dataset {
            config.dataset_path = Some(dataset.display().to_string());
        }
        if let Some(ref log_dir) = self.log_dir {
            config.log_dir = log_dir.display().to_string();
        }
    }
}
