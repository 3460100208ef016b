use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::app::App;
use crate::config::DashboardConfig;
use crate::ui::render_report;

/// Userboard - terminal dashboard for users and related datasets
#[derive(Parser)]
#[command(name = "userboard")]
#[command(about = "A TUI dashboard that loads a user list and related datasets concurrently")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Fetch once and print a plain-text report instead of starting the TUI
    #[arg(long)]
    pub plain: bool,
}

impl Cli {
    /// Config file to load: `--config`, else the default location
    pub fn config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(DashboardConfig::default_path)
    }

    /// Load the effective configuration
    pub fn load_config(&self) -> Result<DashboardConfig> {
        match self.config_path() {
            Some(path) => DashboardConfig::load_from_file(&path)
                .with_context(|| format!("Failed to load configuration from {}", path.display())),
            None => {
                tracing::debug!("No config directory available, using defaults");
                Ok(DashboardConfig::default())
            }
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show configuration information
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Show the configuration file location instead of its contents
    #[arg(long)]
    pub path: bool,
}

/// Runs the non-interactive entry points
pub struct CliHandler {
    config: DashboardConfig,
    config_path: Option<PathBuf>,
}

impl CliHandler {
    pub fn new(config: DashboardConfig, config_path: Option<PathBuf>) -> Self {
        Self { config, config_path }
    }

    /// Handle a CLI subcommand
    pub fn handle_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Config(args) => {
                println!("{}", self.config_output(&args)?);
                Ok(())
            }
        }
    }

    fn config_output(&self, args: &ConfigArgs) -> Result<String> {
        if args.path {
            return Ok(match &self.config_path {
                Some(path) => path.display().to_string(),
                None => "No configuration directory available".to_string(),
            });
        }

        self.config
            .to_toml()
            .context("Failed to serialize configuration")
    }

    /// Fetch every dataset once and render the result as text
    pub async fn report(&self) -> Result<String> {
        let mut app = App::new(&self.config)?;
        app.wait_until_settled().await?;
        Ok(render_report(&app.model().dashboard))
    }
}
