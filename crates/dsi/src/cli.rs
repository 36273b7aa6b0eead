//! Command line interface of the `dsi` binary

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dsi_application::ports::registry::{CAPABILITY_NAMES, Capability, LoadingContext};
use dsi_domain::error::{Error, Result};
use dsi_domain::ports::{
    AutoStartProvider, AutoUpdateProvider, KeychainAccessProvider, MountService,
    QuickAccessService, RevealPathsService, SecondFactorProvider, TrayIntegrationProvider,
    TrayMenuController, UiAppearanceProvider,
};
use dsi_infrastructure::{AppConfig, ConfigLoader, Integrations};

/// Command line interface for desktop service integrations
#[derive(Parser, Debug)]
#[command(name = "dsi")]
#[command(about = "Desktop Service Integrations - provider diagnostics")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Plugin directory, overriding the configuration
    #[arg(long)]
    pub plugin_dir: Option<String>,

    /// Log level, overriding the configuration
    #[arg(long)]
    pub log_level: Option<String>,

    /// What to inspect
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the candidates of every capability and the order they are selected in
    Providers {
        /// Only this capability
        #[arg(value_parser = clap::builder::PossibleValuesParser::new(CAPABILITY_NAMES.iter().copied()))]
        capability: Option<String>,
    },
    /// Print the size of a plugin resource
    Resource {
        /// Resource name inside the plugin archives
        name: String,
    },
}

impl Cli {
    /// Configuration from files and environment with the command line overrides applied
    pub fn load_config(&self) -> Result<AppConfig> {
        let mut loader = ConfigLoader::new();
        if let Some(path) = &self.config {
            loader = loader.with_config_path(path);
        }
        let mut config = loader.load()?;
        if let Some(dir) = &self.plugin_dir {
            config.plugin_dir.clone_from(dir);
        }
        if let Some(level) = &self.log_level {
            config.logging.level.clone_from(level);
        }
        Ok(config)
    }
}

/// Execute `command` against `integrations`, writing the report to `out`
///
/// Returns whether the command found what it was asked for.
pub fn run<W: Write>(command: &Command, integrations: &Integrations, out: &mut W) -> Result<bool> {
    match command {
        Command::Providers { capability: None } => {
            for name in CAPABILITY_NAMES {
                report_named(name, integrations.context(), out)?;
            }
            Ok(true)
        }
        Command::Providers {
            capability: Some(name),
        } => {
            report_named(name, integrations.context(), out)?;
            Ok(true)
        }
        Command::Resource { name } => match integrations.resource(name) {
            Some(bytes) => {
                writeln!(out, "{name}: {} bytes", bytes.len())?;
                Ok(true)
            }
            None => {
                writeln!(out, "{name}: not found")?;
                Ok(false)
            }
        },
    }
}

fn report_named<W: Write>(name: &str, context: &LoadingContext, out: &mut W) -> Result<()> {
    match name {
        "auto-start" => report::<dyn AutoStartProvider, W>(context, out),
        "keychain" => report::<dyn KeychainAccessProvider, W>(context, out),
        "mount" => report::<dyn MountService, W>(context, out),
        "reveal-paths" => report::<dyn RevealPathsService, W>(context, out),
        "quick-access" => report::<dyn QuickAccessService, W>(context, out),
        "tray-integration" => report::<dyn TrayIntegrationProvider, W>(context, out),
        "tray-menu" => report::<dyn TrayMenuController, W>(context, out),
        "ui-appearance" => report::<dyn UiAppearanceProvider, W>(context, out),
        "second-factor" => report::<dyn SecondFactorProvider, W>(context, out),
        "auto-update" => report::<dyn AutoUpdateProvider, W>(context, out),
        other => Err(Error::invalid_argument(format!("unknown capability '{other}'"))),
    }
}

fn report<C: Capability + ?Sized, W: Write>(context: &LoadingContext, out: &mut W) -> Result<()> {
    writeln!(out, "{}:", C::NAME)?;
    let candidates = context.describe::<C>();
    if candidates.is_empty() {
        writeln!(out, "  (no providers)")?;
        return Ok(());
    }
    for candidate in &candidates {
        let platforms = if candidate.platforms.is_empty() {
            "all".to_string()
        } else {
            candidate
                .platforms
                .iter()
                .map(|os| os.as_str())
                .collect::<Vec<_>>()
                .join(",")
        };
        writeln!(
            out,
            "  {} priority={} platforms={} eligible={} checked={} builtin={}",
            candidate.name,
            candidate.priority,
            platforms,
            yes_no(candidate.platform_eligible),
            yes_no(candidate.availability_checked),
            yes_no(candidate.builtin),
        )?;
    }
    let selected: Vec<&str> = context
        .load_all::<C>()
        .iter()
        .map(|provider| provider.name)
        .collect();
    writeln!(out, "  selected: {}", selected.join(", "))?;
    Ok(())
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
