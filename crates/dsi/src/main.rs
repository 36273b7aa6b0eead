//! Desktop Service Integrations - diagnostic binary
//!
//! | Command | Description |
//! |---------|-------------|
//! | `dsi providers [CAPABILITY]` | Candidates and selection order per capability |
//! | `dsi resource NAME` | Size of a plugin resource; fails if absent |

// Force-link dsi-providers to ensure linkme registrations are included
extern crate dsi_providers;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use dsi::Integrations;
use dsi::cli::{Cli, run};
use dsi::infrastructure::logging::init_logging;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    init_logging(&config.logging)?;

    let integrations = Integrations::from_config(&config);
    let found = run(&cli.command, &integrations, &mut io::stdout().lock())?;
    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
