//! event-gate: event-filtering gate for analytics pipelines
//!
//! A CLI tool that decides, per event, whether to forward or suppress it,
//! driven by declarative typed conditions, an unconditional drop-by-name list,
//! and a policy for properties missing from an event.

mod cli;
mod config;
mod domain;
mod service;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use config::ConfigService;
use service::EventService;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = ConfigService::load(cli.config.as_deref())?;

    // Initialize logging if debug mode
    if cli.debug || config.debug {
        domain::logger::init(&config)?;
    }

    // Execute command
    match cli.command {
        Commands::Run { filters } => {
            let spec = ConfigService::load_filter_spec(&config, filters.as_deref())?;
            let service = EventService::new(spec);
            service.run()?;
        }
        Commands::Init { path } => {
            let config_path = if let Some(p) = path {
                ConfigService::generate_at(&p)?;
                p
            } else {
                ConfigService::generate_default()?;
                ConfigService::default_path()
            };
            if !cli.quiet {
                eprintln!("Configuration file created at: {}", config_path.display());
            }
        }
        Commands::Check { filters } => {
            config::validate(&config)?;
            let spec = ConfigService::load_filter_spec(&config, filters.as_deref())?;
            if !cli.quiet {
                eprintln!(
                    "Configuration is valid: {} condition(s), {} event name(s) to drop.",
                    spec.condition_count(),
                    spec.drop_name_count()
                );
            }
        }
        Commands::Version => {
            println!("event-gate {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
