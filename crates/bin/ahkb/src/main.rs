//! # ahkb — AHK script builder
//!
//! Composition root that wires the filesystem adapter into the application
//! services and runs one subcommand.
//!
//! ## Responsibilities
//! - Parse the command line and configuration (config file, env vars)
//! - Initialize logging
//! - Construct the adapters and inject them into `ProjectService`
//! - Dispatch the subcommand
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod cli;
mod commands;
mod config;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ahkb_adapter_fs::{FsPathProbe, FsTextStore, StartMenuCatalog};
use ahkb_app::services::project_service::ProjectService;

use crate::cli::{Cli, Command};
use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(&config.logging.filter)
            .with_context(|| format!("invalid logging filter {:?}", config.logging.filter))?
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let service = ProjectService::new(FsTextStore, FsPathProbe);

    match cli.command {
        Command::New {
            output,
            name,
            hotkey,
        } => {
            commands::new_project(&service, &config.project, &output, name, hotkey)?;
        }
        Command::Export { input, output } => {
            commands::export(&service, &input, output)?;
        }
        Command::Import { script, output } => {
            commands::import(&service, &script, output)?;
        }
        Command::Add {
            file,
            kind,
            fields,
            at,
        } => {
            commands::add(&service, &file, kind, fields, at)?;
        }
        Command::Edit {
            file,
            position,
            kind,
            fields,
        } => {
            commands::edit(&service, &file, position, kind, fields)?;
        }
        Command::Remove { file, position } => {
            commands::remove(&service, &file, position)?;
        }
        Command::Move {
            file,
            position,
            direction,
        } => {
            commands::move_action(&service, &file, position, direction)?;
        }
        Command::Show { file } => commands::show(&service, &file)?,
        Command::Programs => commands::programs(&StartMenuCatalog::new(config.catalog))?,
    }

    Ok(())
}
