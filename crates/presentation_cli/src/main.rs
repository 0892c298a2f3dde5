//! WoofAreYou CLI
//!
//! Runs pet book commands read from stdin.

#![allow(clippy::print_stdout)]

use std::io;

use anyhow::Context;
use application::{ModelManager, help_text, sample_pet_book};
use clap::Parser;
use domain::PetBook;
use infrastructure::{AppConfig, init_logging};
use presentation_cli::{Cli, Commands, log_filter_from_verbosity, run_session};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(cli.config.as_deref())
        .context("Failed to load configuration")?;
    init_logging(&config.logging, log_filter_from_verbosity(cli.verbose))?;

    match cli.command.unwrap_or_default() {
        Commands::Run => {
            let pet_book = if cli.sample {
                sample_pet_book().context("Failed to build sample pets")?
            } else {
                PetBook::new()
            };
            info!(
                environment = %config.environment,
                pets = pet_book.len(),
                "Starting session"
            );

            let mut model = ModelManager::new(pet_book, config.preferences.to_user_prefs());
            let summary = run_session(&mut model, io::stdin().lock(), io::stdout().lock())?;
            if !summary.exited {
                info!("Input closed");
            }
        },

        Commands::Usage => {
            println!("{}", help_text());
        },

        Commands::Config => {
            println!("{}", toml::to_string_pretty(&config)?);
        },
    }

    Ok(())
}
