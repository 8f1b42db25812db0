//! CSS Art CLI - generate and export layered CSS artwork
//!
//! This binary provides commands for generating compositions, exporting
//! them as PNG images, and validating saved compositions.

mod cli_args;

use std::process::ExitCode;

use clap::Parser;
use cli_args::{Cli, Commands};
use cssart_cli::commands;

fn main() -> ExitCode {
    let _ = env_logger::try_init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            seed,
            no_delay,
            json,
            html,
            config,
        } => commands::generate::run(seed, no_delay, json, html.as_deref(), config.as_deref()),
        Commands::Export {
            seed,
            out_dir,
            time,
            no_delay,
            json,
            config,
        } => commands::export::run(
            seed,
            out_dir.as_deref(),
            time,
            no_delay,
            json,
            config.as_deref(),
        ),
        Commands::Validate { input, json } => commands::validate::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(2)
        }
    }
}
