//! Generate command implementation
//!
//! Composes a new artwork and prints its layer declarations.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use cssart_spec::{CssDeclarations, RenderTarget};
use serde::Serialize;

use super::{block_on, load_config, seeded_rng};
use crate::html;
use crate::studio::Studio;

/// Machine-readable output of `generate --json`.
#[derive(Debug, Serialize)]
pub struct GenerateOutput<'a> {
    pub seed: u32,
    pub target: &'a RenderTarget,
    pub css: Vec<CssDeclarations>,
}

/// Run the generate command
///
/// # Arguments
/// * `seed` - Optional seed for reproducible output
/// * `no_delay` - Skip the presentational delay
/// * `json_output` - Print JSON instead of colored text
/// * `html_path` - Also write a standalone HTML page here
/// * `config_path` - Explicit config file
pub fn run(
    seed: Option<u32>,
    no_delay: bool,
    json_output: bool,
    html_path: Option<&str>,
    config_path: Option<&str>,
) -> Result<ExitCode> {
    let config = load_config(config_path, no_delay)?;
    let (width, height) = (config.export.width, config.export.height);
    let (mut rng, seed) = seeded_rng(seed);

    if !json_output {
        println!("{} seed {}", "Generating:".cyan().bold(), seed);
    }

    let mut studio = Studio::new(config);
    let target = block_on(studio.generate(&mut rng))??.clone();

    if let Some(path) = html_path {
        html::write_page(&target, width, height, Path::new(path))
            .with_context(|| format!("Failed to write HTML page: {}", path))?;
    }

    if json_output {
        let output = GenerateOutput {
            seed,
            target: &target,
            css: target.composition().iter().map(|l| l.css()).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(ExitCode::SUCCESS);
    }

    print_target(&target);
    if let Some(path) = html_path {
        println!("{} {}", "HTML:".dimmed(), path);
    }
    println!(
        "\n{} Generated {} layers (seed {})",
        "SUCCESS".green().bold(),
        target.composition().len(),
        seed
    );
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn print_target(target: &RenderTarget) {
    let total = target.composition().len();
    for (index, (layer, opacity)) in target.layers().enumerate() {
        println!(
            "\n{} {}/{} {}",
            "Layer".bold(),
            index + 1,
            total,
            format!("(opacity {:.2})", opacity).dimmed()
        );
        let css = layer.css();
        for (name, value) in css.properties() {
            println!("  {}: {}", name.cyan(), value);
        }
    }
}
