//! Export command implementation
//!
//! Generates a composition, then captures it as a PNG download.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use cssart_backend_raster::CpuRasterizer;
use serde::Serialize;

use super::{block_on, load_config, seeded_rng};
use crate::studio::{DirectorySink, ExportOutcome, Studio};

/// Machine-readable output of `export --json`.
#[derive(Debug, Serialize)]
pub struct ExportOutput {
    pub seed: u32,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run the export command
///
/// # Arguments
/// * `seed` - Optional seed for reproducible output
/// * `out_dir` - Download directory (overrides config)
/// * `time` - Animation clock for the captured frame, in seconds
/// * `no_delay` - Skip the presentational delay
/// * `json_output` - Print JSON instead of colored text
/// * `config_path` - Explicit config file
///
/// # Returns
/// Exit code: 0 if a file was downloaded, 2 if the export failed
pub fn run(
    seed: Option<u32>,
    out_dir: Option<&str>,
    time: f64,
    no_delay: bool,
    json_output: bool,
    config_path: Option<&str>,
) -> Result<ExitCode> {
    let mut config = load_config(config_path, no_delay)?;
    if let Some(dir) = out_dir {
        config.export.out_dir = dir.into();
    }
    let mut sink = DirectorySink::new(config.export.out_dir.clone());
    let (mut rng, seed) = seeded_rng(seed);

    let mut studio = Studio::new(config);
    if !json_output {
        println!("{} seed {}", "Generating:".cyan().bold(), seed);
    }
    block_on(studio.generate(&mut rng))??;

    if !json_output {
        println!(
            "{} {}",
            "Exporting to:".cyan().bold(),
            sink.dir().display()
        );
    }
    let outcome = studio.export(&CpuRasterizer::new(), &mut sink, time);

    if json_output {
        let output = match &outcome {
            ExportOutcome::Downloaded { path, hash, .. } => ExportOutput {
                seed,
                ok: true,
                path: Some(path.display().to_string()),
                hash: Some(hash.clone()),
                error: None,
            },
            ExportOutcome::Failed { reason } => ExportOutput {
                seed,
                ok: false,
                path: None,
                hash: None,
                error: Some(reason.clone()),
            },
            ExportOutcome::Unavailable => ExportOutput {
                seed,
                ok: false,
                path: None,
                hash: None,
                error: Some("nothing to export".to_string()),
            },
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    match outcome {
        ExportOutcome::Downloaded { path, hash, .. } => {
            if !json_output {
                println!(
                    "{} {} ({})",
                    "SUCCESS".green().bold(),
                    path.display(),
                    &hash[..16]
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        ExportOutcome::Failed { reason } => {
            if !json_output {
                println!("{} {}", "FAILED".red().bold(), reason);
            }
            Ok(ExitCode::from(2))
        }
        ExportOutcome::Unavailable => {
            if !json_output {
                println!("{} nothing to export", "FAILED".red().bold());
            }
            Ok(ExitCode::from(2))
        }
    }
}
