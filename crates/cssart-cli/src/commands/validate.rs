//! Validate command implementation
//!
//! Checks a saved composition against the style ranges and CSS grammar.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use cssart_spec::validation::validate_composition;
use cssart_spec::{Composition, ValidationResult};
use serde::Serialize;

/// Machine-readable output of `validate --json`.
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    pub ok: bool,
    pub layers: usize,
    pub errors: Vec<JsonMessage>,
    pub warnings: Vec<JsonMessage>,
}

#[derive(Debug, Serialize)]
pub struct JsonMessage {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Load a composition from JSON. Accepts either a bare composition or the
/// output of `generate --json`.
pub fn load_composition(path: &Path) -> Result<Composition> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read composition file: {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;

    let composition = match value.pointer("/target/composition") {
        Some(inner) => serde_json::from_value(inner.clone()),
        None => serde_json::from_value(value),
    }
    .with_context(|| format!("Not a composition: {}", path.display()))?;
    Ok(composition)
}

/// Run the validate command
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    let composition = load_composition(Path::new(input))?;
    let result = validate_composition(&composition);

    if json_output {
        let output = ValidateOutput {
            ok: result.is_ok(),
            layers: composition.len(),
            errors: result
                .errors
                .iter()
                .map(|e| JsonMessage {
                    code: e.code.code().to_string(),
                    message: e.message.clone(),
                    path: e.path.clone(),
                })
                .collect(),
            warnings: result
                .warnings
                .iter()
                .map(|w| JsonMessage {
                    code: w.code.code().to_string(),
                    message: w.message.clone(),
                    path: w.path.clone(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{} {}", "Validating:".cyan().bold(), input);
        print_validation_results(&result);
    }

    if result.is_ok() {
        if !json_output {
            println!(
                "\n{} Composition is valid ({} layers)",
                "SUCCESS".green().bold(),
                composition.len()
            );
        }
        Ok(ExitCode::SUCCESS)
    } else {
        if !json_output {
            println!(
                "\n{} Composition has {} error(s)",
                "FAILED".red().bold(),
                result.errors.len()
            );
        }
        Ok(ExitCode::from(1))
    }
}

fn print_validation_results(result: &ValidationResult) {
    for error in &result.errors {
        let location = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code.code(),
            location.dimmed(),
            error.message
        );
    }
    for warning in &result.warnings {
        let location = warning
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "!".yellow(),
            warning.code.code(),
            location.dimmed(),
            warning.message
        );
    }
}
