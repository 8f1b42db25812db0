//! CLI argument definitions for the CSS Art command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};

/// CSS Art - layered generative artwork from random CSS styles
#[derive(Parser)]
#[command(name = "cssart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate a new composition and print its layer styles
    Generate {
        /// Seed for reproducible output (random when omitted)
        #[arg(long)]
        seed: Option<u32>,

        /// Skip the presentational delay before publishing
        #[arg(long)]
        no_delay: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,

        /// Also write a standalone HTML page to this path
        #[arg(long)]
        html: Option<String>,

        /// Path to config file (default: ./cssart.toml if present)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Generate a composition and export it as a PNG image
    Export {
        /// Seed for reproducible output (random when omitted)
        #[arg(long)]
        seed: Option<u32>,

        /// Directory the image is saved to (overrides config)
        #[arg(short, long)]
        out_dir: Option<String>,

        /// Animation clock for the captured frame, in seconds
        #[arg(long, default_value_t = 0.0)]
        time: f64,

        /// Skip the presentational delay before publishing
        #[arg(long)]
        no_delay: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,

        /// Path to config file (default: ./cssart.toml if present)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Validate a saved composition (JSON)
    Validate {
        /// Path to the composition file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
