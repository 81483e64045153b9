//! extract-exercises - COROS strength exercises to clean JSON and CSV
//!
//! ```bash
//! extract-exercises                       # read and write in the current directory
//! extract-exercises --input-dir research  # read inputs from research/
//! ```
//!
//! Directories can also be set with `EXTRACT_INPUT_DIR` and
//! `EXTRACT_OUTPUT_DIR` (a `.env` file is honoured). Flags win over the
//! environment.

use clap::Parser;
use coros_exercises::{logs::log_error, run, ExtractOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "extract-exercises")]
#[command(about = "Extract COROS strength exercises into clean JSON and CSV", long_about = None)]
struct Cli {
    /// Directory containing en-US.prod.js and strength-exercises.json
    #[arg(short, long)]
    input_dir: Option<PathBuf>,

    /// Directory receiving exercises-clean.json and exercises.csv
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut options = ExtractOptions::from_env();
    if let Some(dir) = cli.input_dir {
        options.input_dir = dir;
    }
    if let Some(dir) = cli.output_dir {
        options.output_dir = dir;
    }

    if let Err(e) = run(&options) {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
