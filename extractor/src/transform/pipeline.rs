//! High-level pipeline: load both inputs, resolve, sort, write both outputs.
//!
//! # Example
//!
//! ```rust,no_run
//! use coros_exercises::transform::pipeline::{run, ExtractOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let result = run(&ExtractOptions::default())?;
//!     println!("Extracted {} exercises", result.records.len());
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use super::resolver::{transform_all, TransformStats};
use super::sort::sort_by_name;
use crate::error::PipelineResult;
use crate::loader::{load_exercises, load_localization};
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::models::CleanExercise;
use crate::writer::write_outputs;

/// Environment variable overriding the input directory
pub const ENV_INPUT_DIR: &str = "EXTRACT_INPUT_DIR";

/// Environment variable overriding the output directory
pub const ENV_OUTPUT_DIR: &str = "EXTRACT_OUTPUT_DIR";

/// Where the pipeline reads from and writes to
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractOptions {
    /// Directory holding both inputs (empty = current directory)
    pub input_dir: PathBuf,

    /// Directory receiving both outputs (empty = current directory)
    pub output_dir: PathBuf,

    pub localization_file: String,
    pub exercises_file: String,
    pub json_output: String,
    pub csv_output: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::new(),
            output_dir: PathBuf::new(),
            localization_file: "en-US.prod.js".to_string(),
            exercises_file: "strength-exercises.json".to_string(),
            json_output: "exercises-clean.json".to_string(),
            csv_output: "exercises.csv".to_string(),
        }
    }
}

impl ExtractOptions {
    /// Defaults, with directories overridden from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults, with directories overridden by `lookup`. Empty values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();
        if let Some(dir) = lookup(ENV_INPUT_DIR).filter(|v| !v.is_empty()) {
            options.input_dir = PathBuf::from(dir);
        }
        if let Some(dir) = lookup(ENV_OUTPUT_DIR).filter(|v| !v.is_empty()) {
            options.output_dir = PathBuf::from(dir);
        }
        options
    }

    pub fn localization_path(&self) -> PathBuf {
        self.input_dir.join(&self.localization_file)
    }

    pub fn exercises_path(&self) -> PathBuf {
        self.input_dir.join(&self.exercises_file)
    }

    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_output)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.csv_output)
    }
}

/// Result of a complete run
#[derive(Debug, Clone)]
pub struct ExtractResult {
    /// Clean records, sorted by name
    pub records: Vec<CleanExercise>,

    /// Resolution statistics
    pub stats: TransformStats,

    pub json_path: PathBuf,
    pub csv_path: PathBuf,
}

/// Run the whole extraction.
///
/// Both inputs are read before anything is resolved, and everything is
/// resolved before anything is written. The first error aborts the run.
pub fn run(options: &ExtractOptions) -> PipelineResult<ExtractResult> {
    let i18n = load_localization(options.localization_path())?;
    let raw = load_exercises(options.exercises_path())?;

    log_info(format!("Total exercises: {}", raw.len()));
    log_info_indent(format!("{} localized names", i18n.len()), 1);

    let output = transform_all(&raw, &i18n)?;
    report_stats(&output.stats);

    let mut records = output.records;
    sort_by_name(&mut records);

    let json_path = options.json_path();
    let csv_path = options.csv_path();
    write_outputs(&records, &json_path, &csv_path)?;

    log_success(format!(
        "Wrote {} exercises to {} and {}",
        records.len(),
        json_path.display(),
        csv_path.display()
    ));

    Ok(ExtractResult {
        records,
        stats: output.stats,
        json_path,
        csv_path,
    })
}

/// Print resolution warnings
fn report_stats(stats: &TransformStats) {
    if stats.missing_names > 0 {
        log_warning(format!("{} exercises have no name code", stats.missing_names));
    }
    if stats.unresolved_names > 0 {
        log_warning(format!(
            "{} exercise names not localized, raw code kept",
            stats.unresolved_names
        ));
    }
    for (category, codes) in &stats.unknown_codes {
        let codes: Vec<&str> = codes.iter().map(String::as_str).collect();
        log_warning(format!(
            "Unknown {} codes in '{}': {}",
            category,
            category.source_field(),
            codes.join(", ")
        ));
    }
}
