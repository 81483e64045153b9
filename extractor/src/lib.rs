//! # COROS exercises - strength exercise export to readable JSON and CSV
//!
//! Converts the COROS strength exercise database (`strength-exercises.json`)
//! and its localization table (`en-US.prod.js`) into `exercises-clean.json`
//! and `exercises.csv`.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌─────────────┐     ┌──────────────┐
//! │ en-US.prod.js│────▶│   Loader    │────▶│  Resolver   │────▶│ JSON + CSV   │
//! │ exercises    │     │ (JSON, i18n)│     │ (+ sorting) │     │  writers     │
//! └──────────────┘     └─────────────┘     └─────────────┘     └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coros_exercises::{run, ExtractOptions};
//!
//! let result = run(&ExtractOptions::default()).unwrap();
//! println!("Wrote {} exercises", result.records.len());
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`logs`] - Console logging
//! - [`models`] - Localization, raw and clean exercise records
//! - [`catalog`] - Static body part, muscle and equipment tables
//! - [`loader`] - Input file loading
//! - [`transform`] - Resolution, sorting and the pipeline
//! - [`writer`] - JSON and CSV output

// Core modules
pub mod error;
pub mod logs;
pub mod models;

// Lookup tables
pub mod catalog;

// Input
pub mod loader;

// Transformation
pub mod transform;

// Output
pub mod writer;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{LoadError, ParseError, PipelineError, TransformError, WriteError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use catalog::{Category, LookupTable, BODY_PARTS, EQUIPMENT, MUSCLES};
pub use models::{CleanExercise, Localization, RawExercise};

// =============================================================================
// Re-exports - Loading
// =============================================================================

pub use loader::{load_exercises, load_localization, parse_exercises, parse_localization};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::{
    run, sort_by_name, transform_all, transform_record, ExtractOptions, ExtractResult,
    TransformOutput, TransformStats,
};

// =============================================================================
// Re-exports - Writers
// =============================================================================

pub use writer::{to_csv_string, to_json_string, write_outputs};
