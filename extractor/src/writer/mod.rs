//! Output writers for clean exercises.
//!
//! - JSON: pretty-printed array with every field, non-ASCII kept literal
//! - CSV: `Name,Body Parts,Muscles,Equipment`, multi-values joined with `"; "`
//!
//! Thumbnail and video URLs only appear in the JSON output.

use std::fs;
use std::path::Path;

use crate::catalog::Category;
use crate::error::{WriteError, WriteResult};
use crate::models::CleanExercise;

/// CSV header row
pub const CSV_HEADER: [&str; 4] = ["Name", "Body Parts", "Muscles", "Equipment"];

/// Separator between values of a multi-valued CSV column
pub const LIST_SEPARATOR: &str = "; ";

/// Serialize records as a pretty-printed JSON array.
pub fn to_json_string(records: &[CleanExercise]) -> WriteResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Serialize records as CSV, header first.
pub fn to_csv_string(records: &[CleanExercise]) -> WriteResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record(csv_row(record))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

fn csv_row(record: &CleanExercise) -> [String; 4] {
    [
        record.name.clone(),
        record.labels(Category::BodyPart).join(LIST_SEPARATOR),
        record.labels(Category::Muscle).join(LIST_SEPARATOR),
        record.labels(Category::Equipment).join(LIST_SEPARATOR),
    ]
}

fn write_file(path: &Path, content: &str) -> WriteResult<()> {
    fs::write(path, content).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write both outputs.
///
/// Both are serialized before either file is touched, so a serialization
/// failure leaves no output behind.
pub fn write_outputs(records: &[CleanExercise], json_path: &Path, csv_path: &Path) -> WriteResult<()> {
    let json = to_json_string(records)?;
    let csv = to_csv_string(records)?;

    for path in [json_path, csv_path] {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| WriteError::Io {
                path: dir.to_path_buf(),
                source,
            })?;
        }
    }

    write_file(json_path, &json)?;
    write_file(csv_path, &csv)
}
