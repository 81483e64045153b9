//! Resolve raw exercise records into clean, human-readable ones.
//!
//! Resolution never fails on missing optional fields or unknown codes:
//! names fall back to their raw code and unknown category codes render as
//! `Unknown(<code>)`. A record whose fields have the wrong type (a string
//! inside `part`, a `null` where a list is expected) is rejected and aborts
//! the whole run.

use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::Category;
use crate::error::{TransformError, TransformResult};
use crate::models::{CleanExercise, Localization, RawExercise};

/// What happened while resolving a batch, for reporting only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformStats {
    /// Records without a `name` field
    pub missing_names: usize,
    /// Records whose name code has no localization entry
    pub unresolved_names: usize,
    /// Codes not found in the category tables, as written in the export
    pub unknown_codes: BTreeMap<Category, BTreeSet<String>>,
}

impl TransformStats {
    fn record(&mut self, raw: &RawExercise, i18n: &Localization) {
        match raw.name.as_deref() {
            None => self.missing_names += 1,
            Some(code) if i18n.get(code).is_none() => self.unresolved_names += 1,
            Some(_) => {}
        }

        for category in Category::ALL {
            let table = category.table();
            for code in raw.codes(category) {
                if !table.contains(code) {
                    self.unknown_codes.entry(category).or_default().insert(code.to_string());
                }
            }
        }
    }

    pub fn has_unknown_codes(&self) -> bool {
        !self.unknown_codes.is_empty()
    }
}

/// Records resolved from one export.
#[derive(Debug, Clone, Default)]
pub struct TransformOutput {
    pub records: Vec<CleanExercise>,
    pub stats: TransformStats,
}

/// Decode one element of the `data` array.
pub fn decode_record(index: usize, value: &Value) -> TransformResult<RawExercise> {
    RawExercise::deserialize(value).map_err(|source| TransformError::InvalidRecord { index, source })
}

/// Resolve a decoded record against the localization and category tables.
pub fn resolve(raw: &RawExercise, i18n: &Localization) -> CleanExercise {
    let name = raw.name.as_deref().map(|code| i18n.resolve(code)).unwrap_or("");

    CleanExercise {
        name: name.to_string(),
        body_parts: Category::BodyPart.table().labels(raw.codes(Category::BodyPart)),
        muscles: Category::Muscle.table().labels(raw.codes(Category::Muscle)),
        equipment: Category::Equipment.table().labels(raw.codes(Category::Equipment)),
        thumbnail: raw.thumbnail().to_string(),
        video: raw.video().to_string(),
    }
}

/// Decode and resolve one element of the `data` array.
pub fn transform_record(
    index: usize,
    value: &Value,
    i18n: &Localization,
) -> TransformResult<CleanExercise> {
    decode_record(index, value).map(|raw| resolve(&raw, i18n))
}

/// Resolve every record, in input order. Stops at the first invalid record.
pub fn transform_all(records: &[Value], i18n: &Localization) -> TransformResult<TransformOutput> {
    let mut output = TransformOutput {
        records: Vec::with_capacity(records.len()),
        stats: TransformStats::default(),
    };

    for (index, value) in records.iter().enumerate() {
        let raw = decode_record(index, value)?;
        output.stats.record(&raw, i18n);
        output.records.push(resolve(&raw, i18n));
    }

    Ok(output)
}
