//! Domain models for the exercise extraction pipeline.
//!
//! - [`Localization`] - Name code to display string table
//! - [`RawExercise`] - One record of the vendor export, as received
//! - [`CleanExercise`] - Fully resolved, human-readable exercise

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;
use std::collections::HashMap;

use crate::catalog::Category;

// =============================================================================
// Localization
// =============================================================================

/// Mapping from opaque name codes to display strings for one locale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Localization {
    entries: HashMap<String, String>,
}

impl Localization {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Get the display string for a code, if present.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Get the display string for a code, falling back to the code itself.
    pub fn resolve<'a>(&'a self, code: &'a str) -> &'a str {
        self.get(code).unwrap_or(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, String)> for Localization {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// =============================================================================
// Raw Exercise
// =============================================================================

/// One exercise as found under `data` in the export.
///
/// Every field may be absent. An explicit `null` is accepted only for the
/// URL fields; a `null` name or category list is a malformed record.
/// Fields the export carries beyond these are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExercise {
    /// Localization code of the exercise name
    #[serde(default, deserialize_with = "non_null")]
    pub name: Option<String>,
    /// Body part codes
    #[serde(default, deserialize_with = "non_null")]
    pub part: Option<Vec<Number>>,
    /// Muscle codes
    #[serde(default, deserialize_with = "non_null")]
    pub muscle: Option<Vec<Number>>,
    /// Equipment codes
    #[serde(default, deserialize_with = "non_null")]
    pub equipment: Option<Vec<Number>>,
    /// Comma-separated cover image URLs
    #[serde(default)]
    pub cover_url_arr_str: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

/// Deserialize a field that may be absent but must not be `null`.
fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl RawExercise {
    /// Codes for one taxonomy, empty when the field is missing.
    pub fn codes(&self, category: Category) -> &[Number] {
        let codes = match category {
            Category::BodyPart => &self.part,
            Category::Muscle => &self.muscle,
            Category::Equipment => &self.equipment,
        };
        codes.as_deref().unwrap_or(&[])
    }

    /// First cover URL, or an empty string.
    pub fn thumbnail(&self) -> &str {
        match self.cover_url_arr_str.as_deref() {
            Some(covers) if !covers.is_empty() => covers.split(',').next().unwrap_or(""),
            _ => "",
        }
    }

    pub fn video(&self) -> &str {
        self.video_url.as_deref().unwrap_or("")
    }
}

// =============================================================================
// Clean Exercise
// =============================================================================

/// Output record. Field order is the key order of the JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanExercise {
    pub name: String,
    pub body_parts: Vec<String>,
    pub muscles: Vec<String>,
    pub equipment: Vec<String>,
    pub thumbnail: String,
    pub video: String,
}

impl CleanExercise {
    /// Labels for one taxonomy.
    pub fn labels(&self, category: Category) -> &[String] {
        match category {
            Category::BodyPart => &self.body_parts,
            Category::Muscle => &self.muscles,
            Category::Equipment => &self.equipment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_localization_fallback() {
        let i18n: Localization = [("x1".to_string(), "Push Up".to_string())]
            .into_iter()
            .collect();

        assert_eq!(i18n.resolve("x1"), "Push Up");
        assert_eq!(i18n.resolve("x2"), "x2");
        assert_eq!(i18n.len(), 1);
    }

    #[test]
    fn test_raw_exercise_all_fields() {
        let raw: RawExercise = serde_json::from_value(json!({
            "name": "x1",
            "part": [0],
            "muscle": [99],
            "equipment": [1],
            "coverUrlArrStr": "http://a,http://b",
            "videoUrl": "http://v",
            "sortNo": 12
        }))
        .unwrap();

        assert_eq!(raw.name.as_deref(), Some("x1"));
        assert_eq!(raw.codes(Category::BodyPart), &[Number::from(0)]);
        assert_eq!(raw.codes(Category::Muscle), &[Number::from(99)]);
        assert_eq!(raw.thumbnail(), "http://a");
        assert_eq!(raw.video(), "http://v");
    }

    #[test]
    fn test_raw_exercise_missing_and_null_fields() {
        let raw: RawExercise = serde_json::from_value(json!({
            "name": "x1",
            "coverUrlArrStr": null,
            "videoUrl": null
        }))
        .unwrap();

        assert!(raw.codes(Category::BodyPart).is_empty());
        assert!(raw.codes(Category::Muscle).is_empty());
        assert!(raw.codes(Category::Equipment).is_empty());
        assert_eq!(raw.thumbnail(), "");
        assert_eq!(raw.video(), "");
    }

    #[test]
    fn test_thumbnail_edge_cases() {
        let single = RawExercise {
            cover_url_arr_str: Some("http://only".into()),
            ..Default::default()
        };
        assert_eq!(single.thumbnail(), "http://only");

        let leading_comma = RawExercise {
            cover_url_arr_str: Some(",http://b".into()),
            ..Default::default()
        };
        assert_eq!(leading_comma.thumbnail(), "");

        let empty = RawExercise {
            cover_url_arr_str: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(empty.thumbnail(), "");
    }

    #[test]
    fn test_null_category_or_name_is_rejected() {
        for field in ["part", "muscle", "equipment", "name"] {
            let mut value = json!({ "name": "x1" });
            value[field] = Value::Null;
            let result: Result<RawExercise, _> = serde_json::from_value(value);
            assert!(result.is_err(), "null {} accepted", field);
        }
    }

    #[test]
    fn test_float_and_large_codes_are_accepted() {
        let raw: RawExercise = serde_json::from_value(json!({
            "part": [1.0, 18446744073709551615u64]
        }))
        .unwrap();

        assert_eq!(raw.codes(Category::BodyPart).len(), 2);
        assert_eq!(raw.codes(Category::BodyPart)[0].as_f64(), Some(1.0));
    }

    #[test]
    fn test_non_integer_code_is_rejected() {
        let result: Result<RawExercise, _> = serde_json::from_value(json!({
            "name": "x1",
            "part": ["legs"]
        }));
        assert!(result.is_err());
    }
}
