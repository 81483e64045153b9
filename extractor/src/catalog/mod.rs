//! Static category tables for the COROS exercise taxonomy.
//!
//! The export identifies body parts, muscles and equipment by small integer
//! codes. Each taxonomy is a [`LookupTable`] fixed at compile time:
//!
//! - [`BODY_PARTS`] - `part` array
//! - [`MUSCLES`] - `muscle` array
//! - [`EQUIPMENT`] - `equipment` array
//!
//! Codes missing from a table render as `Unknown(<code>)`, with the code
//! written the way the export wrote it.

use serde_json::Number;
use std::fmt;

// =============================================================================
// Lookup Table
// =============================================================================

/// Immutable mapping from a category code to its display label.
#[derive(Debug)]
pub struct LookupTable {
    entries: &'static [(i64, &'static str)],
}

impl LookupTable {
    pub const fn new(entries: &'static [(i64, &'static str)]) -> Self {
        Self { entries }
    }

    /// Get the label for a code, if known.
    pub fn get(&self, code: i64) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
    }

    /// Get the label for a code as it appears in the export, if known.
    pub fn find(&self, code: &Number) -> Option<&'static str> {
        code_key(code).and_then(|key| self.get(key))
    }

    /// Get the label for a code, or `Unknown(<code>)`.
    pub fn label(&self, code: &Number) -> String {
        match self.find(code) {
            Some(label) => label.to_string(),
            None => format!("Unknown({})", code),
        }
    }

    /// Resolve a list of codes, keeping their order.
    pub fn labels(&self, codes: &[Number]) -> Vec<String> {
        codes.iter().map(|code| self.label(code)).collect()
    }

    pub fn contains(&self, code: &Number) -> bool {
        self.find(code).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Integer key of a code. Whole floats such as `1.0` map to their integer;
/// fractional or out-of-range values have no key.
pub fn code_key(code: &Number) -> Option<i64> {
    if let Some(key) = code.as_i64() {
        return Some(key);
    }
    let value = code.as_f64()?;
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.fract() == 0.0 && in_range).then(|| value as i64)
}

pub static BODY_PARTS: LookupTable = LookupTable::new(&[
    (0, "Whole Body"),
    (1, "Shoulders"),
    (2, "Chest"),
    (3, "Back"),
    (4, "Core"),
    (5, "Legs/Hips"),
    (6, "Arms"),
]);

pub static MUSCLES: LookupTable = LookupTable::new(&[
    (1, "Deltoids"),
    (2, "Chest"),
    (3, "Biceps"),
    (4, "Triceps"),
    (5, "Forearms"),
    (6, "Abs"),
    (7, "Glutes"),
    (8, "Quadriceps"),
    (9, "Adductor"),
    (10, "Abductor"),
    (11, "Trapezius"),
    (12, "Latissimus Dorsi"),
    (13, "Erector Spinae"),
    (14, "Posterior Thigh"),
    (15, "Calves"),
]);

// 14 and 15 are unassigned
pub static EQUIPMENT: LookupTable = LookupTable::new(&[
    (1, "Bodyweight"),
    (2, "Dumbbells"),
    (3, "Barbells"),
    (4, "Barbell Plates"),
    (5, "Cable/Pulley"),
    (6, "Gym Equipment"),
    (7, "Exercise Ball"),
    (8, "Bosu Ball"),
    (9, "Bands"),
    (10, "Medicine Ball"),
    (11, "Kettlebell"),
    (12, "Hangboard"),
    (13, "Indoor Rower"),
    (16, "Ropes"),
]);

// =============================================================================
// Category
// =============================================================================

/// One of the three taxonomies an exercise is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    BodyPart,
    Muscle,
    Equipment,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::BodyPart, Category::Muscle, Category::Equipment];

    /// The lookup table for this taxonomy.
    pub fn table(&self) -> &'static LookupTable {
        match self {
            Category::BodyPart => &BODY_PARTS,
            Category::Muscle => &MUSCLES,
            Category::Equipment => &EQUIPMENT,
        }
    }

    /// Field name in the raw export.
    pub fn source_field(&self) -> &'static str {
        match self {
            Category::BodyPart => "part",
            Category::Muscle => "muscle",
            Category::Equipment => "equipment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::BodyPart => "body part",
            Category::Muscle => "muscle",
            Category::Equipment => "equipment",
        };
        f.write_str(name)
    }
}
