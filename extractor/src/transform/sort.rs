//! Output ordering.

use crate::models::CleanExercise;

/// Stable sort by display name, ascending.
///
/// Strings compare by code point; no locale collation is applied.
pub fn sort_by_name(records: &mut [CleanExercise]) {
    records.sort_by(|a, b| a.name.cmp(&b.name));
}

/// Whether records are in `sort_by_name` order.
pub fn is_sorted_by_name(records: &[CleanExercise]) -> bool {
    records.windows(2).all(|w| w[0].name <= w[1].name)
}
