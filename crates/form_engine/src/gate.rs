use std::collections::BTreeSet;

use crate::section::{SectionId, SectionTable};

/// The form may be submitted only when every declared section is complete
pub fn is_submittable(complete: &BTreeSet<SectionId>, table: &SectionTable) -> bool {
    complete.len() == table.len()
}

/// Overall progress in percent, rounded to the nearest integer.
///
/// The table is guaranteed non-empty by construction, so the division is
/// always defined. Returns 100 exactly when [`is_submittable`] is true.
pub fn progress_percent(complete: &BTreeSet<SectionId>, table: &SectionTable) -> u8 {
    let ratio = complete.len() as f64 / table.len() as f64;
    (ratio * 100.0).round() as u8
}
