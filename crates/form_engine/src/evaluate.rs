use std::collections::BTreeSet;

use crate::field_store::FieldStore;
use crate::section::{SectionId, SectionTable};

/// A section validator reported an error instead of a verdict.
///
/// The section stays incomplete, but the failure must reach the caller
/// rather than silently looking like a missing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub section_id: SectionId,
    pub message: String,
}

/// Result of one full recomputation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub complete: BTreeSet<SectionId>,
    pub warnings: Vec<ValidationWarning>,
}

/// Recompute the set of complete sections from scratch.
///
/// Pure and idempotent: the same field store always yields the same result,
/// regardless of the order in which fields were set to reach it. Sections are
/// independent; completing one never affects another. A section is complete
/// iff every required field is filled and its validator (if any) returns true.
pub fn evaluate(fields: &FieldStore, table: &SectionTable) -> Evaluation {
    let mut result = Evaluation::default();

    for section in table.sections() {
        let all_filled = section
            .required_fields
            .iter()
            .all(|name| fields.is_filled(name));
        if !all_filled {
            continue;
        }

        match section.validator {
            None => {
                result.complete.insert(section.id);
            }
            Some(validator) => match validator(fields) {
                Ok(true) => {
                    result.complete.insert(section.id);
                }
                Ok(false) => {}
                Err(message) => {
                    log::warn!(
                        "validator failed for section {} ({}): {}",
                        section.id,
                        section.label,
                        message
                    );
                    result.warnings.push(ValidationWarning {
                        section_id: section.id,
                        message,
                    });
                }
            },
        }
    }

    result
}
