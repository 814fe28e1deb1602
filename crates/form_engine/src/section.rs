use std::collections::HashSet;

use thiserror::Error;

use crate::field_store::FieldStore;

/// Stable section identifier; ordering in the table is for display only
pub type SectionId = u32;

/// Extra check on top of the required-fields rule.
///
/// `Ok(true)` passes, `Ok(false)` keeps the section incomplete, `Err` keeps
/// the section incomplete and is surfaced to the caller as a warning.
pub type SectionValidator = fn(&FieldStore) -> Result<bool, String>;

/// Configuration errors, fatal at table construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("section table must declare at least one section")]
    NoSections,

    #[error("duplicate section id: {0}")]
    DuplicateSectionId(SectionId),
}

/// One logical step of data entry
#[derive(Debug, Clone)]
pub struct SectionDef {
    pub id: SectionId,
    pub label: &'static str,
    pub required_fields: &'static [&'static str],
    pub validator: Option<SectionValidator>,
}

impl SectionDef {
    pub fn new(id: SectionId, label: &'static str, required_fields: &'static [&'static str]) -> Self {
        Self {
            id,
            label,
            required_fields,
            validator: None,
        }
    }

    pub fn with_validator(mut self, validator: SectionValidator) -> Self {
        self.validator = Some(validator);
        self
    }
}

/// Immutable, validated list of section definitions.
///
/// Zero sections would make the progress percentage a division by zero and
/// duplicate ids would make the completion set ambiguous, so both are
/// rejected here rather than at evaluation time.
#[derive(Debug, Clone)]
pub struct SectionTable {
    sections: Vec<SectionDef>,
}

impl SectionTable {
    pub fn new(sections: Vec<SectionDef>) -> Result<Self, ConfigError> {
        if sections.is_empty() {
            return Err(ConfigError::NoSections);
        }

        let mut seen = HashSet::new();
        for section in &sections {
            if !seen.insert(section.id) {
                return Err(ConfigError::DuplicateSectionId(section.id));
            }
        }

        Ok(Self { sections })
    }

    pub fn sections(&self) -> &[SectionDef] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_rejected() {
        let err = SectionTable::new(vec![]).unwrap_err();
        assert_eq!(err, ConfigError::NoSections);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = SectionTable::new(vec![
            SectionDef::new(1, "Info", &["name"]),
            SectionDef::new(1, "Detail", &["price"]),
        ])
        .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateSectionId(1));
    }

    #[test]
    fn test_valid_table_keeps_declaration_order() {
        let table = SectionTable::new(vec![
            SectionDef::new(2, "Detail", &["price"]),
            SectionDef::new(1, "Info", &["name"]),
        ])
        .unwrap();
        let ids: Vec<SectionId> = table.sections().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
