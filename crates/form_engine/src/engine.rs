use std::collections::BTreeSet;

use uuid::Uuid;

use crate::evaluate::{evaluate, Evaluation, ValidationWarning};
use crate::field_store::FieldStore;
use crate::gate::{is_submittable, progress_percent};
use crate::section::{ConfigError, SectionDef, SectionId, SectionTable};

/// Stateful facade over one form session.
///
/// Owns the field snapshot and the section table; every mutation triggers an
/// immediate synchronous full recomputation, so readers always see a state
/// consistent with the last mutation. One instance per open form; there is no
/// shared or global state between instances.
#[derive(Debug, Clone)]
pub struct FormEngine {
    session_id: Uuid,
    table: SectionTable,
    fields: FieldStore,
    evaluation: Evaluation,
}

impl FormEngine {
    /// Build an engine over a validated section table
    pub fn new(table: SectionTable) -> Self {
        let fields = FieldStore::new();
        let evaluation = evaluate(&fields, &table);
        Self {
            session_id: Uuid::new_v4(),
            table,
            fields,
            evaluation,
        }
    }

    /// Convenience constructor from raw section definitions
    pub fn from_sections(sections: Vec<SectionDef>) -> Result<Self, ConfigError> {
        Ok(Self::new(SectionTable::new(sections)?))
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn table(&self) -> &SectionTable {
        &self.table
    }

    pub fn fields(&self) -> &FieldStore {
        &self.fields
    }

    /// Set one field and recompute completion before returning
    pub fn set_field(&mut self, name: &str, value: &str) {
        self.fields = self.fields.with_value(name, value);
        self.recompute();
    }

    /// Clear every field, as after a reset action or a successful submission
    pub fn reset(&mut self) {
        self.fields = FieldStore::new();
        self.recompute();
    }

    /// Sections currently satisfied
    pub fn completion_state(&self) -> &BTreeSet<SectionId> {
        &self.evaluation.complete
    }

    /// Validator failures from the latest recomputation
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.evaluation.warnings
    }

    pub fn is_submittable(&self) -> bool {
        is_submittable(&self.evaluation.complete, &self.table)
    }

    pub fn progress_percent(&self) -> u8 {
        progress_percent(&self.evaluation.complete, &self.table)
    }

    fn recompute(&mut self) {
        let next = evaluate(&self.fields, &self.table);
        if next.complete != self.evaluation.complete {
            log::debug!(
                "form {}: complete sections {:?} -> {:?}",
                self.session_id,
                self.evaluation.complete,
                next.complete
            );
        }
        self.evaluation = next;
    }
}
