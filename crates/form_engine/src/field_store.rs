use std::collections::HashMap;

/// FieldStore holds the current form field values keyed by field name.
///
/// The store is an immutable snapshot: mutation goes through [`with_value`]
/// which returns a fresh store, so a caller holding a snapshot never observes
/// later edits. Any string is accepted, including empty; field names outside
/// the declared sections are stored but ignored by evaluation.
///
/// [`with_value`]: FieldStore::with_value
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldStore {
    values: HashMap<String, String>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// New snapshot with one field replaced
    pub fn with_value(&self, name: &str, value: &str) -> Self {
        let mut values = self.values.clone();
        values.insert(name.to_string(), value.to_string());
        Self { values }
    }

    /// Raw value of a field; a field never set reads as empty
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Value with surrounding whitespace removed
    pub fn get_trimmed(&self, name: &str) -> &str {
        self.get(name).trim()
    }

    /// A field counts as filled when it is non-empty after trimming
    pub fn is_filled(&self, name: &str) -> bool {
        !self.get_trimmed(name).is_empty()
    }

    pub fn all(&self) -> &HashMap<String, String> {
        &self.values
    }
}
