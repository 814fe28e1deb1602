//! Form section completion engine
//!
//! Drives multi-section data-entry forms: tracks field values, decides which
//! sections are complete, and gates submission on full completion. The engine
//! is generic over the form shape; callers declare sections once and feed
//! field mutations as the user types. One engine instance per form session.

pub mod engine;
pub mod evaluate;
pub mod field_store;
pub mod gate;
pub mod section;

pub use engine::FormEngine;
pub use evaluate::{evaluate, Evaluation, ValidationWarning};
pub use field_store::FieldStore;
pub use gate::{is_submittable, progress_percent};
pub use section::{ConfigError, SectionDef, SectionId, SectionTable, SectionValidator};
