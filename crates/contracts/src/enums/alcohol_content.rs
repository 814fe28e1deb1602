use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Whether a product contains alcohol.
///
/// Historically the catalog stored this flag as free text and different
/// screens wrote different casings ("Yes", "no", ...). The canonical wire
/// form is "Yes"/"No"; parsing is case-insensitive so legacy rows still load,
/// and everything is normalized back to the canonical form on write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlcoholContent {
    Yes,
    No,
}

impl AlcoholContent {
    /// Canonical wire code
    pub fn code(&self) -> &'static str {
        match self {
            AlcoholContent::Yes => "Yes",
            AlcoholContent::No => "No",
        }
    }

    /// Human-readable label for the admin UI
    pub fn display_name(&self) -> &'static str {
        match self {
            AlcoholContent::Yes => "Mengandung Alkohol",
            AlcoholContent::No => "Bebas Alkohol",
        }
    }

    pub fn all() -> Vec<AlcoholContent> {
        vec![AlcoholContent::Yes, AlcoholContent::No]
    }

    /// Case-insensitive parse; whitespace around the value is ignored
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "yes" => Some(AlcoholContent::Yes),
            "no" => Some(AlcoholContent::No),
            _ => None,
        }
    }

    pub fn is_alcohol_free(&self) -> bool {
        matches!(self, AlcoholContent::No)
    }
}

impl std::fmt::Display for AlcoholContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for AlcoholContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for AlcoholContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CodeVisitor;

        impl Visitor<'_> for CodeVisitor {
            type Value = AlcoholContent;

            fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str("\"Yes\" or \"No\"")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
                AlcoholContent::from_code(value)
                    .ok_or_else(|| E::custom(format!("invalid alcohol content: {value:?}")))
            }
        }

        deserializer.deserialize_str(CodeVisitor)
    }
}
