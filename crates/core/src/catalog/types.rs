//! Catalog data types.

use serde::Serialize;

use crate::letters::LetterType;

/// Which definition list a variable comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableCategory {
    /// Facts about the issuing organization (village office, head official).
    Organization,
    /// Facts about the applicant the letter is issued for.
    Applicant,
    /// Facts specific to one letter type.
    LetterSpecific,
}

/// One addressable variable: a dotted-path name plus display metadata.
///
/// Definitions are build-time constants; within a compiled catalog the
/// `name` is unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableDefinition {
    /// Dotted lookup path into the resolution context, e.g.
    /// `pemohon.namaLengkap`.
    pub name: String,
    /// Short label shown in the insertion UI.
    pub label: String,
    /// Longer help text shown alongside the label.
    pub description: String,
    /// Source list this definition belongs to.
    pub category: VariableCategory,
}

impl VariableDefinition {
    pub(crate) fn new(
        name: &str,
        label: &str,
        description: &str,
        category: VariableCategory,
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            category,
        }
    }
}

/// The ordered, deduplicated variable set for one letter type.
///
/// Built by [`VariableCatalog::compile`]; the order is organization,
/// applicant, then letter-specific, with letter-specific entries shadowing
/// any same-named earlier entry in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableCatalog {
    /// The letter type this catalog was compiled for.
    pub letter_type: LetterType,
    /// Definitions in catalog order.
    pub variables: Vec<VariableDefinition>,
}

impl VariableCatalog {
    /// Number of definitions in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Look up a definition by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&VariableDefinition> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Whether a name is addressable through this catalog.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}
