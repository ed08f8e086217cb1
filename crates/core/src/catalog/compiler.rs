//! Catalog composition and search.

use super::registry::{applicant_definitions, common_definitions, letter_definitions};
use super::types::{VariableCatalog, VariableDefinition};
use crate::letters::LetterType;

impl VariableCatalog {
    /// Compile the variable catalog for a letter type.
    ///
    /// Order is fixed: organization, applicant, letter-specific, each list
    /// keeping its own order. A letter-specific entry whose name collides
    /// with an earlier entry replaces it in place (first-seen position,
    /// letter-specific content) - the one intentional shadowing rule.
    ///
    /// Deterministic: two calls for the same type produce equal catalogs.
    #[must_use]
    pub fn compile(letter_type: LetterType) -> Self {
        let mut variables = common_definitions();
        variables.extend(applicant_definitions());
        overlay(&mut variables, letter_definitions(letter_type));
        Self { letter_type, variables }
    }

    /// Case-insensitive substring search over `name`, `label` and
    /// `description`, in catalog order. The empty query returns the full
    /// catalog; any other query, whitespace included, is matched verbatim.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&VariableDefinition> {
        if query.is_empty() {
            return self.variables.iter().collect();
        }
        let needle = query.to_lowercase();
        self.variables
            .iter()
            .filter(|def| {
                def.name.to_lowercase().contains(&needle)
                    || def.label.to_lowercase().contains(&needle)
                    || def.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

/// Overlay `extras` onto `base`: same-named entries are replaced where they
/// already sit, new names are appended.
fn overlay(base: &mut Vec<VariableDefinition>, extras: Vec<VariableDefinition>) {
    for extra in extras {
        if let Some(slot) = base.iter_mut().find(|v| v.name == extra.name) {
            *slot = extra;
        } else {
            base.push(extra);
        }
    }
}
