//! Variable catalogs: which names a letter template may bind.
//!
//! The registry holds the fixed per-category definition lists; the compiler
//! composes them into the ordered, deduplicated catalog for one letter type
//! and exposes the search used by the editor's insertion UI.

pub mod compiler;
pub mod registry;
pub mod types;

pub use registry::{applicant_definitions, common_definitions, letter_definitions};
pub use types::{VariableCatalog, VariableCategory, VariableDefinition};
