#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Core library for suratmerge - the letter-template merge engine behind a
//! municipal administration portal.
//!
//! The crate owns four concerns:
//! - the variable catalog (which names a letter template may bind),
//! - the placeholder node model (how a bound variable lives inside a
//!   rich-content tree and survives serialization),
//! - import normalization (recovering placeholders from externally
//!   authored documents),
//! - the merge engine (resolving placeholders against a data context at
//!   issuance time).
//!
//! Storage, authentication, routing and the visual editor are external
//! collaborators; this crate is pure library code with no I/O.

pub mod catalog;
pub mod content;
pub mod import;
pub mod letters;
pub mod merge;
pub mod placeholder;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
