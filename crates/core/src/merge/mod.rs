//! Placeholder resolution and merge.
//!
//! [`engine::merge`] walks a content tree, resolves each placeholder against
//! a [`context::ContextValue`] graph and replaces it with formatted text,
//! collecting unresolved names and type errors instead of failing.

pub mod context;
pub mod engine;
mod format;

pub use context::ContextValue;
pub use engine::{
    MergeError, MergeOptions, MergeOutput, MergeResult, OutputMode, TypeErrorEntry, merge,
};
