//! The merge engine: placeholder resolution over a content tree.

use thiserror::Error;
use tracing::debug;

use super::context::ContextValue;
use super::format::{Formatted, format_value};
use crate::content::{ContentTree, MAX_TREE_DEPTH, Node};
use crate::placeholder::PlaceholderNode;

/// Shape of [`MergeResult::output`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// A new content tree with placeholders replaced by text nodes.
    #[default]
    Tree,
    /// The merged tree flattened to plain text.
    Text,
}

/// Per-merge options. [`MergeOptions::default`] matches the issuing
/// application's defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    pub output_mode: OutputMode,
    /// chrono format string overriding the default date form.
    pub date_format: Option<String>,
    /// Words substituted for `true` / `false`.
    pub boolean_words: (String, String),
    /// Re-emit `{{name}}` for unresolved placeholders instead of an empty
    /// string. The name lands in [`MergeResult::unresolved`] either way.
    pub leave_unresolved_visible: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            output_mode: OutputMode::Tree,
            date_format: None,
            boolean_words: ("Ya".to_string(), "Tidak".to_string()),
            leave_unresolved_visible: false,
        }
    }
}

/// Merged output, per [`OutputMode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutput {
    Tree(ContentTree),
    Text(String),
}

impl MergeOutput {
    /// Plain-text view of the output regardless of mode.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        match self {
            MergeOutput::Tree(tree) => tree.to_plain_text(),
            MergeOutput::Text(text) => text.clone(),
        }
    }
}

/// A placeholder that resolved to a non-scalar shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeErrorEntry {
    pub variable_name: String,
    pub reason: String,
}

/// Outcome of one merge call. Produced fresh per call; the input tree is
/// never mutated. Diagnostics are in traversal order and non-fatal: the
/// caller decides whether they block issuance.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeResult {
    pub output: MergeOutput,
    /// Names whose path was absent in the context.
    pub unresolved: Vec<String>,
    /// Names whose path resolved to a non-scalar.
    pub type_errors: Vec<TypeErrorEntry>,
}

/// The programming-error class. Data-shape problems never land here; they
/// are reported through the [`MergeResult`] diagnostics.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("content tree exceeds the maximum depth of {MAX_TREE_DEPTH}")]
    TreeTooDeep,

    #[error("invalid date format string: {0:?}")]
    InvalidDateFormat(String),
}

/// Resolve every placeholder in `tree` against `context`.
///
/// Pure function of its inputs: no hidden state, no I/O, safe to call
/// concurrently for independent requests. Unresolved names and type
/// mismatches are collected, substituted per `options`, and never abort
/// the merge.
///
/// # Errors
/// [`MergeError::TreeTooDeep`] for trees nested beyond [`MAX_TREE_DEPTH`],
/// [`MergeError::InvalidDateFormat`] for an unparseable
/// [`MergeOptions::date_format`].
pub fn merge(
    tree: &ContentTree,
    context: &ContextValue,
    options: &MergeOptions,
) -> Result<MergeResult, MergeError> {
    if let Some(fmt) = &options.date_format {
        validate_date_format(fmt)?;
    }

    let mut diagnostics = Diagnostics::default();
    let content = merge_children(&tree.content, context, options, &mut diagnostics, 0)?;
    let merged = ContentTree::new(content);

    debug!(
        unresolved = diagnostics.unresolved.len(),
        type_errors = diagnostics.type_errors.len(),
        "merge complete"
    );

    let output = match options.output_mode {
        OutputMode::Tree => MergeOutput::Tree(merged),
        OutputMode::Text => MergeOutput::Text(merged.to_plain_text()),
    };

    Ok(MergeResult {
        output,
        unresolved: diagnostics.unresolved,
        type_errors: diagnostics.type_errors,
    })
}

#[derive(Default)]
struct Diagnostics {
    unresolved: Vec<String>,
    type_errors: Vec<TypeErrorEntry>,
}

fn merge_children(
    nodes: &[Node],
    context: &ContextValue,
    options: &MergeOptions,
    diagnostics: &mut Diagnostics,
    depth: usize,
) -> Result<Vec<Node>, MergeError> {
    if depth > MAX_TREE_DEPTH {
        return Err(MergeError::TreeTooDeep);
    }
    nodes
        .iter()
        .map(|node| merge_node(node, context, options, diagnostics, depth))
        .collect()
}

fn merge_node(
    node: &Node,
    context: &ContextValue,
    options: &MergeOptions,
    diagnostics: &mut Diagnostics,
    depth: usize,
) -> Result<Node, MergeError> {
    match node {
        Node::Placeholder(p) => Ok(resolve_placeholder(p, context, options, diagnostics)),
        Node::Text { .. } | Node::HardBreak => Ok(node.clone()),
        _ => {
            let children = node.children().unwrap_or_default();
            let merged = merge_children(children, context, options, diagnostics, depth + 1)?;
            Ok(node.with_children(merged))
        }
    }
}

fn resolve_placeholder(
    placeholder: &PlaceholderNode,
    context: &ContextValue,
    options: &MergeOptions,
    diagnostics: &mut Diagnostics,
) -> Node {
    let name = &placeholder.variable_name;
    match context.lookup(name) {
        None => {
            diagnostics.unresolved.push(name.clone());
            let text = if options.leave_unresolved_visible {
                placeholder.to_text()
            } else {
                String::new()
            };
            Node::text(text)
        }
        Some(value) => match format_value(value, options) {
            Formatted::Text(text) => Node::text(text),
            Formatted::NotScalar(reason) => {
                diagnostics.type_errors.push(TypeErrorEntry {
                    variable_name: name.clone(),
                    reason: reason.to_string(),
                });
                Node::text(String::new())
            }
        },
    }
}

/// Reject format strings chrono cannot render; formatting with an invalid
/// specifier would otherwise panic inside `Display`.
fn validate_date_format(fmt: &str) -> Result<(), MergeError> {
    use chrono::format::{Item, StrftimeItems};
    if StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error)) {
        return Err(MergeError::InvalidDateFormat(fmt.to_string()));
    }
    Ok(())
}
