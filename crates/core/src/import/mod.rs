//! Import normalization for externally authored documents.
//!
//! The upload pipeline converts a word-processor file into a content tree
//! whose variable references are still literal `{{name}}` text. The
//! normalizer rewrites those markers into true placeholder nodes so they
//! resolve at merge time and survive further editing.
//!
//! Ordinary edit operations never invoke this: brace-shaped text a user
//! types on purpose stays literal unless the document passes through import
//! again.

use tracing::debug;

use crate::content::{ContentTree, MAX_TREE_DEPTH, Node};
use crate::placeholder::PlaceholderNode;

/// Result of normalizing an imported document. Never a failure: malformed
/// markers degrade to literal text and the count is informational only
/// (user-facing confirmation, not correctness gating).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOutcome {
    pub tree: ContentTree,
    /// Placeholders recovered from text markers.
    pub placeholder_count: usize,
}

/// Rewrite `{{name}}` markers in every text run into placeholder nodes.
///
/// Each run is scanned once, left to right. A marker becomes a placeholder
/// when the segment between `{{` and the next `}}` is non-empty, contains
/// no `}` and opens no nested `{{`; otherwise the `{{` stays literal and
/// scanning resumes after it. A lone `{` is an ordinary identifier
/// character.
/// Identifiers outside any compiled catalog still become placeholders -
/// the syntax is treated uniformly and the binding simply fails resolution
/// at merge time. Formatting wrappers around a run are preserved around the
/// split segments.
#[must_use]
pub fn normalize(tree: &ContentTree) -> ImportOutcome {
    let mut count = 0;
    let content = normalize_children(&tree.content, &mut count, 0);
    debug!(placeholders = count, "import normalization complete");
    ImportOutcome { tree: ContentTree::new(content), placeholder_count: count }
}

fn normalize_children(nodes: &[Node], count: &mut usize, depth: usize) -> Vec<Node> {
    if depth > MAX_TREE_DEPTH {
        return nodes.to_vec();
    }
    nodes
        .iter()
        .flat_map(|node| normalize_node(node, count, depth))
        .collect()
}

fn normalize_node(node: &Node, count: &mut usize, depth: usize) -> Vec<Node> {
    match node {
        Node::Text { text } => split_run(text, count),
        Node::Placeholder(_) | Node::HardBreak => vec![node.clone()],
        _ => {
            let children = node.children().unwrap_or_default();
            let normalized = normalize_children(children, count, depth + 1);
            vec![node.with_children(normalized)]
        }
    }
}

/// Split one text run at every well-formed `{{name}}` marker.
///
/// Single pass: each byte is visited once, no rescans.
fn split_run(text: &str, count: &mut usize) -> Vec<Node> {
    if text.is_empty() {
        return vec![Node::text(text)];
    }

    let mut nodes = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            // Unterminated marker: the remainder is literal text.
            break;
        };
        let inner = &after[..end];
        if inner.is_empty() || inner.contains("{{") || inner.contains('}') {
            // Malformed marker: keep the `{{` literal, resume right after
            // it. Never consumes past the next `}}`.
            literal.push_str(&rest[..start + 2]);
            rest = after;
            continue;
        }

        literal.push_str(&rest[..start]);
        if !literal.is_empty() {
            nodes.push(Node::text(std::mem::take(&mut literal)));
        }
        nodes.push(Node::Placeholder(PlaceholderNode::new(inner)));
        *count += 1;
        rest = &after[end + 2..];
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        nodes.push(Node::text(literal));
    }
    nodes
}
