//! Content tree node types and their persisted JSON shape.
//!
//! The tree mirrors the editor's document model: block nodes hold inline
//! sequences; inline formatting wrappers nest further inlines; text runs and
//! placeholders are the leaves. The serde model is internally tagged by a
//! `type` field so persisted documents match the portal's stored shape.

use serde::{Deserialize, Serialize};

use crate::placeholder::PlaceholderNode;

/// Maximum nesting depth any traversal in this crate will follow.
///
/// Real letter documents are a handful of levels deep; the bound exists so
/// no traversal can recurse without limit on a hostile tree.
pub const MAX_TREE_DEPTH: usize = 64;

/// One node of a content tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Node {
    /// Block: a paragraph of inline content.
    Paragraph {
        #[serde(default)]
        content: Vec<Node>,
    },
    /// Block: a heading of inline content.
    Heading {
        level: u8,
        #[serde(default)]
        content: Vec<Node>,
    },
    /// Inline leaf: a literal text run.
    Text { text: String },
    /// Inline leaf: an atomic bound-variable node.
    Placeholder(PlaceholderNode),
    /// Inline formatting wrapper: bold.
    Strong {
        #[serde(default)]
        content: Vec<Node>,
    },
    /// Inline formatting wrapper: italic.
    Emphasis {
        #[serde(default)]
        content: Vec<Node>,
    },
    /// Inline formatting wrapper: underline.
    Underline {
        #[serde(default)]
        content: Vec<Node>,
    },
    /// Inline leaf: an explicit line break.
    HardBreak,
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into() }
    }

    pub fn placeholder(variable_name: impl Into<String>) -> Self {
        Node::Placeholder(PlaceholderNode::new(variable_name))
    }

    pub fn paragraph(content: Vec<Node>) -> Self {
        Node::Paragraph { content }
    }

    /// Child nodes, if this node kind has any.
    #[must_use]
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Paragraph { content }
            | Node::Heading { content, .. }
            | Node::Strong { content }
            | Node::Emphasis { content }
            | Node::Underline { content } => Some(content),
            Node::Text { .. } | Node::Placeholder(_) | Node::HardBreak => None,
        }
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Paragraph { content }
            | Node::Heading { content, .. }
            | Node::Strong { content }
            | Node::Emphasis { content }
            | Node::Underline { content } => Some(content),
            Node::Text { .. } | Node::Placeholder(_) | Node::HardBreak => None,
        }
    }

    /// Rebuild this node around a new child list. Leaf nodes are returned
    /// unchanged and the list is ignored.
    #[must_use]
    pub(crate) fn with_children(&self, content: Vec<Node>) -> Node {
        match self {
            Node::Paragraph { .. } => Node::Paragraph { content },
            Node::Heading { level, .. } => Node::Heading { level: *level, content },
            Node::Strong { .. } => Node::Strong { content },
            Node::Emphasis { .. } => Node::Emphasis { content },
            Node::Underline { .. } => Node::Underline { content },
            leaf => leaf.clone(),
        }
    }
}

/// An ordered rich-content document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTree {
    #[serde(default)]
    pub content: Vec<Node>,
}

impl ContentTree {
    #[must_use]
    pub fn new(content: Vec<Node>) -> Self {
        Self { content }
    }

    /// Flatten the tree to plain text: top-level blocks joined by newlines,
    /// hard breaks as newlines, placeholders as their canonical `{{name}}`
    /// form. Nesting beyond [`MAX_TREE_DEPTH`] is not descended into.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for (i, node) in self.content.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            flatten_into(node, &mut out, 0);
        }
        out
    }

    /// All placeholder names in document order (duplicates kept).
    #[must_use]
    pub fn placeholder_names(&self) -> Vec<&str> {
        let mut names = Vec::new();
        let mut stack: Vec<&Node> = self.content.iter().rev().collect();
        while let Some(node) = stack.pop() {
            if let Node::Placeholder(p) = node {
                names.push(p.variable_name.as_str());
            } else if let Some(children) = node.children() {
                stack.extend(children.iter().rev());
            }
        }
        names
    }
}

fn flatten_into(node: &Node, out: &mut String, depth: usize) {
    if depth > MAX_TREE_DEPTH {
        return;
    }
    match node {
        Node::Text { text } => out.push_str(text),
        Node::Placeholder(p) => out.push_str(&p.to_text()),
        Node::HardBreak => out.push('\n'),
        _ => {
            if let Some(children) = node.children() {
                for child in children {
                    flatten_into(child, out, depth + 1);
                }
            }
        }
    }
}
