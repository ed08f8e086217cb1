//! The rich-content tree and its pure editing operations.

pub mod editor;
pub mod types;

pub use editor::{EditError, TreePath, insert_placeholder, remove_node};
pub use types::{ContentTree, MAX_TREE_DEPTH, Node};
