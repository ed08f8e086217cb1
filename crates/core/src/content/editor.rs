//! Pure tree-transformation operations for the editing surface.
//!
//! The editor integration calls these instead of mutating a live document:
//! each operation takes the current tree by reference and returns a new
//! tree, leaving the input untouched. Invalid paths are programming errors
//! and surface as [`EditError`] rather than diagnostics.

use thiserror::Error;

use super::types::{ContentTree, Node};
use crate::placeholder::PlaceholderNode;

/// Address of a node inside a content tree: child indices from the root
/// down. An empty path is not a valid node address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreePath {
    pub indices: Vec<usize>,
}

impl TreePath {
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }
}

impl From<Vec<usize>> for TreePath {
    fn from(indices: Vec<usize>) -> Self {
        Self { indices }
    }
}

#[derive(Debug, Error)]
pub enum EditError {
    #[error("path is empty; a node address needs at least one index")]
    EmptyPath,

    #[error("path index {index} is out of bounds (container has {len} children)")]
    OutOfBounds { index: usize, len: usize },

    #[error("path descends into a leaf node")]
    NotAContainer,

    #[error("offset {offset} is not a character boundary of the text run")]
    BadOffset { offset: usize },

    #[error("placeholders are atomic; delete and replace instead of splitting")]
    AtomicSplit,
}

/// Insert a placeholder at `path`/`offset`, returning the new tree.
///
/// `path` addresses an inline position: if it points at a text run, the run
/// is split at byte `offset` and the placeholder is placed between the two
/// halves (empty halves are dropped). If it points one past the end of a
/// container's children, the placeholder is appended (`offset` must be 0).
/// Pointing into a placeholder with a non-zero offset is an error: the node
/// cannot be split.
///
/// # Errors
/// Returns [`EditError`] for empty, out-of-bounds or non-container paths,
/// offsets off a character boundary, and attempted placeholder splits.
pub fn insert_placeholder(
    tree: &ContentTree,
    path: &TreePath,
    offset: usize,
    variable_name: &str,
) -> Result<ContentTree, EditError> {
    let mut out = tree.clone();
    let (container, index) = locate_container(&mut out, path)?;
    let placeholder = Node::Placeholder(PlaceholderNode::new(variable_name));

    if index == container.len() {
        if offset != 0 {
            return Err(EditError::BadOffset { offset });
        }
        container.push(placeholder);
        return Ok(out);
    }

    match &container[index] {
        Node::Text { text } => {
            if !text.is_char_boundary(offset.min(text.len())) || offset > text.len() {
                return Err(EditError::BadOffset { offset });
            }
            let (left, right) = (text[..offset].to_string(), text[offset..].to_string());
            let mut replacement = Vec::with_capacity(3);
            if !left.is_empty() {
                replacement.push(Node::text(left));
            }
            replacement.push(placeholder);
            if !right.is_empty() {
                replacement.push(Node::text(right));
            }
            container.splice(index..=index, replacement);
        }
        Node::Placeholder(_) if offset != 0 => return Err(EditError::AtomicSplit),
        _ => {
            if offset != 0 {
                return Err(EditError::BadOffset { offset });
            }
            container.insert(index, placeholder);
        }
    }

    Ok(out)
}

/// Remove the node at `path` wholesale, returning the new tree.
///
/// This is the delete-and-replace primitive placeholder atomicity requires:
/// a placeholder is never truncated, it is removed as one unit.
///
/// # Errors
/// Returns [`EditError`] for empty, out-of-bounds or non-container paths.
pub fn remove_node(tree: &ContentTree, path: &TreePath) -> Result<ContentTree, EditError> {
    let mut out = tree.clone();
    let (container, index) = locate_container(&mut out, path)?;
    if index >= container.len() {
        return Err(EditError::OutOfBounds { index, len: container.len() });
    }
    container.remove(index);
    Ok(out)
}

/// Walk `path` down to the vector holding the addressed slot, returning the
/// containing child list and the final index (which may equal its length
/// for insert-at-end).
fn locate_container<'t>(
    tree: &'t mut ContentTree,
    path: &TreePath,
) -> Result<(&'t mut Vec<Node>, usize), EditError> {
    let (&last, init) = path.indices.split_last().ok_or(EditError::EmptyPath)?;

    let mut container = &mut tree.content;
    for &index in init {
        let len = container.len();
        let node = container
            .get_mut(index)
            .ok_or(EditError::OutOfBounds { index, len })?;
        container = node.children_mut().ok_or(EditError::NotAContainer)?;
    }

    if last > container.len() {
        return Err(EditError::OutOfBounds { index: last, len: container.len() });
    }
    Ok((container, last))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter() -> ContentTree {
        ContentTree::new(vec![Node::paragraph(vec![Node::text("Yth. warga desa")])])
    }

    #[test]
    fn insert_splits_text_run() {
        let tree = letter();
        let out =
            insert_placeholder(&tree, &vec![0, 0].into(), 5, "pemohon.namaLengkap").unwrap();

        assert_eq!(
            out.content[0].children().unwrap(),
            &[
                Node::text("Yth. "),
                Node::placeholder("pemohon.namaLengkap"),
                Node::text("warga desa"),
            ]
        );
        // Input untouched.
        assert_eq!(tree, letter());
    }

    #[test]
    fn insert_at_run_edges_drops_empty_halves() {
        let tree = letter();

        let out = insert_placeholder(&tree, &vec![0, 0].into(), 0, "a").unwrap();
        assert_eq!(out.content[0].children().unwrap().len(), 2);

        let out = insert_placeholder(&tree, &vec![0, 0].into(), 15, "a").unwrap();
        assert_eq!(out.content[0].children().unwrap().len(), 2);
    }

    #[test]
    fn insert_appends_past_the_end() {
        let tree = letter();
        let out = insert_placeholder(&tree, &vec![0, 1].into(), 0, "tanggalSurat").unwrap();
        assert_eq!(
            out.content[0].children().unwrap()[1],
            Node::placeholder("tanggalSurat")
        );
    }

    #[test]
    fn insert_never_splits_a_placeholder() {
        let tree = ContentTree::new(vec![Node::paragraph(vec![Node::placeholder("a")])]);
        let err = insert_placeholder(&tree, &vec![0, 0].into(), 1, "b").unwrap_err();
        assert!(matches!(err, EditError::AtomicSplit));

        // Offset 0 inserts before it instead.
        let out = insert_placeholder(&tree, &vec![0, 0].into(), 0, "b").unwrap();
        assert_eq!(
            out.content[0].children().unwrap(),
            &[Node::placeholder("b"), Node::placeholder("a")]
        );
    }

    #[test]
    fn insert_rejects_non_boundary_offset() {
        let tree = ContentTree::new(vec![Node::paragraph(vec![Node::text("désa")])]);
        let err = insert_placeholder(&tree, &vec![0, 0].into(), 2, "a").unwrap_err();
        assert!(matches!(err, EditError::BadOffset { offset: 2 }));
    }

    #[test]
    fn remove_deletes_wholesale() {
        let tree = ContentTree::new(vec![Node::paragraph(vec![
            Node::text("Yth. "),
            Node::placeholder("pemohon.namaLengkap"),
        ])]);
        let out = remove_node(&tree, &vec![0, 1].into()).unwrap();
        assert_eq!(out.content[0].children().unwrap(), &[Node::text("Yth. ")]);
        assert_eq!(tree.content[0].children().unwrap().len(), 2);
    }

    #[test]
    fn bad_paths_are_errors() {
        let tree = letter();
        assert!(matches!(
            remove_node(&tree, &TreePath::default()),
            Err(EditError::EmptyPath)
        ));
        assert!(matches!(
            remove_node(&tree, &vec![3].into()),
            Err(EditError::OutOfBounds { .. })
        ));
        assert!(matches!(
            remove_node(&tree, &vec![0, 0, 0].into()),
            Err(EditError::NotAContainer)
        ));
    }
}
