//! Retained-mode document port.
//!
//! The gallery is one container whose direct children are cards (or the
//! placeholder). Cards own their own sub-nodes.

use crate::ids::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Card,
    Title,
    Preview,
    TagField,
    DeleteControl,
    Placeholder,
}

pub trait ViewPort: Send + Sync {
    /// Creates a detached node.
    fn create_node(&self, kind: NodeKind) -> NodeId;

    fn set_text(&self, node: NodeId, text: &str);

    fn set_attribute(&self, node: NodeId, name: &str, value: &str);

    fn append_child(&self, parent: NodeId, child: NodeId);

    /// Detaches `node` and releases it together with its subtree.
    fn remove_node(&self, node: NodeId);

    /// Node at `index` among the gallery's direct children.
    fn gallery_child_at(&self, index: usize) -> Option<NodeId>;

    /// Moves (or attaches) `node` in the gallery before `reference`,
    /// or at the end when `reference` is `None`.
    fn gallery_insert_before(&self, node: NodeId, reference: Option<NodeId>);

    fn gallery_len(&self) -> usize;
}
