//! Retained document tree backing the gallery.
//!
//! Nodes live in an arena keyed by [`NodeId`]; the gallery is the ordered
//! list of its direct children. Creation, removal and move counters let
//! callers observe how much work a render pass did.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use fsh_core::ports::{NodeKind, ViewPort};
use fsh_core::NodeId;
use tracing::warn;

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    text: String,
    attributes: BTreeMap<String, String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

#[derive(Debug, Default)]
struct Document {
    nodes: HashMap<NodeId, Node>,
    gallery: Vec<NodeId>,
    next_id: u64,
    created: usize,
    removed: usize,
    moves: usize,
}

impl Document {
    fn detach(&mut self, node: NodeId) {
        let parent = self.nodes.get_mut(&node).and_then(|n| n.parent.take());
        match parent {
            Some(parent) => {
                if let Some(p) = self.nodes.get_mut(&parent) {
                    p.children.retain(|c| *c != node);
                }
            }
            None => self.gallery.retain(|c| *c != node),
        }
    }

    fn drop_subtree(&mut self, node: NodeId) {
        let mut pending = vec![node];
        while let Some(id) = pending.pop() {
            if let Some(n) = self.nodes.remove(&id) {
                self.removed += 1;
                pending.extend(n.children);
            }
        }
    }
}

/// Snapshot of one gallery child, as a user would read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryItem {
    Card {
        title: String,
        preview: String,
        tag: String,
        face_available: bool,
    },
    Placeholder(String),
}

#[derive(Debug, Default)]
pub struct RetainedDocument {
    doc: Mutex<Document>,
}

impl RetainedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    fn doc(&self) -> MutexGuard<'_, Document> {
        self.doc.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Nodes created since construction.
    pub fn created_count(&self) -> usize {
        self.doc().created
    }

    /// Nodes released since construction, subtrees included.
    pub fn removed_count(&self) -> usize {
        self.doc().removed
    }

    pub fn move_count(&self) -> usize {
        self.doc().moves
    }

    pub fn live_node_count(&self) -> usize {
        self.doc().nodes.len()
    }

    pub fn gallery_children(&self) -> Vec<NodeId> {
        self.doc().gallery.clone()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.doc().nodes.contains_key(&node)
    }

    pub fn kind(&self, node: NodeId) -> Option<NodeKind> {
        self.doc().nodes.get(&node).map(|n| n.kind)
    }

    pub fn text(&self, node: NodeId) -> Option<String> {
        self.doc().nodes.get(&node).map(|n| n.text.clone())
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.doc()
            .nodes
            .get(&node)
            .and_then(|n| n.attributes.get(name).cloned())
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.doc()
            .nodes
            .get(&node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// Reads the gallery top to bottom.
    pub fn gallery_items(&self) -> Vec<GalleryItem> {
        let doc = self.doc();
        doc.gallery
            .iter()
            .filter_map(|id| doc.nodes.get(id))
            .map(|node| match node.kind {
                NodeKind::Placeholder => GalleryItem::Placeholder(node.text.clone()),
                _ => {
                    let mut title = String::new();
                    let mut preview = String::new();
                    let mut tag = String::new();
                    let mut face_available = true;
                    for child in node.children.iter().filter_map(|c| doc.nodes.get(c)) {
                        match child.kind {
                            NodeKind::Title => title = child.text.clone(),
                            NodeKind::Preview => {
                                preview = child.text.clone();
                                face_available = !child.attributes.contains_key("data-face");
                            }
                            NodeKind::TagField => {
                                tag = child.attributes.get("value").cloned().unwrap_or_default();
                            }
                            _ => {}
                        }
                    }
                    GalleryItem::Card {
                        title,
                        preview,
                        tag,
                        face_available,
                    }
                }
            })
            .collect()
    }

    /// Titles of the cards in gallery order.
    pub fn card_titles(&self) -> Vec<String> {
        self.gallery_items()
            .into_iter()
            .filter_map(|item| match item {
                GalleryItem::Card { title, .. } => Some(title),
                GalleryItem::Placeholder(_) => None,
            })
            .collect()
    }

    pub fn placeholder_text(&self) -> Option<String> {
        self.gallery_items().into_iter().find_map(|item| match item {
            GalleryItem::Placeholder(text) => Some(text),
            GalleryItem::Card { .. } => None,
        })
    }
}

impl ViewPort for RetainedDocument {
    fn create_node(&self, kind: NodeKind) -> NodeId {
        let mut doc = self.doc();
        doc.next_id += 1;
        let id = NodeId(doc.next_id);
        doc.nodes.insert(
            id,
            Node {
                kind,
                text: String::new(),
                attributes: BTreeMap::new(),
                children: Vec::new(),
                parent: None,
            },
        );
        doc.created += 1;
        id
    }

    fn set_text(&self, node: NodeId, text: &str) {
        if let Some(n) = self.doc().nodes.get_mut(&node) {
            n.text = text.to_string();
        }
    }

    fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        if let Some(n) = self.doc().nodes.get_mut(&node) {
            n.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn append_child(&self, parent: NodeId, child: NodeId) {
        let mut doc = self.doc();
        if !doc.nodes.contains_key(&parent) || !doc.nodes.contains_key(&child) {
            warn!(?parent, ?child, "append_child on unknown node");
            return;
        }
        doc.detach(child);
        if let Some(c) = doc.nodes.get_mut(&child) {
            c.parent = Some(parent);
        }
        if let Some(p) = doc.nodes.get_mut(&parent) {
            p.children.push(child);
        }
    }

    fn remove_node(&self, node: NodeId) {
        let mut doc = self.doc();
        if !doc.nodes.contains_key(&node) {
            return;
        }
        doc.detach(node);
        doc.drop_subtree(node);
    }

    fn gallery_child_at(&self, index: usize) -> Option<NodeId> {
        self.doc().gallery.get(index).copied()
    }

    fn gallery_insert_before(&self, node: NodeId, reference: Option<NodeId>) {
        if reference == Some(node) {
            return;
        }
        let mut doc = self.doc();
        if !doc.nodes.contains_key(&node) {
            warn!(?node, "gallery insert of unknown node");
            return;
        }
        doc.detach(node);
        let position = reference
            .and_then(|r| doc.gallery.iter().position(|c| *c == r))
            .unwrap_or(doc.gallery.len());
        doc.gallery.insert(position, node);
        doc.moves += 1;
    }

    fn gallery_len(&self) -> usize {
        self.doc().gallery.len()
    }
}
