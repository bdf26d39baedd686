//! Keyed list reconciliation.
//!
//! Each filtered record owns one card in the gallery, keyed by file name.
//! A render pass only creates, removes or moves what changed, so an
//! unchanged view costs zero node operations and focus inside a card
//! survives keystroke-driven re-renders.

use std::collections::{HashMap, HashSet};

use fsh_core::limits::MAX_TAG_CHARS;
use fsh_core::ports::{NodeKind, ObjectUrlPort, StyleSheetPort, ViewPort};
use fsh_core::{FileName, FontFaceId, FontRecord, NodeId, UserTag};
use tracing::trace;

use crate::font_faces::{css_string, FontFaceCache};

const EMPTY_LIBRARY_MESSAGE: &str = "Your library is empty. Upload .ttf, .otf, .woff or .woff2 files to start.";
const NO_MATCH_MESSAGE: &str = "No fonts match your search.";

/// Ports touched by a render pass.
pub struct RenderContext<'a> {
    pub view: &'a dyn ViewPort,
    pub urls: &'a dyn ObjectUrlPort,
    pub sheet: &'a dyn StyleSheetPort,
}

pub struct RenderRequest<'a> {
    pub records: &'a [FontRecord],
    pub preview_text: &'a str,
    /// Chooses the placeholder wording when `records` is empty.
    pub library_is_empty: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub created: usize,
    pub removed: usize,
    pub moved: usize,
    pub updated: usize,
}

impl RenderStats {
    pub fn is_noop(&self) -> bool {
        *self == RenderStats::default()
    }
}

#[derive(Debug, Clone)]
pub struct RenderedEntry {
    pub card: NodeId,
    pub preview: NodeId,
    pub tag_field: NodeId,
    pub delete_control: NodeId,
    pub face: Option<FontFaceId>,
    tag: Option<UserTag>,
}

#[derive(Debug, Default)]
pub struct ListRenderer {
    entries: HashMap<FileName, RenderedEntry>,
    placeholder: Option<NodeId>,
}

impl ListRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, file_name: &FileName) -> Option<&RenderedEntry> {
        self.entries.get(file_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn placeholder(&self) -> Option<NodeId> {
        self.placeholder
    }

    pub fn render(
        &mut self,
        request: &RenderRequest<'_>,
        faces: &mut FontFaceCache,
        ctx: &RenderContext<'_>,
    ) -> RenderStats {
        let mut stats = RenderStats::default();
        let wanted: HashSet<&FileName> = request.records.iter().map(|r| &r.file_name).collect();

        let stale: Vec<FileName> = self
            .entries
            .keys()
            .filter(|key| !wanted.contains(key))
            .cloned()
            .collect();
        for key in stale {
            if let Some(entry) = self.entries.remove(&key) {
                ctx.view.remove_node(entry.card);
                stats.removed += 1;
            }
        }

        if request.records.is_empty() {
            self.show_placeholder(request.library_is_empty, ctx.view);
            return stats;
        }
        self.hide_placeholder(ctx.view);

        let mut fresh = HashSet::new();
        for record in request.records {
            match self.entries.get_mut(&record.file_name) {
                Some(entry) => {
                    if entry.sync_tag(record, ctx.view) {
                        stats.updated += 1;
                    }
                }
                None => {
                    let entry = build_entry(record, request.preview_text, faces, ctx);
                    fresh.insert(entry.card);
                    self.entries.insert(record.file_name.clone(), entry);
                    stats.created += 1;
                }
            }
        }

        for (index, record) in request.records.iter().enumerate() {
            let Some(expected) = self.entries.get(&record.file_name).map(|e| e.card) else {
                continue;
            };
            let current = ctx.view.gallery_child_at(index);
            if current != Some(expected) {
                ctx.view.gallery_insert_before(expected, current);
                if !fresh.contains(&expected) {
                    stats.moved += 1;
                }
            }
        }

        trace!(?stats, "render pass");
        stats
    }

    /// Rewrites every live preview in place.
    pub fn set_preview_text(&self, text: &str, view: &dyn ViewPort) {
        for entry in self.entries.values() {
            view.set_text(entry.preview, text);
        }
    }

    /// Drops one entry so the next pass rebuilds it from scratch.
    pub fn forget(&mut self, file_name: &FileName, view: &dyn ViewPort) -> bool {
        match self.entries.remove(file_name) {
            Some(entry) => {
                view.remove_node(entry.card);
                true
            }
            None => false,
        }
    }

    fn show_placeholder(&mut self, library_is_empty: bool, view: &dyn ViewPort) {
        let node = *self
            .placeholder
            .get_or_insert_with(|| view.create_node(NodeKind::Placeholder));
        let message = if library_is_empty {
            EMPTY_LIBRARY_MESSAGE
        } else {
            NO_MATCH_MESSAGE
        };
        view.set_text(node, message);
        if view.gallery_child_at(0) != Some(node) {
            view.gallery_insert_before(node, None);
        }
    }

    fn hide_placeholder(&mut self, view: &dyn ViewPort) {
        if let Some(node) = self.placeholder.take() {
            view.remove_node(node);
        }
    }
}

impl RenderedEntry {
    fn sync_tag(&mut self, record: &FontRecord, view: &dyn ViewPort) -> bool {
        if self.tag == record.user_tag {
            return false;
        }
        view.set_attribute(self.tag_field, "value", record.tag_str());
        self.tag = record.user_tag.clone();
        true
    }
}

fn build_entry(
    record: &FontRecord,
    preview_text: &str,
    faces: &mut FontFaceCache,
    ctx: &RenderContext<'_>,
) -> RenderedEntry {
    let view = ctx.view;
    let face = faces.register(record, ctx.urls, ctx.sheet);

    let card = view.create_node(NodeKind::Card);
    view.set_attribute(card, "data-file", &record.file_name);

    let title = view.create_node(NodeKind::Title);
    view.set_text(title, &record.file_name);
    view.append_child(card, title);

    let preview = view.create_node(NodeKind::Preview);
    view.set_text(preview, preview_text);
    match &face {
        Some(id) => view.set_attribute(
            preview,
            "style",
            &format!("font-family: \"{}\", sans-serif", css_string(id.as_str())),
        ),
        None => view.set_attribute(preview, "data-face", "unavailable"),
    }
    view.append_child(card, preview);

    let tag_field = view.create_node(NodeKind::TagField);
    view.set_attribute(tag_field, "value", record.tag_str());
    view.set_attribute(tag_field, "maxlength", &MAX_TAG_CHARS.to_string());
    view.append_child(card, tag_field);

    let delete_control = view.create_node(NodeKind::DeleteControl);
    view.set_text(delete_control, "Delete");
    view.set_attribute(delete_control, "data-file", &record.file_name);
    view.append_child(card, delete_control);

    RenderedEntry {
        card,
        preview,
        tag_field,
        delete_control,
        face,
        tag: record.user_tag.clone(),
    }
}
