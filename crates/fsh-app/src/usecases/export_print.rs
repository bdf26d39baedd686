//! Printable specimen of the current view.
//!
//! The document is self-contained: blob-backed faces are embedded as
//! base64 `data:` URLs so it renders without the object URL table.

use std::fmt::Write as _;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::DateTime;
use fsh_core::{FontFormat, FontPayload, FontRecord};

use crate::deps::ShelfDeps;
use crate::font_faces::{css_string, font_src};
use crate::state::{lock, SharedState};

#[derive(Debug, Clone)]
pub struct PrintDocument {
    pub html: String,
    pub font_count: usize,
}

pub struct ExportPrint {
    deps: ShelfDeps,
    state: SharedState,
    preview_font_size_px: u16,
}

impl ExportPrint {
    pub fn new(deps: ShelfDeps, state: SharedState, preview_font_size_px: u16) -> Self {
        Self {
            deps,
            state,
            preview_font_size_px,
        }
    }

    /// Builds the specimen for the filtered view (the whole library when
    /// no search is active).
    #[tracing::instrument(name = "usecase.export_print.execute", skip(self))]
    pub fn execute(&self) -> PrintDocument {
        let (records, preview_text, query) = {
            let state = lock(&self.state);
            (
                state.registry.filtered().to_vec(),
                state.preview_text().to_string(),
                state.registry.query().raw().trim().to_string(),
            )
        };

        let generated = DateTime::from_timestamp_millis(self.deps.clock.now_ms())
            .map(|at| at.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_default();

        let mut faces = String::new();
        let mut cards = String::new();
        for record in &records {
            let family = match face_rule(record) {
                Some((family, rule)) => {
                    faces.push_str(&rule);
                    faces.push('\n');
                    format!("\"{}\", sans-serif", css_string(&family))
                }
                None => "sans-serif".to_string(),
            };
            let _ = write!(
                cards,
                "<section class=\"card\">\n  <div class=\"name\">{}</div>\n",
                escape_html(&record.file_name)
            );
            if let Some(tag) = &record.user_tag {
                let _ = writeln!(cards, "  <div class=\"tag\">{}</div>", escape_html(tag.as_str()));
            }
            let _ = write!(
                cards,
                "  <div class=\"sample\" style=\"font-family: {}\">{}</div>\n</section>\n",
                escape_html(&family),
                escape_html(&preview_text)
            );
        }

        let noun = if records.len() == 1 { "font" } else { "fonts" };
        let mut summary = format!("{} {}", records.len(), noun);
        if !query.is_empty() {
            let _ = write!(summary, " matching \u{201C}{}\u{201D}", escape_html(&query));
        }
        if !generated.is_empty() {
            let _ = write!(summary, " · generated {generated}");
        }

        let html = format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>FontShelf specimen</title>
<style>
{faces}body {{ font-family: sans-serif; margin: 1.5cm; color: #111; }}
header {{ border-bottom: 2px solid #111; margin-bottom: 1em; }}
.card {{ break-inside: avoid; page-break-inside: avoid; padding: 0.6em 0; border-bottom: 1px solid #ccc; }}
.name {{ font-size: 11px; color: #555; }}
.tag {{ font-size: 11px; color: #06c; }}
.sample {{ font-size: {size}px; line-height: 1.25; overflow-wrap: anywhere; }}
</style>
</head>
<body>
<header>
<h1>FontShelf specimen</h1>
<p>{summary}</p>
</header>
{cards}</body>
</html>
"#,
            size = self.preview_font_size_px,
        );

        PrintDocument {
            html,
            font_count: records.len(),
        }
    }
}

/// `(family, @font-face rule)` for a record, embedding blob bytes.
fn face_rule(record: &FontRecord) -> Option<(String, String)> {
    let family = record.face_id()?.to_string();
    let src = match &record.data {
        FontPayload::Blob(blob) => {
            let data_url = format!(
                "data:{};base64,{}",
                blob.content_type,
                STANDARD.encode(&blob.bytes)
            );
            font_src(&data_url, blob.format())
        }
        FontPayload::Url(href) => {
            let format = record
                .file_name
                .extension()
                .and_then(|ext| FontFormat::from_extension(&ext));
            font_src(href, format)
        }
        FontPayload::Unsupported => return None,
    };
    let rule = format!(
        "@font-face {{ font-family: \"{}\"; src: {}; }}",
        css_string(&family),
        src
    );
    Some((family, rule))
}

pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
