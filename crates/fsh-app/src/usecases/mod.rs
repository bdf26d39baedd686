//! Use cases
//!
//! [user action]
//!      ↓
//! LoadLibrary / UploadFonts / UpdateTag / DeleteFont / ClearLibrary
//!      ↓   (store first; registry and view only after the store resolved)
//! SearchFonts / SetPreviewText        → registry + view only
//!      ↓
//! ExportPrint                         → read-only snapshot of the filtered view

pub mod clear_library;
pub mod delete_font;
pub mod export_print;
pub mod load_library;
pub mod search_fonts;
pub mod set_preview_text;
pub mod update_tag;
pub mod upload_fonts;

pub use clear_library::{ClearLibrary, ClearOutcome};
pub use delete_font::DeleteFont;
pub use export_print::{ExportPrint, PrintDocument};
pub use load_library::LoadLibrary;
pub use search_fonts::SearchFonts;
pub use set_preview_text::SetPreviewText;
pub use update_tag::UpdateTag;
pub use upload_fonts::{UploadFonts, UploadOutcome, UploadReport};
