//! Command-line surface.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use fsh_app::usecases::{ClearOutcome, UploadOutcome};
use fsh_core::ports::{ConfirmPort, UploadSource};
use fsh_core::{FileName, ShelfConfig};
use fsh_infra::{FsUploadFile, GalleryItem};
use tracing::warn;

use crate::adapters::{AutoConfirm, StdinConfirm};
use crate::bootstrap::build_shelf;

#[derive(Parser, Debug)]
#[command(name = "fontshelf")]
#[command(about = "Local font gallery: upload, tag, search and print font files", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Library directory, overriding the configuration
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Answer "yes" to confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add .ttf, .otf, .woff or .woff2 files to the library
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Show the gallery
    List {
        /// Only show fonts whose name or tag contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Sample text for the previews
        #[arg(short, long)]
        preview: Option<String>,
    },
    /// Set (or, with an empty tag, clear) a font's tag
    Tag { name: String, tag: String },
    /// Remove one font
    Delete { name: String },
    /// Remove every font
    Clear,
    /// Write a printable HTML specimen
    Export {
        #[arg(short, long)]
        search: Option<String>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

pub async fn run(cli: Cli, config: &ShelfConfig) -> anyhow::Result<ExitCode> {
    let confirm: Arc<dyn ConfirmPort> = if cli.yes {
        Arc::new(AutoConfirm)
    } else {
        Arc::new(StdinConfirm)
    };
    let runtime = build_shelf(config, confirm);
    let shelf = &runtime.shelf;

    shelf
        .load_library()
        .await
        .context("Failed to load font library")?;

    let code = match cli.command {
        Commands::Upload { files } => {
            let mut sources: Vec<Box<dyn UploadSource>> = Vec::with_capacity(files.len());
            for path in files {
                match FsUploadFile::open(&path).await {
                    Ok(file) => sources.push(Box::new(file)),
                    Err(err) => {
                        warn!(path = %path.display(), error = %err, "cannot open upload");
                        eprintln!("✗ {}: {err}", path.display());
                    }
                }
            }
            if sources.is_empty() {
                anyhow::bail!("None of the given files could be opened");
            }

            let outcome = shelf.upload(sources).await;
            print_gallery(&runtime.view.gallery_items(), &mut io::stdout().lock())?;
            match outcome {
                UploadOutcome::Completed(report) if report.failures.is_empty() => {
                    ExitCode::SUCCESS
                }
                UploadOutcome::Completed(_) | UploadOutcome::Rejected(_) => ExitCode::FAILURE,
                UploadOutcome::Skipped => {
                    eprintln!("Another operation is running; nothing uploaded");
                    ExitCode::FAILURE
                }
            }
        }
        Commands::List { search, preview } => {
            if let Some(text) = preview {
                shelf.set_preview_text(&text);
            }
            if let Some(query) = search {
                shelf.search(&query);
            }
            let mut out = io::stdout().lock();
            writeln!(out, "Preview: {}", shelf.preview_text())?;
            print_gallery(&runtime.view.gallery_items(), &mut out)?;
            ExitCode::SUCCESS
        }
        Commands::Tag { name, tag } => {
            shelf.update_tag(&FileName::from(name), &tag).await?;
            print_gallery(&runtime.view.gallery_items(), &mut io::stdout().lock())?;
            ExitCode::SUCCESS
        }
        Commands::Delete { name } => {
            if !shelf.delete_font(&FileName::from(name)).await? {
                eprintln!("Cancelled");
            }
            print_gallery(&runtime.view.gallery_items(), &mut io::stdout().lock())?;
            ExitCode::SUCCESS
        }
        Commands::Clear => {
            let code = match shelf.clear_library().await? {
                ClearOutcome::Cleared { .. } => ExitCode::SUCCESS,
                ClearOutcome::Declined => {
                    eprintln!("Cancelled");
                    ExitCode::SUCCESS
                }
                ClearOutcome::Skipped => {
                    eprintln!("Another operation is running; library left as is");
                    ExitCode::FAILURE
                }
            };
            print_gallery(&runtime.view.gallery_items(), &mut io::stdout().lock())?;
            code
        }
        Commands::Export { search, out } => {
            if let Some(query) = search {
                shelf.search(&query);
            }
            let doc = shelf.export_print();
            match out {
                Some(path) => {
                    tokio::fs::write(&path, doc.html.as_bytes())
                        .await
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    eprintln!(
                        "Wrote a specimen of {} font(s) to {}",
                        doc.font_count,
                        path.display()
                    );
                }
                None => io::stdout().lock().write_all(doc.html.as_bytes())?,
            }
            ExitCode::SUCCESS
        }
    };

    Ok(code)
}

/// Writes the gallery top to bottom, one card per line.
pub fn print_gallery(items: &[GalleryItem], out: &mut impl Write) -> io::Result<()> {
    let width = items
        .iter()
        .filter_map(|item| match item {
            GalleryItem::Card { title, .. } => Some(title.chars().count()),
            GalleryItem::Placeholder(_) => None,
        })
        .max()
        .unwrap_or(0);

    for item in items {
        match item {
            GalleryItem::Placeholder(text) => writeln!(out, "{text}")?,
            GalleryItem::Card {
                title,
                tag,
                face_available,
                ..
            } => {
                let mut line = format!("{title:<width$}");
                if !tag.is_empty() {
                    line.push_str("  #");
                    line.push_str(tag);
                }
                if !face_available {
                    line.push_str("  (preview unavailable)");
                }
                writeln!(out, "{}", line.trim_end())?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, tag: &str, face_available: bool) -> GalleryItem {
        GalleryItem::Card {
            title: title.to_string(),
            preview: String::new(),
            tag: tag.to_string(),
            face_available,
        }
    }

    #[test]
    fn test_print_gallery_aligns_tags() {
        let items = vec![
            card("Foo.ttf", "display", true),
            card("LongerName.woff2", "", true),
            card("odd.otf", "", false),
        ];
        let mut out = Vec::new();

        print_gallery(&items, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Foo.ttf           #display\n\
             LongerName.woff2\n\
             odd.otf           (preview unavailable)\n"
        );
    }

    #[test]
    fn test_print_gallery_placeholder() {
        let mut out = Vec::new();
        print_gallery(&[GalleryItem::Placeholder("Nothing here".into())], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Nothing here\n");
    }

    #[test]
    fn test_cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "fontshelf", "delete", "Foo.ttf", "--yes", "--data-dir", "/tmp/shelf",
        ])
        .unwrap();

        assert!(cli.yes);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/shelf")));
        assert!(matches!(cli.command, Commands::Delete { name } if name == "Foo.ttf"));
    }

    #[test]
    fn test_upload_requires_files() {
        assert!(Cli::try_parse_from(["fontshelf", "upload"]).is_err());
    }
}
