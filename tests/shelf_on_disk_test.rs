//! The wired shelf over a real data directory, across separate runs.

use std::sync::Arc;

use fontshelf_lib::adapters::AutoConfirm;
use fontshelf_lib::bootstrap::build_shelf;
use fontshelf_lib::cli::print_gallery;
use fsh_app::usecases::{ClearOutcome, UploadOutcome};
use fsh_core::ports::UploadSource;
use fsh_core::{FileName, ShelfConfig};
use fsh_infra::FsUploadFile;
use tempfile::TempDir;

fn config_for(dir: &TempDir) -> ShelfConfig {
    ShelfConfig::with_system_defaults(dir.path().join("library"))
}

async fn font_file(dir: &TempDir, name: &str, head: &[u8]) -> Box<dyn UploadSource> {
    let path = dir.path().join(name);
    let mut bytes = head.to_vec();
    bytes.extend_from_slice(b"rest of the font");
    std::fs::write(&path, bytes).unwrap();
    Box::new(FsUploadFile::open(path).await.unwrap())
}

#[tokio::test]
async fn test_library_survives_restart() {
    let files = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let config = config_for(&data);

    {
        let runtime = build_shelf(&config, Arc::new(AutoConfirm));
        runtime.shelf.load_library().await.unwrap();
        let batch = vec![
            font_file(&files, "Foo.ttf", &[0, 1, 0, 0]).await,
            font_file(&files, "Bar.otf", b"OTTO").await,
            font_file(&files, "fake.woff", b"GIF8").await,
        ];

        let outcome = runtime.shelf.upload(batch).await;

        let UploadOutcome::Completed(report) = outcome else {
            panic!("batch should complete");
        };
        assert_eq!(report.success_count(), 2);
        runtime
            .shelf
            .update_tag(&FileName::from("Foo.ttf"), "display")
            .await
            .unwrap();
    }

    let runtime = build_shelf(&config, Arc::new(AutoConfirm));
    assert_eq!(runtime.shelf.load_library().await.unwrap(), 2);

    let mut out = Vec::new();
    print_gallery(&runtime.view.gallery_items(), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Bar.otf\nFoo.ttf  #display\n"
    );
}

#[tokio::test]
async fn test_delete_and_clear_on_disk() {
    let files = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let config = config_for(&data);
    let runtime = build_shelf(&config, Arc::new(AutoConfirm));
    runtime.shelf.load_library().await.unwrap();
    runtime
        .shelf
        .upload(vec![
            font_file(&files, "a.woff2", b"wOF2").await,
            font_file(&files, "b.woff", b"wOFF").await,
        ])
        .await;

    assert!(runtime.shelf.delete_font(&FileName::from("a.woff2")).await.unwrap());
    assert_eq!(runtime.view.card_titles(), vec!["b.woff"]);

    let outcome = runtime.shelf.clear_library().await.unwrap();
    assert_eq!(outcome, ClearOutcome::Cleared { removed: 1 });

    let reopened = build_shelf(&config, Arc::new(AutoConfirm));
    assert_eq!(reopened.shelf.load_library().await.unwrap(), 0);
    assert!(reopened
        .view
        .placeholder_text()
        .is_some_and(|t| t.starts_with("Your library is empty")));
}

#[tokio::test]
async fn test_export_from_disk_is_self_contained() {
    let files = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    let runtime = build_shelf(&config_for(&data), Arc::new(AutoConfirm));
    runtime.shelf.load_library().await.unwrap();
    runtime
        .shelf
        .upload(vec![font_file(&files, "Foo.ttf", &[0, 1, 0, 0]).await])
        .await;

    let doc = runtime.shelf.export_print();

    assert_eq!(doc.font_count, 1);
    assert!(doc.html.contains("data:font/ttf;base64,"));
    assert!(!doc.html.contains("blob:fontshelf/"));
}
