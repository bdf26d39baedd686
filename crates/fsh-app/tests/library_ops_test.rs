//! Tag edits, deletion, clearing and the specimen export.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use common::*;
use fsh_app::state::lock;
use fsh_app::usecases::{ClearLibrary, ClearOutcome, DeleteFont};
use fsh_app::{BusyFlag, ShelfState};
use fsh_core::ports::{ConfirmPort, FontStorePort};
use fsh_core::{FileName, NotificationLevel, ShelfError, StorageError};

mockall::mock! {
    pub Confirm {}

    #[async_trait]
    impl ConfirmPort for Confirm {
        async fn confirm(&self, prompt: &str) -> bool;
    }
}

async fn with_fonts(names: &[&str]) -> Harness {
    let h = Harness::new();
    let files = names.iter().map(|n| ttf(n)).collect();
    h.shelf.upload(files).await;
    h.notifier.clear();
    h
}

#[tokio::test]
async fn test_foo_end_to_end() {
    let h = with_fonts(&["Foo.ttf"]).await;
    assert_eq!(h.titles(), vec!["Foo.ttf"]);

    h.shelf.search("foo");
    assert_eq!(h.titles(), vec!["Foo.ttf"]);

    h.shelf.search("bar");
    assert!(h.titles().is_empty());
    assert_eq!(
        h.view.placeholder_text().as_deref(),
        Some("No fonts match your search.")
    );

    let outcome = h.shelf.clear_library().await.unwrap();

    assert_eq!(outcome, ClearOutcome::Cleared { removed: 1 });
    assert!(h.store.is_empty().await);
    assert_eq!(h.urls.live_count(), 0);
    assert!(h.sheet.is_empty());
    assert_eq!(h.shelf.active_face_count(), 0);
    assert!(h
        .view
        .placeholder_text()
        .is_some_and(|t| t.starts_with("Your library is empty")));
}

#[tokio::test]
async fn test_update_tag_sanitizes_and_persists() {
    let h = with_fonts(&["a.ttf"]).await;
    let long = format!("  \u{202E}{}  ", "x".repeat(60));

    let tag = h.shelf.update_tag(&"a.ttf".into(), &long).await.unwrap();

    assert_eq!(tag.as_ref().map(|t| t.as_str().chars().count()), Some(40));
    let stored = h.store.get(&"a.ttf".into()).await.unwrap().unwrap();
    assert_eq!(stored.user_tag, tag);
    assert_eq!(h.shelf.fonts()[0].user_tag, tag);

    let cleared = h.shelf.update_tag(&"a.ttf".into(), "   ").await.unwrap();
    assert_eq!(cleared, None);
    assert_eq!(h.store.get(&"a.ttf".into()).await.unwrap().unwrap().user_tag, None);
}

#[tokio::test]
async fn test_update_tag_keeps_card_nodes() {
    let h = with_fonts(&["a.ttf", "b.ttf"]).await;
    let created = h.view.created_count();

    h.shelf.update_tag(&"b.ttf".into(), "serif").await.unwrap();

    assert_eq!(h.view.created_count(), created);
    let tag_field = lock(h.shelf.state())
        .renderer
        .entry(&FileName::from("b.ttf"))
        .map(|e| e.tag_field)
        .unwrap();
    assert_eq!(h.view.attribute(tag_field, "value").as_deref(), Some("serif"));
}

#[tokio::test]
async fn test_update_tag_for_unknown_font_fails() {
    let h = with_fonts(&["a.ttf"]).await;

    let err = h.shelf.update_tag(&"zzz.ttf".into(), "x").await.unwrap_err();

    assert!(matches!(err, ShelfError::Storage(StorageError::NotFound(_))));
    assert_eq!(h.notifier.count(NotificationLevel::Error), 1);
}

#[tokio::test]
async fn test_update_tag_storage_failure_leaves_registry() {
    let h = with_fonts(&["a.ttf"]).await;
    h.store.set_available(false);

    assert!(h.shelf.update_tag(&"a.ttf".into(), "bold").await.is_err());

    assert_eq!(h.shelf.fonts()[0].user_tag, None);
    assert_eq!(h.notifier.count(NotificationLevel::Error), 1);
}

#[tokio::test]
async fn test_delete_keeps_other_cards_and_order() {
    let h = with_fonts(&["a.ttf", "b.ttf", "c.ttf"]).await;
    let cards_before = h.view.gallery_children();

    assert!(h.shelf.delete_font(&"b.ttf".into()).await.unwrap());

    assert_eq!(h.titles(), vec!["a.ttf", "c.ttf"]);
    assert_eq!(
        h.view.gallery_children(),
        vec![cards_before[0], cards_before[2]]
    );
    assert_eq!(h.urls.live_count(), 2);
    assert_eq!(h.sheet.len(), 2);
    assert!(h.store.get(&"b.ttf".into()).await.unwrap().is_none());
    assert_eq!(h.confirm.prompts(), vec!["Delete \"b.ttf\" from your library?"]);
}

#[tokio::test]
async fn test_declined_delete_changes_nothing() {
    let h = with_fonts(&["a.ttf"]).await;
    h.confirm.answer_next(false);

    assert!(!h.shelf.delete_font(&"a.ttf".into()).await.unwrap());

    assert_eq!(h.titles(), vec!["a.ttf"]);
    assert_eq!(h.store.len().await, 1);
    assert!(h.notifier.all().is_empty());
}

#[tokio::test]
async fn test_delete_storage_failure_keeps_card() {
    let h = with_fonts(&["a.ttf"]).await;
    h.store.set_available(false);

    assert!(h.shelf.delete_font(&"a.ttf".into()).await.is_err());

    assert_eq!(h.titles(), vec!["a.ttf"]);
    assert_eq!(h.urls.live_count(), 1);
}

#[tokio::test]
async fn test_clear_declined_with_mocked_confirm() {
    let h = with_fonts(&["a.ttf"]).await;
    let mut confirm = MockConfirm::new();
    confirm
        .expect_confirm()
        .withf(|prompt| prompt.contains("Remove all 1 fonts"))
        .times(1)
        .returning(|_| false);

    // Same shelf state, different confirmation port.
    let mut deps = shelf_deps(&h);
    deps.confirm = Arc::new(confirm);
    let clear = ClearLibrary::new(deps, h.shelf.state().clone(), BusyFlag::new());

    assert_eq!(clear.execute().await.unwrap(), ClearOutcome::Declined);
    assert_eq!(h.store.len().await, 1);
    assert_eq!(h.titles(), vec!["a.ttf"]);
}

#[tokio::test]
async fn test_clear_skipped_while_busy() {
    let h = with_fonts(&["a.ttf"]).await;
    let _held = h.shelf.busy_flag().try_acquire().unwrap();

    assert_eq!(h.shelf.clear_library().await.unwrap(), ClearOutcome::Skipped);

    assert!(h.confirm.prompts().is_empty());
    assert_eq!(h.store.len().await, 1);
}

#[tokio::test]
async fn test_delete_on_detached_state_uses_given_ports() {
    let h = Harness::new();
    let mut confirm = MockConfirm::new();
    confirm.expect_confirm().times(1).returning(|_| true);
    let mut deps = shelf_deps(&h);
    deps.confirm = Arc::new(confirm);
    let state = ShelfState::new(PREVIEW).shared();

    let deleted = DeleteFont::new(deps, state).execute(&"ghost.ttf".into()).await;

    assert!(deleted.unwrap());
    assert_eq!(h.notifier.all()[0].message, "Deleted ghost.ttf");
}

#[tokio::test]
async fn test_export_embeds_filtered_fonts() {
    let h = with_fonts(&["Foo.ttf", "Bar.woff2"]).await;
    h.shelf.update_tag(&"Foo.ttf".into(), "<display>").await.unwrap();
    h.shelf.search("foo");

    let doc = h.shelf.export_print();

    assert_eq!(doc.font_count, 1);
    assert!(doc.html.contains("<title>FontShelf specimen</title>"));
    assert!(doc.html.contains("1 font matching \u{201C}foo\u{201D}"));
    assert!(doc.html.contains("generated 2024-03-01 12:00 UTC"));
    assert!(doc.html.contains("data:font/ttf;base64,"));
    assert!(doc.html.contains("&lt;display&gt;"));
    assert!(!doc.html.contains("Bar.woff2"));
    assert!(doc.html.contains("font-size: 40px"));
}

fn shelf_deps(h: &Harness) -> fsh_app::ShelfDeps {
    fsh_app::ShelfDeps {
        store: h.store.clone(),
        quota: Arc::new(fsh_infra::StaticQuota(None)),
        view: h.view.clone(),
        object_urls: h.urls.clone(),
        style_sheet: h.sheet.clone(),
        notifier: h.notifier.clone(),
        progress: h.progress.clone(),
        confirm: h.confirm.clone(),
        frame: h.frames.clone(),
        clock: Arc::new(FixedClock(0)),
    }
}
