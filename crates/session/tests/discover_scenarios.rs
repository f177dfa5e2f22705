//! End-to-end scenarios for the Discover session.
//!
//! These tests drive the session through the same intents the rendering
//! layer emits and check what a user would see, including state restored
//! by a later session over the same storage.

use std::time::Duration;

use candidate_store::{Candidate, CandidateStore, Dimension};
use pipeline::{FilterSet, SortMode, ViewMode};
use session::{
    Debouncer, DiscoverSession, DiscoverSettings, FileKvStore, KvStore, MemoryKvStore,
};

fn create_test_store() -> CandidateStore {
    let make = |id: &str, name: &str, location: &str, skills: &[&str]| Candidate {
        id: id.to_string(),
        name: name.to_string(),
        title: "Engineer".to_string(),
        location: location.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    };
    CandidateStore::from_candidates(vec![
        make("a", "Alice", "Remote", &["React"]),
        make("b", "Bob", "Berlin", &["Go"]),
        make("c", "Carol", "Remote", &["React", "Go"]),
    ])
    .unwrap()
}

fn names<S: KvStore>(session: &DiscoverSession<S>) -> Vec<String> {
    session.results().iter().map(|c| c.name.clone()).collect()
}

#[test]
fn test_saved_search_restores_filters_exactly() {
    let mut session =
        DiscoverSession::new(create_test_store(), MemoryKvStore::new(), DiscoverSettings::default());

    session.toggle_filter_value(Dimension::Skills, "React");
    session.set_sort_mode(SortMode::Name);
    assert_eq!(names(&session), vec!["Alice", "Carol"]);

    let saved = session.save_search("Remote React").unwrap();

    session.clear_all_filters();
    assert_eq!(session.results().len(), 3);

    assert!(session.apply_saved_search(saved.id));
    assert_eq!(
        session.config().filters,
        FilterSet::new().with(Dimension::Skills, "React")
    );
    assert_eq!(names(&session), vec!["Alice", "Carol"]);
}

#[test]
fn test_saved_search_is_not_changed_by_later_edits() {
    let mut session =
        DiscoverSession::new(create_test_store(), MemoryKvStore::new(), DiscoverSettings::default());

    session.set_free_text("rem");
    let saved = session.save_search("Remote").unwrap();

    session.set_free_text("berlin");
    session.toggle_filter_value(Dimension::Skills, "Go");
    session.set_view_mode(ViewMode::List);

    assert!(session.apply_saved_search(saved.id));
    assert_eq!(session.config(), &saved.config);
    assert_eq!(session.config().query, "rem");
    assert!(session.config().filters.is_empty());
}

#[test]
fn test_state_survives_restart_on_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let saved_id;

    {
        let kv = FileKvStore::new(dir.path());
        let mut session = DiscoverSession::new(create_test_store(), kv, DiscoverSettings::default());
        session.set_free_text("engineer");
        session.toggle_filter_value(Dimension::Locations, "Remote");
        session.set_sort_mode(SortMode::Name);
        session.set_view_mode(ViewMode::List);
        saved_id = session.save_search("Remote engineers").unwrap().id;
        session.load_more();
    }

    let kv = FileKvStore::new(dir.path());
    let session = DiscoverSession::new(create_test_store(), kv, DiscoverSettings::default());

    assert_eq!(session.config().query, "engineer");
    assert_eq!(
        session.config().filters,
        FilterSet::new().with(Dimension::Locations, "Remote")
    );
    assert_eq!(session.config().sort_mode, SortMode::Name);
    assert_eq!(session.config().view_mode, ViewMode::List);
    assert_eq!(session.saved_searches().len(), 1);
    assert_eq!(session.saved_searches()[0].id, saved_id);
    // Pagination depth is session-only
    assert_eq!(session.visible_count(), DiscoverSettings::default().page_size);
    assert_eq!(names(&session), vec!["Alice", "Carol"]);
}

#[test]
fn test_corrupt_storage_starts_with_defaults() {
    let mut kv = MemoryKvStore::new();
    for key in ["filters", "query", "sortMode", "viewMode", "savedSearches"] {
        kv.set(&format!("talent.discover.{key}"), "\u{0}garbage".to_string())
            .unwrap();
    }

    let session = DiscoverSession::new(create_test_store(), kv, DiscoverSettings::default());
    assert_eq!(session.config(), &pipeline::QueryConfig::default());
    assert!(session.saved_searches().is_empty());
    assert_eq!(session.results().len(), 3);
}

#[test]
fn test_deleted_saved_search_stays_deleted_after_restart() {
    let dir = tempfile::tempdir().unwrap();
    let settings = DiscoverSettings::default();

    let mut session =
        DiscoverSession::new(create_test_store(), FileKvStore::new(dir.path()), settings.clone());
    let keep = session.save_search("Keep").unwrap();
    let dropped = session.save_search("Drop").unwrap();
    assert!(session.delete_saved_search(dropped.id));
    assert!(!session.delete_saved_search(dropped.id));
    drop(session);

    let session = DiscoverSession::new(create_test_store(), FileKvStore::new(dir.path()), settings);
    let ids: Vec<_> = session.saved_searches().iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![keep.id]);
}

#[tokio::test(start_paused = true)]
async fn test_debounced_keystrokes_commit_once() {
    let mut session =
        DiscoverSession::new(create_test_store(), MemoryKvStore::new(), DiscoverSettings::default());
    let (mut debouncer, mut commits) = Debouncer::new(session.settings().debounce);

    for text in ["r", "re", "rem"] {
        debouncer.push(text.to_string());
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    // Nothing has reached the session yet
    assert_eq!(session.config().query, "");

    tokio::time::sleep(Duration::from_millis(300)).await;
    let mut committed = Vec::new();
    while let Ok(text) = commits.try_recv() {
        committed.push(text.clone());
        session.set_free_text(text);
    }

    assert_eq!(committed, vec!["rem"]);
    assert_eq!(session.config().query, "rem");
    let mut found = names(&session);
    found.sort();
    assert_eq!(found, vec!["Alice", "Carol"]);
}
