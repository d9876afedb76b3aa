//! Session controller behavior: the open/closed state machine, keyboard
//! shortcuts, synchronous recomputation, and explicit history submission.

mod common;

use common::sample_links;
use waymark::{KeyEvent, MemoryStore, SearchSession};

fn session() -> SearchSession<MemoryStore> {
    SearchSession::new(MemoryStore::new(), sample_links())
}

#[test]
fn opens_closed_with_identity_results() {
    let session = session();
    assert!(!session.is_open());
    assert_eq!(session.results(), sample_links().as_slice());
}

#[test]
fn shortcut_toggles_and_escape_closes() {
    let mut session = session();

    session.handle_key(KeyEvent::modified('k'));
    assert!(session.is_open());

    session.handle_key(KeyEvent::modified('k'));
    assert!(!session.is_open());

    // Escape does nothing while closed
    assert!(!session.handle_key(KeyEvent::escape()));
    assert!(!session.is_open());

    session.open_search();
    assert!(session.handle_key(KeyEvent::escape()));
    assert!(!session.is_open());
}

#[test]
fn every_query_change_recomputes_synchronously() {
    let mut session = session();

    session.set_query("g");
    let after_g = session.results().to_vec();
    session.set_query("gi");
    session.set_query("git");
    let after_git = session.results().to_vec();

    // Recomputation is from scratch each time: retyping "g" reproduces the
    // earlier list regardless of what was typed in between.
    session.set_query("g");
    assert_eq!(session.results(), after_g.as_slice());
    session.set_query("git");
    assert_eq!(session.results(), after_git.as_slice());
}

#[test]
fn whitespace_query_is_identity_not_search() {
    let mut session = session();
    session.set_query("   ");
    assert_eq!(session.results(), sample_links().as_slice());
    assert_eq!(session.result_count(), sample_links().len());
}

#[test]
fn catalogue_refresh_recomputes_current_query() {
    let mut session = session();
    session.set_query("github");
    assert!(session.has_results());

    session.set_catalogue(Vec::new());
    assert!(!session.has_results(), "results follow the new snapshot");
}

#[test]
fn submit_is_explicit_and_deduplicates_history() {
    let mut session = session();

    session.set_query("github");
    session.submit();
    session.set_query("zhihu");
    session.submit();
    session.set_query("github");
    session.submit();

    assert_eq!(session.history(), ["github", "zhihu"]);
}

#[test]
fn history_survives_session_restart() {
    let mut store = MemoryStore::new();
    {
        let mut session = SearchSession::new(&mut store, sample_links());
        session.set_query("github");
        session.submit();
    }

    let session = SearchSession::new(&mut store, sample_links());
    assert_eq!(session.history(), ["github"]);
}

#[test]
fn history_edits_go_through_session() {
    let mut session = session();
    session.set_query("a");
    session.submit();
    session.set_query("b");
    session.submit();

    session.remove_from_history("a");
    assert_eq!(session.history(), ["b"]);

    session.clear_history();
    assert!(session.history().is_empty());
}
