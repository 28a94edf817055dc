//! Session guard and the full login -> admin -> logout cycle

mod common;

use common::{client, FakeZip, MemoryStore, MockTransport, Navigation, RecordingNavigator};
use zipgate::credentials::Credentials;
use zipgate::flows::{self, UploadForm};
use zipgate::guard::{check_session, GuardState};
use zipgate::routes::Route;
use zipgate::session::TokenStore;

#[test]
fn test_stored_token_admits_page() {
  let store = MemoryStore::with_token("abc123");
  let nav = RecordingNavigator::new();

  let state = check_session(&store, &nav);

  assert_eq!(state, GuardState::Authenticated);
  assert!(state.admits());
  assert!(nav.history().is_empty());
}

#[test]
fn test_any_non_empty_token_is_accepted() {
  for token in ["undefined", "x", "not.a.jwt"] {
    let store = MemoryStore::with_token(token);
    let nav = RecordingNavigator::new();
    assert_eq!(check_session(&store, &nav), GuardState::Authenticated, "{}", token);
  }
}

#[test]
fn test_missing_token_redirects_without_rendering() {
  let store = MemoryStore::empty();
  let nav = RecordingNavigator::new();

  let state = check_session(&store, &nav);

  assert_eq!(state, GuardState::Redirecting);
  assert!(!state.admits());
  assert_eq!(nav.history(), vec![Navigation::Replace(Route::Login)]);
}

#[test]
fn test_empty_token_counts_as_absent() {
  let store = MemoryStore::with_token("");
  let nav = RecordingNavigator::new();

  assert_eq!(check_session(&store, &nav), GuardState::Redirecting);
  assert_eq!(nav.current(), Some(Route::Login));
}

#[test]
fn test_unavailable_storage_counts_as_absent() {
  let store = MemoryStore::unavailable();
  let nav = RecordingNavigator::new();

  assert_eq!(check_session(&store, &nav), GuardState::Redirecting);
  assert_eq!(nav.current(), Some(Route::Login));
}

#[test]
fn test_remount_after_token_removal_redirects() {
  let store = MemoryStore::with_token("abc123");

  let first_mount = RecordingNavigator::new();
  assert_eq!(check_session(&store, &first_mount), GuardState::Authenticated);
  assert!(first_mount.history().is_empty());

  store.clear().unwrap();

  let second_mount = RecordingNavigator::new();
  assert_eq!(check_session(&store, &second_mount), GuardState::Redirecting);
  assert_eq!(second_mount.history(), vec![Navigation::Replace(Route::Login)]);
}

#[test]
fn test_full_session_cycle() {
  let api = client(
    MockTransport::new()
      .respond(200, r#"{"access_token":"abc123"}"#)
      .respond(200, r#"{"message":"ok","files":3}"#),
  );
  let store = MemoryStore::empty();
  let nav = RecordingNavigator::new();

  // Before login the admin page is out of reach
  assert_eq!(check_session(&store, &nav), GuardState::Redirecting);

  let creds = Credentials::new("admin@example.com", "hunter2");
  tokio_test::block_on(flows::login(&api, &store, &nav, &creds)).unwrap();
  assert_eq!(nav.current(), Some(Route::Admin));
  assert_eq!(check_session(&store, &nav), GuardState::Authenticated);

  let upload = UploadForm {
    target_dir: "uploads".to_string(),
    zip_file: Some(FakeZip::with_bytes("site.zip", b"PK\x05\x06")),
  };
  let shown = tokio_test::block_on(flows::upload(&api, &store, &nav, &upload)).unwrap();
  assert_eq!(shown, "{\n  \"message\": \"ok\",\n  \"files\": 3\n}");

  flows::logout(&store, &nav).unwrap();
  assert_eq!(nav.current(), Some(Route::Login));
  assert_eq!(check_session(&store, &nav), GuardState::Redirecting);

  assert_eq!(
    nav.history(),
    vec![
      Navigation::Replace(Route::Login),
      Navigation::Push(Route::Admin),
      Navigation::Push(Route::Login),
      Navigation::Replace(Route::Login),
    ]
  );
}
