mod common;

use common::BrokenSettings;
use littlefinger::{CheckStatus, MemorySettings, SHOULD_CALL_KEY, SettingsStore};
use std::sync::Arc;

fn status_over(store: Arc<MemorySettings>) -> CheckStatus {
    CheckStatus::new(store)
}

#[test]
fn unset_flag_means_call() {
    let status = status_over(Arc::new(MemorySettings::new()));
    assert!(status.should_make_call());
}

#[test]
fn cancel_call_disables() {
    let store = Arc::new(MemorySettings::new());
    let status = status_over(store.clone());
    status.cancel_call().unwrap();
    assert!(!status.should_make_call());
    assert_eq!(
        store.get_string(SHOULD_CALL_KEY).unwrap().as_deref(),
        Some("false")
    );
}

#[test]
fn cancel_call_is_idempotent() {
    let store = Arc::new(MemorySettings::new());
    let status = status_over(store.clone());
    status.cancel_call().unwrap();
    status.cancel_call().unwrap();
    assert!(!status.should_make_call());
}

#[test]
fn stored_true_any_case_means_call() {
    let store = Arc::new(MemorySettings::new());
    store.put_string(SHOULD_CALL_KEY, "TRUE").unwrap();
    assert!(status_over(store).should_make_call());
}

#[test]
fn stored_garbage_means_no_call() {
    let store = Arc::new(MemorySettings::new());
    store.put_string(SHOULD_CALL_KEY, "yes please").unwrap();
    assert!(!status_over(store).should_make_call());
}

#[test]
fn read_failure_falls_back_to_call() {
    let status = CheckStatus::new(Arc::new(BrokenSettings));
    assert!(status.should_make_call());
}

#[test]
fn cancel_call_surfaces_write_failure() {
    let status = CheckStatus::new(Arc::new(BrokenSettings));
    assert!(status.cancel_call().is_err());
}
