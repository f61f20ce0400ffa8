// tests/session_tests.rs
mod common;

use common::*;
use shopcart::{SessionCart, SessionLimits, SessionStore};
use std::time::{Duration, Instant};

#[test]
fn test_open_creates_once_per_session() {
  setup_tracing();
  let store: SessionStore<String> = SessionStore::new();
  let (_, created) = store.open(&"alice".to_string());
  assert!(created);
  let (_, created_again) = store.open(&"alice".to_string());
  assert!(!created_again);
  assert_eq!(store.len(), 1);
}

#[test]
fn test_sessions_do_not_share_carts() {
  setup_tracing();
  let catalog = demo_catalog();
  let store: SessionStore<u32> = SessionStore::new();
  let (a, _) = store.open(&1);
  let (b, _) = store.open(&2);

  a.write().add(&catalog, 1, 1).unwrap();
  assert_eq!(a.read().len(), 1);
  assert!(b.read().is_empty());
}

#[test]
fn test_session_cart_clone_shares_cart() {
  setup_tracing();
  let catalog = demo_catalog();
  let store: SessionStore<u32> = SessionStore::new();
  let (handle, _) = store.open(&7);
  handle.write().add(&catalog, 4, 2).unwrap();

  let again = store.get(&7).unwrap();
  assert_eq!(again.read().get(4).unwrap().quantity, 2);

  {
    again.write().checkout().unwrap();
  }
  assert!(handle.read().is_empty()); // Clone sees modification
}

#[test]
fn test_snapshot_is_detached() {
  setup_tracing();
  let catalog = demo_catalog();
  let handle = SessionCart::default();
  handle.write().add(&catalog, 1, 1).unwrap();

  let snapshot = handle.snapshot();
  handle.write().update_quantity(1, 10);
  assert_eq!(snapshot.get(1).unwrap().quantity, 1);
}

#[test]
fn test_remove_forgets_session() {
  setup_tracing();
  let store: SessionStore<u32> = SessionStore::new();
  store.open(&1);
  assert!(store.remove(&1).is_some());
  assert!(store.get(&1).is_none());
  assert!(store.is_empty());
}

#[test]
fn test_full_store_evicts_least_recently_used() {
  setup_tracing();
  let store: SessionStore<u32> = SessionStore::with_limits(SessionLimits {
    max_sessions: 2,
    idle_timeout: Duration::from_secs(3600),
  });
  store.open(&1);
  store.open(&2);
  // Touching 1 makes 2 the oldest.
  assert!(store.get(&1).is_some());

  let (_, created) = store.open(&3);
  assert!(created);
  assert_eq!(store.len(), 2);
  assert!(store.get(&1).is_some());
  assert!(store.get(&2).is_none());
  assert!(store.get(&3).is_some());
}

#[test]
fn test_idle_sessions_are_purged() {
  setup_tracing();
  let store: SessionStore<u32> = SessionStore::with_limits(SessionLimits {
    max_sessions: 100,
    idle_timeout: Duration::from_secs(60),
  });
  store.open(&1);
  store.open(&2);

  assert_eq!(store.purge_idle(Instant::now()), 0);
  assert_eq!(store.purge_idle(Instant::now() + Duration::from_secs(61)), 2);
  assert!(store.is_empty());
}

#[test]
fn test_insert_adopts_detached_cart() {
  setup_tracing();
  let catalog = demo_catalog();
  let store: SessionStore<u32> = SessionStore::new();
  let detached = SessionCart::default();
  detached.write().add(&catalog, 2, 1).unwrap();

  store.insert(5, detached.clone());
  let stored = store.get(&5).unwrap();
  assert_eq!(stored.read().get(2).unwrap().quantity, 1);

  stored.write().update_quantity(2, 4);
  assert_eq!(detached.read().get(2).unwrap().quantity, 4); // Same cart, not a copy
}

#[test]
fn test_zero_capacity_still_holds_one_session() {
  setup_tracing();
  let store: SessionStore<u32> = SessionStore::with_limits(SessionLimits {
    max_sessions: 0,
    idle_timeout: Duration::from_secs(60),
  });
  store.open(&1);
  store.open(&2);
  assert_eq!(store.len(), 1);
  assert!(store.get(&2).is_some());
}
