// shopcart/src/session.rs

//! Per-session cart handles.
//!
//! The HTTP boundary owns a `SessionStore` and hands each request the
//! `SessionCart` for its session. Operations then run against the guarded
//! `Cart` directly; nothing in this crate keeps a global cart.
//!
//! The store is bounded. Sessions idle for longer than
//! `SessionLimits::idle_timeout` are dropped, and once `max_sessions` is
//! reached the least recently used session is evicted to make room.

use crate::cart::Cart;
use parking_lot::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{event, Level};

/// A shared, lockable handle to one session's cart.
///
/// Clones point at the same cart. Guards are blocking and MUST NOT be held
/// across `.await` points.
#[derive(Debug)]
pub struct SessionCart(Arc<RwLock<Cart>>);

impl SessionCart {
  pub fn new(cart: Cart) -> Self {
    SessionCart(Arc::new(RwLock::new(cart)))
  }

  pub fn read(&self) -> RwLockReadGuard<'_, Cart> {
    self.0.read()
  }

  pub fn write(&self) -> RwLockWriteGuard<'_, Cart> {
    self.0.write()
  }

  /// A copy of the cart as it is right now.
  pub fn snapshot(&self) -> Cart {
    self.0.read().clone()
  }
}

impl Clone for SessionCart {
  fn clone(&self) -> Self {
    SessionCart(Arc::clone(&self.0))
  }
}

impl Default for SessionCart {
  fn default() -> Self {
    Self::new(Cart::empty())
  }
}

/// Bounds applied by a `SessionStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
  /// Upper bound on live sessions. Values below 1 are treated as 1.
  pub max_sessions: usize,
  /// Sessions not touched for this long are forgotten.
  pub idle_timeout: Duration,
}

impl Default for SessionLimits {
  fn default() -> Self {
    Self {
      max_sessions: 10_000,
      idle_timeout: Duration::from_secs(30 * 60),
    }
  }
}

#[derive(Debug)]
struct SessionEntry {
  cart: SessionCart,
  last_seen: Instant,
}

/// Maps session ids to their carts.
#[derive(Debug)]
pub struct SessionStore<K> {
  carts: Mutex<HashMap<K, SessionEntry>>,
  limits: SessionLimits,
}

impl<K> SessionStore<K>
where
  K: Eq + Hash + Clone + std::fmt::Display,
{
  pub fn new() -> Self {
    Self::with_limits(SessionLimits::default())
  }

  pub fn with_limits(limits: SessionLimits) -> Self {
    Self {
      carts: Mutex::new(HashMap::new()),
      limits,
    }
  }

  pub fn limits(&self) -> SessionLimits {
    self.limits
  }

  /// Returns the session's cart, creating an empty one on first use.
  /// The flag is `true` when the cart was created by this call.
  pub fn open(&self, session_id: &K) -> (SessionCart, bool) {
    let now = Instant::now();
    let mut carts = self.carts.lock();
    if let Some(entry) = carts.get_mut(session_id) {
      if !self.is_idle(entry, now) {
        entry.last_seen = now;
        return (entry.cart.clone(), false);
      }
    }
    let cart = SessionCart::new(Cart::empty());
    self.insert_locked(&mut carts, session_id.clone(), cart.clone(), now);
    (cart, true)
  }

  /// Registers a cart built outside the store under `session_id`, replacing any
  /// previous cart for that id.
  pub fn insert(&self, session_id: K, cart: SessionCart) {
    let now = Instant::now();
    let mut carts = self.carts.lock();
    carts.remove(&session_id);
    self.insert_locked(&mut carts, session_id, cart, now);
  }

  /// Looks up a live session and marks it as used. Idle sessions are dropped and reported as absent.
  pub fn get(&self, session_id: &K) -> Option<SessionCart> {
    let now = Instant::now();
    let mut carts = self.carts.lock();
    let idle = self.is_idle(carts.get(session_id)?, now);
    if idle {
      carts.remove(session_id);
      event!(Level::DEBUG, session_id = %session_id, "Idle session expired on lookup.");
      return None;
    }
    let entry = carts.get_mut(session_id)?;
    entry.last_seen = now;
    Some(entry.cart.clone())
  }

  pub fn remove(&self, session_id: &K) -> Option<SessionCart> {
    self.carts.lock().remove(session_id).map(|entry| entry.cart)
  }

  /// Drops every session that has been idle longer than the timeout as of `now`.
  /// Returns how many were dropped.
  pub fn purge_idle(&self, now: Instant) -> usize {
    let mut carts = self.carts.lock();
    self.purge_idle_locked(&mut carts, now)
  }

  pub fn len(&self) -> usize {
    self.carts.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.carts.lock().is_empty()
  }

  fn is_idle(&self, entry: &SessionEntry, now: Instant) -> bool {
    now.saturating_duration_since(entry.last_seen) > self.limits.idle_timeout
  }

  fn purge_idle_locked(&self, carts: &mut HashMap<K, SessionEntry>, now: Instant) -> usize {
    let before = carts.len();
    carts.retain(|_, entry| !self.is_idle(entry, now));
    let purged = before - carts.len();
    if purged > 0 {
      event!(Level::DEBUG, purged, sessions = carts.len(), "Idle sessions purged.");
    }
    purged
  }

  fn insert_locked(&self, carts: &mut HashMap<K, SessionEntry>, session_id: K, cart: SessionCart, now: Instant) {
    self.purge_idle_locked(carts, now);

    let max_sessions = self.limits.max_sessions.max(1);
    while carts.len() >= max_sessions {
      let oldest = carts
        .iter()
        .min_by_key(|(_, entry)| entry.last_seen)
        .map(|(id, _)| id.clone());
      match oldest {
        Some(id) => {
          carts.remove(&id);
          event!(Level::DEBUG, session_id = %id, "Session store full; evicted least recently used session.");
        }
        None => break,
      }
    }

    event!(Level::DEBUG, session_id = %session_id, sessions = carts.len() + 1, "Session cart created.");
    carts.insert(session_id, SessionEntry { cart, last_seen: now });
  }
}

impl<K> Default for SessionStore<K>
where
  K: Eq + Hash + Clone + std::fmt::Display,
{
  fn default() -> Self {
    Self::new()
  }
}
