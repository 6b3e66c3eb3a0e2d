// core/src/session/slot.rs
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

/// Request-local holder for session state, shared by every clone of a
/// [`CookieSession`](super::CookieSession) within one request.
///
/// IMPORTANT: Lock guards obtained from this struct are blocking and MUST NOT
/// be held across `.await` suspension points in asynchronous code.
#[derive(Debug)]
pub struct SessionSlot<T: Send + Sync + 'static>(Arc<RwLock<T>>);

impl<T: Send + Sync + 'static> SessionSlot<T> {
  pub fn new(data: T) -> Self {
    SessionSlot(Arc::new(RwLock::new(data)))
  }

  /// The returned guard MUST be dropped before any `.await` point.
  pub fn read(&self) -> RwLockReadGuard<'_, T> {
    self.0.read()
  }

  /// The returned guard MUST be dropped before any `.await` point.
  pub fn write(&self) -> RwLockWriteGuard<'_, T> {
    self.0.write()
  }

  /// Swaps in `value` and hands back what was there.
  pub fn replace(&self, value: T) -> T {
    std::mem::replace(&mut *self.0.write(), value)
  }
}

impl<T: Send + Sync + Clone + 'static> SessionSlot<T> {
  /// Mutates a copy of the value and stores it only if `commit` accepts it.
  ///
  /// On `Err` the slot keeps its previous value.
  pub fn try_update<F, C, R, E>(&self, mutate: F, commit: C) -> Result<R, E>
  where
    F: FnOnce(&mut T),
    C: FnOnce(&T) -> Result<R, E>,
  {
    let mut guard = self.0.write();
    let mut next = guard.clone();
    mutate(&mut next);
    let committed = commit(&next)?;
    *guard = next;
    Ok(committed)
  }
}

impl<T: Send + Sync + 'static> Clone for SessionSlot<T> {
  fn clone(&self) -> Self {
    SessionSlot(Arc::clone(&self.0))
  }
}

impl<T: Send + Sync + 'static + Default> Default for SessionSlot<T> {
  fn default() -> Self {
    Self::new(Default::default())
  }
}

impl<T: Send + Sync + 'static + Default> SessionSlot<T> {
  pub fn take(&self) -> T {
    self.replace(T::default())
  }
}
