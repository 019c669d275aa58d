//! Shared mutable cells for the single-threaded stream core.
//!
//! Operators that hand out several observers over the same state (the switch
//! operator's outer and inner observers, a subject's subscriptions) keep that
//! state in a [`MutRc`].

use std::{
  cell::{Ref, RefCell, RefMut},
  fmt::{Debug, Formatter},
  rc::Rc,
};

/// Reference-counted `RefCell`, cloned by pointer.
#[derive(Default)]
pub struct MutRc<T>(Rc<RefCell<T>>);

impl<T> MutRc<T> {
  #[inline]
  pub fn own(t: T) -> Self { Self(Rc::new(RefCell::new(t))) }

  /// Immutably borrows the wrapped value.
  ///
  /// Callers must drop the guard before invoking anything that may re-enter
  /// the owner of this cell.
  #[inline]
  pub fn rc_deref(&self) -> Ref<'_, T> { self.0.borrow() }

  /// Mutably borrows the wrapped value. The same re-entrancy rule as
  /// [`MutRc::rc_deref`] applies.
  #[inline]
  pub fn rc_deref_mut(&self) -> RefMut<'_, T> { self.0.borrow_mut() }

  /// Returns `true` if both handles point at the same cell.
  #[inline]
  pub fn ptr_eq(&self, other: &Self) -> bool { Rc::ptr_eq(&self.0, &other.0) }
}

impl<T> Clone for MutRc<T> {
  #[inline]
  fn clone(&self) -> Self { Self(self.0.clone()) }
}

impl<T> From<T> for MutRc<T> {
  #[inline]
  fn from(t: T) -> Self { Self::own(t) }
}

impl<T: Debug> Debug for MutRc<T> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self.0.try_borrow() {
      Ok(v) => f.debug_tuple("MutRc").field(&*v).finish(),
      Err(_) => f.write_str("MutRc(<borrowed>)"),
    }
  }
}
