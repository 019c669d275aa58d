//! Subscription handles
//!
//! A [`Subscription`] is returned from `Observable::actual_subscribe` and is
//! the only way to detach an observer before the stream terminates.
//! Unsubscribing consumes the handle; handles that are shared between owners
//! (such as the switch operator's state) must therefore make repeated
//! unsubscription a no-op themselves.

mod boxed;

pub use boxed::*;

/// A disposable handle representing an active attachment between a stream
/// and an observer.
pub trait Subscription {
  /// Detaches the observer and releases any resource tied to the subscribe
  /// call. The source must not notify the observer afterwards.
  fn unsubscribe(self);

  fn is_closed(&self) -> bool;

  /// Wraps this subscription in a guard that unsubscribes when dropped.
  ///
  /// **Attention:** If you don't assign the return value to a variable,
  /// `unsubscribe()` is called immediately, which is probably not what you
  /// want!
  #[inline]
  fn unsubscribe_when_dropped(self) -> SubscriptionGuard<Self>
  where
    Self: Sized,
  {
    SubscriptionGuard::new(self)
  }
}

/// The handle of a source that has nothing left to release, such as `of` or
/// `from_iter` after they emitted synchronously.
impl Subscription for () {
  #[inline]
  fn unsubscribe(self) {}

  #[inline]
  fn is_closed(&self) -> bool { true }
}

impl<T: Subscription> Subscription for Option<T> {
  #[inline]
  fn unsubscribe(self) {
    if let Some(inner) = self {
      inner.unsubscribe();
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.as_ref().map_or(true, Subscription::is_closed) }
}

/// Runs a closure on unsubscribe.
pub struct ClosureSubscription<F>(pub F);

impl<F: FnOnce()> Subscription for ClosureSubscription<F> {
  #[inline]
  fn unsubscribe(self) { (self.0)() }

  #[inline]
  fn is_closed(&self) -> bool { false }
}

/// An RAII implementation of a "scoped subscribed" of a subscription.
/// When this structure is dropped (falls out of scope), the subscription will
/// be unsubscribed.
///
/// If you want to drop it immediately, wrap it in its own scope
#[must_use]
pub struct SubscriptionGuard<T: Subscription>(Option<T>);

impl<T: Subscription> SubscriptionGuard<T> {
  /// Wraps an existing subscription with a guard to enable RAII behavior for
  /// it.
  #[inline]
  pub fn new(subscription: T) -> SubscriptionGuard<T> { SubscriptionGuard(Some(subscription)) }

  /// Gives the subscription back without unsubscribing it.
  #[inline]
  pub fn into_inner(mut self) -> Option<T> { self.0.take() }
}

impl<T: Subscription> Drop for SubscriptionGuard<T> {
  #[inline]
  fn drop(&mut self) {
    if let Some(subscription) = self.0.take() {
      subscription.unsubscribe();
    }
  }
}
