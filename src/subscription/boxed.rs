use super::Subscription;

/// Helper trait for calling unsubscribe on boxed trait objects
///
/// Since `Subscription::unsubscribe(self)` requires `Sized`, we need this
/// workaround trait to enable `Box<dyn Subscription>` to call unsubscribe.
pub trait BoxedSubscriptionInner {
  fn boxed_unsubscribe(self: Box<Self>);
  fn boxed_is_closed(&self) -> bool;
}

impl<T: Subscription> BoxedSubscriptionInner for T {
  #[inline]
  fn boxed_unsubscribe(self: Box<Self>) { (*self).unsubscribe() }

  #[inline]
  fn boxed_is_closed(&self) -> bool { self.is_closed() }
}

/// A type-erased subscription.
///
/// Operators that hold on to the subscription of a stream whose concrete
/// type changes over time (the switch operator's inner slot) store it as a
/// `BoxedSubscription`. Subscriptions are control handles, not data views,
/// so they are required to be `'static`.
///
/// # Examples
///
/// ```rust
/// use rxrust_switch::prelude::*;
///
/// let subs: Vec<BoxedSubscription> = vec![BoxedSubscription::new(()), BoxedSubscription::new(())];
/// for sub in subs {
///   sub.unsubscribe();
/// }
/// ```
pub struct BoxedSubscription(Box<dyn BoxedSubscriptionInner>);

impl BoxedSubscription {
  /// Create a new boxed subscription from any subscription type.
  #[inline]
  pub fn new(subscription: impl Subscription + 'static) -> Self { Self(Box::new(subscription)) }
}

/// Trait for converting a subscription into a boxed subscription.
pub trait IntoBoxedSubscription {
  fn into_boxed(self) -> BoxedSubscription;
}

impl<T: Subscription + 'static> IntoBoxedSubscription for T {
  #[inline]
  fn into_boxed(self) -> BoxedSubscription { BoxedSubscription::new(self) }
}

impl Subscription for BoxedSubscription {
  #[inline]
  fn unsubscribe(self) { self.0.boxed_unsubscribe() }

  #[inline]
  fn is_closed(&self) -> bool { self.0.boxed_is_closed() }
}

impl std::fmt::Debug for BoxedSubscription {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("BoxedSubscription")
      .field("is_closed", &self.is_closed())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, rc::Rc};

  use super::*;

  struct MockSubscription {
    closed: Rc<RefCell<bool>>,
  }

  impl Subscription for MockSubscription {
    fn unsubscribe(self) { *self.closed.borrow_mut() = true; }

    fn is_closed(&self) -> bool { *self.closed.borrow() }
  }

  #[rxrust_switch_macro::test]
  fn test_boxed_subscription_forwards() {
    let closed = Rc::new(RefCell::new(false));
    let boxed = MockSubscription { closed: closed.clone() }.into_boxed();

    assert!(!boxed.is_closed());
    boxed.unsubscribe();
    assert!(*closed.borrow());
  }
}
