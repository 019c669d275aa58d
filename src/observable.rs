//! The `Observable` trait and the synchronous sources.
//!
//! An [`Observable`] is a push-based producer: once subscribed it delivers
//! zero or more values to its observer, followed by at most one terminal
//! signal (`error` or `complete`). Operators are provided methods of the
//! trait, so a pipeline reads left to right:
//!
//! ```rust
//! use std::{cell::RefCell, rc::Rc};
//!
//! use rxrust_switch::prelude::*;
//!
//! let seen = Rc::new(RefCell::new(vec![]));
//! let s = seen.clone();
//! observable::from_iter([1, 2])
//!   .switch_map(|i| observable::from_iter(i * 10..i * 10 + 2))
//!   .subscribe(move |v| s.borrow_mut().push(v));
//! assert_eq!(*seen.borrow(), vec![10, 11, 20, 21]);
//! ```

use std::convert::Infallible;

use crate::{
  observer::{FnMutObserver, Observer, ObserverAll},
  ops::{map::MapOp, switch_map::SwitchMapOp, switch_on_next::SwitchOnNextOp},
  subscription::Subscription,
};

pub mod create;
pub mod from_iter;
pub mod of;
pub mod trivial;

pub use create::*;
pub use from_iter::*;
pub use of::*;
pub use trivial::*;

/// A stream that can be subscribed to once.
///
/// Observables are values: subscribing consumes them. Clone a hot source such
/// as a [`Subject`](crate::subject::Subject) to subscribe more than once.
pub trait Observable: Sized {
  /// The type of the values delivered to `next`.
  type Item;
  /// The type delivered to `error`.
  type Err;
  /// The handle returned by `actual_subscribe`.
  type Unsub: Subscription;

  /// Attaches `observer` and starts the stream.
  ///
  /// A synchronous source may deliver every notification before this method
  /// returns.
  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Self::Item, Self::Err> + 'static;

  /// Subscribes with a `next` closure. Only available for streams that cannot
  /// fail, so an error can never go unobserved.
  #[inline]
  fn subscribe<F>(self, next: F) -> Self::Unsub
  where
    Self: Observable<Err = Infallible>,
    F: FnMut(Self::Item) + 'static,
  {
    self.actual_subscribe(FnMutObserver(next))
  }

  /// Subscribes with a handler for every notification kind.
  #[inline]
  fn subscribe_all<N, E, C>(self, next: N, error: E, complete: C) -> Self::Unsub
  where
    N: FnMut(Self::Item) + 'static,
    E: FnOnce(Self::Err) + 'static,
    C: FnOnce() + 'static,
  {
    self.actual_subscribe(ObserverAll::new(next, error, complete))
  }

  /// Creates a new stream which calls a closure on each element and uses
  /// its return as the value.
  #[inline]
  fn map<B, F>(self, f: F) -> MapOp<Self, F>
  where
    F: FnMut(Self::Item) -> B,
  {
    MapOp { source: self, func: f }
  }

  /// Flattens a stream of streams by following only the most recently
  /// emitted inner stream.
  ///
  /// Every time the source emits a new inner stream, the subscription to the
  /// previous inner stream is disposed before the new one is subscribed.
  /// Values an old inner stream produces after it was superseded are
  /// discarded. The output completes once the source has completed and the
  /// last inner stream has completed. The first error from either level
  /// terminates the output and disposes every subscription the operator
  /// holds.
  ///
  /// ```rust
  /// use std::convert::Infallible;
  ///
  /// use rxrust_switch::prelude::*;
  ///
  /// let mut outer = Subject::<Subject<i32, Infallible>, Infallible>::new();
  /// let a = Subject::new();
  /// let b = Subject::new();
  ///
  /// let seen = std::rc::Rc::new(std::cell::RefCell::new(vec![]));
  /// let s = seen.clone();
  /// let _sub = outer.clone().switch_on_next().subscribe(move |v| s.borrow_mut().push(v));
  ///
  /// outer.next(a.clone());
  /// a.clone().next(1);
  /// outer.next(b.clone());
  /// a.clone().next(2); // superseded, dropped
  /// b.clone().next(3);
  /// assert_eq!(*seen.borrow(), vec![1, 3]);
  /// ```
  #[inline]
  fn switch_on_next(self) -> SwitchOnNextOp<Self>
  where
    Self::Item: Observable<Err = Self::Err>,
  {
    SwitchOnNextOp { source: self }
  }

  /// Maps each value to an inner stream and switches to it, like
  /// `self.map(f).switch_on_next()`.
  #[inline]
  fn switch_map<Inner, F>(self, f: F) -> SwitchMapOp<Self, F>
  where
    F: FnMut(Self::Item) -> Inner,
    Inner: Observable<Err = Self::Err>,
  {
    SwitchOnNextOp { source: MapOp { source: self, func: f } }
  }
}
