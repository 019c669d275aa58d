use std::marker::PhantomData;

use crate::{
  observable::Observable,
  observer::{Emitter, Observer},
  subscription::Subscription,
};

/// Creates an observable from a function that drives an [`Emitter`].
///
/// The function runs synchronously on subscribe. Whatever subscription it
/// returns becomes the subscription of the stream, so it is the place to put
/// teardown logic.
///
/// ```
/// use rxrust_switch::prelude::*;
///
/// observable::create(|emitter| {
///   emitter.next(1);
///   emitter.next(2);
///   emitter.complete();
/// })
/// .subscribe(|v: i32| println!("{}", v));
/// ```
pub fn create<F, Item, Err, U>(f: F) -> Create<F, Item, Err>
where
  F: FnOnce(&mut dyn Emitter<Item, Err>) -> U,
  U: Subscription,
{
  Create { f, _marker: PhantomData }
}

/// Observable created from a function.
#[derive(Clone)]
pub struct Create<F, Item, Err> {
  f: F,
  _marker: PhantomData<fn() -> (Item, Err)>,
}

/// Wrapper to implement Emitter for Option<O>.
///
/// A terminal call takes the observer out, and every call is skipped once the
/// observer reports it is closed.
struct CreateEmitter<O>(Option<O>);

impl<O, Item, Err> Emitter<Item, Err> for CreateEmitter<O>
where
  O: Observer<Item, Err>,
{
  #[inline]
  fn next(&mut self, value: Item) {
    if let Some(observer) = self.0.as_mut().filter(|o| !o.is_closed()) {
      observer.next(value);
    }
  }

  #[inline]
  fn error(&mut self, err: Err) {
    if let Some(observer) = self.0.take().filter(|o| !o.is_closed()) {
      observer.error(err);
    }
  }

  #[inline]
  fn complete(&mut self) {
    if let Some(observer) = self.0.take().filter(|o| !o.is_closed()) {
      observer.complete();
    }
  }

  #[inline]
  fn is_closed(&self) -> bool { self.0.as_ref().map_or(true, Observer::is_closed) }
}

impl<F, Item, Err, U> Observable for Create<F, Item, Err>
where
  F: FnOnce(&mut dyn Emitter<Item, Err>) -> U,
  U: Subscription,
{
  type Item = Item;
  type Err = Err;
  type Unsub = U;

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err> + 'static,
  {
    let mut emitter = CreateEmitter(Some(observer));
    (self.f)(&mut emitter)
  }
}
