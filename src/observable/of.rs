use std::marker::PhantomData;

use crate::{observable::Observable, observer::Observer};

/// Creates an observable producing a single value.
///
/// Completes immediately after emitting the value given. Never emits an
/// error; the error type is left to inference so that `of` can stand in for
/// an inner stream of any outer stream.
///
/// # Examples
///
/// ```
/// use rxrust_switch::prelude::*;
///
/// observable::of(123).subscribe(|v| println!("{},", v));
/// ```
pub fn of<Item, Err>(v: Item) -> OfObservable<Item, Err> { OfObservable(v, PhantomData) }

#[derive(Clone)]
pub struct OfObservable<Item, Err>(pub(crate) Item, PhantomData<fn() -> Err>);

impl<Item, Err> Observable for OfObservable<Item, Err> {
  type Item = Item;
  type Err = Err;
  type Unsub = ();

  fn actual_subscribe<O>(self, mut observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err> + 'static,
  {
    if observer.is_closed() {
      return;
    }
    observer.next(self.0);
    if !observer.is_closed() {
      observer.complete();
    }
  }
}
