use std::marker::PhantomData;

use crate::{observable::Observable, observer::Observer};

/// Creates an observable that produces values from an iterator.
///
/// Completes when all elements have been emitted. Never emits an error.
/// Emission stops early once the observer reports it is closed, so a
/// superseded inner stream built from a long iterator does not keep running.
///
/// ```
/// use rxrust_switch::prelude::*;
///
/// observable::from_iter(vec![0, 1, 2, 3]).subscribe(|v| println!("{},", v));
/// ```
pub fn from_iter<Iter, Err>(iter: Iter) -> ObservableIter<Iter, Err>
where
  Iter: IntoIterator,
{
  ObservableIter(iter, PhantomData)
}

#[derive(Clone)]
pub struct ObservableIter<Iter, Err>(Iter, PhantomData<fn() -> Err>);

impl<Iter, Err> Observable for ObservableIter<Iter, Err>
where
  Iter: IntoIterator,
{
  type Item = Iter::Item;
  type Err = Err;
  type Unsub = ();

  fn actual_subscribe<O>(self, mut observer: O) -> Self::Unsub
  where
    O: Observer<Iter::Item, Err> + 'static,
  {
    for v in self.0 {
      if observer.is_closed() {
        return;
      }
      observer.next(v);
    }
    if !observer.is_closed() {
      observer.complete();
    }
  }
}
