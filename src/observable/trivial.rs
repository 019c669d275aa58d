use std::marker::PhantomData;

use crate::{observable::Observable, observer::Observer};

/// Creates an observable that emits no items, just terminates with an error.
pub fn throw_err<Item, Err>(e: Err) -> ThrowErr<Item, Err> { ThrowErr(e, PhantomData) }

#[derive(Clone)]
pub struct ThrowErr<Item, Err>(Err, PhantomData<fn() -> Item>);

impl<Item, Err> Observable for ThrowErr<Item, Err> {
  type Item = Item;
  type Err = Err;
  type Unsub = ();

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err> + 'static,
  {
    if !observer.is_closed() {
      observer.error(self.0);
    }
  }
}

/// Creates an observable that produces no values.
///
/// Completes immediately. Never emits an error.
///
/// ```
/// use rxrust_switch::prelude::*;
///
/// observable::empty().subscribe(|v: i32| println!("{},", v));
///
/// // Result: no thing printed
/// ```
pub fn empty<Item, Err>() -> Empty<Item, Err> { Empty(PhantomData) }

#[derive(Clone)]
pub struct Empty<Item, Err>(PhantomData<fn() -> (Item, Err)>);

impl<Item, Err> Observable for Empty<Item, Err> {
  type Item = Item;
  type Err = Err;
  type Unsub = ();

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err> + 'static,
  {
    if !observer.is_closed() {
      observer.complete();
    }
  }
}

/// Creates an observable that never emits anything.
///
/// Neither emits a value, nor completes, nor emits an error. The observer is
/// dropped right away since it can never be notified.
pub fn never<Item, Err>() -> Never<Item, Err> { Never(PhantomData) }

#[derive(Clone)]
pub struct Never<Item, Err>(PhantomData<fn() -> (Item, Err)>);

impl<Item, Err> Observable for Never<Item, Err> {
  type Item = Item;
  type Err = Err;
  type Unsub = ();

  fn actual_subscribe<O>(self, _: O) -> Self::Unsub
  where
    O: Observer<Item, Err> + 'static,
  {
  }
}

#[cfg(test)]
mod tests {
  use std::{cell::RefCell, rc::Rc};

  use crate::prelude::*;

  #[rxrust_switch_macro::test]
  fn throw() {
    let value_emitted = Rc::new(RefCell::new(false));
    let completed = Rc::new(RefCell::new(false));
    let error_emitted = Rc::new(RefCell::new(String::new()));
    let (v, c, e) = (value_emitted.clone(), completed.clone(), error_emitted.clone());
    observable::throw_err::<i32, _>(String::from("error")).subscribe_all(
      move |_| *v.borrow_mut() = true,
      move |err| *e.borrow_mut() = err,
      move || *c.borrow_mut() = true,
    );
    assert!(!*value_emitted.borrow());
    assert!(!*completed.borrow());
    assert_eq!(*error_emitted.borrow(), "error");
  }

  #[rxrust_switch_macro::test]
  fn empty() {
    let hits = Rc::new(RefCell::new(0));
    let completed = Rc::new(RefCell::new(false));
    let (h, c) = (hits.clone(), completed.clone());
    observable::empty::<i32, ()>().subscribe_all(
      move |_| *h.borrow_mut() += 1,
      |_| {},
      move || *c.borrow_mut() = true,
    );

    assert_eq!(*hits.borrow(), 0);
    assert!(*completed.borrow());
  }

  #[rxrust_switch_macro::test]
  fn never() {
    let events = Rc::new(RefCell::new(0));
    let (e1, e2, e3) = (events.clone(), events.clone(), events.clone());
    observable::never::<i32, ()>().subscribe_all(
      move |_| *e1.borrow_mut() += 1,
      move |_| *e2.borrow_mut() += 1,
      move || *e3.borrow_mut() += 1,
    );
    assert_eq!(*events.borrow(), 0);
  }
}
