//! SwitchOnNext operator
//!
//! Converts a higher-order Observable into a first-order Observable by
//! forwarding only the items of the most recently emitted inner Observable.
//!
//! Behavior summary:
//! - A new inner Observable disposes the subscription to the previous one
//!   before it is subscribed itself.
//! - Values from a superseded inner Observable are dropped, even if its
//!   producer keeps emitting after being unsubscribed.
//! - The operator completes only after the source completes and the current
//!   inner Observable completes.
//! - The first error from the source or from the current inner Observable is
//!   forwarded once, after every held subscription has been disposed.
//!
//! # Identity of inner streams
//!
//! Every inner subscription is tagged with a generation number. The shared
//! [`SwitchState`] records the generation of the current inner stream, and an
//! inner observer only acts while its own generation is the current one.
//! Superseding an inner stream bumps the generation before anything else
//! happens, so late callbacks from the old stream are rejected no matter when
//! they arrive.
//!
//! # Re-entrancy
//!
//! The state cell is never borrowed across a call into a source or into the
//! downstream observer. Inner streams may emit, complete or fail while
//! `actual_subscribe` is still running. Notifications that arrive while the
//! downstream observer is busy (because it pushed into the source it is
//! observing) are queued and delivered in order once it returns.

use std::collections::VecDeque;

use crate::{
  logging::{debug, trace},
  observable::Observable,
  observer::{Notification, Observer},
  rc::MutRc,
  subscription::{BoxedSubscription, IntoBoxedSubscription, Subscription},
};

/// Stream returned by
/// [`Observable::switch_on_next`](crate::observable::Observable::switch_on_next).
#[derive(Clone)]
pub struct SwitchOnNextOp<S> {
  pub(crate) source: S,
}

#[doc(hidden)]
#[derive(Default)]
pub struct SwitchState {
  outer: Option<BoxedSubscription>,
  inner: Option<BoxedSubscription>,
  /// Set from the moment an inner subscribe starts, so an inner stream that
  /// has not returned its handle yet still counts as running.
  inner_active: bool,
  generation: u64,
  outer_completed: bool,
  /// No notification other than an already decided terminal one may reach
  /// downstream.
  closed: bool,
  /// Downstream unsubscribed; nothing at all may reach it.
  disposed: bool,
}

impl SwitchState {
  #[inline]
  fn is_current(&self, generation: u64) -> bool { !self.closed && self.generation == generation }

  /// Marks the operator terminated and hands out every held subscription.
  fn close(&mut self) -> Held {
    self.closed = true;
    self.inner_active = false;
    Held { outer: self.outer.take(), inner: self.inner.take() }
  }
}

/// Subscriptions taken out of the state, released once the borrow is gone.
struct Held {
  outer: Option<BoxedSubscription>,
  inner: Option<BoxedSubscription>,
}

impl Held {
  fn release(self) {
    self.inner.unsubscribe();
    self.outer.unsubscribe();
  }
}

struct Downstream<O, Item, Err> {
  observer: Option<O>,
  /// The observer is out of the cell and being called.
  forwarding: bool,
  backlog: VecDeque<Notification<Item, Err>>,
}

impl<O, Item, Err> Downstream<O, Item, Err>
where
  O: Observer<Item, Err>,
{
  fn is_closed(&self) -> bool {
    !self.forwarding && self.observer.as_ref().map_or(true, O::is_closed)
  }

  fn stop(&mut self) {
    self.forwarding = false;
    self.backlog.clear();
  }
}

type Sink<O, Item, Err> = MutRc<Downstream<O, Item, Err>>;

/// Delivers `notification` downstream, or queues it behind the delivery that
/// is in progress.
fn forward<O, Item, Err>(
  sink: &Sink<O, Item, Err>, state: &MutRc<SwitchState>, notification: Notification<Item, Err>,
) where
  O: Observer<Item, Err>,
{
  let observer = {
    let mut ds = sink.rc_deref_mut();
    if ds.forwarding {
      ds.backlog.push_back(notification);
      return;
    }
    let Some(observer) = ds.observer.take() else { return };
    ds.forwarding = true;
    observer
  };

  let mut observer = observer;
  let mut notification = notification;
  loop {
    match notification {
      Notification::Next(value) => observer.next(value),
      Notification::Error(err) => {
        sink.rc_deref_mut().stop();
        observer.error(err);
        return;
      }
      Notification::Complete => {
        sink.rc_deref_mut().stop();
        observer.complete();
        return;
      }
    }

    let mut ds = sink.rc_deref_mut();
    if state.rc_deref().disposed {
      ds.stop();
      break;
    }
    match ds.backlog.pop_front() {
      Some(queued) => notification = queued,
      None => {
        ds.forwarding = false;
        ds.observer = Some(observer);
        return;
      }
    }
  }
  // Disposed while forwarding, the observer is dropped here.
  drop(observer);
}

#[doc(hidden)]
pub struct SwitchOuterObserver<O, Item, Err> {
  state: MutRc<SwitchState>,
  sink: Sink<O, Item, Err>,
}

#[doc(hidden)]
pub struct SwitchInnerObserver<O, Item, Err> {
  state: MutRc<SwitchState>,
  sink: Sink<O, Item, Err>,
  generation: u64,
}

/// Subscription returned by the `switch_on_next` operator.
///
/// Unsubscribing disposes the source subscription and the current inner
/// subscription, whichever exist, and silences the operator for good.
/// Unsubscribing after the output has terminated does nothing.
pub struct SwitchSubscription {
  state: MutRc<SwitchState>,
}

impl Subscription for SwitchSubscription {
  fn unsubscribe(self) {
    let held = {
      let mut st = self.state.rc_deref_mut();
      st.disposed = true;
      if st.closed {
        return;
      }
      st.close()
    };
    debug!("switch_on_next: disposed by downstream");
    held.release();
  }

  fn is_closed(&self) -> bool { self.state.rc_deref().closed }
}

impl<S> Observable for SwitchOnNextOp<S>
where
  S: Observable,
  S::Item: Observable<Err = S::Err>,
  S::Unsub: 'static,
  S::Err: 'static,
  <S::Item as Observable>::Item: 'static,
  <S::Item as Observable>::Unsub: 'static,
{
  type Item = <S::Item as Observable>::Item;
  type Err = S::Err;
  type Unsub = SwitchSubscription;

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Self::Item, Self::Err> + 'static,
  {
    let state = MutRc::own(SwitchState::default());
    let sink = MutRc::own(Downstream {
      observer: Some(observer),
      forwarding: false,
      backlog: VecDeque::new(),
    });

    let outer_unsub = self
      .source
      .actual_subscribe(SwitchOuterObserver { state: state.clone(), sink });

    // A synchronous source may already be done with the operator.
    let finished = {
      let mut st = state.rc_deref_mut();
      if st.closed || st.outer_completed {
        Some(outer_unsub)
      } else {
        st.outer = Some(outer_unsub.into_boxed());
        None
      }
    };
    finished.unsubscribe();

    SwitchSubscription { state }
  }
}

impl<O, Item, Err, InnerObs> Observer<InnerObs, Err> for SwitchOuterObserver<O, Item, Err>
where
  InnerObs: Observable<Item = Item, Err = Err>,
  InnerObs::Unsub: 'static,
  O: Observer<Item, Err> + 'static,
  Item: 'static,
  Err: 'static,
{
  fn next(&mut self, inner: InnerObs) {
    let (generation, previous) = {
      let mut st = self.state.rc_deref_mut();
      if st.closed {
        return;
      }
      st.generation += 1;
      st.inner_active = true;
      (st.generation, st.inner.take())
    };

    if let Some(previous) = previous {
      trace!("switch_on_next: disposing inner stream superseded by generation {}", generation);
      previous.unsubscribe();
    }
    // Disposing the previous stream may have re-entered the operator.
    if !self.state.rc_deref().is_current(generation) {
      return;
    }

    trace!("switch_on_next: subscribing inner generation {}", generation);
    let inner_unsub = inner.actual_subscribe(SwitchInnerObserver {
      state: self.state.clone(),
      sink: self.sink.clone(),
      generation,
    });

    let stale = {
      let mut st = self.state.rc_deref_mut();
      if st.is_current(generation) && st.inner_active {
        st.inner = Some(inner_unsub.into_boxed());
        None
      } else {
        Some(inner_unsub)
      }
    };
    if let Some(stale) = stale {
      trace!("switch_on_next: inner generation {} ended during subscribe", generation);
      stale.unsubscribe();
    }
  }

  fn error(self, err: Err) {
    let held = {
      let mut st = self.state.rc_deref_mut();
      if st.closed {
        return;
      }
      st.close()
    };
    held.release();
    debug!("switch_on_next: source failed, forwarding error");
    forward(&self.sink, &self.state, Notification::Error(err));
  }

  fn complete(self) {
    let (outer, done) = {
      let mut st = self.state.rc_deref_mut();
      if st.closed {
        return;
      }
      st.outer_completed = true;
      let done = !st.inner_active;
      if done {
        st.closed = true;
      }
      (st.outer.take(), done)
    };
    outer.unsubscribe();

    if done {
      debug!("switch_on_next: source completed with no active inner stream");
      forward(&self.sink, &self.state, Notification::Complete);
    } else {
      trace!("switch_on_next: source completed, waiting for the active inner stream");
    }
  }

  fn is_closed(&self) -> bool { self.state.rc_deref().closed || self.sink.rc_deref().is_closed() }
}

impl<O, Item, Err> Observer<Item, Err> for SwitchInnerObserver<O, Item, Err>
where
  O: Observer<Item, Err>,
{
  fn next(&mut self, value: Item) {
    if self.state.rc_deref().is_current(self.generation) {
      forward(&self.sink, &self.state, Notification::Next(value));
    } else {
      trace!("switch_on_next: dropped value of superseded generation {}", self.generation);
    }
  }

  fn error(self, err: Err) {
    let held = {
      let mut st = self.state.rc_deref_mut();
      if !st.is_current(self.generation) {
        return;
      }
      st.close()
    };
    held.release();
    debug!("switch_on_next: inner generation {} failed, forwarding error", self.generation);
    forward(&self.sink, &self.state, Notification::Error(err));
  }

  fn complete(self) {
    let (inner, done) = {
      let mut st = self.state.rc_deref_mut();
      if !st.is_current(self.generation) {
        return;
      }
      st.inner_active = false;
      let done = st.outer_completed;
      if done {
        st.closed = true;
      }
      (st.inner.take(), done)
    };
    inner.unsubscribe();

    if done {
      debug!("switch_on_next: last inner generation {} completed", self.generation);
      forward(&self.sink, &self.state, Notification::Complete);
    }
  }

  fn is_closed(&self) -> bool {
    !self.state.rc_deref().is_current(self.generation) || self.sink.rc_deref().is_closed()
  }
}


#[cfg(test)]
mod tests {
  use std::{cell::RefCell, convert::Infallible, rc::Rc};

  use crate::{observer::BoxedObserver, prelude::*};

  /// Reflects the events that can happen on observables.
  #[derive(Eq, PartialEq, Debug, Clone)]
  enum Event<Item, Err> {
    Next(Item),
    Error(Err),
    Complete,
  }

  /// A buffer for testing observables.
  struct EventBuffer<Item, Err> {
    buffer: Rc<RefCell<Vec<Event<Item, Err>>>>,
  }

  impl<Item: 'static, Err: 'static> EventBuffer<Item, Err> {
    fn new() -> Self { EventBuffer { buffer: Rc::new(RefCell::new(Vec::new())) } }

    fn observe<S>(&self, source: S) -> S::Unsub
    where
      S: Observable<Item = Item, Err = Err>,
    {
      let (n, e, c) = (self.buffer.clone(), self.buffer.clone(), self.buffer.clone());
      source.subscribe_all(
        move |v| n.borrow_mut().push(Event::Next(v)),
        move |err| e.borrow_mut().push(Event::Error(err)),
        move || c.borrow_mut().push(Event::Complete),
      )
    }

    /// Empties buffer and returns current content.
    fn pop(&self) -> Vec<Event<Item, Err>> { self.buffer.replace(Vec::new()) }
  }

  type Slot<Item> = Rc<RefCell<Option<BoxedObserver<'static, Item, &'static str>>>>;

  /// A hand-driven source. Unsubscribing does not detach its observer, the
  /// way a producer that is already mid-flight keeps calling back.
  #[derive(Clone)]
  struct Relay<Item> {
    slot: Slot<Item>,
    on_subscribe: Option<Item>,
    on_dispose: Option<Item>,
  }

  fn relay<Item>() -> Relay<Item> {
    Relay { slot: Rc::new(RefCell::new(None)), on_subscribe: None, on_dispose: None }
  }

  fn push<Item>(slot: &Slot<Item>, v: Item) {
    let observer = slot.borrow_mut().take();
    if let Some(mut observer) = observer {
      observer.next(v);
      let mut slot = slot.borrow_mut();
      if slot.is_none() {
        *slot = Some(observer);
      }
    }
  }

  impl<Item> Relay<Item> {
    fn emit(&self, v: Item) { push(&self.slot, v) }

    fn fail(&self, err: &'static str) {
      let observer = self.slot.borrow_mut().take();
      if let Some(observer) = observer {
        observer.error(err);
      }
    }

    fn finish(&self) {
      let observer = self.slot.borrow_mut().take();
      if let Some(observer) = observer {
        observer.complete();
      }
    }
  }

  struct RelayHandle<Item> {
    slot: Slot<Item>,
    on_dispose: Option<Item>,
  }

  impl<Item> Subscription for RelayHandle<Item> {
    fn unsubscribe(self) {
      if let Some(v) = self.on_dispose {
        push(&self.slot, v);
      }
    }

    fn is_closed(&self) -> bool { false }
  }

  impl<Item: 'static> Observable for Relay<Item> {
    type Item = Item;
    type Err = &'static str;
    type Unsub = RelayHandle<Item>;

    fn actual_subscribe<O>(self, mut observer: O) -> Self::Unsub
    where
      O: Observer<Item, &'static str> + 'static,
    {
      if let Some(v) = self.on_subscribe {
        observer.next(v);
      }
      *self.slot.borrow_mut() = Some(Box::new(observer));
      RelayHandle { slot: self.slot, on_dispose: self.on_dispose }
    }
  }

  use Event::*;

  #[rxrust_switch_macro::test]
  fn base_function() {
    let buffer = EventBuffer::<i32, Infallible>::new();
    let s = Subject::<i32, Infallible>::new();
    let ranges = s
      .clone()
      .map(|i| observable::from_iter::<_, Infallible>(i..(i + 3)));

    let _sub = buffer.observe(ranges.switch_on_next());

    s.clone().next(0);
    assert_eq!(buffer.pop(), vec![Next(0), Next(1), Next(2)]);
    s.clone().next(10);
    assert_eq!(buffer.pop(), vec![Next(10), Next(11), Next(12)]);
    s.clone().next(100);
    assert_eq!(buffer.pop(), vec![Next(100), Next(101), Next(102)]);
    s.complete();
    assert_eq!(buffer.pop(), vec![Complete]);
  }

  #[rxrust_switch_macro::test]
  fn completion_details() {
    let buffer = EventBuffer::<&'static str, Infallible>::new();
    let mut outer = Subject::<&'static str, Infallible>::new();
    let mut a = Subject::<&'static str, Infallible>::new();
    let mut b = Subject::<&'static str, Infallible>::new();
    let mut c = Subject::<&'static str, Infallible>::new();
    let ranges = {
      let (a, b, c) = (a.clone(), b.clone(), c.clone());
      outer.clone().map(move |i| match i {
        "a" => a.clone(),
        "b" => b.clone(),
        _ => c.clone(),
      })
    };

    let _sub = buffer.observe(ranges.switch_on_next());

    outer.next("a");
    a.next("a1");
    a.next("a2");
    outer.next("b");
    a.next("a3");
    a.complete();
    b.next("b1");
    b.next("b2");
    b.complete();
    c.next("c1");
    outer.next("c");
    c.next("c2");
    outer.complete();
    c.next("c3");
    assert_eq!(
      buffer.pop(),
      vec![Next("a1"), Next("a2"), Next("b1"), Next("b2"), Next("c2"), Next("c3")]
    );
    c.complete();
    assert_eq!(buffer.pop(), vec![Complete]);
  }

  #[rxrust_switch_macro::test]
  fn unsubscribe_details() {
    let buffer = EventBuffer::<&'static str, Infallible>::new();
    let mut outer = Subject::<&'static str, Infallible>::new();
    let mut a = Subject::<&'static str, Infallible>::new();
    let mut b = Subject::<&'static str, Infallible>::new();
    let ranges = {
      let (a, b) = (a.clone(), b.clone());
      outer
        .clone()
        .map(move |i| if i == "a" { a.clone() } else { b.clone() })
    };

    let subscription = buffer.observe(ranges.switch_on_next());

    outer.next("a");
    a.next("a1");
    outer.next("b");
    a.next("a2");
    b.next("b1");
    subscription.unsubscribe();
    b.next("b2");
    outer.next("a");
    a.next("a3");
    assert_eq!(outer.observer_count(), 0);
    assert_eq!(a.observer_count(), 0);
    assert_eq!(b.observer_count(), 0);
    outer.complete();
    assert_eq!(buffer.pop(), vec![Next("a1"), Next("b1")]);
  }

  #[rxrust_switch_macro::test]
  fn switching_disposes_previous_before_subscribing_next() {
    let log = Rc::new(RefCell::new(Vec::<String>::new()));
    let mut outer = Subject::<&'static str, Infallible>::new();

    let l = log.clone();
    let _sub = outer
      .clone()
      .switch_map(move |name| {
        let (on_sub, on_unsub) = (l.clone(), l.clone());
        observable::create(move |_: &mut dyn Emitter<i32, Infallible>| {
          on_sub.borrow_mut().push(format!("subscribe {name}"));
          ClosureSubscription(move || on_unsub.borrow_mut().push(format!("dispose {name}")))
        })
      })
      .subscribe(|_| {});

    outer.next("a");
    outer.next("b");
    assert_eq!(*log.borrow(), vec!["subscribe a", "dispose a", "subscribe b"]);
  }

  #[rxrust_switch_macro::test]
  fn synchronous_inner_emission_is_forwarded() {
    let buffer = EventBuffer::<i32, Infallible>::new();
    let mut outer = Subject::<ObservableIter<Vec<i32>, Infallible>, Infallible>::new();
    let _sub = buffer.observe(outer.clone().switch_on_next());

    outer.next(observable::from_iter(vec![1, 2]));
    outer.next(observable::from_iter(vec![3]));
    assert_eq!(buffer.pop(), vec![Next(1), Next(2), Next(3)]);
    outer.complete();
    assert_eq!(buffer.pop(), vec![Complete]);
  }

  #[rxrust_switch_macro::test]
  fn outer_completes_immediately_without_inner() {
    let buffer = EventBuffer::<i32, Infallible>::new();
    let sub = buffer
      .observe(observable::empty::<Subject<i32, Infallible>, Infallible>().switch_on_next());
    assert_eq!(buffer.pop(), vec![Complete]);
    assert!(sub.is_closed());
  }

  #[rxrust_switch_macro::test]
  fn synchronous_inner_completion_does_not_block_completion() {
    let buffer = EventBuffer::<i32, Infallible>::new();
    let _sub = buffer.observe(
      observable::from_iter::<_, Infallible>(vec![1, 2, 3])
        .switch_map(|v| observable::of::<_, Infallible>(v)),
    );
    assert_eq!(buffer.pop(), vec![Next(1), Next(2), Next(3), Complete]);
  }

  #[rxrust_switch_macro::test]
  fn superseded_inner_values_are_dropped_even_if_it_keeps_emitting() {
    let buffer = EventBuffer::<i32, &'static str>::new();
    let mut outer = Subject::<Relay<i32>, &'static str>::new();
    let (a, b) = (relay::<i32>(), relay::<i32>());
    let _sub = buffer.observe(outer.clone().switch_on_next());

    outer.next(a.clone());
    a.emit(1);
    a.emit(2);
    outer.next(b.clone());
    a.emit(3);
    b.emit(10);
    b.emit(20);
    outer.complete();
    a.finish();
    assert_eq!(buffer.pop(), vec![Next(1), Next(2), Next(10), Next(20)]);
    b.finish();
    assert_eq!(buffer.pop(), vec![Complete]);
  }

  #[rxrust_switch_macro::test]
  fn emission_during_disposal_is_dropped() {
    let buffer = EventBuffer::<i32, &'static str>::new();
    let mut outer = Subject::<Relay<i32>, &'static str>::new();
    let a = Relay { on_dispose: Some(99), ..relay() };
    let _sub = buffer.observe(outer.clone().switch_on_next());

    outer.next(a.clone());
    a.emit(1);
    outer.next(relay());
    a.emit(2);
    assert_eq!(buffer.pop(), vec![Next(1)]);
  }

  #[rxrust_switch_macro::test]
  fn stale_inner_error_is_ignored() {
    let buffer = EventBuffer::<i32, &'static str>::new();
    let mut outer = Subject::<Relay<i32>, &'static str>::new();
    let (a, b) = (relay::<i32>(), relay::<i32>());
    let _sub = buffer.observe(outer.clone().switch_on_next());

    outer.next(a.clone());
    outer.next(b.clone());
    a.fail("stale");
    b.emit(1);
    assert_eq!(buffer.pop(), vec![Next(1)]);
  }

  #[rxrust_switch_macro::test]
  fn inner_error_terminates_and_hides_outer_completion() {
    let buffer = EventBuffer::<i32, &'static str>::new();
    let mut outer = Subject::<Subject<i32, &'static str>, &'static str>::new();
    let mut a = Subject::<i32, &'static str>::new();
    let _sub = buffer.observe(outer.clone().switch_on_next());

    outer.next(a.clone());
    a.next(1);
    a.error("E");
    assert_eq!(outer.observer_count(), 0);
    outer.next(Subject::new());
    outer.complete();
    assert_eq!(buffer.pop(), vec![Next(1), Error("E")]);
  }

  #[rxrust_switch_macro::test]
  fn outer_error_disposes_active_inner() {
    let buffer = EventBuffer::<i32, &'static str>::new();
    let mut outer = Subject::<Subject<i32, &'static str>, &'static str>::new();
    let mut a = Subject::<i32, &'static str>::new();
    let _sub = buffer.observe(outer.clone().switch_on_next());

    outer.next(a.clone());
    outer.error("outer");
    assert_eq!(a.observer_count(), 0);
    a.next(1);
    a.complete();
    assert_eq!(buffer.pop(), vec![Error("outer")]);
  }

  #[rxrust_switch_macro::test]
  fn synchronous_outer_failure_after_inner() {
    let buffer = EventBuffer::<i32, &'static str>::new();
    let inner = Subject::<i32, &'static str>::new();
    let probe = inner.clone();
    let source =
      observable::create(move |emitter: &mut dyn Emitter<Subject<i32, &'static str>, &'static str>| {
        emitter.next(inner.clone());
        emitter.error("outer");
      });
    let sub = buffer.observe(source.switch_on_next());
    assert_eq!(buffer.pop(), vec![Error("outer")]);
    assert_eq!(probe.observer_count(), 0);
    assert!(sub.is_closed());
  }

  #[rxrust_switch_macro::test]
  fn unsubscribe_silences_output() {
    let buffer = EventBuffer::<i32, Infallible>::new();
    let mut outer = Subject::<Subject<i32, Infallible>, Infallible>::new();
    let mut a = Subject::<i32, Infallible>::new();
    let sub = buffer.observe(outer.clone().switch_on_next());

    outer.next(a.clone());
    a.next(1);
    assert!(!sub.is_closed());
    sub.unsubscribe();
    assert_eq!(outer.observer_count(), 0);
    assert_eq!(a.observer_count(), 0);
    a.next(2);
    outer.complete();
    assert_eq!(buffer.pop(), vec![Next(1)]);
  }

  #[rxrust_switch_macro::test]
  fn unsubscribe_after_completion_is_noop() {
    let buffer = EventBuffer::<i32, Infallible>::new();
    let done = buffer.observe(
      observable::of::<_, Infallible>(observable::of::<_, Infallible>(5)).switch_on_next(),
    );
    assert!(done.is_closed());
    done.unsubscribe();
    assert_eq!(buffer.pop(), vec![Next(5), Complete]);
  }

  #[rxrust_switch_macro::test]
  fn downstream_pushing_into_outer_is_serialized() {
    let outer = Subject::<i32, Infallible>::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let (l, mut feedback) = (log.clone(), outer.clone());
    let _sub = outer
      .clone()
      .switch_map(|i| observable::from_iter::<_, Infallible>(vec![i, i + 1]))
      .subscribe(move |v| {
        l.borrow_mut().push(v);
        if v == 1 {
          feedback.next(10);
        }
      });

    outer.clone().next(1);
    assert_eq!(*log.borrow(), vec![1, 2, 10, 11]);
  }

  #[rxrust_switch_macro::test]
  fn values_emitted_while_downstream_is_busy_are_queued() {
    let outer = relay::<Relay<i32>>();
    let a = relay::<i32>();
    let b = Relay { on_subscribe: Some(10), ..relay() };
    let log = Rc::new(RefCell::new(Vec::new()));

    let (l, o) = (log.clone(), outer.clone());
    let _sub = outer.clone().switch_on_next().subscribe_all(
      move |v| {
        l.borrow_mut().push(v);
        if v == 1 {
          o.emit(b.clone());
        }
      },
      |_| {},
      || {},
    );

    outer.emit(a.clone());
    a.emit(1);
    a.emit(2);
    assert_eq!(*log.borrow(), vec![1, 10]);
  }

  #[rxrust_switch_macro::test]
  fn unsubscribe_from_downstream_drops_queued_values() {
    let outer = Subject::<i32, Infallible>::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let handle: Rc<RefCell<Option<SwitchSubscription>>> = Default::default();

    let (l, h) = (log.clone(), handle.clone());
    let sub = outer
      .clone()
      .switch_map(|i| observable::from_iter::<_, Infallible>(vec![i, i + 1, i + 2]))
      .subscribe(move |v| {
        l.borrow_mut().push(v);
        let sub = h.borrow_mut().take();
        if let Some(sub) = sub {
          sub.unsubscribe();
        }
      });
    *handle.borrow_mut() = Some(sub);

    outer.clone().next(1);
    assert_eq!(*log.borrow(), vec![1]);
    assert_eq!(outer.observer_count(), 0);
  }
}
