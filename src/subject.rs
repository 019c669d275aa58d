//! Subject: a hot source that is both an observer and an observable.
//!
//! The switch operator's tests, and most real uses of it, need inner streams
//! that keep emitting after they were subscribed. A [`Subject`] multicasts
//! every notification pushed into it to the observers currently attached.
//!
//! # Re-entrancy
//!
//! Observers may subscribe to, or unsubscribe from, the subject they are
//! being notified by:
//! - an observer removed during a broadcast receives nothing further, not
//!   even the rest of the current broadcast;
//! - an observer added during a broadcast starts with the next notification.
//!
//! Notifications pushed into the subject while it is broadcasting are queued
//! and delivered in order once the current broadcast finishes.

use std::collections::VecDeque;

use smallvec::SmallVec;

use crate::{
  observable::Observable,
  observer::{BoxedObserver, IntoBoxedObserver, Notification, Observer},
  rc::MutRc,
  subscription::Subscription,
};

#[derive(Clone)]
enum Terminal<Err> {
  Error(Err),
  Complete,
}

type Observers<Item, Err> = SmallVec<[(usize, BoxedObserver<'static, Item, Err>); 2]>;

struct SubjectCore<Item, Err> {
  observers: Observers<Item, Err>,
  next_id: usize,
  emitting: bool,
  /// Observers unsubscribed while they were taken out for a broadcast.
  removed: SmallVec<[usize; 2]>,
  pending: VecDeque<Notification<Item, Err>>,
  terminal: Option<Terminal<Err>>,
}

impl<Item, Err> Default for SubjectCore<Item, Err> {
  fn default() -> Self {
    SubjectCore {
      observers: SmallVec::new(),
      next_id: 0,
      emitting: false,
      removed: SmallVec::new(),
      pending: VecDeque::new(),
      terminal: None,
    }
  }
}

/// A multicast source. Clones share the same observers.
pub struct Subject<Item, Err> {
  core: MutRc<SubjectCore<Item, Err>>,
}

impl<Item, Err> Clone for Subject<Item, Err> {
  fn clone(&self) -> Self { Subject { core: self.core.clone() } }
}

impl<Item, Err> Default for Subject<Item, Err> {
  fn default() -> Self { Subject { core: MutRc::own(SubjectCore::default()) } }
}

impl<Item, Err> Subject<Item, Err> {
  pub fn new() -> Self { Self::default() }

  /// The number of observers attached outside of a broadcast.
  pub fn observer_count(&self) -> usize { self.core.rc_deref().observers.len() }

  /// Whether a terminal notification has been pushed.
  pub fn is_stopped(&self) -> bool { self.core.rc_deref().terminal.is_some() }
}

impl<Item: Clone, Err: Clone> Subject<Item, Err> {
  fn emit(&self, notification: Notification<Item, Err>) {
    {
      let mut core = self.core.rc_deref_mut();
      if core.terminal.is_some() {
        return;
      }
      match &notification {
        Notification::Error(err) => core.terminal = Some(Terminal::Error(err.clone())),
        Notification::Complete => core.terminal = Some(Terminal::Complete),
        Notification::Next(_) => {}
      }
      if core.emitting {
        core.pending.push_back(notification);
        return;
      }
      core.emitting = true;
    }

    let mut notification = notification;
    loop {
      self.dispatch(notification);
      let mut core = self.core.rc_deref_mut();
      match core.pending.pop_front() {
        Some(queued) => notification = queued,
        None => {
          core.emitting = false;
          break;
        }
      }
    }
  }

  fn dispatch(&self, notification: Notification<Item, Err>) {
    match notification {
      Notification::Next(value) => self.broadcast_value(value),
      Notification::Error(err) => {
        for (_, observer) in self.drain() {
          observer.error(err.clone());
        }
      }
      Notification::Complete => {
        for (_, observer) in self.drain() {
          observer.complete();
        }
      }
    }
  }

  fn is_removed(&self, id: usize) -> bool { self.core.rc_deref().removed.contains(&id) }

  /// Cloned for all observers except the last one, which receives the moved
  /// value.
  fn broadcast_value(&self, value: Item) {
    let mut observers = std::mem::take(&mut self.core.rc_deref_mut().observers);
    let last = observers.len().saturating_sub(1);
    for (idx, (id, observer)) in observers.iter_mut().enumerate() {
      if self.is_removed(*id) {
        continue;
      }
      if idx == last {
        observer.next(value);
        break;
      }
      observer.next(value.clone());
    }

    let mut core = self.core.rc_deref_mut();
    let removed = std::mem::take(&mut core.removed);
    observers.retain(|(id, observer)| !removed.contains(id) && !observer.is_closed());
    let added = std::mem::replace(&mut core.observers, observers);
    core.observers.extend(added);
  }

  fn drain(&self) -> Observers<Item, Err> {
    let mut core = self.core.rc_deref_mut();
    let removed = std::mem::take(&mut core.removed);
    let mut observers = std::mem::take(&mut core.observers);
    observers.retain(|(id, _)| !removed.contains(id));
    observers
  }
}

impl<Item: Clone, Err: Clone> Observer<Item, Err> for Subject<Item, Err> {
  fn next(&mut self, value: Item) { self.emit(Notification::Next(value)); }

  fn error(self, err: Err) { self.emit(Notification::Error(err)); }

  fn complete(self) { self.emit(Notification::Complete); }

  fn is_closed(&self) -> bool { self.is_stopped() }
}

impl<Item, Err> Observable for Subject<Item, Err>
where
  Item: 'static,
  Err: Clone + 'static,
{
  type Item = Item;
  type Err = Err;
  type Unsub = SubjectSubscription<Item, Err>;

  fn actual_subscribe<O>(self, observer: O) -> Self::Unsub
  where
    O: Observer<Item, Err> + 'static,
  {
    let terminal = self.core.rc_deref().terminal.clone();
    match terminal {
      Some(Terminal::Error(err)) => {
        observer.error(err);
        SubjectSubscription { core: self.core, id: None }
      }
      Some(Terminal::Complete) => {
        observer.complete();
        SubjectSubscription { core: self.core, id: None }
      }
      None => {
        let id = {
          let mut core = self.core.rc_deref_mut();
          let id = core.next_id;
          core.next_id += 1;
          core.observers.push((id, observer.into_boxed()));
          id
        };
        SubjectSubscription { core: self.core, id: Some(id) }
      }
    }
  }
}

/// Detaches one observer from a [`Subject`].
pub struct SubjectSubscription<Item, Err> {
  core: MutRc<SubjectCore<Item, Err>>,
  id: Option<usize>,
}

impl<Item, Err> Subscription for SubjectSubscription<Item, Err> {
  fn unsubscribe(self) {
    let Some(id) = self.id else { return };
    let removed = {
      let mut core = self.core.rc_deref_mut();
      match core.observers.iter().position(|(i, _)| *i == id) {
        Some(idx) => Some(core.observers.remove(idx)),
        None => {
          if core.emitting {
            core.removed.push(id);
          }
          None
        }
      }
    };
    // Dropped outside of the borrow, the observer may own other subscriptions.
    drop(removed);
  }

  fn is_closed(&self) -> bool { self.id.is_none() || self.core.rc_deref().terminal.is_some() }
}
