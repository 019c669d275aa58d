//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for easy access.

// Creation functions, reached as `observable::of(..)` and friends
pub use crate::observable;
// Core traits and sources
pub use crate::observable::{
  Create, Empty, Never, Observable, ObservableIter, OfObservable, ThrowErr,
};
// Observer trait and adapters
pub use crate::observer::{
  BoxedObserver, Emitter, FnMutObserver, IntoBoxedObserver, Observer, ObserverAll,
};
// Operators
pub use crate::ops::{MapObserver, MapOp, SwitchMapOp, SwitchOnNextOp, SwitchSubscription};
// Shared state
pub use crate::rc::MutRc;
// Subject
pub use crate::subject::*;
// Subscription
pub use crate::subscription::*;
