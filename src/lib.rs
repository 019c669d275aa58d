//! # rxrust-switch: the switch operator of Reactive Extensions
//!
//! Flattens a stream of streams by always following the most recently
//! emitted inner stream, on top of a small single-threaded push-based
//! stream core.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::convert::Infallible;
//!
//! use rxrust_switch::prelude::*;
//!
//! let mut queries = Subject::<&str, Infallible>::new();
//! queries
//!   .clone()
//!   .switch_map(|q| observable::from_iter(vec![format!("{q}-1"), format!("{q}-2")]))
//!   .subscribe(|v| println!("Value: {}", v));
//!
//! queries.next("rx");
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | A subscribable stream, operators are its provided methods |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` events |
//! | [`Subscription`] | Handle to cancel an active subscription |
//! | [`Subject`] | A hot source that multicasts to every observer |
//!
//! ## Feature Flags
//!
//! - **`tracing`**: emits `trace`/`debug` events for switch bookkeeping
//!   through the `tracing` crate. Disabled by default.
//!
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`Subscription`]: subscription::Subscription
//! [`Subject`]: subject::Subject
mod logging;

pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod rc;
pub mod subject;
pub mod subscription;

// Re-export the prelude module
pub use prelude::*;

// Bring the README into Cargo-driven doctests.
#[cfg(all(doctest, not(target_arch = "wasm32")))]
mod __markdown_doctests {
  mod readme {
    #![doc = include_str!("../README.md")]
  }
}
