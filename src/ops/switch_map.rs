//! SwitchMap operator
//!
//! Transforms each value emitted by the source into an inner Observable, and
//! forwards items from only the most recently created inner Observable. It is
//! the composition of [`map`](crate::observable::Observable::map) and
//! [`switch_on_next`](crate::observable::Observable::switch_on_next) and
//! inherits all of the latter's guarantees.
//!
//! Common uses: canceling in-flight operations (e.g. lookups) when new input
//! arrives, implementing type-ahead search, or switching between streams
//! based on user input.
//!
//! ```rust
//! use std::{cell::RefCell, convert::Infallible, rc::Rc};
//!
//! use rxrust_switch::prelude::*;
//!
//! let mut query = Subject::<&'static str, Infallible>::new();
//! let results = Rc::new(RefCell::new(vec![]));
//! let r = results.clone();
//! let _subscription = query
//!   .clone()
//!   .switch_map(|q| observable::from_iter([format!("{q}-1"), format!("{q}-2")]))
//!   .subscribe(move |hit| r.borrow_mut().push(hit));
//!
//! query.next("rx");
//! assert_eq!(*results.borrow(), vec!["rx-1", "rx-2"]);
//! ```

use crate::ops::{map::MapOp, switch_on_next::SwitchOnNextOp};

/// Stream returned by [`Observable::switch_map`](crate::observable::Observable::switch_map).
pub type SwitchMapOp<S, F> = SwitchOnNextOp<MapOp<S, F>>;
