pub mod map;
pub mod switch_map;
pub mod switch_on_next;

pub use map::{MapObserver, MapOp};
pub use switch_map::SwitchMapOp;
pub use switch_on_next::{SwitchOnNextOp, SwitchSubscription};
