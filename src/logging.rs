// Conditional logging shim: uses `tracing` when enabled, compiles to nothing
// otherwise. Arguments are still type-checked in the disabled build.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace};

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
  ($($arg:tt)*) => {{
    if false {
      let _ = format_args!($($arg)*);
    }
  }};
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
  ($($arg:tt)*) => {{
    if false {
      let _ = format_args!($($arg)*);
    }
  }};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use {debug, trace};
