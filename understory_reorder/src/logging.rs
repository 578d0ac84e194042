// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logging shims.
//!
//! With the `tracing` feature enabled these are the `tracing` macros. Without it
//! they expand to nothing, so call sites never need their own `cfg`.

#[cfg(feature = "tracing")]
pub(crate) use tracing::{debug, trace, warn};

#[cfg(not(feature = "tracing"))]
macro_rules! noop_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! noop_trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
macro_rules! noop_warn {
    ($($arg:tt)*) => {};
}

// Bare `warn` names the built-in lint attribute too, so the no-op macros are
// defined under distinct names and only aliased through these imports.
#[cfg(not(feature = "tracing"))]
pub(crate) use {noop_debug as debug, noop_trace as trace, noop_warn as warn};
