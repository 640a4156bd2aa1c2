//! # splitcheck-core
//!
//! Split/decompose (`modf`) implementations exercised by the splitcheck
//! conformance suite: a native decomposition built on the platform float
//! primitives, and a call-through to the host math library.

pub mod host;
pub mod split;

pub use split::{SplitParts, split};
