//! Text-buffer transform primitives
//!
//! This module provides the allocation-conscious string building blocks the
//! rest of the crate is built on. The pipeline consists of:
//! 1. Scoped buffer acquisition from a thread-local pool
//! 2. In-place transforms (multi-pattern replace, whitespace collapse)
//! 3. Predicate-based trimming that returns subslices of the buffer
//!
//! Buffer Pooling
//!
//! Cleaning runs over every doc comment in a codebase, so the transforms
//! avoid re-allocating a scratch buffer per comment. `PooledBuffer` is a
//! scope guard: acquiring one pops a recycled buffer off a thread-local
//! pool, and dropping it (on any exit path, early returns and unwinds
//! included) clears the buffer and pushes it back. The pool only recycles
//! capacity; it carries no state between acquisitions.
//!
//! Replacement uses a quick-compare pre-check: before a real substring
//! replace is attempted, the candidate window is scanned comparing only
//! boundary bytes, which rejects most non-matching patterns in O(window)
//! instead of O(window * pattern).

pub mod pool;
pub mod replace;
pub mod trim;

pub use pool::PooledBuffer;
pub use replace::{can_contain, replace_all, replace_all_any, replace_all_pairs};
pub use trim::{collapse_whitespace, trim, trim_end, trim_start};
