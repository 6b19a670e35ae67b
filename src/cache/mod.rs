//! Cache Module
//!
//! Cache-aside vote/feedback counters: a key-value port with an
//! in-memory TTL backend, and the tally layer that maintains the five
//! per-proposal counters on top of it.

mod counters;
mod tally;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use counters::{CacheUnavailable, CounterCache, InMemoryCounterCache};
pub use tally::{CounterKind, TallyCache, VoteTally};
