//! Domain model for pain diary entries.
//!
//! # Responsibility
//! - Define the canonical record persisted by the entry store.
//! - Keep validation rules next to the data they protect.
//!
//! # Invariants
//! - Every entry is identified by its epoch-millisecond timestamp.
//! - Pain levels are finite and within `[0, 10]`.

pub mod entry;
