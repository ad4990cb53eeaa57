//! Repository layer for persisted pain entries.
//!
//! # Responsibility
//! - Define the entry store contract used by the service layer.
//! - Keep SQL details behind the SQLite implementation.
//!
//! # Invariants
//! - Write paths validate entries before any SQL mutation.
//! - Read paths reject invalid persisted rows instead of masking them.

pub mod entry_repo;
