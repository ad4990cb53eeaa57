//! Flutter-facing bindings for the pain diary core.

pub mod api;
