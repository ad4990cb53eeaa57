//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate the entry store, aggregator and projector into the calls a
//!   UI makes.
//! - Keep UI/FFI layers decoupled from storage details.

pub mod diary_service;
