//! Place store and its persistence document.
//!
//! # Responsibility
//! - Orchestrate place intents into in-memory mutations plus document writes.
//! - Keep UI/FFI layers decoupled from document encoding and storage details.

pub mod document;
pub mod place_store;
pub mod seed;
