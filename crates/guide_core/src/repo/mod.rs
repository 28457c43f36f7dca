//! Storage ports and adapters.
//!
//! # Responsibility
//! - Define the key-value contract the place store persists through.
//! - Keep SQLite details behind that contract.
//!
//! # Invariants
//! - Adapters store bytes verbatim; document encoding belongs to the service layer.

pub mod kv_store;
pub mod sqlite_kv_store;
