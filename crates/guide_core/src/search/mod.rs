//! Place search entry points.
//!
//! # Responsibility
//! - Expose the list-screen filter used on every keystroke.

pub mod filter;
