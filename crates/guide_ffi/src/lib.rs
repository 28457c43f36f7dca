//! Flutter bridge for the guide core.

pub mod api;
