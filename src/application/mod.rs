//! Application layer - services exposed to callers
//!
//! Orchestrates domain rules over an infrastructure transport.

pub mod services;

pub use services::*;
