//! Employee Manager Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod services;
/// In-memory entity store
///
/// Handles the manager and employee collections and their records.
pub mod state;
