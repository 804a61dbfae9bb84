// ABOUTME: Library root for dx - exposes public types for testing.
// ABOUTME: The main binary is in main.rs.

pub mod commands;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod pager;
pub mod render;
pub mod runtime;
pub mod types;
