//! Host-side plumbing
//!
//! - Command line and configuration loading
//! - Terminal backends
//! - System clipboard

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod tui;
