//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing
//! - Configuration loading
//! - The one-shot boot timer

pub mod boot_timer;
pub mod cli;
pub mod config;
pub mod tui;
