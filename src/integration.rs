//! Integration layer
//!
//! Wires the pure Elm core to the terminal:
//! - Runtime: message queues, update loop and command execution
//! - Renderer: draws the current state
//! - AppRunner: the main event loop

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
