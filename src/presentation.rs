//! Presentation layer
//!
//! - Routing from state to screen
//! - Components and widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod router;
pub mod widgets;
