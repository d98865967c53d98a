//! # Mind_OS - a wellness check-in for the terminal
//!
//! A short boot sequence, a landing page, a mood check and a (simulated)
//! connection to a councillor, built with Rust and Ratatui.
//! This library implements an Elm-like architecture for predictable state management.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): Application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (the boot timer, rendering, logging)
//! - **View** (`presentation`): Routing and rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use mindos::{
//!     core::{
//!         msg::{boot::BootMsg, view::ViewMsg, Msg},
//!         state::AppState,
//!         update::update,
//!     },
//!     domain::{Mood, View},
//!     presentation::router::Screen,
//! };
//!
//! let state = AppState::default();
//! let (state, _) = update(Msg::Boot(BootMsg::Finished), state);
//! let (state, _) = update(Msg::View(ViewMsg::Start), state);
//! let (state, _) = update(Msg::View(ViewMsg::SelectMood(Mood::Happy)), state);
//!
//! assert_eq!(state.view.current(), View::Connect);
//! assert_eq!(Screen::for_state(&state), Screen::Connect { mood: Mood::Happy });
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, update and command execution
//! - [`domain`] - Views and moods
//! - [`infrastructure`] - Terminal, config, CLI and the boot timer
//! - [`integration`] - Runtime and main loop
//! - [`presentation`] - Router, components and widgets
//! - [`utils`] - Logging, panic handling and paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, update::update};
pub use integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
