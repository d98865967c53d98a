//! Components
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod shell;

pub use shell::ShellComponent;

/// Collection of all components
pub struct Components {
    pub shell: ShellComponent,
}

impl Components {
    pub fn new() -> Self {
        Self {
            shell: ShellComponent::new(),
        }
    }

    /// Main rendering entry point
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        self.shell.view(state, frame, area);
    }
}

impl Default for Components {
    fn default() -> Self {
        Self::new()
    }
}
