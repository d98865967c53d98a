use crate::infrastructure::config::Config;

pub mod boot;
pub mod system;
pub mod view;

pub use boot::BootState;
pub use system::SystemState;
pub use view::ViewState;

/// Unified application state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub boot: BootState,
    pub view: ViewState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState with the specified config
    pub fn new_with_config(config: Config) -> Self {
        Self {
            config: ConfigState { config },
            ..Default::default()
        }
    }

    /// Whether the boot screen is still shown
    pub fn is_booting(&self) -> bool {
        self.boot.is_booting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::View;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert!(state.is_booting());
        assert_eq!(state.view.current(), View::Landing);
        assert_eq!(state.view.mood(), None);
        assert!(!state.system.should_quit);
    }

    #[test]
    fn test_app_state_new_with_config_keeps_session_defaults() {
        let state = AppState::new_with_config(Config::default());

        assert!(state.is_booting());
        assert_eq!(state.view, ViewState::default());
        assert_eq!(state.config.config, Config::default());
    }
}
