//! Application shell
//!
//! Boot screen full-screen; every other screen gets the navbar on top
//! and the status bar at the bottom.

use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::{
        config::keybindings::Action,
        router::Screen,
        widgets::{
            BootScreenWidget, CouncillorConnectWidget, KeyHint, LandingWidget,
            MoodSelectorWidget, NavbarWidget, StatusBarWidget,
        },
    },
};

#[derive(Debug, Clone, Default)]
pub struct ShellComponent;

impl ShellComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let config = &state.config.config;
        let styles = &config.styles;
        let screen = Screen::for_state(state);

        if screen == Screen::Boot {
            frame.render_widget(BootScreenWidget::new(styles), area);
            return;
        }

        let [navbar_area, main_area, status_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            NavbarWidget::new(styles, config.keybindings.keys_for(Action::NavigateHome)),
            navbar_area,
        );

        match screen {
            Screen::Landing => frame.render_widget(
                LandingWidget::new(styles, config.keybindings.keys_for(Action::Start)),
                main_area,
            ),
            Screen::MoodSelect => {
                let first_key = |action| config.keybindings.keys_for(action).into_iter().next();
                let mood_keys = [
                    first_key(Action::SelectStressed),
                    first_key(Action::SelectNeutral),
                    first_key(Action::SelectHappy),
                ];
                frame.render_widget(MoodSelectorWidget::new(styles, mood_keys), main_area);
            }
            Screen::Connect { mood } => {
                frame.render_widget(CouncillorConnectWidget::new(styles, mood), main_area)
            }
            Screen::Boot => {}
        }

        frame.render_widget(
            StatusBarWidget::new(
                self.hints(state, screen),
                state.system.status_message.as_deref(),
                styles.get_or_default("status"),
            ),
            status_area,
        );
    }

    /// Key hints for the actions the screen accepts
    pub fn hints(&self, state: &AppState, screen: Screen) -> Vec<KeyHint> {
        let keybindings = &state.config.config.keybindings;
        let actions: &[(Action, &'static str)] = match screen {
            Screen::Boot => &[],
            Screen::Landing => &[(Action::Start, "start")],
            Screen::MoodSelect => &[
                (Action::SelectStressed, "overloaded"),
                (Action::SelectNeutral, "stable"),
                (Action::SelectHappy, "optimized"),
                (Action::NavigateHome, "home"),
            ],
            Screen::Connect { .. } => &[(Action::NavigateHome, "home")],
        };

        actions
            .iter()
            .chain(&[(Action::Quit, "quit")])
            .filter_map(|(action, description)| {
                keybindings
                    .keys_for(*action)
                    .into_iter()
                    .next()
                    .map(|key| KeyHint::new(key, *description))
            })
            .collect()
    }
}
