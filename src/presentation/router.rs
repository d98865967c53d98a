//! ViewRouter: which screen a state shows

use crate::{
    core::state::AppState,
    domain::{Mood, View},
};

/// Screen descriptor handed to the widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Boot,
    Landing,
    MoodSelect,
    Connect { mood: Mood },
}

/// Pure routing function. The boot screen wins over any view; only the
/// connect screen receives the mood.
pub fn route(is_booting: bool, view: View, mood: Option<Mood>) -> Screen {
    if is_booting {
        return Screen::Boot;
    }

    match (view, mood) {
        (View::Landing, _) => Screen::Landing,
        (View::MoodSelect, _) => Screen::MoodSelect,
        (View::Connect, Some(mood)) => Screen::Connect { mood },
        // Not produced by the view reducer; ask for a mood again
        (View::Connect, None) => Screen::MoodSelect,
    }
}

impl Screen {
    pub fn for_state(state: &AppState) -> Self {
        route(state.is_booting(), state.view.current(), state.view.mood())
    }
}
