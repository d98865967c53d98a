use crate::{
    core::{cmd::Cmd, msg::view::ViewMsg},
    domain::{Mood, View},
};

/// Current screen plus the mood picked on the selection screen
///
/// Fields are private so that every change goes through [`apply`], which keeps
/// the mood populated whenever the connect screen is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ViewState {
    current: View,
    mood: Option<Mood>,
}

impl ViewState {
    pub fn current(&self) -> View {
        self.current
    }

    pub fn mood(&self) -> Option<Mood> {
        self.mood
    }

    /// View-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: ViewMsg) -> Vec<Cmd> {
        let next = apply(*self, msg);
        if next == *self {
            log::debug!("{msg:?} has no effect on {:?}", self.current);
            return vec![];
        }

        log::info!("View changed: {} -> {}", self.current, next.current);
        *self = next;
        vec![Cmd::RequestRender]
    }
}

/// Pure transition function for the screen state machine
///
/// | From       | Trigger        | To         |
/// |------------|----------------|------------|
/// | Landing    | Start          | MoodSelect |
/// | MoodSelect | SelectMood(m)  | Connect    |
/// | any        | NavigateHome   | Landing    |
///
/// A trigger fired outside its source screen leaves the state untouched.
/// Going home keeps the last mood; it is overwritten by the next selection.
pub fn apply(state: ViewState, trigger: ViewMsg) -> ViewState {
    match (state.current, trigger) {
        (View::Landing, ViewMsg::Start) => ViewState {
            current: View::MoodSelect,
            ..state
        },
        (View::MoodSelect, ViewMsg::SelectMood(mood)) => ViewState {
            current: View::Connect,
            mood: Some(mood),
        },
        (_, ViewMsg::NavigateHome) => ViewState {
            current: View::Landing,
            ..state
        },
        _ => state,
    }
}
