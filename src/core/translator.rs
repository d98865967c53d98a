use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{boot::BootMsg, system::SystemMsg, view::ViewMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::{Mood, View},
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Tick => vec![Msg::System(SystemMsg::Tick)],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Timer events
        RawMsg::BootTimerFired => vec![Msg::Boot(BootMsg::Finished)],

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Rendering is orchestrated by the runner
        RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    match state.config.config.keybindings.get(&vec![key]) {
        Some(action) => translate_action_to_msg(action, state),
        None => vec![], // No matching keybinding found
    }
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::Quit => return vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => return vec![Msg::System(SystemMsg::Suspend)],
        _ => {}
    }

    // The boot screen cannot be skipped
    if state.is_booting() {
        return vec![];
    }

    match (state.view.current(), action) {
        (View::Landing, Action::Start) => vec![Msg::View(ViewMsg::Start)],
        (View::MoodSelect, Action::SelectStressed) => select(Mood::Stressed),
        (View::MoodSelect, Action::SelectNeutral) => select(Mood::Neutral),
        (View::MoodSelect, Action::SelectHappy) => select(Mood::Happy),
        (_, Action::NavigateHome) => vec![Msg::View(ViewMsg::NavigateHome)],
        _ => vec![],
    }
}

fn select(mood: Mood) -> Vec<Msg> {
    vec![Msg::View(ViewMsg::SelectMood(mood))]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        core::update::update,
        infrastructure::config::Config,
        presentation::config::keybindings::parse_key_event,
    };

    fn key(raw: &str) -> KeyEvent {
        parse_key_event(raw).expect("valid key")
    }

    fn booted_state() -> AppState {
        let state = AppState::new_with_config(Config::with_defaults().expect("default config"));
        let (state, _) = update(Msg::Boot(BootMsg::Finished), state);
        state
    }

    fn state_at(view: View) -> AppState {
        let mut state = booted_state();
        if view != View::Landing {
            state = update(Msg::View(ViewMsg::Start), state).0;
        }
        if view == View::Connect {
            state = update(Msg::View(ViewMsg::SelectMood(Mood::Neutral)), state).0;
        }
        state
    }

    #[test]
    fn test_system_events_map_directly() {
        let state = AppState::default();
        assert_eq!(
            translate_raw_to_domain(RawMsg::Quit, &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
        assert_eq!(
            translate_raw_to_domain(RawMsg::Resize(10, 20), &state),
            vec![Msg::System(SystemMsg::Resize(10, 20))]
        );
        assert!(translate_raw_to_domain(RawMsg::Render, &state).is_empty());
    }

    #[test]
    fn test_boot_timer_fired_finishes_boot() {
        assert_eq!(
            translate_raw_to_domain(RawMsg::BootTimerFired, &AppState::default()),
            vec![Msg::Boot(BootMsg::Finished)]
        );
    }

    #[test]
    fn test_ctrl_c_quits_even_while_booting() {
        let state = AppState::default();
        let msgs = translate_raw_to_domain(
            RawMsg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            &state,
        );
        assert_eq!(msgs, vec![Msg::System(SystemMsg::Quit)]);
    }

    #[test]
    fn test_navigation_keys_are_ignored_while_booting() {
        let mut state = booted_state();
        state.boot = Default::default();

        for raw in ["<enter>", "<h>", "<1>"] {
            assert!(translate_raw_to_domain(RawMsg::Key(key(raw)), &state).is_empty());
        }
        assert_eq!(
            translate_raw_to_domain(RawMsg::Key(key("<q>")), &state),
            vec![Msg::System(SystemMsg::Quit)]
        );
    }

    #[rstest]
    #[case(View::Landing, "<enter>", vec![Msg::View(ViewMsg::Start)])]
    #[case(View::Landing, "<s>", vec![Msg::View(ViewMsg::Start)])]
    #[case(View::Landing, "<1>", vec![])]
    #[case(View::MoodSelect, "<1>", select(Mood::Stressed))]
    #[case(View::MoodSelect, "<2>", select(Mood::Neutral))]
    #[case(View::MoodSelect, "<3>", select(Mood::Happy))]
    #[case(View::MoodSelect, "<enter>", vec![])]
    #[case(View::Connect, "<h>", vec![Msg::View(ViewMsg::NavigateHome)])]
    #[case(View::Connect, "<esc>", vec![Msg::View(ViewMsg::NavigateHome)])]
    #[case(View::Connect, "<2>", vec![])]
    #[case(View::MoodSelect, "<home>", vec![Msg::View(ViewMsg::NavigateHome)])]
    #[case(View::Landing, "<x>", vec![])]
    fn test_keys_per_view(#[case] view: View, #[case] raw: &str, #[case] expected: Vec<Msg>) {
        let state = state_at(view);
        assert_eq!(state.view.current(), view);
        assert_eq!(translate_raw_to_domain(RawMsg::Key(key(raw)), &state), expected);
    }
}
