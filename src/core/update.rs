use crate::core::{
    cmd::Cmd,
    msg::{system::SystemMsg, Msg},
    state::AppState,
};

/// Commands to run when a session starts
pub fn init(state: AppState) -> (AppState, Vec<Cmd>) {
    let commands = state.boot.init();
    (state, commands)
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    if !msg.is_frequent() {
        log::debug!("update: {msg:?}");
    }

    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Boot messages (delegated to BootState)
        Msg::Boot(boot_msg) => {
            let mut commands = state.boot.update(boot_msg);
            if !state.boot.is_booting() {
                commands.push(Cmd::RequestRender);
            }
            (state, commands)
        }

        // View messages (delegated to ViewState)
        Msg::View(view_msg) => {
            let previous = state.view;
            let mut commands = state.view.update(view_msg);
            // A stale status line does not follow the user to another screen
            if state.view != previous {
                commands.extend(state.system.update(SystemMsg::ClearStatusMessage));
            }
            (state, commands)
        }
    }
}
