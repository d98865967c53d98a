use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render is orchestrated exclusively by AppRunner, not via TuiCommand.
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (timers, terminal control, logging)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Boot sequence
    /// Arm the one-shot boot timer; it reports back with `RawMsg::BootTimerFired`
    ScheduleBootTimer {
        delay_ms: u64,
    },
    CancelBootTimer,

    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; coalesced by AppRunner
    RequestRender,

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },
}

impl Cmd {
    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // UI-related has highest priority
            Cmd::Tui(..) | Cmd::RequestRender => 0,

            // Timer lifecycle
            Cmd::ScheduleBootTimer { .. } | Cmd::CancelBootTimer => 1,

            // Logging have lowest priority
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,
        }
    }
}
