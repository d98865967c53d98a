use std::time::Duration;

use crate::core::{cmd::Cmd, msg::boot::BootMsg};

/// Delay between startup and the end of the boot screen (3.5 seconds)
pub const BOOT_DELAY: Duration = Duration::from_millis(3500);

/// Boot-sequence state
///
/// Starts in the booting state and leaves it exactly once, when the
/// boot timer fires. There is no way back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootState {
    is_booting: bool,
}

impl Default for BootState {
    fn default() -> Self {
        Self { is_booting: true }
    }
}

impl BootState {
    pub fn is_booting(&self) -> bool {
        self.is_booting
    }

    /// Commands issued when a session starts
    pub fn init(&self) -> Vec<Cmd> {
        if self.is_booting {
            vec![Cmd::ScheduleBootTimer {
                delay_ms: BOOT_DELAY.as_millis() as u64,
            }]
        } else {
            vec![]
        }
    }

    /// Boot-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: BootMsg) -> Vec<Cmd> {
        match msg {
            BootMsg::Finished => {
                if self.is_booting {
                    self.is_booting = false;
                    vec![Cmd::LogInfo {
                        message: "Boot sequence finished".to_string(),
                    }]
                } else {
                    log::debug!("Ignoring duplicate boot completion");
                    vec![]
                }
            }
        }
    }
}
