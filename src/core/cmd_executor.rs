use std::time::Duration;

use color_eyre::eyre::{eyre, Result};
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        raw_msg::RawMsg,
    },
    infrastructure::boot_timer::{BootTimer, TimerStatus},
};

/// Command executor that turns Elm commands into real side effects
pub struct CmdExecutor {
    raw_sender: mpsc::UnboundedSender<RawMsg>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::Sender<()>>,
    boot_timer: Option<BootTimer>,
}

impl CmdExecutor {
    /// Create a new command executor; timer results are reported through `raw_sender`
    pub fn new(raw_sender: mpsc::UnboundedSender<RawMsg>) -> Self {
        Self {
            raw_sender,
            tui_sender: None,
            render_req_sender: None,
            boot_timer: None,
        }
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::Sender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// State of the boot timer, if one was ever scheduled
    pub fn boot_timer_status(&self) -> Option<TimerStatus> {
        self.boot_timer.as_ref().map(BootTimer::status)
    }

    /// Execute a single command
    pub fn execute_command(&mut self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::ScheduleBootTimer { delay_ms } => {
                if let Some(timer) = &self.boot_timer {
                    log::warn!(
                        "ScheduleBootTimer ignored: boot timer already {:?}",
                        timer.status()
                    );
                    return Ok(());
                }
                if tokio::runtime::Handle::try_current().is_err() {
                    return Err(eyre!("ScheduleBootTimer requires a tokio runtime"));
                }
                let delay = Duration::from_millis(*delay_ms);
                log::info!("Scheduling boot timer in {delay:?}");
                self.boot_timer = Some(BootTimer::schedule(delay, self.raw_sender.clone()));
            }

            Cmd::CancelBootTimer => {
                if let Some(timer) = &self.boot_timer {
                    timer.cancel();
                }
            }

            Cmd::Tui(tui_cmd) => {
                if let Some(sender) = &self.tui_sender {
                    sender.send(tui_cmd.clone())?;
                } else {
                    log::debug!("{tui_cmd:?} ignored: no TUI attached");
                }
            }

            Cmd::RequestRender => {
                if let Some(sender) = &self.render_req_sender {
                    // A full queue already holds a pending render request
                    let _ = sender.try_send(());
                }
            }

            Cmd::LogError { message } => log::error!("{message}"),
            Cmd::LogInfo { message } => log::info!("{message}"),
        }
        Ok(())
    }

    /// Execute commands, highest priority first; returns the errors encountered
    pub fn execute_commands(&mut self, commands: &[Cmd]) -> Vec<String> {
        let mut ordered: Vec<&Cmd> = commands.iter().collect();
        ordered.sort_by_key(|cmd| cmd.priority());

        let mut errors = Vec::new();
        for cmd in ordered {
            if let Err(e) = self.execute_command(cmd) {
                log::error!("Failed to execute {cmd:?}: {e}");
                errors.push(format!("{e}"));
            }
        }
        errors
    }

    /// Cancel everything still pending; called on teardown
    pub fn shutdown(&mut self) {
        if let Some(timer) = self.boot_timer.take() {
            timer.cancel();
        }
    }

    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_tui_sender: self.tui_sender.is_some(),
            has_render_req_sender: self.render_req_sender.is_some(),
            boot_timer: self.boot_timer_status(),
        }
    }
}

/// Executor statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdExecutorStats {
    pub has_tui_sender: bool,
    pub has_render_req_sender: bool,
    pub boot_timer: Option<TimerStatus>,
}
