use futures::future;
use std::collections::VecDeque;
use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::{CmdExecutor, CmdExecutorStats},
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        translator::translate_raw_to_domain,
        update::{init, update},
    },
    infrastructure::boot_timer::TimerStatus,
};

/// Integration point between the Elm core and the outside world
pub struct Runtime {
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    /// Create a new Runtime. The session's start-up commands (the boot
    /// timer) are queued and run on the first update cycle.
    pub fn new(initial_state: AppState) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();
        let cmd_executor = CmdExecutor::new(raw_msg_tx.clone());
        let (state, commands) = init(initial_state);

        Self {
            state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: commands.into_iter().collect(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor,
        }
    }

    /// Add TUI command sender to the executor (for TuiCommand execution)
    pub fn add_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) {
        self.cmd_executor.set_tui_sender(tui_sender);
    }

    /// Add render request sender for orchestrated rendering in AppRunner
    pub fn add_render_request_sender(&mut self, render_sender: mpsc::Sender<()>) {
        self.cmd_executor.set_render_request_sender(render_sender);
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Send message directly (for testing)
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Send raw message (for integration with external systems)
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Get raw message sender
    pub fn get_raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Wait until an external raw message (e.g. the boot timer) arrives and
    /// queue it for the next update cycle
    pub async fn wait_for_raw_msg(&mut self) {
        match self.raw_msg_rx.recv().await {
            Some(raw_msg) => self.raw_msg_queue.push_back(raw_msg),
            // The runtime holds a sender, so the channel never closes
            None => future::pending().await,
        }
    }

    /// Get pending commands
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    /// Execute all pending commands; returns the errors encountered
    pub fn execute_pending_commands(&mut self) -> Vec<String> {
        let commands = self.pending_commands();
        if commands.is_empty() {
            return vec![];
        }
        self.cmd_executor.execute_commands(&commands)
    }

    /// Process a single message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let (new_state, commands) = update(msg, self.state.clone());
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Process all messages in queue
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        // Raw messages are translated against the state at the time they are
        // handled, so each one sees the effect of the previous ones
        loop {
            let raw_msg = match self.raw_msg_queue.pop_front() {
                Some(raw_msg) => raw_msg,
                None => match self.raw_msg_rx.try_recv() {
                    Ok(raw_msg) => raw_msg,
                    Err(_) => break,
                },
            };
            if !raw_msg.is_frequent() {
                log::debug!("raw: {raw_msg:?}");
            }
            self.msg_queue
                .extend(translate_raw_to_domain(raw_msg, &self.state));
            while let Some(msg) = self.msg_queue.pop_front() {
                all_commands.extend(self.process_message(msg));
            }
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Vec<String> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    /// Cancel outstanding side effects (the boot timer)
    pub fn shutdown(&mut self) {
        self.cmd_executor.shutdown();
    }

    pub fn boot_timer_status(&self) -> Option<TimerStatus> {
        self.cmd_executor.boot_timer_status()
    }

    /// Get runtime statistics
    pub fn get_stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len() + self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            executor: self.cmd_executor.get_stats(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_commands: usize,
    pub executor: CmdExecutorStats,
}
