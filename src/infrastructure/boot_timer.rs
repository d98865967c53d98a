//! One-shot boot timer
//!
//! Schedules a single [`RawMsg::BootTimerFired`] after a fixed delay. The
//! returned handle is the only way to stop it: cancelling (or dropping) the
//! handle before the deadline guarantees the message is never sent.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::core::raw_msg::RawMsg;

/// Lifecycle of a scheduled boot timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Pending,
    Fired,
    Cancelled,
}

/// Handle to a scheduled boot timer. Dropping it cancels the timer.
#[derive(Debug)]
pub struct BootTimer {
    cancel_token: CancellationToken,
    fired: Arc<AtomicBool>,
}

impl BootTimer {
    /// Spawn the timer task on the current tokio runtime
    pub fn schedule(delay: Duration, raw_tx: mpsc::UnboundedSender<RawMsg>) -> Self {
        let cancel_token = CancellationToken::new();
        let fired = Arc::new(AtomicBool::new(false));

        let token = cancel_token.clone();
        let fired_flag = Arc::clone(&fired);
        tokio::spawn(async move {
            tokio::select! {
                biased;

                _ = token.cancelled() => {
                    log::debug!("Boot timer cancelled before firing");
                }

                _ = tokio::time::sleep(delay) => {
                    if token.is_cancelled() {
                        return;
                    }
                    fired_flag.store(true, Ordering::SeqCst);
                    if raw_tx.send(RawMsg::BootTimerFired).is_err() {
                        log::warn!("Boot timer fired after its receiver was dropped");
                    }
                }
            }
        });

        Self {
            cancel_token,
            fired,
        }
    }

    /// Cancel the timer. Has no effect once it has fired.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn status(&self) -> TimerStatus {
        if self.fired.load(Ordering::SeqCst) {
            TimerStatus::Fired
        } else if self.cancel_token.is_cancelled() {
            TimerStatus::Cancelled
        } else {
            TimerStatus::Pending
        }
    }
}

impl Drop for BootTimer {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}
