use std::collections::VecDeque;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::infrastructure::tui;

/// Where the runner pulls terminal events from
pub enum EventSource {
    /// Events produced by a terminal (real or test)
    Real(Arc<Mutex<dyn tui::TuiLike + Send>>),
    /// A fixed script of events
    Test(VecDeque<tui::Event>),
}

impl EventSource {
    pub fn real(tui: Arc<Mutex<dyn tui::TuiLike + Send>>) -> Self {
        EventSource::Real(tui)
    }

    pub fn test(events: impl IntoIterator<Item = tui::Event>) -> Self {
        EventSource::Test(events.into_iter().collect())
    }

    /// Next event, or `None` once the source is exhausted
    pub async fn next(&mut self) -> Option<tui::Event> {
        match self {
            EventSource::Real(tui) => {
                let mut guard = tui.lock().await;
                guard.next().await
            }
            EventSource::Test(queue) => queue.pop_front(),
        }
    }
}
