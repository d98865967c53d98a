use std::{sync::Arc, time::Duration};

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        config::Config,
        tui::{self, event_source::EventSource},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Drives the Elm runtime from terminal events and renders the result
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    events: EventSource,
    renderer: Renderer,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_req_rx: mpsc::Receiver<()>,
    last_size: Option<(u16, u16)>,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    /// Create a runner for a fresh session with the given config
    pub fn new_with_config(
        config: Config,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
        events: EventSource,
    ) -> Self {
        let mut runtime = Runtime::new(AppState::new_with_config(config));

        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_cmd_tx);
        // One slot is enough: render requests between two frames collapse
        let (render_req_tx, render_req_rx) = mpsc::channel(1);
        runtime.add_render_request_sender(render_req_tx);

        Self {
            runtime,
            tui,
            events,
            renderer: Renderer::new(),
            tui_cmd_rx,
            render_req_rx,
            last_size: None,
        }
    }

    /// Run the main loop until the session quits.
    /// The boot timer is cancelled and the terminal restored on the way out.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;

        let result = self.event_loop().await;

        self.runtime.shutdown();
        self.tui.lock().await.exit()?;
        result
    }

    async fn event_loop(&mut self) -> Result<()> {
        self.render().await?;
        // Start-up commands (the boot timer) must not wait for terminal input
        self.run_update_cycle();

        loop {
            let mut saw_tui_render = false;
            tokio::select! {
                event = self.events.next() => match event {
                    Some(event) => saw_tui_render = self.handle_event(event),
                    // Nothing to read right now; let timers make progress
                    None => tokio::time::sleep(Duration::from_millis(1)).await,
                },
                // The boot timer reports in without waiting for terminal input
                () = self.runtime.wait_for_raw_msg() => {}
            }

            self.run_update_cycle();

            // Only the last resize matters
            let mut resizes = Vec::new();
            while let Ok(TuiCommand::Resize { width, height }) = self.tui_cmd_rx.try_recv() {
                resizes.push((width, height));
            }
            let size = Coalescer::decide_resize(self.last_size, &resizes);
            if size != self.last_size {
                if let Some((width, height)) = size {
                    self.tui
                        .lock()
                        .await
                        .resize(Rect::new(0, 0, width, height))?;
                    saw_tui_render = true;
                }
                self.last_size = size;
            }

            let mut queued_render_reqs = 0;
            while self.render_req_rx.try_recv().is_ok() {
                queued_render_reqs += 1;
            }

            if self.runtime.state().system.should_quit {
                break;
            }

            if self.runtime.state().system.should_suspend {
                self.suspend().await?;
                continue;
            }

            if Coalescer::decide_render(queued_render_reqs, saw_tui_render) {
                self.render().await?;
            }
        }

        Ok(())
    }

    fn run_update_cycle(&mut self) {
        for error in self.runtime.run_update_cycle() {
            log::error!("Runtime error: {error}");
        }
    }

    /// Map a terminal event to a raw message. Returns whether the terminal
    /// asked for a frame.
    fn handle_event(&mut self, event: tui::Event) -> bool {
        match event {
            tui::Event::Quit => self.runtime.send_raw_msg(RawMsg::Quit),
            tui::Event::Tick => self.runtime.send_raw_msg(RawMsg::Tick),
            tui::Event::Render => return true,
            tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            tui::Event::Error => self
                .runtime
                .send_raw_msg(RawMsg::Error("terminal event stream failed".to_string())),
            // No more input will arrive; end the session through the normal teardown
            tui::Event::Closed => {
                log::warn!("Terminal event stream closed");
                self.runtime.send_raw_msg(RawMsg::Quit);
            }
            tui::Event::Init
            | tui::Event::FocusGained
            | tui::Event::FocusLost
            | tui::Event::Paste(_)
            | tui::Event::Mouse(_) => {}
        }
        false
    }

    async fn suspend(&mut self) -> Result<()> {
        log::info!("Suspending");
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        let state = self.runtime.state().clone();
        self.renderer.render(&self.tui, &state).await
    }
}

#[cfg(test)]
mod tests {
    use std::{
        future::Future,
        pin::Pin,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use futures::future;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::infrastructure::tui::test::TestTui;

    fn key(code: KeyCode) -> tui::Event {
        tui::Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn runner_with_script(events: Vec<tui::Event>) -> (AppRunner, Arc<Mutex<TestTui>>) {
        let test_tui = Arc::new(Mutex::new(TestTui::new(100, 30).expect("test tui")));
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = Arc::<Mutex<TestTui>>::clone(&test_tui);
        let config = Config::with_defaults().expect("default config");
        let runner = AppRunner::new_with_config(config, tui, EventSource::test(events));
        (runner, test_tui)
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_during_boot() -> Result<()> {
        let (mut runner, test_tui) = runner_with_script(vec![key(KeyCode::Char('q'))]);

        runner.run().await?;

        let guard = test_tui.lock().await;
        assert_eq!(guard.lifecycle_counts(), (1, 1));
        assert!(guard.draw_count() >= 1);
        assert!(guard.buffer_text().contains("INITIALIZING MIND_OS KERNEL"));
        assert!(runner.runtime().state().is_booting());
        assert_eq!(runner.runtime().boot_timer_status(), None);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_terminal_quit_event() -> Result<()> {
        let (mut runner, test_tui) = runner_with_script(vec![tui::Event::Init, tui::Event::Quit]);

        runner.run().await?;

        assert!(runner.runtime().state().system.should_quit);
        assert_eq!(test_tui.lock().await.lifecycle_counts(), (1, 1));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_resize_triggers_redraw() -> Result<()> {
        let (mut runner, test_tui) = runner_with_script(vec![
            tui::Event::Resize(60, 20),
            tui::Event::Resize(90, 25),
            key(KeyCode::Char('q')),
        ]);

        runner.run().await?;

        assert_eq!(runner.last_size, Some((90, 25)));
        assert_eq!(test_tui.lock().await.draw_count(), 3);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_suspend_then_resume() -> Result<()> {
        let (mut runner, test_tui) = runner_with_script(vec![
            tui::Event::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL)),
            key(KeyCode::Char('q')),
        ]);

        runner.run().await?;

        assert_eq!(test_tui.lock().await.suspend_count(), 1);
        assert!(!runner.runtime().state().system.should_suspend);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_event_stream_ends_session() -> Result<()> {
        let (mut runner, test_tui) =
            runner_with_script(vec![tui::Event::Init, tui::Event::Closed]);

        tokio::time::timeout(Duration::from_secs(30), runner.run())
            .await
            .expect("runner should stop once the event stream is closed")?;

        assert!(runner.runtime().state().system.should_quit);
        assert_eq!(runner.runtime().boot_timer_status(), None);
        assert_eq!(test_tui.lock().await.lifecycle_counts(), (1, 1));
        Ok(())
    }

    /// Terminal that never produces input but records frames
    struct SilentTui {
        inner: TestTui,
        draws: Arc<AtomicUsize>,
    }

    impl tui::TuiLike for SilentTui {
        fn enter(&mut self) -> Result<()> {
            self.inner.enter()
        }

        fn exit(&mut self) -> Result<()> {
            self.inner.exit()
        }

        fn draw(&mut self, f: &mut dyn FnMut(&mut tui::Frame<'_>)) -> Result<()> {
            self.inner.draw(f)?;
            self.draws.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn resize(&mut self, area: Rect) -> Result<()> {
            self.inner.resize(area)
        }

        fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<tui::Event>> + Send + '_>> {
            Box::pin(future::pending())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_boot_finishes_without_terminal_input() {
        let draws = Arc::new(AtomicUsize::new(0));
        let silent = SilentTui {
            inner: TestTui::new(80, 24).expect("test tui"),
            draws: Arc::clone(&draws),
        };
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> = Arc::new(Mutex::new(silent));
        let events = EventSource::real(Arc::clone(&tui));
        let mut runner = AppRunner::new_with_config(
            Config::with_defaults().expect("default config"),
            tui,
            events,
        );
        let handle = tokio::spawn(async move { runner.run().await });

        tokio::time::sleep(Duration::from_millis(3499)).await;
        assert_eq!(draws.load(Ordering::SeqCst), 1);

        // The landing frame is drawn as soon as the timer fires
        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(draws.load(Ordering::SeqCst), 2);

        handle.abort();
    }
}
