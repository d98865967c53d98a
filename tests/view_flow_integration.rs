//! End-to-end walks through a session using the Runtime and paused tokio time

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use mindos::{
    core::raw_msg::RawMsg,
    domain::{Mood, View},
    infrastructure::{boot_timer::TimerStatus, config::Config},
    presentation::router::{route, Screen},
    AppState, Runtime,
};

fn booted_runtime_pending() -> Runtime {
    let config = Config::with_defaults().expect("default config");
    let mut runtime = Runtime::new(AppState::new_with_config(config));
    assert!(runtime.run_update_cycle().is_empty());
    runtime
}

async fn finish_boot(runtime: &mut Runtime) {
    tokio::time::sleep(Duration::from_millis(3600)).await;
    runtime.run_update_cycle();
    assert!(!runtime.state().is_booting());
}

fn press(runtime: &mut Runtime, code: KeyCode) {
    runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    runtime.run_update_cycle();
}

fn screen(runtime: &Runtime) -> Screen {
    Screen::for_state(runtime.state())
}

#[tokio::test(start_paused = true)]
async fn boot_ends_on_landing_after_delay() {
    let mut runtime = booted_runtime_pending();
    assert_eq!(screen(&runtime), Screen::Boot);

    tokio::time::sleep(Duration::from_millis(3000)).await;
    runtime.run_update_cycle();
    assert_eq!(screen(&runtime), Screen::Boot);

    finish_boot(&mut runtime).await;
    assert_eq!(runtime.state().view.current(), View::Landing);
    assert_eq!(screen(&runtime), Screen::Landing);
}

#[tokio::test(start_paused = true)]
async fn start_opens_mood_select_without_mood() {
    let mut runtime = booted_runtime_pending();
    finish_boot(&mut runtime).await;

    press(&mut runtime, KeyCode::Enter);

    assert_eq!(runtime.state().view.current(), View::MoodSelect);
    assert_eq!(runtime.state().view.mood(), None);
    assert_eq!(screen(&runtime), Screen::MoodSelect);
}

#[tokio::test(start_paused = true)]
async fn choosing_stressed_connects() {
    let mut runtime = booted_runtime_pending();
    finish_boot(&mut runtime).await;

    press(&mut runtime, KeyCode::Enter);
    press(&mut runtime, KeyCode::Char('1'));

    assert_eq!(runtime.state().view.current(), View::Connect);
    assert_eq!(runtime.state().view.mood(), Some(Mood::Stressed));
    assert_eq!(
        screen(&runtime),
        Screen::Connect {
            mood: Mood::Stressed
        }
    );
}

#[tokio::test(start_paused = true)]
async fn home_keeps_last_mood_until_next_choice() {
    let mut runtime = booted_runtime_pending();
    finish_boot(&mut runtime).await;

    press(&mut runtime, KeyCode::Enter);
    press(&mut runtime, KeyCode::Char('3'));
    press(&mut runtime, KeyCode::Char('h'));

    assert_eq!(runtime.state().view.current(), View::Landing);
    assert_eq!(runtime.state().view.mood(), Some(Mood::Happy));
    assert_eq!(screen(&runtime), Screen::Landing);

    // Mood keys do nothing on the landing page
    press(&mut runtime, KeyCode::Char('1'));
    assert_eq!(runtime.state().view.mood(), Some(Mood::Happy));

    press(&mut runtime, KeyCode::Enter);
    press(&mut runtime, KeyCode::Char('2'));
    assert_eq!(runtime.state().view.mood(), Some(Mood::Neutral));
}

#[tokio::test(start_paused = true)]
async fn teardown_before_delay_keeps_booting() {
    let mut runtime = booted_runtime_pending();

    tokio::time::sleep(Duration::from_millis(1000)).await;
    runtime.shutdown();

    tokio::time::sleep(Duration::from_secs(60)).await;
    runtime.run_update_cycle();

    assert!(runtime.state().is_booting());
    assert_eq!(screen(&runtime), Screen::Boot);
}

#[tokio::test(start_paused = true)]
async fn quit_before_delay_cancels_timer() {
    let mut runtime = booted_runtime_pending();

    press(&mut runtime, KeyCode::Char('q'));
    assert!(runtime.state().system.should_quit);
    assert_eq!(runtime.boot_timer_status(), Some(TimerStatus::Cancelled));

    tokio::time::sleep(Duration::from_secs(10)).await;
    runtime.run_update_cycle();
    assert!(runtime.state().is_booting());
}

#[tokio::test(start_paused = true)]
async fn keys_during_boot_are_ignored() {
    let mut runtime = booted_runtime_pending();

    press(&mut runtime, KeyCode::Enter);
    press(&mut runtime, KeyCode::Char('2'));
    press(&mut runtime, KeyCode::Esc);

    assert_eq!(runtime.state().view.current(), View::Landing);
    assert_eq!(runtime.state().view.mood(), None);

    finish_boot(&mut runtime).await;
    assert_eq!(screen(&runtime), Screen::Landing);
}

#[test]
fn route_is_idempotent() {
    for booting in [true, false] {
        for view in [View::Landing, View::MoodSelect, View::Connect] {
            for mood in [None, Some(Mood::Neutral)] {
                assert_eq!(route(booting, view, mood), route(booting, view, mood));
            }
        }
    }
}
