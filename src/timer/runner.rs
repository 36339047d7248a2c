//! Timer runner
//!
//! Background task that owns the real one-second clock for a
//! [`PomodoroTimer`]. Control arrives over an mpsc channel; state changes go
//! back out as events so the caller can render them. Only one tick is ever
//! pending: the task sleeps on the clock exclusively while the timer is
//! running, and parks on the command channel otherwise, so pausing or
//! shutting down cancels the pending tick instead of leaking it.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc;

use super::pomodoro::{CompletedInterval, PomodoroTimer, TickOutcome, TimerMode};
use crate::notify::Notifier;
use crate::store::StudyStore;

/// Control messages accepted by the runner
#[derive(Debug)]
pub enum TimerCommand {
    Start,
    Pause,
    Toggle,
    Reset,
    SwitchMode(TimerMode),
    SelectCourse(Option<String>),
    Shutdown,
}

/// State updates emitted by the runner
#[derive(Debug, Clone)]
pub enum TimerEvent {
    /// One second elapsed
    Tick { mode: TimerMode, remaining: String },
    /// A command changed the timer state
    StateChanged {
        mode: TimerMode,
        remaining: String,
        running: bool,
    },
    /// An interval finished
    Completed {
        finished_mode: TimerMode,
        next_mode: TimerMode,
        completed_pomodoros: u32,
        session_recorded: bool,
    },
}

/// Run the timer loop until `Shutdown` or the command channel closes
pub async fn run(
    store: Arc<Mutex<StudyStore>>,
    notifier: Arc<dyn Notifier>,
    mut commands: mpsc::Receiver<TimerCommand>,
    events: mpsc::Sender<TimerEvent>,
) {
    let mut timer = PomodoroTimer::new();

    loop {
        if timer.is_running() {
            tokio::select! {
                _ = tokio::time::sleep(Duration::from_secs(1)) => {
                    match timer.tick(Utc::now()) {
                        TickOutcome::Completed(done) => {
                            handle_completion(&store, notifier.as_ref(), &events, done).await;
                        }
                        TickOutcome::Ticked => {
                            let _ = events
                                .send(TimerEvent::Tick {
                                    mode: timer.mode(),
                                    remaining: timer.display(),
                                })
                                .await;
                        }
                        TickOutcome::Idle => {}
                    }
                }
                cmd = commands.recv() => {
                    if !handle_command(&mut timer, cmd, &events).await {
                        break;
                    }
                }
            }
        } else {
            let cmd = commands.recv().await;
            if !handle_command(&mut timer, cmd, &events).await {
                break;
            }
        }
    }

    log::info!("Timer runner stopped");
}

async fn handle_command(
    timer: &mut PomodoroTimer,
    command: Option<TimerCommand>,
    events: &mpsc::Sender<TimerEvent>,
) -> bool {
    let command = match command {
        Some(cmd) => cmd,
        // Channel closed: the caller went away, stop ticking
        None => return false,
    };

    match command {
        TimerCommand::Start => timer.start(),
        TimerCommand::Pause => timer.pause(),
        TimerCommand::Toggle => timer.toggle(),
        TimerCommand::Reset => timer.reset(),
        TimerCommand::SwitchMode(mode) => timer.switch_mode(mode),
        TimerCommand::SelectCourse(course) => timer.select_course(course),
        TimerCommand::Shutdown => return false,
    }

    let _ = events
        .send(TimerEvent::StateChanged {
            mode: timer.mode(),
            remaining: timer.display(),
            running: timer.is_running(),
        })
        .await;

    true
}

async fn handle_completion(
    store: &Arc<Mutex<StudyStore>>,
    notifier: &dyn Notifier,
    events: &mpsc::Sender<TimerEvent>,
    done: CompletedInterval,
) {
    let mut session_recorded = false;

    if let Some(session) = done.session.clone() {
        match store.lock() {
            Ok(mut store) => match store.record_study_session(session) {
                Ok(()) => session_recorded = true,
                Err(err) => log::error!("Failed to record study session: {}", err),
            },
            Err(err) => log::error!("Store lock poisoned: {}", err),
        }
    }

    let body = match done.finished_mode {
        TimerMode::Pomodoro => "Time for a break!",
        TimerMode::ShortBreak | TimerMode::LongBreak => "Back to work!",
    };
    notifier.notify("Study Timer", body);

    log::info!(
        "{} finished, next up: {} ({} completed)",
        done.finished_mode.label(),
        done.next_mode.label(),
        done.completed_pomodoros
    );

    let _ = events
        .send(TimerEvent::Completed {
            finished_mode: done.finished_mode,
            next_mode: done.next_mode,
            completed_pomodoros: done.completed_pomodoros,
            session_recorded,
        })
        .await;
}
