//! Pomodoro timer
//!
//! `pomodoro` holds the pure countdown state machine driven by injected
//! ticks; `runner` owns the real one-second clock as a background task.

mod pomodoro;
pub mod runner;

pub use pomodoro::{CompletedInterval, PomodoroTimer, TickOutcome, TimerMode, POMODOROS_PER_SET};
pub use runner::{TimerCommand, TimerEvent};
