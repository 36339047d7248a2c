//! Pomodoro countdown state machine
//!
//! Three modes (work, short break, long break), each with a fixed duration.
//! The machine never touches the wall clock itself: callers inject one tick
//! per elapsed second, which makes it drivable by a real timer or by a test
//! loop. Completing a work interval records a study session for the selected
//! course and advances to a break; every fourth completion earns the long
//! break.

use chrono::{DateTime, Utc};

use crate::models::StudySession;

/// Work intervals per long-break cycle
pub const POMODOROS_PER_SET: u32 = 4;

/// Timer modes with their fixed durations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    Pomodoro,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    pub fn duration_minutes(self) -> u32 {
        match self {
            TimerMode::Pomodoro => 25,
            TimerMode::ShortBreak => 5,
            TimerMode::LongBreak => 15,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimerMode::Pomodoro => "Pomodoro",
            TimerMode::ShortBreak => "Short Break",
            TimerMode::LongBreak => "Long Break",
        }
    }
}

/// What a single tick did
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// Timer is paused; nothing happened
    Idle,
    /// One second elapsed
    Ticked,
    /// The interval finished on this tick
    Completed(CompletedInterval),
}

/// Result of a finished interval
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedInterval {
    pub finished_mode: TimerMode,
    pub next_mode: TimerMode,
    pub completed_pomodoros: u32,
    /// Recorded only for work intervals with a course selected
    pub session: Option<StudySession>,
}

/// The countdown timer
#[derive(Debug, Clone)]
pub struct PomodoroTimer {
    mode: TimerMode,
    minutes: u32,
    seconds: u32,
    running: bool,
    completed_pomodoros: u32,
    selected_course: Option<String>,
}

impl Default for PomodoroTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl PomodoroTimer {
    /// A paused timer in work mode at 25:00
    pub fn new() -> Self {
        Self {
            mode: TimerMode::Pomodoro,
            minutes: TimerMode::Pomodoro.duration_minutes(),
            seconds: 0,
            running: false,
            completed_pomodoros: 0,
            selected_course: None,
        }
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn completed_pomodoros(&self) -> u32 {
        self.completed_pomodoros
    }

    pub fn selected_course(&self) -> Option<&str> {
        self.selected_course.as_deref()
    }

    /// Course credited when a work interval completes
    pub fn select_course(&mut self, course: Option<String>) {
        self.selected_course = course;
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Stop and re-arm the current mode's duration, keeping the mode
    pub fn reset(&mut self) {
        self.running = false;
        self.minutes = self.mode.duration_minutes();
        self.seconds = 0;
    }

    /// Stop, switch to `mode` and re-arm that mode's duration
    pub fn switch_mode(&mut self, mode: TimerMode) {
        self.running = false;
        self.mode = mode;
        self.minutes = mode.duration_minutes();
        self.seconds = 0;
    }

    /// Advance the countdown by one second
    ///
    /// The tick that reaches 00:00 completes the interval, so a 25:00 work
    /// interval finishes after exactly 1500 ticks.
    pub fn tick(&mut self, now: DateTime<Utc>) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        }

        if self.minutes == 0 && self.seconds == 0 {
            return TickOutcome::Completed(self.complete(now));
        }

        TickOutcome::Ticked
    }

    fn complete(&mut self, now: DateTime<Utc>) -> CompletedInterval {
        self.running = false;
        let finished_mode = self.mode;

        let (next_mode, session) = match finished_mode {
            TimerMode::Pomodoro => {
                self.completed_pomodoros += 1;

                let session = self.selected_course.clone().map(|course| {
                    StudySession::new(course, TimerMode::Pomodoro.duration_minutes(), now)
                });

                let next = if self.completed_pomodoros % POMODOROS_PER_SET == 0 {
                    TimerMode::LongBreak
                } else {
                    TimerMode::ShortBreak
                };
                (next, session)
            }
            TimerMode::ShortBreak | TimerMode::LongBreak => (TimerMode::Pomodoro, None),
        };

        self.mode = next_mode;
        self.minutes = next_mode.duration_minutes();
        self.seconds = 0;

        CompletedInterval {
            finished_mode,
            next_mode,
            completed_pomodoros: self.completed_pomodoros,
            session,
        }
    }

    /// Remaining time as `MM:SS`
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }
}
