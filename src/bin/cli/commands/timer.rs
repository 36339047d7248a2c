use std::io::Write as _;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use studybuddy_lib::notify::ConsoleNotifier;
use studybuddy_lib::timer::{runner, TimerCommand, TimerEvent, TimerMode};

use crate::app::App;

const HELP: &str = "Commands: [space+enter or p] start/pause  [r] reset  \
[w] work  [s] short break  [l] long break  [q] quit";

/// Run the interactive Pomodoro timer
///
/// Completed work intervals are credited to `course` when given; without a
/// course, intervals finish but no session is recorded.
pub fn run(app: App, course: Option<String>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    runtime.block_on(async move {
        let store = Arc::new(Mutex::new(app.into_store()));
        let (cmd_tx, cmd_rx) = mpsc::channel(16);
        let (event_tx, mut event_rx) = mpsc::channel(64);

        let runner_task = tokio::spawn(runner::run(
            store,
            Arc::new(ConsoleNotifier),
            cmd_rx,
            event_tx,
        ));

        if let Some(course) = &course {
            println!("Tracking course: {}", course);
            cmd_tx
                .send(TimerCommand::SelectCourse(Some(course.clone())))
                .await?;
        } else {
            println!("No course selected; completed intervals will not be recorded.");
        }
        println!("{}", HELP);

        cmd_tx.send(TimerCommand::Start).await?;

        // Forward keyboard input to the runner
        let input_tx = cmd_tx.clone();
        tokio::spawn(async move {
            let mut lines = BufReader::new(tokio::io::stdin()).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                let command = match line.trim() {
                    "" | "p" => TimerCommand::Toggle,
                    "r" => TimerCommand::Reset,
                    "w" => TimerCommand::SwitchMode(TimerMode::Pomodoro),
                    "s" => TimerCommand::SwitchMode(TimerMode::ShortBreak),
                    "l" => TimerCommand::SwitchMode(TimerMode::LongBreak),
                    "q" => TimerCommand::Shutdown,
                    other => {
                        println!("Unknown command '{}'. {}", other, HELP);
                        continue;
                    }
                };

                let quitting = matches!(command, TimerCommand::Shutdown);
                if input_tx.send(command).await.is_err() || quitting {
                    break;
                }
            }
        });

        // Render runner events until the runner drops its event sender
        while let Some(event) = event_rx.recv().await {
            match event {
                TimerEvent::Tick { mode, remaining } => {
                    print!("\r{}  {}   ", mode.label(), remaining);
                    std::io::stdout().flush().ok();
                }
                TimerEvent::StateChanged {
                    mode,
                    remaining,
                    running,
                } => {
                    let status = if running { "running" } else { "paused" };
                    print!("\r{}  {}  ({})   ", mode.label(), remaining, status);
                    std::io::stdout().flush().ok();
                }
                TimerEvent::Completed {
                    finished_mode,
                    next_mode,
                    completed_pomodoros,
                    session_recorded,
                } => {
                    println!(
                        "\n{} finished. Next: {} ({} pomodoros completed)",
                        finished_mode.label(),
                        next_mode.label(),
                        completed_pomodoros
                    );
                    if session_recorded {
                        println!("Study session recorded.");
                    }
                    println!("Press enter to start the next interval.");
                }
            }
        }

        runner_task.await.context("Timer runner panicked")?;
        println!();
        Ok(())
    })
}
