use anyhow::Result;

use super::assignments::truncate;
use crate::app::App;
use crate::OutputFormat;

pub fn list(app: &App, format: &OutputFormat) -> Result<()> {
    let mut sessions = app.store.state().study_sessions.clone();
    sessions.sort_by(|a, b| b.date.cmp(&a.date));

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&sessions)?);
        }
        OutputFormat::Plain => {
            if sessions.is_empty() {
                println!("No study sessions recorded yet.");
                return Ok(());
            }

            println!("{:<18} {:<20} {}", "Date", "Course", "Minutes");
            for session in &sessions {
                println!(
                    "{:<18} {:<20} {}",
                    session.date.format("%Y-%m-%d %H:%M"),
                    truncate(&session.course, 20),
                    session.duration
                );
            }
            println!("\n{} sessions total", sessions.len());
        }
    }

    Ok(())
}
