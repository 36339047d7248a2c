use anyhow::Result;
use chrono::Utc;

use studybuddy_lib::stats::study_stats;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let stats = study_stats(&app.store.state().study_sessions, Utc::now());

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Plain => {
            println!(
                "Total study time: {}h {}m over {} sessions",
                stats.total_minutes / 60,
                stats.total_minutes % 60,
                stats.session_count
            );
            println!("Today:            {}m", stats.today_minutes);
            println!("Last 7 days:      {}m", stats.week_minutes);

            println!("\nStudy time by course:");
            if stats.by_course.is_empty() {
                println!("  no study sessions recorded yet");
            } else {
                for entry in &stats.by_course {
                    let hours = entry.minutes / 60;
                    if hours > 0 {
                        println!("  {:<24} {}h {}m", entry.course, hours, entry.minutes % 60);
                    } else {
                        println!("  {:<24} {}m", entry.course, entry.minutes);
                    }
                }
            }
        }
    }

    Ok(())
}
