use anyhow::Result;
use chrono::Local;

use studybuddy_lib::stats::dashboard_summary;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let today = Local::now().date_naive();
    let summary = dashboard_summary(app.store.state(), today);

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Plain => {
            println!("Pending assignments: {}", summary.pending_assignments);
            println!(
                "Total study time:    {}h {}m",
                summary.total_study_minutes / 60,
                summary.total_study_minutes % 60
            );
            println!("Notes:               {}", summary.total_notes);
            println!("Resources:           {}", summary.total_resources);

            println!("\nUpcoming assignments (next 7 days):");
            if summary.upcoming_assignments.is_empty() {
                println!("  none");
            } else {
                for a in &summary.upcoming_assignments {
                    println!("  {}  {} ({}, {})", a.due_date, a.title, a.course, a.priority);
                }
            }
        }
    }

    Ok(())
}
