use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;

use studybuddy_lib::models::{NewAssignment, Priority};

use crate::app::{confirm, short_id, App};
use crate::OutputFormat;

pub fn list(app: &App, format: &OutputFormat) -> Result<()> {
    let mut assignments = app.store.state().assignments.clone();
    assignments.sort_by(|a, b| a.due_date.cmp(&b.due_date));

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&assignments)?);
        }
        OutputFormat::Plain => {
            if assignments.is_empty() {
                println!("No assignments.");
                return Ok(());
            }

            println!(
                "{:<10} {:<3} {:<30} {:<16} {:<12} {}",
                "Id", "", "Title", "Course", "Due", "Priority"
            );
            for a in &assignments {
                let done = if a.completed { "[x]" } else { "[ ]" };
                println!(
                    "{:<10} {:<3} {:<30} {:<16} {:<12} {}",
                    short_id(&a.id),
                    done,
                    truncate(&a.title, 30),
                    truncate(&a.course, 16),
                    a.due_date,
                    a.priority
                );
            }
            println!("\n{} assignments total", assignments.len());
        }
    }

    Ok(())
}

pub fn add(
    app: &mut App,
    title: String,
    course: String,
    due: &str,
    priority: &str,
    description: String,
) -> Result<()> {
    let due_date = NaiveDate::parse_from_str(due, "%Y-%m-%d")
        .with_context(|| format!("Invalid due date '{}' (expected YYYY-MM-DD)", due))?;
    let priority: Priority = priority.parse().map_err(|e: String| anyhow!(e))?;

    let assignment = app.store.add_assignment(NewAssignment {
        title,
        course,
        due_date,
        priority,
        description,
    })?;

    println!(
        "Added assignment {} '{}' due {}",
        short_id(&assignment.id),
        assignment.title,
        assignment.due_date
    );
    Ok(())
}

pub fn set_completed(app: &mut App, id: &str, completed: bool) -> Result<()> {
    let assignment = app.find_assignment(id)?;
    let updated = app.store.set_assignment_completed(assignment.id, completed)?;

    if updated.completed {
        println!("Completed '{}'", updated.title);
    } else {
        println!("Reopened '{}'", updated.title);
    }
    Ok(())
}

pub fn delete(app: &mut App, id: &str, yes: bool) -> Result<()> {
    let assignment = app.find_assignment(id)?;
    if !confirm(&format!("Delete assignment '{}'?", assignment.title), yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    app.store.delete_assignment(assignment.id)?;
    println!("Deleted '{}'", assignment.title);
    Ok(())
}

pub(crate) fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() > width {
        let cut: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
