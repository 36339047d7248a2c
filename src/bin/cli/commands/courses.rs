use anyhow::Result;

use crate::app::{confirm, short_id, App};
use crate::OutputFormat;

pub fn list(app: &App, format: &OutputFormat) -> Result<()> {
    let courses = &app.store.state().courses;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(courses)?);
        }
        OutputFormat::Plain => {
            if courses.is_empty() {
                println!("No courses. Get started by adding one.");
                return Ok(());
            }

            println!("{:<10} {:<30} {}", "Id", "Name", "Added");
            for course in courses {
                println!(
                    "{:<10} {:<30} {}",
                    short_id(&course.id),
                    course.name,
                    course.created_at.format("%Y-%m-%d")
                );
            }
            println!("\n{} courses total", courses.len());
        }
    }

    Ok(())
}

pub fn add(app: &mut App, name: &str) -> Result<()> {
    let course = app.store.add_course(name)?;
    println!("Added course {} '{}'", short_id(&course.id), course.name);
    Ok(())
}

pub fn delete(app: &mut App, needle: &str, yes: bool) -> Result<()> {
    let course = app.find_course(needle)?;
    let prompt = format!(
        "Delete course '{}'? This will not affect existing assignments and notes.",
        course.name
    );
    if !confirm(&prompt, yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    app.store.delete_course(course.id)?;
    println!("Deleted '{}'", course.name);
    Ok(())
}
