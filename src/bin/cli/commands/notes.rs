use anyhow::Result;

use studybuddy_lib::models::{NewNote, NoteUpdate};

use super::assignments::truncate;
use crate::app::{confirm, read_content_arg, short_id, App};
use crate::OutputFormat;

pub fn list(app: &App, format: &OutputFormat) -> Result<()> {
    let mut notes = app.store.state().notes.clone();
    notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&notes)?);
        }
        OutputFormat::Plain => {
            if notes.is_empty() {
                println!("No notes.");
                return Ok(());
            }

            println!("{:<10} {:<30} {:<16} {}", "Id", "Title", "Course", "Updated");
            for note in &notes {
                println!(
                    "{:<10} {:<30} {:<16} {}",
                    short_id(&note.id),
                    truncate(&note.title, 30),
                    truncate(&note.course, 16),
                    note.updated_at.format("%Y-%m-%d %H:%M")
                );
            }
            println!("\n{} notes total", notes.len());
        }
    }

    Ok(())
}

pub fn show(app: &App, id: &str) -> Result<()> {
    let note = app.find_note(id)?;

    println!("{}", note.title);
    println!("Course:  {}", note.course);
    println!("Created: {}", note.created_at.format("%Y-%m-%d %H:%M"));
    println!("Updated: {}", note.updated_at.format("%Y-%m-%d %H:%M"));
    println!();
    println!("{}", note.content);
    Ok(())
}

pub fn add(app: &mut App, title: String, course: String, content: String) -> Result<()> {
    let content = read_content_arg(content)?;
    let note = app.store.add_note(NewNote {
        title,
        content,
        course,
    })?;

    println!("Added note {} '{}'", short_id(&note.id), note.title);
    Ok(())
}

pub fn edit(
    app: &mut App,
    id: &str,
    title: Option<String>,
    content: Option<String>,
    course: Option<String>,
) -> Result<()> {
    let note = app.find_note(id)?;
    let content = match content {
        Some(text) => Some(read_content_arg(text)?),
        None => None,
    };

    let updated = app.store.update_note(
        note.id,
        NoteUpdate {
            title,
            content,
            course,
        },
    )?;

    println!("Updated note '{}'", updated.title);
    Ok(())
}

pub fn delete(app: &mut App, id: &str, yes: bool) -> Result<()> {
    let note = app.find_note(id)?;
    if !confirm(&format!("Delete note '{}'?", note.title), yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    app.store.delete_note(note.id)?;
    println!("Deleted '{}'", note.title);
    Ok(())
}
