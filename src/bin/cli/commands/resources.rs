use anyhow::{anyhow, Result};

use studybuddy_lib::models::{NewResource, ResourceKind};

use super::assignments::truncate;
use crate::app::{confirm, short_id, App};
use crate::OutputFormat;

pub fn list(app: &App, format: &OutputFormat) -> Result<()> {
    let resources = &app.store.state().resources;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(resources)?);
        }
        OutputFormat::Plain => {
            if resources.is_empty() {
                println!("No resources.");
                return Ok(());
            }

            println!(
                "{:<10} {:<28} {:<9} {:<16} {}",
                "Id", "Title", "Type", "Course", "Url"
            );
            for r in resources {
                println!(
                    "{:<10} {:<28} {:<9} {:<16} {}",
                    short_id(&r.id),
                    truncate(&r.title, 28),
                    r.kind,
                    truncate(&r.course, 16),
                    r.url
                );
            }
            println!("\n{} resources total", resources.len());
        }
    }

    Ok(())
}

pub fn add(
    app: &mut App,
    title: String,
    kind: &str,
    course: String,
    url: String,
    description: String,
) -> Result<()> {
    let kind: ResourceKind = kind.parse().map_err(|e: String| anyhow!(e))?;

    let resource = app.store.add_resource(NewResource {
        title,
        kind,
        course,
        url,
        description,
    })?;

    println!(
        "Added {} resource {} '{}'",
        resource.kind,
        short_id(&resource.id),
        resource.title
    );
    Ok(())
}

pub fn delete(app: &mut App, id: &str, yes: bool) -> Result<()> {
    let resource = app.find_resource(id)?;
    if !confirm(&format!("Delete resource '{}'?", resource.title), yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    app.store.delete_resource(resource.id)?;
    println!("Deleted '{}'", resource.title);
    Ok(())
}
