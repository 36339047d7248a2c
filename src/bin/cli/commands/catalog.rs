use anyhow::{Context, Result};

use studybuddy_lib::courses::fetch_course_catalog;

use crate::OutputFormat;

/// Fetch and print the external course catalog
///
/// Fetch failures degrade to an empty list with a logged error, the same way
/// the original client swallowed them.
pub fn run(format: &OutputFormat) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    let catalog = match runtime.block_on(fetch_course_catalog()) {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("Error fetching courses: {}", err);
            println!("Could not fetch the course catalog.");
            return Ok(());
        }
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
        OutputFormat::Plain => {
            if catalog.is_empty() {
                println!("The catalog is empty.");
                return Ok(());
            }

            println!("{:<8} {:<34} {}", "Code", "Name", "Instructor");
            for course in &catalog {
                println!("{:<8} {:<34} {}", course.code, course.name, course.instructor);
            }
        }
    }

    Ok(())
}
