use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use studybuddy_lib::models::{Assignment, Course, Note, Resource};
use studybuddy_lib::storage::CollectionStore;
use studybuddy_lib::store::StudyStore;

/// Shared application state for CLI commands
pub struct App {
    pub store: StudyStore,
}

impl App {
    /// Open the store from `data_dir` or the default data directory
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => CollectionStore::default_data_dir()
                .context("Failed to get data directory")?,
        };

        let storage = CollectionStore::new(data_dir).context("Failed to initialize storage")?;
        let store = StudyStore::open(storage);

        if let Some(error) = &store.state().error {
            eprintln!("Warning: {}", error);
        }

        Ok(Self { store })
    }

    /// Give up the store, for commands that need shared ownership
    pub fn into_store(self) -> StudyStore {
        self.store
    }

    /// Find an assignment by id prefix
    pub fn find_assignment(&self, id: &str) -> Result<Assignment> {
        find_by_id(&self.store.state().assignments, id, "assignment", |a| {
            (a.id, a.title.as_str())
        })
    }

    /// Find a resource by id prefix
    pub fn find_resource(&self, id: &str) -> Result<Resource> {
        find_by_id(&self.store.state().resources, id, "resource", |r| {
            (r.id, r.title.as_str())
        })
    }

    /// Find a note by id prefix
    pub fn find_note(&self, id: &str) -> Result<Note> {
        find_by_id(&self.store.state().notes, id, "note", |n| {
            (n.id, n.title.as_str())
        })
    }

    /// Find a course by id prefix or case-insensitive name
    pub fn find_course(&self, needle: &str) -> Result<Course> {
        let courses = &self.store.state().courses;
        let needle_lower = needle.to_lowercase();

        if let Some(course) = courses
            .iter()
            .find(|c| c.name.to_lowercase() == needle_lower)
        {
            return Ok(course.clone());
        }

        find_by_id(courses, needle, "course", |c| (c.id, c.name.as_str()))
    }
}

/// Match an entity by id prefix; exactly one hit required
fn find_by_id<T: Clone>(
    items: &[T],
    prefix: &str,
    noun: &str,
    describe: impl Fn(&T) -> (uuid::Uuid, &str),
) -> Result<T> {
    let matches: Vec<&T> = items
        .iter()
        .filter(|item| describe(item).0.to_string().starts_with(prefix))
        .collect();

    match matches.len() {
        0 => bail!("No {} matching id '{}'", noun, prefix),
        1 => Ok(matches[0].clone()),
        _ => bail!(
            "Ambiguous {} id '{}'. Matches:\n{}",
            noun,
            prefix,
            matches
                .iter()
                .map(|item| {
                    let (id, title) = describe(item);
                    format!("  {} {}", short_id(&id), title)
                })
                .collect::<Vec<_>>()
                .join("\n")
        ),
    }
}

/// First eight characters of an id, enough to address entities on the CLI
pub fn short_id(id: &uuid::Uuid) -> String {
    id.to_string()[..8].to_string()
}

/// Interactive yes/no prompt; `skip` answers yes without asking
pub fn confirm(prompt: &str, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }

    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Read content from stdin when the argument is "-"
pub fn read_content_arg(content: String) -> Result<String> {
    if content == "-" {
        let mut buffer = String::new();
        for line in io::stdin().lock().lines() {
            buffer.push_str(&line?);
            buffer.push('\n');
        }
        Ok(buffer.trim_end().to_string())
    } else {
        Ok(content)
    }
}
