//! Application state store
//!
//! A reducer-backed store over the five study collections. All mutations are
//! expressed as [`Action`] intents, applied by the pure reducer, then mirrored
//! to [`CollectionStore`] before the mutation is considered complete
//! (write-through). Validated operations such as course-name uniqueness live
//! on [`StudyStore`]; the reducer itself accepts payloads as-is.

mod actions;
mod reducer;

use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{
    Assignment, Course, NewAssignment, NewNote, NewResource, Note, NoteUpdate, Resource,
    StudySession,
};
use crate::storage::{keys, CollectionStore, StorageError};

pub use actions::{Action, LoadedCollections};
pub use reducer::{reduce, StudyState};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Course name is required")]
    EmptyCourseName,

    #[error("A course named '{0}' already exists")]
    DuplicateCourse(String),

    #[error("Assignment not found: {0}")]
    AssignmentNotFound(Uuid),

    #[error("Note not found: {0}")]
    NoteNotFound(Uuid),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Owner of the in-memory study state
pub struct StudyStore {
    state: StudyState,
    storage: CollectionStore,
}

impl StudyStore {
    /// Open the store and load every collection from storage
    ///
    /// A failed load leaves the collections empty and records a single global
    /// error string, the same degraded mode the original client exposed.
    pub fn open(storage: CollectionStore) -> Self {
        let mut store = Self {
            state: StudyState::default(),
            storage,
        };

        store.state = reduce(store.state.clone(), Action::LoadStarted);
        match store.load_collections() {
            Ok(loaded) => {
                store.state = reduce(store.state.clone(), Action::LoadSucceeded(loaded));
            }
            Err(err) => {
                log::error!("Failed to load study data: {}", err);
                store.state = reduce(
                    store.state.clone(),
                    Action::LoadFailed("Failed to load data from storage".to_string()),
                );
            }
        }

        store
    }

    fn load_collections(&self) -> Result<LoadedCollections> {
        Ok(LoadedCollections {
            assignments: Some(self.storage.load(keys::ASSIGNMENTS)?),
            resources: Some(self.storage.load(keys::RESOURCES)?),
            notes: Some(self.storage.load(keys::NOTES)?),
            study_sessions: Some(self.storage.load(keys::STUDY_SESSIONS)?),
            courses: Some(self.storage.load(keys::COURSES)?),
        })
    }

    pub fn state(&self) -> &StudyState {
        &self.state
    }

    /// Apply an action and mirror the mutated collection to storage
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let key = mutated_key(&action);
        self.state = reduce(self.state.clone(), action);

        match key {
            Some(keys::ASSIGNMENTS) => {
                self.storage.save(keys::ASSIGNMENTS, &self.state.assignments)?
            }
            Some(keys::RESOURCES) => self.storage.save(keys::RESOURCES, &self.state.resources)?,
            Some(keys::NOTES) => self.storage.save(keys::NOTES, &self.state.notes)?,
            Some(keys::STUDY_SESSIONS) => self
                .storage
                .save(keys::STUDY_SESSIONS, &self.state.study_sessions)?,
            Some(keys::COURSES) => self.storage.save(keys::COURSES, &self.state.courses)?,
            _ => {}
        }

        Ok(())
    }

    // ===== Assignments =====

    pub fn add_assignment(&mut self, fields: NewAssignment) -> Result<Assignment> {
        let assignment = Assignment::new(fields);
        self.dispatch(Action::AddAssignment(assignment.clone()))?;
        Ok(assignment)
    }

    pub fn update_assignment(&mut self, assignment: Assignment) -> Result<()> {
        self.dispatch(Action::UpdateAssignment(assignment))
    }

    /// Toggle or set the completed flag of an assignment
    pub fn set_assignment_completed(&mut self, id: Uuid, completed: bool) -> Result<Assignment> {
        let mut assignment = self
            .state
            .assignments
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(StoreError::AssignmentNotFound(id))?;

        assignment.completed = completed;
        self.dispatch(Action::UpdateAssignment(assignment.clone()))?;
        Ok(assignment)
    }

    pub fn delete_assignment(&mut self, id: Uuid) -> Result<()> {
        self.dispatch(Action::DeleteAssignment(id))
    }

    // ===== Resources =====

    pub fn add_resource(&mut self, fields: NewResource) -> Result<Resource> {
        let resource = Resource::new(fields);
        self.dispatch(Action::AddResource(resource.clone()))?;
        Ok(resource)
    }

    pub fn delete_resource(&mut self, id: Uuid) -> Result<()> {
        self.dispatch(Action::DeleteResource(id))
    }

    // ===== Notes =====

    pub fn add_note(&mut self, fields: NewNote) -> Result<Note> {
        let note = Note::new(fields, Utc::now());
        self.dispatch(Action::AddNote(note.clone()))?;
        Ok(note)
    }

    /// Edit a note, refreshing `updated_at` and keeping `created_at`
    pub fn update_note(&mut self, id: Uuid, update: NoteUpdate) -> Result<Note> {
        let mut note = self
            .state
            .notes
            .iter()
            .find(|n| n.id == id)
            .cloned()
            .ok_or(StoreError::NoteNotFound(id))?;

        if let Some(title) = update.title {
            note.title = title;
        }
        if let Some(content) = update.content {
            note.content = content;
        }
        if let Some(course) = update.course {
            note.course = course;
        }
        note.updated_at = Utc::now();

        self.dispatch(Action::UpdateNote(note.clone()))?;
        Ok(note)
    }

    pub fn delete_note(&mut self, id: Uuid) -> Result<()> {
        self.dispatch(Action::DeleteNote(id))
    }

    // ===== Study sessions =====

    pub fn record_study_session(&mut self, session: StudySession) -> Result<()> {
        self.dispatch(Action::AddStudySession(session))
    }

    // ===== Courses =====

    /// Add a course; names are trimmed and case-insensitively unique
    pub fn add_course(&mut self, name: &str) -> Result<Course> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyCourseName);
        }

        let name_lower = name.to_lowercase();
        if self
            .state
            .courses
            .iter()
            .any(|c| c.name.to_lowercase() == name_lower)
        {
            return Err(StoreError::DuplicateCourse(name.to_string()));
        }

        let course = Course::new(name.to_string(), Utc::now());
        self.dispatch(Action::AddCourse(course.clone()))?;
        Ok(course)
    }

    pub fn delete_course(&mut self, id: Uuid) -> Result<()> {
        self.dispatch(Action::DeleteCourse(id))
    }
}

/// Storage key touched by an action, if any
fn mutated_key(action: &Action) -> Option<&'static str> {
    match action {
        Action::AddAssignment(_) | Action::UpdateAssignment(_) | Action::DeleteAssignment(_) => {
            Some(keys::ASSIGNMENTS)
        }
        Action::AddResource(_) | Action::DeleteResource(_) => Some(keys::RESOURCES),
        Action::AddNote(_) | Action::UpdateNote(_) | Action::DeleteNote(_) => Some(keys::NOTES),
        Action::AddStudySession(_) => Some(keys::STUDY_SESSIONS),
        Action::AddCourse(_) | Action::DeleteCourse(_) => Some(keys::COURSES),
        Action::LoadStarted | Action::LoadSucceeded(_) | Action::LoadFailed(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use chrono::NaiveDate;

    fn open_temp() -> (tempfile::TempDir, StudyStore) {
        let dir = tempfile::tempdir().unwrap();
        let storage = CollectionStore::new(dir.path().to_path_buf()).unwrap();
        (dir, StudyStore::open(storage))
    }

    fn sample_assignment() -> NewAssignment {
        NewAssignment {
            title: "Problem set 3".to_string(),
            course: "Physics".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 9, 10).unwrap(),
            priority: Priority::Medium,
            description: String::new(),
        }
    }

    #[test]
    fn test_open_empty_store() {
        let (_dir, store) = open_temp();
        assert!(!store.state().is_loading);
        assert!(store.state().error.is_none());
        assert!(store.state().assignments.is_empty());
    }

    #[test]
    fn test_write_through_matches_state() {
        let (dir, mut store) = open_temp();
        store.add_assignment(sample_assignment()).unwrap();
        store.add_course("Physics").unwrap();

        let raw = std::fs::read_to_string(dir.path().join("assignments.json")).unwrap();
        let persisted: Vec<Assignment> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, store.state().assignments);

        let raw = std::fs::read_to_string(dir.path().join("courses.json")).unwrap();
        let persisted: Vec<Course> = serde_json::from_str(&raw).unwrap();
        assert_eq!(persisted, store.state().courses);
    }

    #[test]
    fn test_reopen_restores_collections() {
        let dir = tempfile::tempdir().unwrap();
        {
            let storage = CollectionStore::new(dir.path().to_path_buf()).unwrap();
            let mut store = StudyStore::open(storage);
            store.add_assignment(sample_assignment()).unwrap();
            store.add_course("Physics").unwrap();
        }

        let storage = CollectionStore::new(dir.path().to_path_buf()).unwrap();
        let store = StudyStore::open(storage);
        assert_eq!(store.state().assignments.len(), 1);
        assert_eq!(store.state().courses.len(), 1);
        assert!(store.state().error.is_none());
    }

    #[test]
    fn test_set_assignment_completed() {
        let (_dir, mut store) = open_temp();
        let assignment = store.add_assignment(sample_assignment()).unwrap();

        let updated = store.set_assignment_completed(assignment.id, true).unwrap();
        assert!(updated.completed);
        assert!(store.state().assignments[0].completed);

        let missing = store.set_assignment_completed(Uuid::new_v4(), true);
        assert!(matches!(missing, Err(StoreError::AssignmentNotFound(_))));
    }

    #[test]
    fn test_course_names_case_insensitively_unique() {
        let (_dir, mut store) = open_temp();
        store.add_course("math").unwrap();

        let duplicate = store.add_course("Math");
        assert!(matches!(duplicate, Err(StoreError::DuplicateCourse(_))));
        assert_eq!(store.state().courses.len(), 1);

        let empty = store.add_course("   ");
        assert!(matches!(empty, Err(StoreError::EmptyCourseName)));
    }

    #[test]
    fn test_course_name_is_trimmed() {
        let (_dir, mut store) = open_temp();
        let course = store.add_course("  Linear Algebra  ").unwrap();
        assert_eq!(course.name, "Linear Algebra");
    }

    #[test]
    fn test_note_update_refreshes_updated_at_only() {
        let (_dir, mut store) = open_temp();
        let note = store
            .add_note(NewNote {
                title: "Lecture 4".to_string(),
                content: "Gauss's law".to_string(),
                course: "Physics".to_string(),
            })
            .unwrap();

        let edited = store
            .update_note(
                note.id,
                NoteUpdate {
                    content: Some("Gauss's law, flux integrals".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(edited.created_at, note.created_at);
        assert!(edited.updated_at >= note.updated_at);
        assert_eq!(edited.title, "Lecture 4");
        assert_eq!(edited.content, "Gauss's law, flux integrals");

        let missing = store.update_note(Uuid::new_v4(), NoteUpdate::default());
        assert!(matches!(missing, Err(StoreError::NoteNotFound(_))));
    }

    #[test]
    fn test_delete_unknown_id_is_a_no_op() {
        let (_dir, mut store) = open_temp();
        store.add_course("Math").unwrap();
        store.delete_course(Uuid::new_v4()).unwrap();
        assert_eq!(store.state().courses.len(), 1);
    }
}
