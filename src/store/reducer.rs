//! Pure reducer over the study state
//!
//! Mirrors the original client reducer case for case: adds append, updates
//! replace by id, deletes filter by id, and unknown ids fall through as
//! no-ops. No validation happens here.

use serde::{Deserialize, Serialize};

use super::actions::{Action, LoadedCollections};
use crate::models::{Assignment, Course, Note, Resource, StudySession};

/// The aggregate application state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyState {
    pub assignments: Vec<Assignment>,
    pub resources: Vec<Resource>,
    pub notes: Vec<Note>,
    pub study_sessions: Vec<StudySession>,
    pub courses: Vec<Course>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Apply an action to the state, returning the next state
pub fn reduce(mut state: StudyState, action: Action) -> StudyState {
    match action {
        Action::LoadStarted => {
            state.is_loading = true;
            state.error = None;
        }
        Action::LoadSucceeded(loaded) => {
            apply_loaded(&mut state, loaded);
            state.is_loading = false;
        }
        Action::LoadFailed(message) => {
            state.is_loading = false;
            state.error = Some(message);
        }

        Action::AddAssignment(assignment) => state.assignments.push(assignment),
        Action::UpdateAssignment(assignment) => {
            replace_by_id(&mut state.assignments, assignment, |a| a.id)
        }
        Action::DeleteAssignment(id) => state.assignments.retain(|a| a.id != id),

        Action::AddResource(resource) => state.resources.push(resource),
        Action::DeleteResource(id) => state.resources.retain(|r| r.id != id),

        Action::AddNote(note) => state.notes.push(note),
        Action::UpdateNote(note) => replace_by_id(&mut state.notes, note, |n| n.id),
        Action::DeleteNote(id) => state.notes.retain(|n| n.id != id),

        Action::AddStudySession(session) => state.study_sessions.push(session),

        Action::AddCourse(course) => state.courses.push(course),
        Action::DeleteCourse(id) => state.courses.retain(|c| c.id != id),
    }

    state
}

fn apply_loaded(state: &mut StudyState, loaded: LoadedCollections) {
    if let Some(assignments) = loaded.assignments {
        state.assignments = assignments;
    }
    if let Some(resources) = loaded.resources {
        state.resources = resources;
    }
    if let Some(notes) = loaded.notes {
        state.notes = notes;
    }
    if let Some(sessions) = loaded.study_sessions {
        state.study_sessions = sessions;
    }
    if let Some(courses) = loaded.courses {
        state.courses = courses;
    }
}

fn replace_by_id<T>(items: &mut [T], replacement: T, id: impl Fn(&T) -> uuid::Uuid) {
    let target = id(&replacement);
    if let Some(slot) = items.iter_mut().find(|item| id(item) == target) {
        *slot = replacement;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewAssignment, NewNote, Priority};
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn assignment(title: &str) -> Assignment {
        Assignment::new(NewAssignment {
            title: title.to_string(),
            course: "Math".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
            priority: Priority::Low,
            description: String::new(),
        })
    }

    fn note(title: &str) -> Note {
        Note::new(
            NewNote {
                title: title.to_string(),
                content: "content".to_string(),
                course: "Math".to_string(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_load_flags() {
        let state = reduce(StudyState::default(), Action::LoadStarted);
        assert!(state.is_loading);
        assert!(state.error.is_none());

        let state = reduce(state, Action::LoadFailed("boom".to_string()));
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("boom"));

        // A fresh load clears the previous error
        let state = reduce(state, Action::LoadStarted);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_load_succeeded_merges_partial_payload() {
        let mut initial = StudyState::default();
        initial.courses = vec![Course::new("Kept".to_string(), Utc::now())];
        initial.is_loading = true;

        let loaded = LoadedCollections {
            assignments: Some(vec![assignment("Essay")]),
            ..Default::default()
        };

        let state = reduce(initial, Action::LoadSucceeded(loaded));
        assert!(!state.is_loading);
        assert_eq!(state.assignments.len(), 1);
        // Absent collections stay untouched
        assert_eq!(state.courses.len(), 1);
    }

    #[test]
    fn test_action_sequence_matches_plain_list_operations() {
        let a = assignment("First");
        let b = assignment("Second");
        let mut edited = a.clone();
        edited.completed = true;

        let mut state = StudyState::default();
        for action in [
            Action::AddAssignment(a.clone()),
            Action::AddAssignment(b.clone()),
            Action::UpdateAssignment(edited.clone()),
            Action::DeleteAssignment(b.id),
        ] {
            state = reduce(state, action);
        }

        // The same operations on a plain vector
        let mut expected = vec![a, b.clone()];
        if let Some(slot) = expected.iter_mut().find(|x| x.id == edited.id) {
            *slot = edited;
        }
        expected.retain(|x| x.id != b.id);

        assert_eq!(state.assignments, expected);
        assert!(state.assignments[0].completed);
    }

    #[test]
    fn test_update_unknown_id_is_a_no_op() {
        let existing = note("Kept");
        let mut state = StudyState::default();
        state = reduce(state, Action::AddNote(existing.clone()));

        let stray = note("Stray");
        state = reduce(state, Action::UpdateNote(stray));
        assert_eq!(state.notes, vec![existing]);
    }

    #[test]
    fn test_delete_filters_only_matching_id() {
        let keep = Course::new("Math".to_string(), Utc::now());
        let drop = Course::new("History".to_string(), Utc::now());

        let mut state = StudyState::default();
        state = reduce(state, Action::AddCourse(keep.clone()));
        state = reduce(state, Action::AddCourse(drop.clone()));
        state = reduce(state, Action::DeleteCourse(drop.id));
        state = reduce(state, Action::DeleteCourse(Uuid::new_v4()));

        assert_eq!(state.courses, vec![keep]);
    }

    #[test]
    fn test_sessions_are_append_only() {
        let mut state = StudyState::default();
        for course in ["Math", "Physics"] {
            state = reduce(
                state,
                Action::AddStudySession(StudySession::new(course.to_string(), 25, Utc::now())),
            );
        }
        assert_eq!(state.study_sessions.len(), 2);
        assert_eq!(state.study_sessions[0].course, "Math");
    }
}
