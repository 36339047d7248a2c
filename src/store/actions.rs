//! Mutation intents for the study state

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Assignment, Course, Note, Resource, StudySession};

/// Collections recovered from storage during the initial load
///
/// `None` leaves the corresponding collection untouched, so a partial payload
/// merges over the current state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedCollections {
    pub assignments: Option<Vec<Assignment>>,
    pub resources: Option<Vec<Resource>>,
    pub notes: Option<Vec<Note>>,
    pub study_sessions: Option<Vec<StudySession>>,
    pub courses: Option<Vec<Course>>,
}

/// The full action set of the state store
///
/// Serializable so intents can be logged or replayed; the reducer treats every
/// variant as a total function and accepts payloads as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Action {
    LoadStarted,
    LoadSucceeded(LoadedCollections),
    LoadFailed(String),

    AddAssignment(Assignment),
    UpdateAssignment(Assignment),
    DeleteAssignment(Uuid),

    AddResource(Resource),
    DeleteResource(Uuid),

    AddNote(Note),
    UpdateNote(Note),
    DeleteNote(Uuid),

    AddStudySession(StudySession),

    AddCourse(Course),
    DeleteCourse(Uuid),
}
