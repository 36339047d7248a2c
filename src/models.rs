//! Domain entities for the study tracker
//!
//! Every entity serializes with camelCase field names so the persisted JSON
//! arrays keep the shapes the web client wrote under the same keys.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Assignment priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("Unknown priority '{}' (low, medium, high)", other)),
        }
    }
}

/// Resource categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    #[serde(rename = "PDF")]
    Pdf,
    Video,
    Article,
    Other,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Pdf => write!(f, "PDF"),
            ResourceKind::Video => write!(f, "Video"),
            ResourceKind::Article => write!(f, "Article"),
            ResourceKind::Other => write!(f, "Other"),
        }
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ResourceKind::Pdf),
            "video" => Ok(ResourceKind::Video),
            "article" => Ok(ResourceKind::Article),
            "other" => Ok(ResourceKind::Other),
            unknown => Err(format!(
                "Unknown resource type '{}' (pdf, video, article, other)",
                unknown
            )),
        }
    }
}

/// A tracked assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    /// Unique identifier
    pub id: Uuid,
    pub title: String,
    /// Free-text course label; not checked against the courses collection
    pub course: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    pub completed: bool,
    #[serde(default)]
    pub description: String,
}

/// Fields for creating a new assignment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    pub title: String,
    pub course: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
    #[serde(default)]
    pub description: String,
}

impl Assignment {
    pub fn new(fields: NewAssignment) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            course: fields.course,
            due_date: fields.due_date,
            priority: fields.priority,
            completed: false,
            description: fields.description,
        }
    }
}

/// A study resource (link to a PDF, video, article, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub course: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
}

/// Fields for creating a new resource
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewResource {
    pub title: String,
    pub kind: ResourceKind,
    pub course: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
}

impl Resource {
    pub fn new(fields: NewResource) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            kind: fields.kind,
            course: fields.course,
            url: fields.url,
            description: fields.description,
        }
    }
}

/// A study note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub course: String,
    /// Set once at creation, never changed afterwards
    pub created_at: DateTime<Utc>,
    /// Refreshed on every edit
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a new note
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub course: String,
}

/// Fields for editing a note; `None` keeps the stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub course: Option<String>,
}

impl Note {
    pub fn new(fields: NewNote, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: fields.title,
            content: fields.content,
            course: fields.course,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A completed study interval, recorded by the Pomodoro timer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: Uuid,
    pub course: String,
    /// Duration in minutes
    pub duration: u32,
    pub date: DateTime<Utc>,
}

impl StudySession {
    pub fn new(course: String, duration: u32, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            course,
            duration,
            date,
        }
    }
}

/// A user-defined course
///
/// Distinct from the fetched [`CourseInfo`](crate::courses::CourseInfo)
/// catalog; names are case-insensitively unique within this collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Course {
    pub fn new(name: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_kind_round_trip_names() {
        let json = serde_json::to_string(&ResourceKind::Pdf).unwrap();
        assert_eq!(json, "\"PDF\"");
        let kind: ResourceKind = serde_json::from_str("\"Video\"").unwrap();
        assert_eq!(kind, ResourceKind::Video);
    }

    #[test]
    fn test_assignment_serializes_camel_case() {
        let assignment = Assignment::new(NewAssignment {
            title: "Essay".to_string(),
            course: "History".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 9, 15).unwrap(),
            priority: Priority::High,
            description: String::new(),
        });

        let value = serde_json::to_value(&assignment).unwrap();
        assert_eq!(value["dueDate"], "2026-09-15");
        assert_eq!(value["priority"], "High");
        assert_eq!(value["completed"], false);
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent".parse::<Priority>().is_err());
    }
}
