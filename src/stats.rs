//! Dashboard and study statistics
//!
//! Pure aggregations over the state; the clock is injected so the cutoffs
//! (today, trailing week, upcoming window) are testable.

use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::models::{Assignment, StudySession};
use crate::store::StudyState;

/// How many upcoming assignments the dashboard shows
const UPCOMING_LIMIT: usize = 3;
/// Width of the upcoming-assignments window in days
const UPCOMING_WINDOW_DAYS: i64 = 7;
/// Trailing window for the weekly study total
const WEEK_DAYS: i64 = 7;

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub pending_assignments: usize,
    pub total_study_minutes: u32,
    pub total_notes: usize,
    pub total_resources: usize,
    /// Up to three open assignments due within the next seven days
    pub upcoming_assignments: Vec<Assignment>,
}

/// Build the dashboard summary as of `today`
pub fn dashboard_summary(state: &StudyState, today: NaiveDate) -> DashboardSummary {
    let next_week = today + Duration::days(UPCOMING_WINDOW_DAYS);

    let mut upcoming: Vec<Assignment> = state
        .assignments
        .iter()
        .filter(|a| !a.completed && a.due_date >= today && a.due_date <= next_week)
        .cloned()
        .collect();
    upcoming.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    upcoming.truncate(UPCOMING_LIMIT);

    DashboardSummary {
        pending_assignments: state.assignments.iter().filter(|a| !a.completed).count(),
        total_study_minutes: total_minutes(&state.study_sessions),
        total_notes: state.notes.len(),
        total_resources: state.resources.len(),
        upcoming_assignments: upcoming,
    }
}

/// Study minutes credited to one course
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseMinutes {
    pub course: String,
    pub minutes: u32,
}

/// Aggregated study-session statistics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyStats {
    pub total_minutes: u32,
    pub session_count: usize,
    pub today_minutes: u32,
    pub week_minutes: u32,
    /// Per-course totals, most studied first
    pub by_course: Vec<CourseMinutes>,
}

/// Aggregate the session log as of `now`
pub fn study_stats(sessions: &[StudySession], now: DateTime<Utc>) -> StudyStats {
    let today = now.date_naive();
    let week_start = today - Duration::days(WEEK_DAYS);

    let today_minutes = total_minutes_since(sessions, today);
    let week_minutes = total_minutes_since(sessions, week_start);

    let mut per_course: HashMap<&str, u32> = HashMap::new();
    for session in sessions {
        *per_course.entry(session.course.as_str()).or_insert(0) += session.duration;
    }

    let mut by_course: Vec<CourseMinutes> = per_course
        .into_iter()
        .map(|(course, minutes)| CourseMinutes {
            course: course.to_string(),
            minutes,
        })
        .collect();
    by_course.sort_by(|a, b| b.minutes.cmp(&a.minutes).then(a.course.cmp(&b.course)));

    StudyStats {
        total_minutes: total_minutes(sessions),
        session_count: sessions.len(),
        today_minutes,
        week_minutes,
        by_course,
    }
}

fn total_minutes(sessions: &[StudySession]) -> u32 {
    sessions.iter().map(|s| s.duration).sum()
}

fn total_minutes_since(sessions: &[StudySession], cutoff: NaiveDate) -> u32 {
    sessions
        .iter()
        .filter(|s| s.date.date_naive() >= cutoff)
        .map(|s| s.duration)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewAssignment, Priority};
    use chrono::TimeZone;

    fn assignment(title: &str, due: NaiveDate, completed: bool) -> Assignment {
        let mut a = Assignment::new(NewAssignment {
            title: title.to_string(),
            course: "Math".to_string(),
            due_date: due,
            priority: Priority::Medium,
            description: String::new(),
        });
        a.completed = completed;
        a
    }

    fn session(course: &str, minutes: u32, date: DateTime<Utc>) -> StudySession {
        StudySession::new(course.to_string(), minutes, date)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_upcoming_window_filter_and_order() {
        let today = day(2026, 9, 1);
        let mut state = StudyState::default();
        state.assignments = vec![
            assignment("Past due", day(2026, 8, 30), false),
            assignment("Done", day(2026, 9, 3), true),
            assignment("Soon", day(2026, 9, 2), false),
            assignment("Later", day(2026, 9, 7), false),
            assignment("Today", day(2026, 9, 1), false),
            assignment("Beyond window", day(2026, 9, 20), false),
        ];

        let summary = dashboard_summary(&state, today);

        let titles: Vec<&str> = summary
            .upcoming_assignments
            .iter()
            .map(|a| a.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Today", "Soon", "Later"]);
        // Past-due and completed assignments still count as pending/not
        assert_eq!(summary.pending_assignments, 5);
    }

    #[test]
    fn test_upcoming_caps_at_three() {
        let today = day(2026, 9, 1);
        let mut state = StudyState::default();
        state.assignments = (0..5)
            .map(|i| assignment(&format!("A{}", i), day(2026, 9, 2 + i), false))
            .collect();

        let summary = dashboard_summary(&state, today);
        assert_eq!(summary.upcoming_assignments.len(), 3);
    }

    #[test]
    fn test_study_stats_cutoffs() {
        let now = Utc.with_ymd_and_hms(2026, 9, 10, 12, 0, 0).unwrap();
        let sessions = vec![
            session("Math", 25, now),
            session("Math", 25, now - Duration::days(3)),
            session("Physics", 50, now - Duration::days(10)),
        ];

        let stats = study_stats(&sessions, now);
        assert_eq!(stats.total_minutes, 100);
        assert_eq!(stats.session_count, 3);
        assert_eq!(stats.today_minutes, 25);
        assert_eq!(stats.week_minutes, 50);
    }

    #[test]
    fn test_by_course_sorted_most_studied_first() {
        let now = Utc::now();
        let sessions = vec![
            session("Math", 25, now),
            session("Physics", 25, now),
            session("Physics", 25, now),
        ];

        let stats = study_stats(&sessions, now);
        assert_eq!(
            stats.by_course,
            vec![
                CourseMinutes {
                    course: "Physics".to_string(),
                    minutes: 50
                },
                CourseMinutes {
                    course: "Math".to_string(),
                    minutes: 25
                },
            ]
        );
    }

    #[test]
    fn test_empty_log() {
        let stats = study_stats(&[], Utc::now());
        assert_eq!(stats.total_minutes, 0);
        assert!(stats.by_course.is_empty());
    }
}
