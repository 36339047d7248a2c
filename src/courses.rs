//! Course catalog lookup
//!
//! Fetches a mock course list from an external read-only endpoint and
//! reshapes it into course records for selection lists. The result is never
//! persisted; the user-managed courses collection is a separate thing.
//! Subject and code assignment are randomized, so two fetches do not agree —
//! callers treat the catalog as cosmetic.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CATALOG_URL: &str = "https://jsonplaceholder.typicode.com/users";
const CATALOG_LIMIT: usize = 6;

const SUBJECTS: [&str; 6] = [
    "Mathematics",
    "Physics",
    "Computer Science",
    "Biology",
    "History",
    "Literature",
];

#[derive(Error, Debug)]
pub enum CourseFetchError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// An entry of the fetched course catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseInfo {
    pub id: String,
    pub name: String,
    pub instructor: String,
    pub code: String,
}

/// The subset of the placeholder user record the reshape needs
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceholderUser {
    pub id: u32,
    pub name: String,
}

/// Fetch the external catalog and reshape it into course records
pub async fn fetch_course_catalog() -> Result<Vec<CourseInfo>, CourseFetchError> {
    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(30))
        .build()?;

    let users: Vec<PlaceholderUser> = client
        .get(CATALOG_URL)
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    log::debug!("Fetched {} catalog entries", users.len());
    Ok(reshape_users(users, &mut rand::thread_rng()))
}

/// Turn placeholder users into course records
///
/// Takes the first six users; each gets a course named after the user's first
/// name with a random subject, the user as instructor, and a random
/// CS100..CS499 code.
pub fn reshape_users<R: Rng>(users: Vec<PlaceholderUser>, rng: &mut R) -> Vec<CourseInfo> {
    users
        .into_iter()
        .take(CATALOG_LIMIT)
        .map(|user| {
            let first_name = user.name.split(' ').next().unwrap_or(&user.name).to_string();
            let subject = SUBJECTS[rng.gen_range(0..SUBJECTS.len())];
            let code = format!("CS{}", 100 + rng.gen_range(0..400));

            CourseInfo {
                id: user.id.to_string(),
                name: format!("{}'s {}", first_name, subject),
                instructor: user.name,
                code,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn users(count: usize) -> Vec<PlaceholderUser> {
        (0..count)
            .map(|i| PlaceholderUser {
                id: i as u32 + 1,
                name: format!("User{} Example", i + 1),
            })
            .collect()
    }

    #[test]
    fn test_reshape_truncates_to_six() {
        let mut rng = StdRng::seed_from_u64(7);
        let catalog = reshape_users(users(10), &mut rng);
        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn test_reshape_synthesizes_name_and_code() {
        let mut rng = StdRng::seed_from_u64(7);
        let catalog = reshape_users(
            vec![PlaceholderUser {
                id: 3,
                name: "Clementine Bauch".to_string(),
            }],
            &mut rng,
        );

        let course = &catalog[0];
        assert_eq!(course.id, "3");
        assert_eq!(course.instructor, "Clementine Bauch");
        assert!(course.name.starts_with("Clementine's "));
        assert!(SUBJECTS
            .iter()
            .any(|s| course.name == format!("Clementine's {}", s)));

        let number: u32 = course.code.strip_prefix("CS").unwrap().parse().unwrap();
        assert!((100..500).contains(&number));
    }

    #[test]
    fn test_reshape_is_deterministic_for_a_seeded_rng() {
        let first = reshape_users(users(6), &mut StdRng::seed_from_u64(42));
        let second = reshape_users(users(6), &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_single_word_names_survive() {
        let mut rng = StdRng::seed_from_u64(1);
        let catalog = reshape_users(
            vec![PlaceholderUser {
                id: 9,
                name: "Cher".to_string(),
            }],
            &mut rng,
        );
        assert!(catalog[0].name.starts_with("Cher's "));
    }
}
