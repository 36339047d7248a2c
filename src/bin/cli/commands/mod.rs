pub mod assignments;
pub mod catalog;
pub mod courses;
pub mod dashboard;
pub mod notes;
pub mod resources;
pub mod sessions;
pub mod stats;
pub mod timer;
