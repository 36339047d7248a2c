pub mod courses;
pub mod models;
pub mod notify;
pub mod stats;
pub mod storage;
pub mod store;
pub mod timer;

pub use storage::CollectionStore;
pub use store::{StudyState, StudyStore};
