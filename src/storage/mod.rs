mod collection_store;

pub use collection_store::{keys, CollectionStore, StorageError};
