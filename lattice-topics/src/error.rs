//! Error types for the topic store.

use thiserror::Error;

/// Result type for topic-store operations.
pub type TopicResult<T> = Result<T, TopicStoreError>;

/// Errors that can occur in topic-store operations.
///
/// Lookups that find nothing are `Ok(None)`, not errors; persistence
/// failures surface unchanged from the driver.
#[derive(Debug, Error)]
pub enum TopicStoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}
