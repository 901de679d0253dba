//! Comment Store
//!
//! Abstract access to the remote comment collection. The board only ever
//! lists every document or appends one; documents are never updated or
//! deleted from this client.

mod firestore;
#[cfg(test)]
pub mod memory;

use std::fmt;

use async_trait::async_trait;

use crate::models::{Comment, CommentId, NewComment};

pub use firestore::FirestoreStore;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors. All of them are recoverable by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// No usable store configuration was provided
    NotConfigured,
    /// The request never produced a response
    Transport(String),
    /// The service answered with a non-success status
    Rejected { status: u16, message: String },
    /// The response body could not be decoded
    Decode(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotConfigured => write!(f, "Comment store is not configured"),
            StoreError::Transport(msg) => write!(f, "Transport error: {}", msg),
            StoreError::Rejected { status, message } => write!(f, "Rejected ({}): {}", status, message),
            StoreError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Remote collection of comments
///
/// Futures are not `Send`: the store is driven from the browser's single
/// event loop.
#[async_trait(?Send)]
pub trait CommentStore {
    /// Fetch every stored comment. Order is unspecified.
    async fn list_all(&self) -> StoreResult<Vec<Comment>>;

    /// Append one comment and return the id the store assigned to it
    async fn insert_one(&self, comment: &NewComment) -> StoreResult<CommentId>;
}

/// Store used when no configuration is available; every call fails
#[derive(Debug, Clone, Copy, Default)]
pub struct Disconnected;

#[async_trait(?Send)]
impl CommentStore for Disconnected {
    async fn list_all(&self) -> StoreResult<Vec<Comment>> {
        Err(StoreError::NotConfigured)
    }

    async fn insert_one(&self, _comment: &NewComment) -> StoreResult<CommentId> {
        Err(StoreError::NotConfigured)
    }
}

/// Persist a prepared comment and return it with its new id
pub async fn persist<S>(store: &S, comment: NewComment) -> StoreResult<Comment>
where
    S: CommentStore + ?Sized,
{
    let id = store.insert_one(&comment).await?;
    Ok(comment.into_comment(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_disconnected_store_fails_every_call() {
        let store = Disconnected;
        assert_eq!(store.list_all().await, Err(StoreError::NotConfigured));

        let comment = NewComment {
            text: "Rest well".to_string(),
            author: "Jane".to_string(),
            x: 50.0,
            y: 50.0,
            timestamp: Utc::now(),
        };
        assert_eq!(persist(&store, comment).await, Err(StoreError::NotConfigured));
    }
}
