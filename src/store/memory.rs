//! In-memory comment store for tests

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::{CommentStore, StoreError, StoreResult};
use crate::models::{Comment, CommentId, NewComment};

#[derive(Default)]
pub struct MemoryStore {
    comments: RefCell<Vec<Comment>>,
    inserts: RefCell<Vec<NewComment>>,
    next_id: Cell<u32>,
    fail_list: Cell<bool>,
    fail_insert: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comments(comments: Vec<Comment>) -> Self {
        let store = Self::new();
        *store.comments.borrow_mut() = comments;
        store
    }

    /// Make every `list_all` call fail
    pub fn failing_list(self) -> Self {
        self.fail_list.set(true);
        self
    }

    /// Make every `insert_one` call fail
    pub fn failing_insert(self) -> Self {
        self.fail_insert.set(true);
        self
    }

    /// Insert requests received, including failed ones
    pub fn inserts(&self) -> Vec<NewComment> {
        self.inserts.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.comments.borrow().len()
    }
}

#[async_trait(?Send)]
impl CommentStore for MemoryStore {
    async fn list_all(&self) -> StoreResult<Vec<Comment>> {
        if self.fail_list.get() {
            return Err(StoreError::Transport("connection refused".to_string()));
        }
        Ok(self.comments.borrow().clone())
    }

    async fn insert_one(&self, comment: &NewComment) -> StoreResult<CommentId> {
        self.inserts.borrow_mut().push(comment.clone());
        if self.fail_insert.get() {
            return Err(StoreError::Rejected {
                status: 503,
                message: "unavailable".to_string(),
            });
        }
        let n = self.next_id.get() + 1;
        self.next_id.set(n);
        let id = CommentId::new(format!("doc-{}", n));
        self.comments.borrow_mut().push(comment.clone().into_comment(id.clone()));
        Ok(id)
    }
}
