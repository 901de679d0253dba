//! Frontend Models
//!
//! Data structures shared by the board, the form and the comment store.

use std::fmt;

use chrono::{DateTime, Utc};

/// Opaque identifier assigned by the comment store on insert
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentId(String);

impl CommentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A condolence note placed on the board
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub author: String,
    /// Left offset within the canvas, in pixels
    pub x: f64,
    /// Top offset within the canvas, in pixels
    pub y: f64,
}

/// A validated comment about to be written to the store
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub text: String,
    pub author: String,
    pub x: f64,
    pub y: f64,
    pub timestamp: DateTime<Utc>,
}

impl NewComment {
    /// Attach the store-assigned id
    pub fn into_comment(self, id: CommentId) -> Comment {
        Comment {
            id,
            text: self.text,
            author: self.author,
            x: self.x,
            y: self.y,
        }
    }
}

/// Raw form input, not yet validated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftComment {
    pub text: String,
    pub author: String,
}

impl DraftComment {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}
