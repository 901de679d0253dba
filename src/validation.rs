//! Comment Validation
//!
//! Client-side limits on submitted comments. The store does not enforce
//! any of these.

use std::fmt;

use crate::models::DraftComment;

/// Longest comment accepted, in words
pub const MAX_WORDS: usize = 75;

/// Number of whitespace-delimited, non-empty tokens
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyText,
    EmptyAuthor,
    TooManyWords(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyText => write!(f, "Comment text is empty"),
            ValidationError::EmptyAuthor => write!(f, "Author name is empty"),
            ValidationError::TooManyWords(count) => write!(
                f,
                "Comment cannot exceed {} words. Current word count: {}",
                MAX_WORDS, count
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

impl DraftComment {
    /// Check the draft against the submission rules
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        if self.author.trim().is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }
        let count = word_count(&self.text);
        if count > MAX_WORDS {
            return Err(ValidationError::TooManyWords(count));
        }
        Ok(())
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.text)
    }
}
