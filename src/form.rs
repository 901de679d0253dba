//! Comment Form State
//!
//! State behind the "Add Comment" modal. The sticky author default is
//! owned by the board and handed in whenever the form opens or resets.

use crate::models::DraftComment;
use crate::validation::MAX_WORDS;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentForm {
    open: bool,
    draft: DraftComment,
    /// An insert for this draft is in flight
    submitting: bool,
}

impl CommentForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn draft(&self) -> &DraftComment {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Open with empty text and the author pre-filled
    pub fn open(&mut self, default_author: &str) {
        self.open = true;
        self.submitting = false;
        self.draft = DraftComment::new("", default_author);
    }

    /// Close and discard the draft; the next open starts from
    /// `default_author` again
    pub fn close(&mut self, default_author: &str) {
        self.open = false;
        self.submitting = false;
        self.draft = DraftComment::new("", default_author);
    }

    pub fn set_text(&mut self, text: String) {
        self.draft.text = text;
    }

    pub fn set_author(&mut self, author: String) {
        self.draft.author = author;
    }

    /// Mark the draft as sent. Returns false if a submit is already in
    /// flight, in which case nothing should be sent.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        true
    }

    /// Re-enable submitting after a failed insert; the draft is kept
    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.submitting && self.draft.validate().is_ok()
    }

    /// Live counter shown under the text area
    pub fn counter_label(&self) -> String {
        format!("Words: {}/{}", self.draft.word_count(), MAX_WORDS)
    }
}
