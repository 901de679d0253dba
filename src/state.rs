//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//!
//! The whole page state lives in one store, so never hold a guard on one
//! field while writing another: read into a local first.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::CommentBoard;
use crate::form::CommentForm;
use crate::geometry::{CanvasBounds, Point};
use crate::interaction::InteractionController;
use crate::models::{Comment, CommentId};

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    /// Comments and the sticky author default
    pub board: CommentBoard,
    /// Drag and click-gesture state
    pub interaction: InteractionController,
    /// The add-comment modal
    pub form: CommentForm,
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Open the modal with the last used author filled in
pub fn store_open_form(store: &PageStore) {
    let author = store.board().read_untracked().last_author().to_string();
    store.form().write().open(&author);
}

/// Close the modal, dropping the draft
pub fn store_close_form(store: &PageStore) {
    let author = store.board().read_untracked().last_author().to_string();
    store.form().write().close(&author);
}

/// Append a persisted comment and close the modal
pub fn store_commit_comment(store: &PageStore, comment: Comment) {
    store.board().write().commit(comment);
    store_close_form(store);
}

/// Begin dragging the note under the pointer
pub fn store_grab_comment(store: &PageStore, id: &CommentId, pointer: Point) {
    let corner = store
        .board()
        .read_untracked()
        .get(id)
        .map(|c| Point::new(c.x, c.y));
    if let Some(corner) = corner {
        store.interaction().write().pointer_down(id.clone(), pointer, corner);
    }
}

/// Follow the pointer with the dragged note, if any
pub fn store_drag_to(store: &PageStore, pointer: Point, bounds: CanvasBounds) {
    let target = store.interaction().read_untracked().pointer_move(pointer);
    if let Some((id, corner)) = target {
        store.board().write().move_comment(&id, corner, bounds);
    }
}

/// End any drag in progress
pub fn store_release(store: &PageStore) {
    if store.interaction().read_untracked().dragging().is_some() {
        store.interaction().write().pointer_up();
    }
}

/// Register a click on empty canvas for the hide gesture
pub fn store_canvas_click(store: &PageStore, now_ms: f64) {
    if store.interaction().read_untracked().add_enabled() {
        store.interaction().write().canvas_click(now_ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment_by(author: &str) -> Comment {
        Comment {
            id: CommentId::new("doc-1"),
            text: "Rest well".to_string(),
            author: author.to_string(),
            x: 100.0,
            y: 200.0,
        }
    }

    #[test]
    fn test_commit_closes_form_and_next_open_prefills_author() {
        let store = Store::new(PageState::default());
        store_open_form(&store);
        store.form().write().set_author("Jane".to_string());
        store.form().write().set_text("Rest well".to_string());

        store_commit_comment(&store, comment_by("Jane"));
        assert!(!store.form().read_untracked().is_open());
        assert_eq!(store.board().read_untracked().comments().len(), 1);

        store_open_form(&store);
        let form = store.form().read_untracked().clone();
        assert!(form.is_open());
        assert_eq!(form.draft().author, "Jane");
        assert_eq!(form.draft().text, "");
    }

    #[test]
    fn test_cancel_keeps_last_committed_author() {
        let store = Store::new(PageState::default());
        store_commit_comment(&store, comment_by("Jane"));

        store_open_form(&store);
        store.form().write().set_author("Someone else".to_string());
        store_close_form(&store);

        store_open_form(&store);
        assert_eq!(store.form().read_untracked().draft().author, "Jane");
    }
}
