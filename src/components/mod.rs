//! UI Components
//!
//! Leptos components of the memorial page.

mod comment_form_modal;
mod comment_note;
mod condolence_frame;
mod floral_corner;
mod footer;

pub use comment_form_modal::CommentFormModal;
pub use comment_note::CommentNote;
pub use condolence_frame::CondolenceFrame;
pub use floral_corner::FloralCorner;
pub use footer::Footer;
