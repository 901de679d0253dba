//! Comment Note Component
//!
//! One draggable condolence note. Text and author never change after
//! creation; only the position is reactive.

use leptos::prelude::*;
use leptos_dragdrop::make_on_grab;

use crate::context::use_page_context;
use crate::models::Comment;
use crate::state::{store_grab_comment, use_page_store, PageStateStoreFields};

#[component]
pub fn CommentNote(comment: Comment) -> impl IntoView {
    let ctx = use_page_context();
    let store = use_page_store();

    let id = comment.id.clone();
    let initial = (comment.x, comment.y);
    let position = Memo::new({
        let id = id.clone();
        move |_| {
            store
                .board()
                .read()
                .get(&id)
                .map(|c| (c.x, c.y))
                .unwrap_or(initial)
        }
    });

    let is_dragging = {
        let id = id.clone();
        move || store.interaction().read().dragging() == Some(&id)
    };
    let note_class = move || {
        if is_dragging() {
            "comment-note dragging"
        } else {
            "comment-note"
        }
    };

    let on_grab = make_on_grab(move |ev: &web_sys::MouseEvent| {
        if let Some(pointer) = ctx.pointer_in_canvas(ev) {
            store_grab_comment(&store, &id, pointer);
        }
    });

    view! {
        <div
            class=note_class
            style:left=move || format!("{}px", position.get().0)
            style:top=move || format!("{}px", position.get().1)
            on:mousedown=on_grab
            on:click=move |ev| ev.stop_propagation()
        >
            <span class="comment-icon" aria-hidden="true">"💬"</span>
            <div class="comment-bubble">
                <p class="comment-text">{comment.text}</p>
                <p class="comment-author">"- " {comment.author}</p>
            </div>
        </div>
    }
}
