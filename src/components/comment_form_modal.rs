//! Comment Form Modal
//!
//! Collects a new comment. Submit stays disabled until both fields are
//! filled and the text is within the word limit, and while an insert is
//! in flight.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_page_context, PageContext};
use crate::state::{store_close_form, store_commit_comment, use_page_store, PageStateStoreFields, PageStore};
use crate::store;
use crate::validation::{ValidationError, MAX_WORDS};

/// Validate, persist, then append. Local state only changes once the
/// store has confirmed the insert.
fn submit_comment(ctx: PageContext, page: PageStore) {
    let draft = page.form().read_untracked().draft().clone();
    let bounds = ctx.canvas_bounds();
    let prepared = page.board().read_untracked().prepare(&draft, bounds, Utc::now());
    let prepared = match prepared {
        Ok(prepared) => prepared,
        Err(e @ ValidationError::TooManyWords(_)) => {
            ctx.notify(&e.to_string());
            return;
        }
        Err(_) => return,
    };
    if !page.form().write().begin_submit() {
        return;
    }

    let client = ctx.comment_store();
    spawn_local(async move {
        match store::persist(client.as_ref(), prepared).await {
            Ok(comment) => {
                log::info!("comment added with id {}", comment.id);
                store_commit_comment(&page, comment);
            }
            Err(e) => {
                log::error!("failed to add comment: {}", e);
                page.form().write().submit_failed();
                ctx.notify("Failed to add comment. Please try again.");
            }
        }
    });
}

#[component]
pub fn CommentFormModal() -> impl IntoView {
    let ctx = use_page_context();
    let page = use_page_store();

    let is_open = move || page.form().read().is_open();
    let author = move || page.form().read().draft().author.clone();
    let text = move || page.form().read().draft().text.clone();
    let counter = move || page.form().read().counter_label();
    let submit_disabled = move || !page.form().read().can_submit();

    view! {
        <Show when=is_open>
            <div class="modal-backdrop">
                <div class="modal">
                    <h3>"Add Comment"</h3>
                    <div class="modal-fields">
                        <div>
                            <label>"Your Name"</label>
                            <input
                                type="text"
                                placeholder="Enter your name..."
                                prop:value=author
                                on:input=move |ev| page.form().write().set_author(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label>{format!("Comment (Max {} words)", MAX_WORDS)}</label>
                            <textarea
                                rows="4"
                                placeholder="Enter your comment..."
                                prop:value=text
                                on:input=move |ev| page.form().write().set_text(event_target_value(&ev))
                            ></textarea>
                            <div class="word-counter">{counter}</div>
                        </div>
                    </div>
                    <div class="modal-actions">
                        <button class="cancel-btn" on:click=move |_| store_close_form(&page)>
                            "Cancel"
                        </button>
                        <button
                            class="submit-btn"
                            disabled=submit_disabled
                            on:click=move |_| submit_comment(ctx, page)
                        >
                            "Add Comment"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
