//! Condolence Frame Component
//!
//! The decorated frame with the memorial photo in the middle and the
//! comment notes floating around it. The inner canvas is the coordinate
//! space for every note position.

use leptos::prelude::*;

use crate::components::{CommentNote, FloralCorner};
use crate::context::use_page_context;
use crate::state::{
    store_canvas_click, store_drag_to, store_open_form, store_release, use_page_store,
    PageStateStoreFields,
};

#[component]
pub fn CondolenceFrame() -> impl IntoView {
    let ctx = use_page_context();
    let store = use_page_store();
    let memorial = ctx.memorial();
    let caption = format!("{} {}", memorial.name, memorial.years);

    let on_mousemove = move |ev: web_sys::MouseEvent| {
        if store.interaction().read_untracked().dragging().is_none() {
            return;
        }
        if let (Some(pointer), Some(bounds)) = (ctx.pointer_in_canvas(&ev), ctx.canvas_bounds()) {
            store_drag_to(&store, pointer, bounds);
        }
    };

    let on_canvas_click = move |_| store_canvas_click(&store, js_sys::Date::now());

    let comments = move || store.board().read().comments().to_vec();
    let add_enabled = move || store.interaction().read().add_enabled();
    let is_loading = move || store.board().read().is_loading();

    view! {
        <div class="frame">
            <div class="frame-border">
                <div class="frame-gilt">
                    <div class="frame-inner">
                        <FloralCorner position="top-left" />
                        <FloralCorner position="top-right" />
                        <FloralCorner position="bottom-left" />
                        <FloralCorner position="bottom-right" />

                        <div
                            node_ref=ctx.canvas
                            class="canvas"
                            on:mousemove=on_mousemove
                            on:mouseup=move |_| store_release(&store)
                            on:mouseleave=move |_| store_release(&store)
                            on:click=on_canvas_click
                        >
                            <div class="portrait">
                                <div class="portrait-photo">
                                    <img src=memorial.photo_src alt=memorial.photo_alt />
                                </div>
                                <div class="portrait-caption">
                                    <h2>{caption}</h2>
                                </div>
                            </div>

                            <Show when=add_enabled>
                                <button
                                    class="add-comment-btn"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        store_open_form(&store);
                                    }
                                >
                                    "+ Add Comment"
                                </button>
                            </Show>

                            <For
                                each=comments
                                key=|comment| comment.id.clone()
                                children=move |comment| view! { <CommentNote comment=comment /> }
                            />

                            <Show when=is_loading>
                                <div class="loading-overlay">
                                    <div class="spinner"></div>
                                    <p>"Loading comments..."</p>
                                </div>
                            </Show>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
