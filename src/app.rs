//! Memorial Board App
//!
//! Root component: wires configuration, the comment store and page state,
//! then loads comments once the canvas can be measured.

use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{CommentFormModal, CondolenceFrame, Footer};
use crate::config::AppConfig;
use crate::context::PageContext;
use crate::state::{PageState, PageStateStoreFields, PageStore};
use crate::store::{CommentStore, Disconnected, FirestoreStore};

fn connect(config: &AppConfig) -> Rc<dyn CommentStore> {
    match &config.store {
        Ok(store_config) => {
            log::info!(
                "using Firestore project {} collection {}",
                store_config.project_id,
                store_config.collection
            );
            Rc::new(FirestoreStore::new(store_config.clone()))
        }
        Err(e) => {
            log::warn!("{}; comments cannot be loaded or saved", e);
            Rc::new(Disconnected)
        }
    }
}

fn load_comments(ctx: PageContext, store: PageStore) {
    spawn_local(async move {
        let client = ctx.comment_store();
        let result = client.list_all().await;
        // measure after the await: the layout may have settled meanwhile
        let bounds = ctx.canvas_bounds();
        store.board().write().finish_load(result, bounds);
    });
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    let canvas = NodeRef::<Div>::new();
    let ctx = PageContext::new(connect(&config), canvas, config.memorial);
    let store: PageStore = Store::new(PageState::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);

    // Load once, as soon as the canvas is mounted
    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        if canvas.get().is_none() {
            return false;
        }
        load_comments(ctx, store);
        true
    });

    view! {
        <div class="page">
            <CondolenceFrame />
            <Footer />
            <CommentFormModal />
        </div>
    }
}
