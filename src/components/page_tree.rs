//! Page Tree Component
//!
//! Displays pages in a tree structure by parent.

use leptos::prelude::*;

use crate::context::{use_app_context, FormMode};
use crate::models::Page;
use crate::store::{store_toggle_collapsed, use_admin_store, AdminStateStoreFields};
use crate::tree::{flatten_tree, has_children};

/// A single page row in the tree
#[component]
fn PageTreeRow(page: Page, depth: usize) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();

    let id = page.id;
    let indent = depth * 24;
    let page_for_edit = page.clone();

    let is_editing = move || matches!(ctx.form_mode.get(), FormMode::Edit(ref p) if p.id == id);
    let has_children = move || store.pages().with(|pages| has_children(pages, id));
    let collapsed = move || store.collapsed().with(|c| c.contains(&id));

    view! {
        <div
            class=move || if is_editing() { "page-row editing" } else { "page-row" }
            style=format!("margin-left: {}px;", indent)
        >
            // Collapse toggle
            {move || if has_children() {
                view! {
                    <button class="collapse-btn" on:click=move |_| store_toggle_collapsed(&store, id)>
                        {move || if collapsed() { "▶" } else { "▼" }}
                    </button>
                }.into_any()
            } else {
                view! { <span class="collapse-placeholder">"·"</span> }.into_any()
            }}

            <span class="page-keyword">{page.keyword.clone()}</span>

            {page.nav_position.map(|p| view! { <span class="menu-badge header">"H " {p}</span> })}
            {page.footer_position.map(|p| view! { <span class="menu-badge footer">"F " {p}</span> })}

            <button class="edit-btn" on:click=move |_| ctx.edit(page_for_edit.clone())>"Edit"</button>

            // Add child button
            <button class="add-child-btn" on:click=move |_| ctx.create_under(Some(id))>"+"</button>
        </div>
    }
}

/// Page tree navigation
#[component]
pub fn PageTree() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();

    let rows = move || flatten_tree(&store.pages().get(), &store.collapsed().get());
    let is_empty = move || store.loaded().get() && store.pages().with(|p| p.is_empty());

    view! {
        <div class="page-tree">
            <div class="page-tree-header">
                "Pages"
                <button class="add-root-btn" on:click=move |_| ctx.create_under(None)>"+ Page"</button>
            </div>

            {move || (!store.loaded().get()).then(|| view! { <div class="page-tree-loading">"Loading..."</div> })}

            <For
                each=rows
                key=|(page, depth)| {
                    (
                        page.id,
                        *depth,
                        page.keyword.clone(),
                        page.parent,
                        page.nav_position,
                        page.footer_position,
                    )
                }
                children=move |(page, depth)| view! { <PageTreeRow page=page depth=depth /> }
            />

            {move || is_empty().then(|| view! { <div class="no-pages-message">"No pages yet"</div> })}
        </div>
    }
}
