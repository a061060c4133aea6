//! Page Form Component
//!
//! Create/edit form for a page, with one menu position editor per menu.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::callback::Timeout;

use crate::commands;
use crate::components::{MenuPositionEditor, PositionHandle};
use crate::context::{use_app_context, FormMode};
use crate::models::{MenuType, PageDraft};
use crate::store::{store_upsert_page, use_admin_store, AdminStateStoreFields};

/// Label for the in-progress page before it has a keyword
const UNTITLED_KEYWORD: &str = "(new page)";

const FLASH_MS: u32 = 2000;

/// Form for creating or editing a page
#[component]
pub fn PageForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();

    let keyword = RwSignal::new(String::new());
    let header_enabled = RwSignal::new(false);
    let header_position = RwSignal::new(None::<i32>);
    let footer_enabled = RwSignal::new(false);
    let footer_position = RwSignal::new(None::<i32>);
    let status = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);

    let header = PositionHandle::new(MenuType::Header, ctx.positioner_config());
    let footer = PositionHandle::new(MenuType::Footer, ctx.positioner_config());

    // Reset fields whenever the form switches page
    Effect::new(move |_| {
        let mode = ctx.form_mode.get();
        header.reset();
        footer.reset();
        match mode {
            FormMode::Edit(page) => {
                keyword.set(page.keyword);
                header_enabled.set(page.nav_position.is_some());
                header_position.set(page.nav_position);
                footer_enabled.set(page.footer_position.is_some());
                footer_position.set(page.footer_position);
            }
            FormMode::Create { .. } => {
                keyword.set(String::new());
                header_enabled.set(false);
                header_position.set(None);
                footer_enabled.set(false);
                footer_position.set(None);
            }
        }
    });

    let pages = Signal::derive(move || store.pages().get());
    let loaded = Signal::derive(move || store.loaded().get());
    let parent_page_id = Signal::derive(move || match ctx.form_mode.get() {
        FormMode::Create { parent } => parent,
        FormMode::Edit(page) => page.parent,
    });
    // Edited pages are matched by their stored keyword so renaming does not detach them
    let current_keyword = Signal::derive(move || match ctx.form_mode.get() {
        FormMode::Edit(page) => Some(page.keyword),
        FormMode::Create { .. } => {
            let typed = keyword.get();
            let typed = typed.trim();
            Some(if typed.is_empty() { UNTITLED_KEYWORD.to_string() } else { typed.to_string() })
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = keyword.get_untracked().trim().to_string();
        if text.is_empty() {
            status.set(Some("Keyword is required".to_string()));
            return;
        }

        let draft = PageDraft {
            keyword: text,
            parent: parent_page_id.get_untracked(),
            nav_position: header.final_position(),
            footer_position: footer.final_position(),
        };
        let mode = ctx.form_mode.get_untracked();
        let api_base = ctx.api_base();
        log::debug!("[PageForm] Submitting {:?}", draft);

        saving.set(true);
        spawn_local(async move {
            let result = match &mode {
                FormMode::Edit(page) => commands::update_page(&api_base, page.id, &draft).await,
                FormMode::Create { .. } => commands::create_page(&api_base, &draft).await,
            };
            saving.set(false);
            match result {
                Ok(page) => {
                    log::info!("[PageForm] Saved page {} ({})", page.id, page.keyword);
                    store_upsert_page(&store, page.clone());
                    ctx.edit(page);
                    ctx.reload();
                    status.set(Some("Saved".to_string()));
                    Timeout::new(FLASH_MS, move || {
                        let _ = status.try_set(None);
                    })
                    .forget();
                }
                Err(e) => {
                    log::error!("[PageForm] Save failed: {}", e);
                    status.set(Some(e.to_string()));
                }
            }
        });
    };

    let title = move || match ctx.form_mode.get() {
        FormMode::Edit(page) => format!("Edit page #{}", page.id),
        FormMode::Create { parent: Some(pid) } => format!("New child page under #{}", pid),
        FormMode::Create { parent: None } => "New page".to_string(),
    };

    view! {
        <form class="page-form" on:submit=on_submit>
            <h2>{title}</h2>

            <div class="page-form-row">
                <input
                    type="text"
                    placeholder="Keyword"
                    prop:value=move || keyword.get()
                    on:input=move |ev| keyword.set(event_target_value(&ev))
                />
            </div>

            <MenuPositionEditor
                handle=header
                pages=pages
                loaded=loaded
                parent_page_id=parent_page_id
                current_keyword=current_keyword
                enabled=header_enabled
                position=header_position
                on_enabled_change=Callback::new(move |v: bool| {
                    header_enabled.set(v);
                    // A disabled menu forgets the live position it echoed
                    if !v { header_position.set(None); }
                })
                on_position_change=Callback::new(move |p: i32| header_position.set(Some(p)))
            />

            <MenuPositionEditor
                handle=footer
                pages=pages
                loaded=loaded
                parent_page_id=parent_page_id
                current_keyword=current_keyword
                enabled=footer_enabled
                position=footer_position
                on_enabled_change=Callback::new(move |v: bool| {
                    footer_enabled.set(v);
                    // A disabled menu forgets the live position it echoed
                    if !v { footer_position.set(None); }
                })
                on_position_change=Callback::new(move |p: i32| footer_position.set(Some(p)))
            />

            <div class="page-form-actions">
                <button type="submit" prop:disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </button>
                {move || matches!(ctx.form_mode.get(), FormMode::Edit(_)).then(|| view! {
                    <button type="button" class="cancel-btn" on:click=move |_| ctx.create_under(None)>
                        "New page"
                    </button>
                })}
            </div>

            {move || status.get().map(|msg| view! { <p class="form-status">{msg}</p> })}
        </form>
    }
}
