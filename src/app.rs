//! CMS Admin App
//!
//! Main application component with page tree and page form columns.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{PageForm, PageTree};
use crate::config::AdminConfig;
use crate::context::{AppContext, FormMode};
use crate::store::{store_set_pages, AdminState};

#[component]
pub fn App(config: AdminConfig) -> impl IntoView {
    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (form_mode, set_form_mode) = signal(FormMode::default());

    // Provide context to all children
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), (form_mode, set_form_mode), config);
    provide_context(ctx);

    let store = Store::new(AdminState::default());
    provide_context(store);

    // Load pages on mount and whenever a reload is triggered
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let api_base = ctx.api_base();
        log::debug!("[APP] Loading pages, trigger={}", trigger);
        spawn_local(async move {
            match commands::list_pages(&api_base).await {
                Ok(pages) => {
                    log::debug!("[APP] Loaded {} pages", pages.len());
                    store_set_pages(&store, pages);
                }
                Err(e) => log::error!("[APP] Failed to load pages: {}", e),
            }
        });
    });

    view! {
        <div class="app-layout">
            // Left: Page tree
            <PageTree />

            // Center: Page form
            <main class="main-content">
                <h1>"Pages"</h1>
                <PageForm />
            </main>
        </div>
    }
}
