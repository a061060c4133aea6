//! Menu Position Editor Component
//!
//! Lists one menu's pages and lets the user drag the page being
//! created/edited between them. Uses leptos-dragdrop for the drag session.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::MenuItemRow;
use crate::config::PositionerConfig;
use crate::error::PositionError;
use crate::menu_items::{MenuItemId, MenuItemsInput};
use crate::models::{MenuType, Page};
use crate::positioner::{Direction, MenuPositioner};

use leptos_dragdrop::*;

/// Host-side handle to one positioner.
///
/// The host creates it, passes it to [`MenuPositionEditor`], and queries
/// [`PositionHandle::final_position`] once when submitting.
#[derive(Clone, Copy)]
pub struct PositionHandle {
    state: RwSignal<MenuPositioner>,
}

impl PositionHandle {
    pub fn new(menu_type: MenuType, config: PositionerConfig) -> Self {
        Self {
            state: RwSignal::new(MenuPositioner::new(menu_type, config)),
        }
    }

    pub fn menu_type(&self) -> MenuType {
        self.state.with_untracked(|p| p.menu_type())
    }

    /// Position to submit for the current page, None if it is not in this menu
    pub fn final_position(&self) -> Option<i32> {
        self.state.with_untracked(|p| p.final_position())
    }

    /// Forget drops from a previous form session
    pub fn reset(&self) {
        self.state.maybe_update(|p| p.reset_drop());
    }
}

/// Drag-and-drop menu position editor
#[component]
pub fn MenuPositionEditor(
    handle: PositionHandle,
    #[prop(into)] pages: Signal<Vec<Page>>,
    #[prop(into)] loaded: Signal<bool>,
    /// Only children of this page are listed (None = root pages)
    #[prop(into)] parent_page_id: Signal<Option<u32>>,
    #[prop(into)] current_keyword: Signal<Option<String>>,
    #[prop(into)] enabled: Signal<bool>,
    #[prop(into)] position: Signal<Option<i32>>,
    on_enabled_change: Callback<bool>,
    /// Fired with the live position after every move
    on_position_change: Callback<i32>,
) -> impl IntoView {
    let state = handle.state;
    let menu_type = handle.menu_type();
    let config = state.with_untracked(|p| p.config());

    // Fold host inputs in; subscribers only hear about it if the list changed
    Effect::new(move |_| {
        let input = MenuItemsInput {
            pages: pages.get(),
            parent_page_id: parent_page_id.get(),
            current_keyword: current_keyword.get(),
            enabled: enabled.get(),
            position: position.get(),
        };
        state.maybe_update(|p| p.set_input(input));
    });

    let items = Memo::new(move |_| state.with(|p| p.items().to_vec()));
    let list_ref = NodeRef::<Div>::new();

    // Create DnD signals
    let dnd = create_dnd_signals::<MenuItemId>(config.drag_threshold_px);
    bind_drag_handlers(dnd, move |ev: DropEvent<MenuItemId>| {
        let mut result = Err(PositionError::NoCurrentItem);
        state.maybe_update(|p| {
            result = p.apply_drop(ev.dragged, ev.target, Some(ev.edge));
            result.is_ok()
        });
        match result {
            Ok(position) => {
                log::debug!("[DND] {:?} live position {}", menu_type, position);
                on_position_change.run(position);
            }
            Err(e) => log::warn!("[DND] Drop ignored: {}", e),
        }
    });
    bind_auto_scroll(dnd, list_ref, config.auto_scroll_margin_px, config.auto_scroll_step_px);

    let can_drop = Callback::new(move |(dragged, target): (MenuItemId, MenuItemId)| {
        state.with_untracked(|p| p.can_drop(dragged, target))
    });

    let on_nudge = Callback::new(move |direction: Direction| {
        let mut result = Err(PositionError::NoCurrentItem);
        state.maybe_update(|p| {
            result = p.nudge(direction);
            result.is_ok()
        });
        if let Ok(position) = result {
            on_position_change.run(position);
            // The moved row is re-created; give focus back once it is rendered
            request_animation_frame(move || focus_current_row(list_ref));
        }
    });

    view! {
        <div class="menu-position-editor">
            <label class="menu-toggle">
                <input
                    type="checkbox"
                    prop:checked=move || enabled.get()
                    on:change=move |ev| on_enabled_change.run(event_target_checked(&ev))
                />
                {menu_type.label()}
            </label>

            {move || if !enabled.get() {
                view! { <div></div> }.into_any()
            } else if !loaded.get() {
                view! { <div class="menu-loading">"Loading pages..."</div> }.into_any()
            } else {
                view! {
                    <div
                        class=move || if dnd.is_dragging() { "menu-items dragging-active" } else { "menu-items" }
                        node_ref=list_ref
                    >
                        <For
                            each=move || items.get()
                            key=|item| (item.id, item.position, item.keyword.clone(), item.is_new)
                            children=move |item| {
                                view! {
                                    <MenuItemRow
                                        item=item
                                        dnd=dnd
                                        can_drop=can_drop
                                        on_nudge=on_nudge
                                    />
                                }
                            }
                        />
                    </div>
                }.into_any()
            }}
        </div>
    }
}

fn focus_current_row(list_ref: NodeRef<Div>) {
    let row = list_ref
        .get_untracked()
        .and_then(|list| list.query_selector(".menu-item.new").ok().flatten())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(row) = row {
        let _ = row.focus();
    }
}
