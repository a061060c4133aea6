//! Menu Item Row Component
//!
//! One entry in the menu position editor.

use leptos::prelude::*;

use crate::menu_items::{MenuItem, MenuItemId};
use crate::positioner::Direction;

use leptos_dragdrop::*;

/// A single menu entry; only the in-progress page gets a drag handle
#[component]
pub fn MenuItemRow(
    item: MenuItem,
    dnd: DndSignals<MenuItemId>,
    can_drop: Callback<(MenuItemId, MenuItemId), bool>,
    on_nudge: Callback<Direction>,
) -> impl IntoView {
    let id = item.id;
    let is_new = item.is_new;

    // DnD handlers
    let on_mousemove = make_on_item_mousemove(dnd, id, move |dragged: &MenuItemId, target: &MenuItemId| {
        can_drop.run((*dragged, *target))
    });
    let on_mouseleave = make_on_mouseleave(dnd, id);

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if !is_new {
            return;
        }
        let direction = match ev.key().as_str() {
            "ArrowUp" => Direction::Up,
            "ArrowDown" => Direction::Down,
            _ => return,
        };
        ev.prevent_default();
        on_nudge.run(direction);
    };

    // Visual state
    let row_class = move || {
        let mut c = String::from("menu-item");
        if is_new { c.push_str(" new"); }
        if dnd.is_dragged(id) { c.push_str(" dragging"); }
        match dnd.edge_for(id) {
            Some(Edge::Top) => c.push_str(" drop-top"),
            Some(Edge::Bottom) => c.push_str(" drop-bottom"),
            None => {}
        }
        c
    };

    view! {
        <div
            class=row_class
            tabindex={if is_new { "0" } else { "-1" }}
            on:mousemove=on_mousemove
            on:mouseleave=on_mouseleave
            on:keydown=on_keydown
        >
            {is_new.then(|| view! {
                <span
                    class="drag-handle"
                    title="Drag, or use the arrow keys"
                    on:mousedown=make_on_mousedown(dnd, id)
                >
                    "⠿"
                </span>
            })}
            <span class="menu-item-keyword">{item.keyword}</span>
            <span class="menu-item-position">{item.position}</span>
        </div>
    }
}
