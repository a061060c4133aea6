//! Leptos DragDrop Utilities
//!
//! Edge-aware drag-and-drop for ordered Leptos lists using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! The session itself ([`DragSession`]) is plain data so the lifecycle
//! can be exercised without a DOM; the `make_on_*` / `bind_*` helpers
//! only translate browser events into session updates.

use std::fmt::Debug;
use std::time::Duration;

use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Keys usable as drag sources and drop targets
pub trait DragKey: Copy + PartialEq + Debug + Send + Sync + 'static {}

impl<T: Copy + PartialEq + Debug + Send + Sync + 'static> DragKey for T {}

/// Side of a drop target the pointer is closest to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// Top half of the box maps to `Top`, bottom half (midline included) to `Bottom`
pub fn closest_edge(pointer_y: f64, rect_top: f64, rect_height: f64) -> Edge {
    if pointer_y - rect_top < rect_height / 2.0 {
        Edge::Top
    } else {
        Edge::Bottom
    }
}

/// A completed drop: what was dragged, where it landed, on which side
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropEvent<K> {
    pub dragged: K,
    pub target: K,
    pub edge: Edge,
}

/// Ephemeral state of one active drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession<K> {
    pub dragged: K,
    pub hovered: Option<K>,
    pub closest_edge: Option<Edge>,
}

impl<K: DragKey> DragSession<K> {
    pub fn new(dragged: K) -> Self {
        Self {
            dragged,
            hovered: None,
            closest_edge: None,
        }
    }

    /// Record the hovered target and edge. Returns true if anything changed.
    pub fn hover(&mut self, target: K, edge: Edge) -> bool {
        if self.hovered == Some(target) && self.closest_edge == Some(edge) {
            return false;
        }
        self.hovered = Some(target);
        self.closest_edge = Some(edge);
        true
    }

    /// Forget the hovered target if it is `target`. Returns true if cleared.
    pub fn leave(&mut self, target: K) -> bool {
        if self.hovered != Some(target) {
            return false;
        }
        self.hovered = None;
        self.closest_edge = None;
        true
    }

    /// Edge indicator to draw on `key`, if it is the hovered target
    pub fn edge_for(&self, key: K) -> Option<Edge> {
        if self.hovered == Some(key) {
            self.closest_edge
        } else {
            None
        }
    }

    /// Snapshot of the drop, or None when there is nothing valid to drop on
    pub fn drop_event(&self) -> Option<DropEvent<K>> {
        let target = self.hovered?;
        let edge = self.closest_edge?;
        if target == self.dragged {
            return None;
        }
        Some(DropEvent {
            dragged: self.dragged,
            target,
            edge,
        })
    }
}

/// Mouse press that may turn into a drag
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Press<K> {
    pub key: K,
    pub start_x: i32,
    pub start_y: i32,
}

impl<K: DragKey> Press<K> {
    pub fn exceeds_threshold(&self, x: i32, y: i32, threshold_px: i32) -> bool {
        let dx = (x - self.start_x).abs();
        let dy = (y - self.start_y).abs();
        dx > threshold_px || dy > threshold_px
    }
}

/// Scroll step for a pointer at `pointer_y` over a container spanning `top..bottom`
pub fn auto_scroll_delta(pointer_y: f64, top: f64, bottom: f64, margin: f64, step: f64) -> f64 {
    if pointer_y < top + margin {
        -step
    } else if pointer_y > bottom - margin {
        step
    } else {
        0.0
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals<K: DragKey> {
    /// Active drag, None when idle
    pub session: RwSignal<Option<DragSession<K>>>,
    /// Pending press (mousedown but not yet dragging)
    pub pending: RwSignal<Option<Press<K>>>,
    /// Last pointer y seen while dragging
    pub pointer_y: RwSignal<Option<f64>>,
    /// Movement threshold in pixels to start dragging
    pub threshold_px: i32,
}

impl<K: DragKey> DndSignals<K> {
    pub fn is_dragging(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn is_dragged(&self, key: K) -> bool {
        self.session.with(|s| matches!(s, Some(s) if s.dragged == key))
    }

    pub fn edge_for(&self, key: K) -> Option<Edge> {
        self.session.with(|s| s.as_ref().and_then(|s| s.edge_for(key)))
    }
}

pub fn create_dnd_signals<K: DragKey>(threshold_px: i32) -> DndSignals<K> {
    DndSignals {
        session: RwSignal::new(None),
        pending: RwSignal::new(None),
        pointer_y: RwSignal::new(None),
        threshold_px,
    }
}

/// End drag operation
pub fn end_drag<K: DragKey>(dnd: &DndSignals<K>) {
    dnd.session.set(None);
    dnd.pending.set(None);
    dnd.pointer_y.set(None);
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<K: DragKey>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        ev.prevent_default();
        dnd.pending.set(Some(Press {
            key,
            start_x: ev.client_x(),
            start_y: ev.client_y(),
        }));
    }
}

/// Create mousemove handler for drop targets.
/// Tracks the closest edge; targets rejected by `can_drop` never become hovered.
pub fn make_on_item_mousemove<K, C>(dnd: DndSignals<K>, key: K, can_drop: C) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: DragKey,
    C: Fn(&K, &K) -> bool + Copy + 'static,
{
    move |ev: web_sys::MouseEvent| {
        let Some(dragged) = dnd.session.with_untracked(|s| s.map(|s| s.dragged)) else {
            return;
        };
        if !can_drop(&dragged, &key) {
            dnd.session.maybe_update(|s| s.as_mut().is_some_and(|s| s.leave(key)));
            return;
        }
        let Some(el) = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let edge = closest_edge(ev.client_y() as f64, rect.top(), rect.height());
        dnd.session.maybe_update(|s| s.as_mut().is_some_and(|s| s.hover(key, edge)));
    }
}

/// Create mouseleave handler for drop targets
pub fn make_on_mouseleave<K: DragKey>(dnd: DndSignals<K>, key: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        dnd.session.maybe_update(|s| s.as_mut().is_some_and(|s| s.leave(key)));
    }
}

/// Bind window handlers for the drag lifecycle: threshold start on mousemove,
/// drop on mouseup, cancel on Escape. Handlers are removed when the owner is
/// cleaned up.
pub fn bind_drag_handlers<K, F>(dnd: DndSignals<K>, on_drop: F)
where
    K: DragKey,
    F: Fn(DropEvent<K>) + 'static,
{
    let move_handle = window_event_listener(ev::mousemove, move |ev: web_sys::MouseEvent| {
        if dnd.session.with_untracked(|s| s.is_some()) {
            dnd.pointer_y.set(Some(ev.client_y() as f64));
            return;
        }
        let Some(press) = dnd.pending.get_untracked() else {
            return;
        };
        // Start dragging if moved beyond threshold
        if press.exceeds_threshold(ev.client_x(), ev.client_y(), dnd.threshold_px) {
            log::debug!("[DND] Drag start: {:?}", press.key);
            dnd.session.set(Some(DragSession::new(press.key)));
            dnd.pointer_y.set(Some(ev.client_y() as f64));
        }
    });

    let up_handle = window_event_listener(ev::mouseup, move |_ev: web_sys::MouseEvent| {
        let dropped = dnd.session.with_untracked(|s| s.as_ref().and_then(|s| s.drop_event()));
        let was_dragging = dnd.session.with_untracked(|s| s.is_some());
        end_drag(&dnd);

        match dropped {
            Some(event) => {
                log::debug!("[DND] Drop: {:?}", event);
                on_drop(event);
            }
            // Not dragging - click event will fire naturally on the element
            None if was_dragging => log::debug!("[DND] Drop outside any target, ignored"),
            None => {}
        }
    });

    let key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && dnd.session.with_untracked(|s| s.is_some()) {
            log::debug!("[DND] Drag cancelled");
            end_drag(&dnd);
        }
    });

    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
        key_handle.remove();
    });
}

/// Scroll `container` while a drag hovers near its top or bottom margin
pub fn bind_auto_scroll<K: DragKey>(dnd: DndSignals<K>, container: NodeRef<Div>, margin_px: f64, step_px: f64) {
    let tick = move || {
        if !dnd.session.with_untracked(|s| s.is_some()) {
            return;
        }
        let Some(pointer_y) = dnd.pointer_y.get_untracked() else {
            return;
        };
        let Some(el) = container.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let delta = auto_scroll_delta(pointer_y, rect.top(), rect.bottom(), margin_px, step_px);
        if delta != 0.0 {
            el.scroll_by_with_x_and_y(0.0, delta);
        }
    };

    match set_interval_with_handle(tick, Duration::from_millis(16)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::warn!("[DND] Auto-scroll unavailable: {:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closest_edge_halves() {
        // Box from y=100 to y=140
        assert_eq!(closest_edge(101.0, 100.0, 40.0), Edge::Top);
        assert_eq!(closest_edge(119.0, 100.0, 40.0), Edge::Top);
        assert_eq!(closest_edge(120.0, 100.0, 40.0), Edge::Bottom);
        assert_eq!(closest_edge(139.0, 100.0, 40.0), Edge::Bottom);
    }

    #[test]
    fn test_session_hover_last_write_wins() {
        let mut session = DragSession::new(1u32);
        assert!(session.hover(2, Edge::Top));
        assert!(!session.hover(2, Edge::Top));
        assert!(session.hover(3, Edge::Bottom));

        assert_eq!(session.edge_for(2), None);
        assert_eq!(session.edge_for(3), Some(Edge::Bottom));
        assert_eq!(
            session.drop_event(),
            Some(DropEvent { dragged: 1, target: 3, edge: Edge::Bottom })
        );
    }

    #[test]
    fn test_session_leave_only_clears_own_target() {
        let mut session = DragSession::new(1u32);
        session.hover(2, Edge::Top);

        assert!(!session.leave(3));
        assert_eq!(session.hovered, Some(2));

        assert!(session.leave(2));
        assert_eq!(session.hovered, None);
        assert_eq!(session.closest_edge, None);
        assert_eq!(session.drop_event(), None);
    }

    #[test]
    fn test_self_drop_yields_no_event() {
        let mut session = DragSession::new(7u32);
        session.hover(7, Edge::Bottom);
        assert_eq!(session.drop_event(), None);
    }

    #[test]
    fn test_press_threshold() {
        let press = Press { key: 1u32, start_x: 10, start_y: 10 };
        assert!(!press.exceeds_threshold(15, 15, 5));
        assert!(press.exceeds_threshold(16, 10, 5));
        assert!(press.exceeds_threshold(10, 4, 5));
    }

    #[test]
    fn test_auto_scroll_delta() {
        // Container from y=0 to y=300, 40px margin, 12px step
        assert_eq!(auto_scroll_delta(10.0, 0.0, 300.0, 40.0, 12.0), -12.0);
        assert_eq!(auto_scroll_delta(150.0, 0.0, 300.0, 40.0, 12.0), 0.0);
        assert_eq!(auto_scroll_delta(290.0, 0.0, 300.0, 40.0, 12.0), 12.0);
    }
}
