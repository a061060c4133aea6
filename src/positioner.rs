//! Menu Positioner State
//!
//! Owns the derived menu list for one menu type while the editor is
//! mounted, applies drops, and answers the final-position query the host
//! form makes on submit.

use crate::config::PositionerConfig;
use crate::error::PositionError;
use crate::menu_items::{build_menu_items, MenuItem, MenuItemId, MenuItemsInput};
use crate::models::MenuType;
use crate::position::{resolve_final_position, resolve_position, Edge};

/// Keyboard move direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuPositioner {
    menu_type: MenuType,
    config: PositionerConfig,
    input: MenuItemsInput,
    /// Where the user last dropped the current page, without that page counted
    dropped_index: Option<usize>,
    items: Vec<MenuItem>,
}

impl MenuPositioner {
    pub fn new(menu_type: MenuType, config: PositionerConfig) -> Self {
        Self {
            menu_type,
            config,
            input: MenuItemsInput::default(),
            dropped_index: None,
            items: Vec::new(),
        }
    }

    pub fn menu_type(&self) -> MenuType {
        self.menu_type
    }

    pub fn config(&self) -> PositionerConfig {
        self.config
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Replace the inputs. Returns true if the derived list changed.
    pub fn set_input(&mut self, input: MenuItemsInput) -> bool {
        if input == self.input {
            return false;
        }
        if !input.enabled {
            self.dropped_index = None;
        }
        self.input = input;
        self.rebuild()
    }

    /// Forget any drop made in this session. Returns true if the list changed.
    pub fn reset_drop(&mut self) -> bool {
        if self.dropped_index.take().is_none() {
            return false;
        }
        self.rebuild()
    }

    fn rebuild(&mut self) -> bool {
        let items = build_menu_items(&self.input, self.menu_type, self.dropped_index, &self.config);
        if items == self.items {
            return false;
        }
        self.items = items;
        true
    }

    pub fn current_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.is_new)
    }

    pub fn current_item(&self) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.is_new)
    }

    /// Whether `dragged` may be dropped on `target`
    pub fn can_drop(&self, dragged: MenuItemId, target: MenuItemId) -> bool {
        dragged != target
            && self.current_item().is_some_and(|item| item.id == dragged)
            && self.items.iter().any(|item| item.id == target)
    }

    /// Move the current page next to `target`. Returns the live position.
    pub fn apply_drop(
        &mut self,
        dragged: MenuItemId,
        target: MenuItemId,
        edge: Option<Edge>,
    ) -> Result<i32, PositionError> {
        if self.current_item().map(|item| item.id) != Some(dragged) {
            return Err(PositionError::NotMovable(dragged));
        }
        if dragged == target {
            return Err(PositionError::TargetNotFound(target));
        }

        let others: Vec<MenuItem> = self.items.iter().filter(|item| item.id != dragged).cloned().collect();
        let position = resolve_position(&others, target, edge, &self.config)?;
        let target_index = others
            .iter()
            .position(|item| item.id == target)
            .ok_or(PositionError::TargetNotFound(target))?;
        let index = match edge {
            Some(Edge::Bottom) => target_index + 1,
            _ => target_index,
        };

        if let Some(collision) = others.iter().find(|item| item.position == position) {
            log::warn!(
                "[Positioner] {} {} collides with '{}'; menu gap is exhausted",
                self.menu_type.position_field(), position, collision.keyword
            );
        }

        self.dropped_index = Some(index);
        self.rebuild();
        Ok(position)
    }

    /// Keyboard equivalent of dropping on the neighbour's outer edge
    pub fn nudge(&mut self, direction: Direction) -> Result<i32, PositionError> {
        let index = self.current_index().ok_or(PositionError::NoCurrentItem)?;
        let dragged = self.items[index].id;
        let (neighbour, edge) = match direction {
            Direction::Up => (index.checked_sub(1), Edge::Top),
            Direction::Down => (Some(index + 1), Edge::Bottom),
        };
        let target = neighbour
            .and_then(|i| self.items.get(i))
            .map(|item| item.id)
            .ok_or(PositionError::NotMovable(dragged))?;
        self.apply_drop(dragged, target, Some(edge))
    }

    /// Position to persist, None when the page is not in this menu.
    ///
    /// A page that was never moved keeps its position; a moved page is
    /// resolved against its neighbours where it was last rendered.
    pub fn final_position(&self) -> Option<i32> {
        if !self.input.enabled {
            return None;
        }
        let index = self.current_index()?;
        if self.dropped_index.is_none() {
            return Some(self.items[index].position);
        }
        match resolve_final_position(&self.items, index, &self.config) {
            Ok(position) => Some(position),
            Err(e) => {
                log::warn!("[Positioner] {}", e);
                None
            }
        }
    }
}
