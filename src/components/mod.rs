//! UI Components
//!
//! Reusable Leptos components.

mod menu_item_row;
mod menu_position_editor;
mod page_form;
mod page_tree;

pub use menu_item_row::MenuItemRow;
pub use menu_position_editor::{MenuPositionEditor, PositionHandle};
pub use page_form::PageForm;
pub use page_tree::PageTree;
