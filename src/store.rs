//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Page;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// Page collection snapshot from the backend
    pub pages: Vec<Page>,
    /// Whether the first fetch has completed
    pub loaded: bool,
    /// Pages collapsed in the page tree
    pub collapsed: HashSet<u32>,
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the page snapshot after a fetch
pub fn store_set_pages(store: &AdminStore, pages: Vec<Page>) {
    store.pages().set(pages);
    store.loaded().set(true);
}

/// Insert or update a page by ID
pub fn store_upsert_page(store: &AdminStore, page: Page) {
    let pages = store.pages();
    let mut pages = pages.write();
    match pages.iter_mut().find(|p| p.id == page.id) {
        Some(existing) => *existing = page,
        None => pages.push(page),
    }
}

/// Toggle a page's collapsed state in the tree
pub fn store_toggle_collapsed(store: &AdminStore, page_id: u32) {
    let collapsed = store.collapsed();
    let mut collapsed = collapsed.write();
    if !collapsed.remove(&page_id) {
        collapsed.insert(page_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(id: u32, keyword: &str) -> Page {
        Page {
            id,
            keyword: keyword.to_string(),
            parent: None,
            nav_position: Some(id as i32 * 10),
            footer_position: None,
        }
    }

    #[test]
    fn test_upsert_and_toggle_collapsed() {
        let owner = Owner::new();
        owner.set();
        let store = Store::new(AdminState::default());

        store_set_pages(&store, vec![page(1, "a")]);
        assert!(store.loaded().get_untracked());

        store_upsert_page(&store, page(1, "renamed"));
        store_upsert_page(&store, page(2, "b"));
        let keywords: Vec<String> = store.pages().get_untracked().into_iter().map(|p| p.keyword).collect();
        assert_eq!(keywords, vec!["renamed", "b"]);

        store_toggle_collapsed(&store, 1);
        assert!(store.collapsed().get_untracked().contains(&1));
        store_toggle_collapsed(&store, 1);
        assert!(store.collapsed().get_untracked().is_empty());
    }
}
