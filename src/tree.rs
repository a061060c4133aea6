//! Tree Utilities
//!
//! Helper functions for page tree rendering.

use crate::models::Page;
use std::collections::{HashMap, HashSet};

/// Render pages as indented tree using recursive DFS
/// Returns (Page, depth) pairs in display order.
/// Pages whose parent is not loaded are shown at root level.
pub fn flatten_tree(pages: &[Page], collapsed: &HashSet<u32>) -> Vec<(Page, usize)> {
    let known: HashSet<u32> = pages.iter().map(|p| p.id).collect();

    // Build parent -> children map
    let mut children_map: HashMap<Option<u32>, Vec<&Page>> = HashMap::new();
    for page in pages {
        let parent = page.parent.filter(|pid| known.contains(pid));
        children_map.entry(parent).or_default().push(page);
    }

    // Header menu order first, unlisted pages after
    for children in children_map.values_mut() {
        children.sort_by_key(|p| (p.nav_position.unwrap_or(i32::MAX), p.id));
    }

    fn collect(
        parent: Option<u32>,
        depth: usize,
        children_map: &HashMap<Option<u32>, Vec<&Page>>,
        collapsed: &HashSet<u32>,
        result: &mut Vec<(Page, usize)>,
    ) {
        if let Some(children) = children_map.get(&parent) {
            for page in children {
                result.push(((*page).clone(), depth));
                if !collapsed.contains(&page.id) {
                    collect(Some(page.id), depth + 1, children_map, collapsed, result);
                }
            }
        }
    }

    let mut result = Vec::new();
    collect(None, 0, &children_map, collapsed, &mut result);
    result
}

/// Whether `page_id` has any child in `pages`
pub fn has_children(pages: &[Page], page_id: u32) -> bool {
    pages.iter().any(|p| p.parent == Some(page_id))
}
