//! Menu Item Model
//!
//! Derives the ordered candidate list for one menu from the page collection
//! and folds in the page being created or edited.

use crate::config::PositionerConfig;
use crate::models::{MenuType, Page};
use crate::position::position_at_index;

/// Identity of a menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuItemId {
    /// Persisted page
    Page(u32),
    /// Page not saved yet
    Pending,
}

/// One entry in a positioned menu
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub keyword: String,
    pub position: i32,
    /// The page being created/edited; the only movable entry
    pub is_new: bool,
}

impl MenuItem {
    /// Tie-breaker for equal positions
    fn id_order(&self) -> u32 {
        match self.id {
            MenuItemId::Page(id) => id,
            MenuItemId::Pending => u32::MAX,
        }
    }
}

/// Everything the list is derived from
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuItemsInput {
    pub pages: Vec<Page>,
    /// Only children of this page are candidates; None means root pages
    pub parent_page_id: Option<u32>,
    pub current_keyword: Option<String>,
    pub enabled: bool,
    pub position: Option<i32>,
}

impl MenuItemsInput {
    fn current_keyword(&self) -> Option<&str> {
        self.current_keyword.as_deref().filter(|k| !k.is_empty())
    }
}

/// Siblings listed in `menu_type`, sorted by position
pub fn menu_candidates(pages: &[Page], menu_type: MenuType, parent_page_id: Option<u32>) -> Vec<MenuItem> {
    let mut candidates: Vec<MenuItem> = pages
        .iter()
        .filter(|page| page.parent == parent_page_id)
        .filter_map(|page| {
            menu_type.position_of(page).map(|position| MenuItem {
                id: MenuItemId::Page(page.id),
                keyword: page.keyword.clone(),
                position,
                is_new: false,
            })
        })
        .collect();
    candidates.sort_by_key(|item| (item.position, item.id_order()));
    candidates
}

/// Ordered list for `menu_type` with the in-progress page folded in.
///
/// `dropped_index` is where the user last dropped the in-progress page, as
/// an index into the list without that page.
pub fn build_menu_items(
    input: &MenuItemsInput,
    menu_type: MenuType,
    dropped_index: Option<usize>,
    config: &PositionerConfig,
) -> Vec<MenuItem> {
    let mut items = menu_candidates(&input.pages, menu_type, input.parent_page_id);

    let Some(keyword) = input.current_keyword() else {
        return items;
    };
    let existing = items.iter().position(|item| item.keyword == keyword);

    if !input.enabled {
        if let Some(index) = existing {
            items.remove(index);
        }
        return items;
    }

    let (mut current, natural_index) = match existing {
        // Edit mode: take the page out and put it back where it belongs
        Some(index) => {
            let mut item = items.remove(index);
            item.is_new = true;
            (item, Some(index))
        }
        None => {
            let item = MenuItem {
                id: MenuItemId::Pending,
                keyword: keyword.to_string(),
                position: 0,
                is_new: true,
            };
            (item, None)
        }
    };

    let index = match (dropped_index, input.position) {
        (Some(dropped), _) => {
            let index = dropped.min(items.len());
            current.position = position_at_index(&items, index, config);
            index
        }
        (None, Some(position)) => {
            current.position = position;
            items.partition_point(|item| item.position <= position)
        }
        (None, None) => match natural_index {
            Some(index) => index,
            None => {
                current.position = position_at_index(&items, items.len(), config);
                items.len()
            }
        },
    };
    items.insert(index, current);
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(id: u32, keyword: &str, parent: Option<u32>, nav: Option<i32>, footer: Option<i32>) -> Page {
        Page {
            id,
            keyword: keyword.to_string(),
            parent,
            nav_position: nav,
            footer_position: footer,
        }
    }

    fn abc() -> Vec<Page> {
        vec![
            page(1, "a", None, Some(10), None),
            page(2, "b", None, Some(20), Some(5)),
            page(3, "c", None, Some(30), None),
        ]
    }

    fn input(keyword: Option<&str>, enabled: bool) -> MenuItemsInput {
        MenuItemsInput {
            pages: abc(),
            parent_page_id: None,
            current_keyword: keyword.map(str::to_string),
            enabled,
            position: None,
        }
    }

    fn keywords(items: &[MenuItem]) -> Vec<&str> {
        items.iter().map(|i| i.keyword.as_str()).collect()
    }

    #[test]
    fn test_filters_by_menu_and_sorts() {
        let mut pages = abc();
        pages.push(page(4, "z", None, Some(-5), None));

        let header = menu_candidates(&pages, MenuType::Header, None);
        assert_eq!(keywords(&header), vec!["z", "a", "b", "c"]);

        let footer = menu_candidates(&pages, MenuType::Footer, None);
        assert_eq!(keywords(&footer), vec!["b"]);
    }

    #[test]
    fn test_child_context_filtering() {
        let pages = vec![
            page(1, "root-a", None, Some(1), None),
            page(2, "kid-b", Some(7), Some(20), None),
            page(3, "other", Some(8), Some(5), None),
            page(4, "kid-a", Some(7), Some(10), None),
            page(5, "kid-hidden", Some(7), None, None),
        ];
        let items = menu_candidates(&pages, MenuType::Header, Some(7));
        assert_eq!(keywords(&items), vec!["kid-a", "kid-b"]);
    }

    #[test]
    fn test_create_mode_appends_after_last() {
        let items = build_menu_items(&input(Some("new"), true), MenuType::Header, None, &PositionerConfig::default());
        assert_eq!(keywords(&items), vec!["a", "b", "c", "new"]);
        let last = items.last().unwrap();
        assert_eq!(last.id, MenuItemId::Pending);
        assert_eq!(last.position, 40);
        assert!(last.is_new);
    }

    #[test]
    fn test_create_mode_empty_menu_starts_at_spacing() {
        let mut inp = input(Some("new"), true);
        inp.pages.clear();
        let items = build_menu_items(&inp, MenuType::Header, None, &PositionerConfig::default());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].position, 10);
    }

    #[test]
    fn test_create_mode_after_max_position_saturates() {
        let mut inp = input(Some("new"), true);
        inp.pages = vec![page(1, "top", None, Some(i32::MAX), None)];
        let items = build_menu_items(&inp, MenuType::Header, None, &PositionerConfig::default());
        assert_eq!(keywords(&items), vec!["top", "new"]);
        assert_eq!(items[1].position, i32::MAX);

        inp.pages = vec![page(1, "bottom", None, Some(i32::MIN + 3), None)];
        let items = build_menu_items(&inp, MenuType::Header, Some(0), &PositionerConfig::default());
        assert_eq!(keywords(&items), vec!["new", "bottom"]);
        assert_eq!(items[0].position, i32::MIN);
    }

    #[test]
    fn test_disabled_omits_current_page() {
        let items = build_menu_items(&input(Some("new"), false), MenuType::Header, None, &PositionerConfig::default());
        assert_eq!(keywords(&items), vec!["a", "b", "c"]);

        let items = build_menu_items(&input(Some("b"), false), MenuType::Header, None, &PositionerConfig::default());
        assert_eq!(keywords(&items), vec!["a", "c"]);
    }

    #[test]
    fn test_edit_mode_does_not_duplicate() {
        let items = build_menu_items(&input(Some("b"), true), MenuType::Header, None, &PositionerConfig::default());
        assert_eq!(items.len(), 3);
        assert_eq!(keywords(&items), vec!["a", "b", "c"]);
        assert_eq!(items.iter().filter(|i| i.is_new).count(), 1);
        assert!(items[1].is_new);
        assert_eq!(items[1].position, 20);
        assert_eq!(items[1].id, MenuItemId::Page(2));
    }

    #[test]
    fn test_dropped_index_places_current_page() {
        let items = build_menu_items(&input(Some("new"), true), MenuType::Header, Some(1), &PositionerConfig::default());
        assert_eq!(keywords(&items), vec!["a", "new", "b", "c"]);
        assert_eq!(items[1].position, 15);

        let items = build_menu_items(&input(Some("c"), true), MenuType::Header, Some(0), &PositionerConfig::default());
        assert_eq!(keywords(&items), vec!["c", "a", "b"]);
        assert_eq!(items[0].position, 0);
    }

    #[test]
    fn test_host_position_is_respected() {
        let mut inp = input(Some("new"), true);
        inp.position = Some(25);
        let items = build_menu_items(&inp, MenuType::Header, None, &PositionerConfig::default());
        assert_eq!(keywords(&items), vec!["a", "b", "new", "c"]);
    }

    #[test]
    fn test_rederivation_is_structurally_equal() {
        let inp = input(Some("new"), true);
        let cfg = PositionerConfig::default();
        let first = build_menu_items(&inp, MenuType::Header, Some(2), &cfg);
        let second = build_menu_items(&inp.clone(), MenuType::Header, Some(2), &cfg);
        assert_eq!(first, second);
    }
}
