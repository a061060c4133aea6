//! Menu Position Resolver
//!
//! Sparse integer placement: a moved item gets a number between its new
//! neighbours so that siblings never need renumbering. Gaps are split in
//! half while they are wider than `min_split_gap`; past that the item is
//! placed right after the lower neighbour, which may collide with the
//! upper one.

pub use leptos_dragdrop::Edge;

use crate::config::PositionerConfig;
use crate::error::PositionError;
use crate::menu_items::{MenuItem, MenuItemId};

/// Positions saturate at the ends of the `i32` range
fn clamp_position(position: i64) -> i32 {
    i32::try_from(position).unwrap_or(if position < 0 { i32::MIN } else { i32::MAX })
}

fn offset(position: i32, delta: i32) -> i32 {
    clamp_position(i64::from(position) + i64::from(delta))
}

/// Position strictly after `lower` and, while room remains, strictly before `upper`
fn split_gap(lower: i32, upper: i32, config: &PositionerConfig) -> i32 {
    let (lower, upper) = (i64::from(lower), i64::from(upper));
    if upper - lower > i64::from(config.min_split_gap) {
        clamp_position((lower + upper).div_euclid(2))
    } else {
        clamp_position(lower + 1)
    }
}

/// Position for dropping on `edge` of `target`.
///
/// `items` must be sorted by position and must not contain the dragged item.
pub fn resolve_position(
    items: &[MenuItem],
    target: MenuItemId,
    edge: Option<Edge>,
    config: &PositionerConfig,
) -> Result<i32, PositionError> {
    let edge = edge.ok_or(PositionError::MissingEdge)?;
    let index = items
        .iter()
        .position(|item| item.id == target)
        .ok_or(PositionError::TargetNotFound(target))?;
    let target_pos = items[index].position;

    let position = match edge {
        Edge::Top if index == 0 => offset(target_pos, -config.spacing),
        Edge::Top => split_gap(items[index - 1].position, target_pos, config),
        Edge::Bottom if index + 1 == items.len() => offset(target_pos, config.spacing),
        Edge::Bottom => split_gap(target_pos, items[index + 1].position, config),
    };
    Ok(position)
}

/// Position for an item inserted at `index` of `items` (sorted, without the item).
/// An index past the end appends.
pub fn position_at_index(items: &[MenuItem], index: usize, config: &PositionerConfig) -> i32 {
    let index = index.min(items.len());
    match (index.checked_sub(1).and_then(|i| items.get(i)), items.get(index)) {
        (None, None) => config.spacing,
        (None, Some(next)) => offset(next.position, -config.spacing),
        (Some(prev), None) => offset(prev.position, config.spacing),
        (Some(prev), Some(next)) => split_gap(prev.position, next.position, config),
    }
}

/// Position to submit for the in-progress item when it sits at `target_index`.
///
/// The item is taken out of `items` and spliced back at `target_index`; the
/// result is computed against its neighbours there, so it matches whatever
/// order was last rendered.
pub fn resolve_final_position(
    items: &[MenuItem],
    target_index: usize,
    config: &PositionerConfig,
) -> Result<i32, PositionError> {
    let current = items
        .iter()
        .position(|item| item.is_new)
        .ok_or(PositionError::NoCurrentItem)?;

    let mut others = items.to_vec();
    others.remove(current);

    Ok(position_at_index(&others, target_index, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(positions: &[i32]) -> Vec<MenuItem> {
        positions
            .iter()
            .enumerate()
            .map(|(i, &position)| MenuItem {
                id: MenuItemId::Page(i as u32 + 1),
                keyword: format!("p{}", i + 1),
                position,
                is_new: false,
            })
            .collect()
    }

    fn cfg() -> PositionerConfig {
        PositionerConfig::default()
    }

    #[test]
    fn test_boundary_extension() {
        let list = items(&[10, 20, 30]);
        assert_eq!(resolve_position(&list, MenuItemId::Page(1), Some(Edge::Top), &cfg()), Ok(0));
        assert_eq!(resolve_position(&list, MenuItemId::Page(3), Some(Edge::Bottom), &cfg()), Ok(40));
    }

    #[test]
    fn test_single_item_both_edges() {
        let list = items(&[-3]);
        assert_eq!(resolve_position(&list, MenuItemId::Page(1), Some(Edge::Top), &cfg()), Ok(-13));
        assert_eq!(resolve_position(&list, MenuItemId::Page(1), Some(Edge::Bottom), &cfg()), Ok(7));
    }

    #[test]
    fn test_gap_splitting() {
        let list = items(&[0, 10]);
        assert_eq!(resolve_position(&list, MenuItemId::Page(1), Some(Edge::Bottom), &cfg()), Ok(5));
        assert_eq!(resolve_position(&list, MenuItemId::Page(2), Some(Edge::Top), &cfg()), Ok(5));
    }

    #[test]
    fn test_negative_midpoint_rounds_down() {
        let list = items(&[-10, -5]);
        assert_eq!(resolve_position(&list, MenuItemId::Page(2), Some(Edge::Top), &cfg()), Ok(-8));
    }

    #[test]
    fn test_gap_exhaustion_fallback() {
        let list = items(&[5, 6]);
        assert_eq!(resolve_position(&list, MenuItemId::Page(1), Some(Edge::Bottom), &cfg()), Ok(6));
        assert_eq!(resolve_position(&list, MenuItemId::Page(2), Some(Edge::Top), &cfg()), Ok(6));

        // Gap of exactly 2 is not split but still fits strictly between
        let list = items(&[5, 7]);
        assert_eq!(resolve_position(&list, MenuItemId::Page(2), Some(Edge::Top), &cfg()), Ok(6));
    }

    #[test]
    fn test_three_inserts_fit_in_default_gap() {
        let mut lower = 10;
        let upper = 20;
        let mut placed = Vec::new();
        for _ in 0..3 {
            let list = items(&[lower, upper]);
            let p = resolve_position(&list, MenuItemId::Page(2), Some(Edge::Top), &cfg()).unwrap();
            assert!(lower < p && p < upper);
            placed.push(p);
            lower = p;
        }
        assert_eq!(placed, vec![15, 17, 18]);
    }

    #[test]
    fn test_sort_invariant_holds_while_gaps_allow() {
        let lists: &[&[i32]] = &[
            &[0],
            &[0, 10],
            &[-20, -10, 0, 10],
            &[1, 3, 5, 7],
            &[10, 20, 25, 40, 100],
        ];
        for positions in lists {
            let list = items(positions);
            for target in &list {
                for edge in [Edge::Top, Edge::Bottom] {
                    let p = resolve_position(&list, target.id, Some(edge), &cfg()).unwrap();
                    let index = list.iter().position(|i| i.id == target.id).unwrap();
                    let insert_at = if edge == Edge::Top { index } else { index + 1 };

                    let mut result: Vec<i32> = positions.to_vec();
                    result.insert(insert_at, p);
                    assert!(
                        result.windows(2).all(|w| w[0] < w[1]),
                        "{:?} on {:?} of {} gave {:?}",
                        edge, positions, target.position, result
                    );
                }
            }
        }
    }

    #[test]
    fn test_extreme_positions_saturate() {
        let list = items(&[i32::MIN + 3]);
        assert_eq!(resolve_position(&list, MenuItemId::Page(1), Some(Edge::Top), &cfg()), Ok(i32::MIN));

        let list = items(&[i32::MAX - 3]);
        assert_eq!(resolve_position(&list, MenuItemId::Page(1), Some(Edge::Bottom), &cfg()), Ok(i32::MAX));

        let list = items(&[i32::MAX, i32::MAX]);
        assert_eq!(resolve_position(&list, MenuItemId::Page(1), Some(Edge::Bottom), &cfg()), Ok(i32::MAX));

        let list = items(&[i32::MIN, i32::MAX]);
        assert_eq!(resolve_position(&list, MenuItemId::Page(1), Some(Edge::Bottom), &cfg()), Ok(-1));

        assert_eq!(position_at_index(&items(&[i32::MAX]), 1, &cfg()), i32::MAX);
        assert_eq!(position_at_index(&items(&[i32::MIN]), 0, &cfg()), i32::MIN);
    }

    #[test]
    fn test_missing_edge_and_target() {
        let list = items(&[10, 20]);
        assert_eq!(
            resolve_position(&list, MenuItemId::Page(1), None, &cfg()),
            Err(PositionError::MissingEdge)
        );
        assert_eq!(
            resolve_position(&list, MenuItemId::Pending, Some(Edge::Top), &cfg()),
            Err(PositionError::TargetNotFound(MenuItemId::Pending))
        );
    }

    #[test]
    fn test_position_at_index_matches_edges() {
        let list = items(&[10, 20, 30]);
        assert_eq!(position_at_index(&[], 0, &cfg()), 10);
        assert_eq!(position_at_index(&[], 5, &cfg()), 10);
        assert_eq!(position_at_index(&list, 0, &cfg()), 0);
        assert_eq!(position_at_index(&list, 1, &cfg()), 15);
        assert_eq!(position_at_index(&list, 3, &cfg()), 40);
        assert_eq!(position_at_index(&list, 99, &cfg()), 40);
    }

    #[test]
    fn test_final_position_resplices_current_item() {
        let mut list = items(&[10, 20, 30]);
        list.insert(1, MenuItem {
            id: MenuItemId::Pending,
            keyword: "new".to_string(),
            position: 15,
            is_new: true,
        });

        assert_eq!(resolve_final_position(&list, 1, &cfg()), Ok(15));
        assert_eq!(resolve_final_position(&list, 0, &cfg()), Ok(0));
        assert_eq!(resolve_final_position(&list, 3, &cfg()), Ok(40));
        assert_eq!(
            resolve_final_position(&items(&[10]), 0, &cfg()),
            Err(PositionError::NoCurrentItem)
        );
    }
}
