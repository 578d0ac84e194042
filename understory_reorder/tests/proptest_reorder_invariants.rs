// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for the reorder core.
//!
//! 1. `move_item` preserves length and contents, and is a no-op iff `from == to`.
//! 2. The target slot stays within `[0, len - 1]` under any pointer travel.
//! 3. A single move event shifts the target by at most one grid step per direction.
//! 4. Transition ends for an item other than the tracked one never change state.
//! 5. Arbitrary input streams leave the sequence a permutation of the original,
//!    and the revision counts exactly the commits that changed the order.

use kurbo::{Point, Size, Vec2};
use proptest::prelude::*;
use understory_reorder::{
    GridLayout, GridProjection, Phase, PointerEvent, PointerId, Reorder, ReorderConfig,
    ReorderEvent, ReorderList, move_item,
};

// ── Helpers ─────────────────────────────────────────────────────────────

const ITEM: Size = Size::new(92.0, 32.0);

fn projection(columns: usize, len: usize) -> GridProjection {
    GridProjection::new(
        GridLayout::new(columns, len),
        Point::new(10.0, 10.0),
        ITEM,
        ReorderConfig::DEFAULT_GUTTER,
    )
}

fn measure_at(reorder: &Reorder, grid: &GridProjection, pos: Point) -> GridProjection {
    match reorder.lifted_index() {
        Some(index) => grid.lifted(
            index,
            pos - reorder.pointer_down_position(),
            reorder.config().lift_scale(),
        ),
        None => *grid,
    }
}

fn grid_shape() -> impl Strategy<Value = (usize, usize)> {
    (1_usize..=5, 1_usize..=24)
}

fn travel() -> impl Strategy<Value = Vec<(f64, f64)>> {
    proptest::collection::vec((-2_000.0_f64..2_000.0, -2_000.0_f64..2_000.0), 1..40)
}

#[derive(Clone, Debug)]
enum Input {
    Down(usize),
    Move(f64, f64),
    Up,
    TransitionEnd(usize),
}

fn input(len: usize) -> impl Strategy<Value = Input> {
    prop_oneof![
        (0..len + 1).prop_map(Input::Down),
        (-400.0_f64..400.0, -400.0_f64..400.0).prop_map(|(x, y)| Input::Move(x, y)),
        Just(Input::Up),
        (0..len + 1).prop_map(Input::TransitionEnd),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. move_item preserves contents
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn move_preserves_contents((len, from, to) in (1_usize..64).prop_flat_map(|len| (Just(len), 0..len, 0..len))) {
        let original: Vec<usize> = (0..len).collect();
        let mut items = original.clone();
        move_item(&mut items, from, to).unwrap();

        prop_assert_eq!(items.len(), len);
        prop_assert_eq!(items[to], from, "moved element lands at `to`");
        prop_assert_eq!(items == original, from == to);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, original);

        // Everything else keeps its relative order.
        let rest: Vec<usize> = items.iter().copied().filter(|&v| v != from).collect();
        prop_assert!(rest.windows(2).all(|w| w[0] < w[1]));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2 + 3. Target stays in range and moves one step per direction per event
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn target_is_clamped_and_single_stepped(
        ((columns, len), pressed) in grid_shape().prop_flat_map(|(c, l)| (Just((c, l)), 0..l)),
        path in travel(),
    ) {
        let grid = projection(columns, len);
        let mut reorder = Reorder::new(ReorderConfig::new().with_columns(columns), len);
        let start = grid.rest_bounds(pressed).unwrap().center();
        reorder.on_pointer_down(pressed, start, &grid);
        reorder.on_lift_transition_end(pressed);
        prop_assert_eq!(reorder.phase(), Phase::Dragging);

        for (dx, dy) in path {
            let before = reorder.target_index().unwrap();
            let pos = start + Vec2::new(dx, dy);
            let measure = measure_at(&reorder, &grid, pos);
            reorder.on_pointer_move(pos, &measure);
            let after = reorder.target_index().unwrap();

            prop_assert!(after < len, "target {} out of range for len {}", after, len);
            prop_assert!(
                before.abs_diff(after) <= columns + 1,
                "target jumped {} -> {} with {} columns", before, after, columns
            );
            if columns == 1 {
                prop_assert!(before.abs_diff(after) <= 1);
            }
            prop_assert_eq!(reorder.source_index(), Some(pressed));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Stale transition ends are inert
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn stale_transition_ends_do_not_mutate(
        ((columns, len), pressed, stale) in grid_shape()
            .prop_flat_map(|(c, l)| (Just((c, l)), 0..l, 0..l + 4)),
        dy in -300.0_f64..300.0,
    ) {
        prop_assume!(stale != pressed);
        let grid = projection(columns, len);
        let mut reorder = Reorder::new(ReorderConfig::new().with_columns(columns), len);
        let start = grid.rest_bounds(pressed).unwrap().center();

        reorder.on_pointer_down(pressed, start, &grid);
        let snapshot = reorder.clone();
        prop_assert_eq!(reorder.on_lift_transition_end(stale), None);
        prop_assert_eq!(reorder.on_settle_transition_end(pressed), None);
        prop_assert_eq!(&reorder, &snapshot);

        reorder.on_lift_transition_end(pressed);
        let pos = start + Vec2::new(0.0, dy);
        let measure = measure_at(&reorder, &grid, pos);
        reorder.on_pointer_move(pos, &measure);
        let mut items: Vec<usize> = (0..len).collect();
        reorder.on_pointer_up(pos, &mut items);
        let settling = reorder.pending_settle_index().unwrap();

        let snapshot = reorder.clone();
        if stale != settling {
            prop_assert_eq!(reorder.on_settle_transition_end(stale), None);
        }
        prop_assert_eq!(reorder.on_lift_transition_end(settling), None);
        prop_assert_eq!(&reorder, &snapshot);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Arbitrary input streams
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn arbitrary_streams_keep_a_permutation(
        ((columns, len), inputs) in grid_shape().prop_flat_map(|(c, l)| {
            (Just((c, l)), proptest::collection::vec(input(l), 0..80))
        }),
    ) {
        let grid = projection(columns, len);
        let pointer = PointerId(3);
        let mut list = ReorderList::new(
            (0..len).collect::<Vec<usize>>(),
            ReorderConfig::new().with_columns(columns),
            (),
        );
        let mut origin = Point::ZERO;
        let mut reorders = 0_u64;

        for input in inputs {
            match input {
                Input::Down(index) => {
                    origin = grid.rest_bounds(index).map_or(origin, |r| r.center());
                    list.pointer_down(index, PointerEvent::new(pointer, origin), &grid);
                }
                Input::Move(dx, dy) => {
                    let pos = origin + Vec2::new(dx, dy);
                    let measure = measure_at(list.machine(), &grid, pos);
                    list.pointer_move(PointerEvent::new(pointer, pos), &measure);
                }
                Input::Up => {
                    if let Some(ReorderEvent::Committed { from, to }) =
                        list.pointer_up(PointerEvent::new(pointer, origin))
                    {
                        if from != to {
                            reorders += 1;
                        }
                    }
                }
                Input::TransitionEnd(index) => {
                    list.transition_end(index);
                }
            }

            if let Some(target) = list.machine().target_index() {
                prop_assert!(target < len);
            }
            prop_assert_eq!(list.styles().len(), len);
        }

        let mut sorted = list.items().to_vec();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..len).collect::<Vec<_>>());
        prop_assert_eq!(list.revision(), reorders);
    }
}
