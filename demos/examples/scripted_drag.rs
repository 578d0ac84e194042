// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a scripted drag against a three-column grid and prints the style of
//! every item after each input.
//!
//! The script presses the first item, moves the pointer 400 px to the right in
//! ten steps, then releases and lets the settle finish.

use kurbo::{Point, Size, Vec2};
use tracing_subscriber::EnvFilter;
use understory_reorder::{
    GridLayout, GridProjection, PointerEvent, PointerId, ReorderConfig, ReorderList,
};

const COLUMNS: usize = 3;
const ITEM: Size = Size::new(120.0, 48.0);
const STEPS: usize = 10;
const TRAVEL: f64 = 400.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("understory_reorder=debug")),
        )
        .with_target(false)
        .init();

    let items: Vec<String> = (1..=9).map(|n| format!("Item {n}")).collect();
    let config = ReorderConfig::new().with_columns(COLUMNS);
    let grid = GridProjection::new(
        GridLayout::new(COLUMNS, items.len()),
        Point::new(16.0, 16.0),
        ITEM,
        config.gutter(),
    );
    let mut list = ReorderList::new(items, config, ());
    let pointer = PointerId(1);

    let Some(start) = grid.rest_bounds(0).map(|r| r.center()) else {
        return;
    };

    let event = list.pointer_down(0, PointerEvent::new(pointer, start), &grid);
    report("down", event, &list);
    let event = list.transition_end(0);
    report("lift end", event, &list);

    let scale = list.machine().config().lift_scale();
    let mut position = start;
    for step in 1..=STEPS {
        let offset = Vec2::new(TRAVEL * step as f64 / STEPS as f64, 0.0);
        position = start + offset;
        let measure = grid.lifted(0, offset, scale);
        let event = list.pointer_move(PointerEvent::new(pointer, position), &measure);
        report(&format!("move {step}"), event, &list);
    }

    let event = list.pointer_up(PointerEvent::new(pointer, position));
    report("up", event, &list);
    if let Some(index) = list.machine().pending_settle_index() {
        let event = list.transition_end(index);
        report("settle end", event, &list);
    }

    println!("final order: {:?}", list.items());
    println!("revision: {}", list.revision());
}

fn report<T>(
    label: &str,
    event: Option<understory_reorder::ReorderEvent>,
    list: &ReorderList<T>,
) {
    println!("{label:>10}: {event:?} phase={:?}", list.machine().phase());
    for &index in list.changed() {
        if let Some(style) = list.style(index) {
            println!(
                "            [{index}] offset=({:.1}, {:.1}) scale={:.2} {:?} {:?}",
                style.offset.x, style.offset.y, style.scale, style.transition, style.layer
            );
        }
    }
}
