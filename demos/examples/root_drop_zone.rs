// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Root drop-zone authorization during a drag.
//!
//! A tiny registry double stands in for the toolkit's hover plumbing; the
//! orchestrator registers the root container as a drop zone only while a
//! foreign drag is in progress.
//!
//! Run:
//! - `cargo run -p coppice_demos --example root_drop_zone`

use coppice_tree::{Forest, Node, NodeFlags};
use coppice_view::level::render_level;
use coppice_view::types::{Classes, DragSource, DropRegistry, HoverStatus, TreeContext};

struct Monitor {
    hovered: Option<u32>,
    zones: Vec<u32>,
}

impl DropRegistry<u32> for Monitor {
    fn hover(&self, container: u32) -> HoverStatus {
        HoverStatus {
            is_over: self.hovered == Some(container),
        }
    }

    fn accept(&mut self, container: u32) {
        println!("  registered container {container} as a drop zone");
        self.zones.push(container);
    }
}

fn main() {
    let mut forest: Forest<u32> = Forest::new();
    forest.push(Node::new(1, 0, "Documents").with_flags(NodeFlags::DROPPABLE | NodeFlags::OPEN));
    forest.push(Node::new(2, 0, "notes.txt"));
    forest.push(Node::new(3, 1, "draft.md"));

    let classes = Classes {
        container: Some("tree".into()),
        drop_target: Some("drag-over".into()),
        root: Some("tree-root".into()),
    };

    // No drag: the root is not a drop zone.
    let ctx = TreeContext::new(&forest, 0).with_classes(classes.clone());
    let mut monitor = Monitor {
        hovered: None,
        zones: Vec::new(),
    };
    println!("== idle ==");
    let view = render_level(&ctx, 0, 0, &mut monitor);
    println!("  accepts_drop={} class={:?}", view.accepts_drop, view.class_name);
    assert!(!view.accepts_drop);

    // Dragging node 3 over empty canvas space: the root catches it.
    let ctx = ctx.with_drag(Some(DragSource {
        id: 3,
        droppable: false,
    }));
    monitor.hovered = Some(0);
    println!("== dragging node 3 ==");
    let view = render_level(&ctx, 0, 0, &mut monitor);
    println!("  accepts_drop={} class={:?}", view.accepts_drop, view.class_name);
    assert!(view.accepts_drop);
    assert_eq!(view.class_name, "tree drag-over tree-root");
    assert_eq!(monitor.zones, vec![0]);

    // Each gap names where a drop would insert.
    for gap in view.gaps() {
        match gap.index {
            Some(i) => println!("  gap: before index {i}"),
            None => println!("  gap: last position"),
        }
    }
}
