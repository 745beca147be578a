// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walking every expanded level, then reparenting a node between renders.
//!
//! Run:
//! - `cargo run -p coppice_demos --example tree_walk_reparent`

use coppice_tree::{Forest, Node, NodeFlags};
use coppice_view::drop::is_droppable;
use coppice_view::level::render_tree;
use coppice_view::types::{DragSource, NullRegistry, TreeContext};

fn print_levels(forest: &Forest<u32>) {
    let ctx = TreeContext::new(forest, 0);
    for view in render_tree(&ctx, &mut NullRegistry) {
        let items: Vec<u32> = view.items().collect();
        println!("  depth {} container {:>2}: {items:?}", view.depth, view.container);
    }
}

fn main() {
    let mut forest: Forest<u32> = Forest::new();
    forest.push(Node::new(1, 0, "Projects").with_flags(NodeFlags::DROPPABLE | NodeFlags::OPEN));
    forest.push(Node::new(2, 0, "Archive").with_flags(NodeFlags::DROPPABLE | NodeFlags::OPEN));
    forest.push(Node::new(3, 1, "alpha"));
    forest.push(Node::new(4, 1, "beta"));

    println!("== before ==");
    print_levels(&forest);

    // Drag "beta" over "Archive": resolution happens against the render
    // context, the mutation between renders.
    let drag = Some(DragSource {
        id: 4,
        droppable: false,
    });
    let ctx = TreeContext::new(&forest, 0).with_drag(drag);
    assert!(is_droppable(drag.map(|d| d.id), 2, &ctx));
    drop(ctx);
    forest.reparent(4, 2);

    println!("== after dropping beta into Archive ==");
    print_levels(&forest);

    let ctx = TreeContext::new(&forest, 0);
    assert_eq!(
        ctx.forest.children(2).map(|n| n.id).collect::<Vec<_>>(),
        vec![4]
    );
}
