// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sibling ordering under the three sort policies, with and without
//! droppable-first grouping.
//!
//! Run:
//! - `cargo run -p coppice_demos --example level_ordering`

use coppice_tree::{Forest, Node, NodeFlags};
use coppice_view::level::render_level;
use coppice_view::types::{NullRegistry, SortPolicy, TreeContext};

fn by_id(a: &Node<u32>, b: &Node<u32>) -> std::cmp::Ordering {
    a.id.cmp(&b.id)
}

fn main() {
    let mut forest: Forest<u32> = Forest::new();
    forest.push(Node::new(1, 0, "cherry").with_flags(NodeFlags::DROPPABLE));
    forest.push(Node::new(2, 0, "banana"));
    forest.push(Node::new(3, 0, "apple").with_flags(NodeFlags::DROPPABLE));

    for (name, sort, grouped) in [
        ("natural", SortPolicy::Natural, false),
        ("custom (by id)", SortPolicy::With(by_id), false),
        ("disabled", SortPolicy::Disabled, false),
        ("disabled + droppable first", SortPolicy::Disabled, true),
        ("natural + droppable first", SortPolicy::Natural, true),
    ] {
        let ctx = TreeContext::new(&forest, 0)
            .with_sort(sort)
            .with_droppable_first(grouped);
        let view = render_level(&ctx, 0, 0, &mut NullRegistry);
        let order: Vec<u32> = view.items().collect();
        println!("{name:>28}: {order:?}");
    }

    // The two scenarios every consumer relies on.
    let ctx = TreeContext::new(&forest, 0)
        .with_sort(SortPolicy::Disabled)
        .with_droppable_first(true);
    let view = render_level(&ctx, 0, 0, &mut NullRegistry);
    assert_eq!(view.items().collect::<Vec<_>>(), vec![1, 3, 2]);

    let ctx = TreeContext::new(&forest, 0).with_sort(SortPolicy::With(by_id));
    let view = render_level(&ctx, 0, 0, &mut NullRegistry);
    assert_eq!(view.items().collect::<Vec<_>>(), vec![1, 2, 3]);
}
