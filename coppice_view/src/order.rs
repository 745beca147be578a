// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sibling ordering: the default comparator and droppable-first grouping.
//!
//! ## Overview
//!
//! [`ordered_view`] turns a parent's selected children into their display
//! order. The order is a pure projection: nodes are never mutated, and
//! identical inputs always produce identical output.
//!
//! ## Semantics
//!
//! - Sorting disabled, grouping off: the input (collection) order verbatim.
//! - Sorting enabled, grouping off: one stable sort by the active comparator.
//! - Grouping on: the input is partitioned into droppable and non-droppable
//!   nodes, each partition keeping its relative input order; partitions are
//!   sorted independently when sorting is enabled, then concatenated with the
//!   droppable partition first.
//!
//! Stability matters: `slice::sort_by` is stable, so comparator ties resolve
//! to collection order.

use alloc::vec::Vec;

use coppice_tree::Node;

use crate::types::{NodeComparator, SortPolicy};

/// Default comparator: order by the node's natural display value.
pub fn compare_labels<K, T>(a: &Node<K, T>, b: &Node<K, T>) -> core::cmp::Ordering {
    a.label.cmp(&b.label)
}

/// Resolve a policy to a concrete comparator, or `None` when sorting is off.
pub fn comparator<K, T>(sort: &SortPolicy<K, T>) -> Option<NodeComparator<K, T>> {
    match sort {
        SortPolicy::Natural => Some(compare_labels::<K, T>),
        SortPolicy::With(f) => Some(*f),
        SortPolicy::Disabled => None,
    }
}

/// Compute the display order of one sibling set.
///
/// `nodes` is the selection of a parent's direct children in collection order;
/// the returned vector holds the same references reordered per the grouping
/// flag and sort policy. Empty input yields empty output.
pub fn ordered_view<'t, K, T>(
    nodes: Vec<&'t Node<K, T>>,
    insert_droppable_first: bool,
    sort: &SortPolicy<K, T>,
) -> Vec<&'t Node<K, T>> {
    let cmp = comparator(sort);

    if !insert_droppable_first {
        let mut view = nodes;
        if let Some(cmp) = cmp {
            view.sort_by(|a, b| cmp(a, b));
        }
        return view;
    }

    let (mut droppable, mut rest): (Vec<_>, Vec<_>) =
        nodes.into_iter().partition(|n| n.is_droppable());
    if let Some(cmp) = cmp {
        droppable.sort_by(|a, b| cmp(a, b));
        rest.sort_by(|a, b| cmp(a, b));
    }
    droppable.extend(rest);
    droppable
}
