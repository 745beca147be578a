// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coppice View: deterministic ordering and drop-target resolution for one tree level.
//!
//! ## Overview
//!
//! This crate computes, per render and per parent id, the view a drag-and-drop
//! tree UI needs: the display order of a parent's direct children, the gaps
//! between them where a drop may land, and whether the level's own container is
//! currently an authorized drop target. It does not draw anything and it does
//! not listen to pointers; feed it a [`TreeContext`](crate::types::TreeContext)
//! and it emits a [`LevelView`](crate::level::LevelView) you can render.
//!
//! ## Inputs
//!
//! - A [`Forest`](coppice_tree::Forest) of nodes, owned and mutated outside of
//!   renders by your drag plumbing.
//! - A [`TreeContext`](crate::types::TreeContext) bundling the root sentinel
//!   id, the active [`SortPolicy`](crate::types::SortPolicy), the
//!   droppable-first grouping flag, the in-progress
//!   [`DragSource`](crate::types::DragSource) (if any), and the display
//!   [`Classes`](crate::types::Classes).
//! - A [`DropRegistry`](crate::types::DropRegistry) — the seam to your hover
//!   detection. Use [`NullRegistry`](crate::types::NullRegistry) when nothing
//!   is being dragged.
//!
//! ## Ordering
//!
//! [`ordered_view`](crate::order::ordered_view) applies the tri-state sort
//! policy (natural by label, caller comparator, or disabled) and, when
//! droppable-first grouping is on, partitions droppable nodes ahead of the
//! rest, ordering each partition independently. Sorting is stable; equal
//! elements keep their collection order.
//!
//! ## Drop targets
//!
//! [`is_droppable`](crate::drop::is_droppable) vets a candidate target for the
//! current drag: never without a drag, never onto the dragged node itself
//! or into its own subtree, and only onto droppable nodes — except the root
//! container, which needs no capability flag. The level orchestrator consults
//! it for the root container only, so releasing a drag over empty canvas space
//! resolves to "drop at top level".
//!
//! ## Workflow
//!
//! 1) Build a context for the render:
//!    policies and classes are plain data, the forest is borrowed.
//! 2) Call [`render_level`](crate::level::render_level) per level — or
//!    [`render_tree`](crate::level::render_tree) to walk every open level from
//!    the root.
//! 3) Render each returned [`LevelView`](crate::level::LevelView): one
//!    container element with its composed class name, then the entries in
//!    sequence — a gap affordance per
//!    [`InsertionPoint`](crate::types::InsertionPoint), a child element per
//!    node, and one trailing gap meaning "last / empty position".
//!
//! ## Minimal example
//!
//! ```
//! use coppice_tree::{Forest, Node, NodeFlags};
//! use coppice_view::level::{LevelEntry, render_level};
//! use coppice_view::types::{NullRegistry, SortPolicy, TreeContext};
//!
//! let mut forest: Forest<u64, ()> = Forest::new();
//! forest.push(Node::new(1, 0, "b"));
//! forest.push(Node::new(2, 0, "a"));
//!
//! let ctx = TreeContext::new(&forest, 0).with_sort(SortPolicy::Natural);
//! let view = render_level(&ctx, 0, 0, &mut NullRegistry);
//!
//! let order: Vec<u64> = view
//!     .entries
//!     .iter()
//!     .filter_map(|e| match e {
//!         LevelEntry::Item(n) => Some(n.id),
//!         LevelEntry::Gap(_) => None,
//!     })
//!     .collect();
//! assert_eq!(order, vec![2, 1]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod drop;
pub mod level;
pub mod order;
pub mod types;
