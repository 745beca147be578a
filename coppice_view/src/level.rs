// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Level orchestration: one parent's ordered children, gaps, and container state.
//!
//! ## Overview
//!
//! [`render_level`] computes everything a rendering layer needs to draw one
//! tree level: the ordered child list interleaved with insertion-point gaps,
//! the container's composed class name, and whether the container itself is an
//! active drop zone. [`render_tree`] walks every expanded level from the root
//! with an explicit worklist, producing one [`LevelView`] per container.
//!
//! ## Output shape
//!
//! For `N` children a level emits `N + 1` gaps: one before each child
//! (`index: Some(i)`) and one trailing gap (`index: None`) that doubles as the
//! "drop into this empty list" affordance when `N == 0`. The sequence is
//! always `Gap, Item, Gap, Item, …, Gap`.

use alloc::string::String;
use alloc::vec::Vec;

use coppice_tree::Node;

use crate::drop::is_droppable;
use crate::order::ordered_view;
use crate::types::{DropRegistry, InsertionPoint, TreeContext};

/// One element of a rendered level: a drop gap or a child node.
#[derive(Debug)]
pub enum LevelEntry<'t, K, T = ()> {
    /// A gap where a drop may insert.
    Gap(InsertionPoint<K>),
    /// A child node, in display order.
    Item(&'t Node<K, T>),
}

/// The computed view of one tree level, ready for a rendering layer.
#[derive(Debug)]
pub struct LevelView<'t, K, T = ()> {
    /// Id of the parent this level renders (possibly the root sentinel).
    pub container: K,
    /// Nesting depth of the level.
    pub depth: usize,
    /// Composed display class for the container element.
    pub class_name: String,
    /// Whether the container itself was registered as an active drop zone.
    pub accepts_drop: bool,
    /// `Gap, Item, …, Gap` sequence; always ends with an unindexed gap.
    pub entries: Vec<LevelEntry<'t, K, T>>,
}

impl<K: Copy, T> LevelView<'_, K, T> {
    /// The insertion points of this level, in display order.
    pub fn gaps(&self) -> impl Iterator<Item = InsertionPoint<K>> {
        self.entries.iter().filter_map(|e| match e {
            LevelEntry::Gap(p) => Some(*p),
            LevelEntry::Item(_) => None,
        })
    }

    /// The child ids of this level, in display order.
    pub fn items(&self) -> impl Iterator<Item = K> {
        self.entries.iter().filter_map(|e| match e {
            LevelEntry::Item(n) => Some(n.id),
            LevelEntry::Gap(_) => None,
        })
    }
}

fn compose_class<K: Copy + Eq, T>(
    ctx: &TreeContext<'_, K, T>,
    parent: K,
    is_over: bool,
) -> String {
    let classes = &ctx.classes;
    let mut parts: Vec<&str> = Vec::new();
    if let Some(c) = classes.container.as_deref() {
        parts.push(c);
    }
    if is_over && let Some(c) = classes.drop_target.as_deref() {
        parts.push(c);
    }
    if parent == ctx.root && let Some(c) = classes.root.as_deref() {
        parts.push(c);
    }
    parts.join(" ")
}

/// Compute the view of one level.
///
/// Selects `parent`'s direct children from the forest, orders them per the
/// context's grouping flag and sort policy, authorizes the root container as a
/// drop zone when the current drag allows it (registering it through
/// `registry`), and emits the gap/item sequence. An unknown `parent` is not an
/// error; it yields an empty level with its single trailing gap.
pub fn render_level<'t, K, T, R>(
    ctx: &TreeContext<'t, K, T>,
    parent: K,
    depth: usize,
    registry: &mut R,
) -> LevelView<'t, K, T>
where
    K: Copy + Eq,
    R: DropRegistry<K>,
{
    let view = ordered_view(
        ctx.forest.children(parent).collect(),
        ctx.insert_droppable_first,
        &ctx.sort,
    );

    let hover = registry.hover(parent);

    // Only the root container is authorized here; per-node targets get their
    // droppability from capability flags and the hover plumbing.
    let mut accepts_drop = false;
    if parent == ctx.root && is_droppable(ctx.drag.map(|d| d.id), parent, ctx) {
        registry.accept(parent);
        accepts_drop = true;
    }

    let class_name = compose_class(ctx, parent, hover.is_over);

    let mut entries = Vec::with_capacity(view.len() * 2 + 1);
    for (index, node) in view.into_iter().enumerate() {
        entries.push(LevelEntry::Gap(InsertionPoint {
            depth,
            container: parent,
            index: Some(index),
        }));
        entries.push(LevelEntry::Item(node));
    }
    entries.push(LevelEntry::Gap(InsertionPoint {
        depth,
        container: parent,
        index: None,
    }));

    LevelView {
        container: parent,
        depth,
        class_name,
        accepts_drop,
        entries,
    }
}

/// Render every expanded level from the root, breadth-first.
///
/// Descends into a child only when it is both droppable and open, mirroring a
/// tree view that draws a child list under expanded folders. Each returned
/// view is independent and keyed by its container id.
pub fn render_tree<'t, K, T, R>(
    ctx: &TreeContext<'t, K, T>,
    registry: &mut R,
) -> Vec<LevelView<'t, K, T>>
where
    K: Copy + Eq,
    R: DropRegistry<K>,
{
    let mut out = Vec::new();
    let mut work = Vec::new();
    work.push((ctx.root, 0_usize));
    let mut next = 0;
    while next < work.len() {
        let (parent, depth) = work[next];
        next += 1;
        let view = render_level(ctx, parent, depth, registry);
        for entry in &view.entries {
            if let LevelEntry::Item(n) = entry
                && n.is_droppable()
                && n.is_open()
            {
                work.push((n.id, depth + 1));
            }
        }
        out.push(view);
    }
    out
}
