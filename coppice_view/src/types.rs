// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the view layer: sort policy, render context, insertion
//! points, and the drop-registry seam.
//!
//! ## Overview
//!
//! These types describe the per-render inputs and outputs of the level
//! orchestrator. The context is immutable for the duration of one render; the
//! drag plumbing that owns the forest mutates context fields (drag start/end,
//! policy changes) strictly between renders.

use alloc::string::String;

use coppice_tree::{Forest, Node};

/// Comparator signature over two sibling nodes.
pub type NodeComparator<K, T> = fn(&Node<K, T>, &Node<K, T>) -> core::cmp::Ordering;

/// Tri-state sibling ordering policy.
///
/// Represented as a tagged choice rather than a trait object so the "caller
/// passed something unusable" failure mode of dynamic settings bags cannot
/// exist: there is a comparator, or the default, or sorting is off.
pub enum SortPolicy<K, T = ()> {
    /// Order by each node's natural display value (its label).
    Natural,
    /// Order by a caller-supplied comparator.
    With(NodeComparator<K, T>),
    /// Preserve the collection order verbatim.
    Disabled,
}

// Manual impls: the variants hold at most a fn pointer, so no bounds on `K`
// or `T` are needed (derives would add them).
impl<K, T> Clone for SortPolicy<K, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, T> Copy for SortPolicy<K, T> {}

impl<K, T> core::fmt::Debug for SortPolicy<K, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Natural => f.write_str("Natural"),
            Self::With(_) => f.write_str("With(..)"),
            Self::Disabled => f.write_str("Disabled"),
        }
    }
}

impl<K, T> Default for SortPolicy<K, T> {
    fn default() -> Self {
        Self::Natural
    }
}

impl<K, T> SortPolicy<K, T> {
    /// Whether ordering is bypassed entirely.
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

/// Descriptor of the node currently being dragged, if any.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DragSource<K> {
    /// Id of the dragged node.
    pub id: K,
    /// Whether the dragged node itself accepts drops (carried for consumers;
    /// not consulted by target resolution).
    pub droppable: bool,
}

/// Display class configuration for rendered containers.
///
/// Each entry is optional; an absent entry contributes nothing to the composed
/// class name.
#[derive(Clone, Debug, Default)]
pub struct Classes {
    /// Base class for every container element.
    pub container: Option<String>,
    /// Appended while the container is the hovered drop target.
    pub drop_target: Option<String>,
    /// Appended on the root container only.
    pub root: Option<String>,
}

/// Everything one render of the tree reads: the forest plus UI configuration.
///
/// Built fresh (or reused unchanged) per render pass. The orchestrator never
/// writes through it.
pub struct TreeContext<'t, K, T = ()> {
    /// The full node collection, borrowed for the render.
    pub forest: &'t Forest<K, T>,
    /// The designated "no parent" id; top-level nodes use it as their parent.
    pub root: K,
    /// Active sibling ordering policy.
    pub sort: SortPolicy<K, T>,
    /// Group droppable siblings ahead of non-droppable ones.
    pub insert_droppable_first: bool,
    /// The in-progress drag, set by the drag plumbing between renders.
    pub drag: Option<DragSource<K>>,
    /// Display class configuration.
    pub classes: Classes,
}

impl<K: Copy, T> Clone for TreeContext<'_, K, T> {
    fn clone(&self) -> Self {
        Self {
            forest: self.forest,
            root: self.root,
            sort: self.sort,
            insert_droppable_first: self.insert_droppable_first,
            drag: self.drag,
            classes: self.classes.clone(),
        }
    }
}

impl<K: core::fmt::Debug, T> core::fmt::Debug for TreeContext<'_, K, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TreeContext")
            .field("root", &self.root)
            .field("sort", &self.sort)
            .field("insert_droppable_first", &self.insert_droppable_first)
            .field("drag", &self.drag)
            .field("classes", &self.classes)
            .finish_non_exhaustive()
    }
}

impl<'t, K, T> TreeContext<'t, K, T> {
    /// Create a context with default policies: natural sort, no grouping, no
    /// drag, no classes.
    pub fn new(forest: &'t Forest<K, T>, root: K) -> Self {
        Self {
            forest,
            root,
            sort: SortPolicy::default(),
            insert_droppable_first: false,
            drag: None,
            classes: Classes::default(),
        }
    }

    /// Replace the sort policy.
    #[must_use]
    pub fn with_sort(mut self, sort: SortPolicy<K, T>) -> Self {
        self.sort = sort;
        self
    }

    /// Enable or disable droppable-first grouping.
    #[must_use]
    pub fn with_droppable_first(mut self, on: bool) -> Self {
        self.insert_droppable_first = on;
        self
    }

    /// Set the in-progress drag descriptor.
    #[must_use]
    pub fn with_drag(mut self, drag: Option<DragSource<K>>) -> Self {
        self.drag = drag;
        self
    }

    /// Set the display class configuration.
    #[must_use]
    pub fn with_classes(mut self, classes: Classes) -> Self {
        self.classes = classes;
        self
    }
}

/// One gap in an ordered sibling sequence where a drop may land.
///
/// `index: Some(i)` means "insert before position `i`"; `None` means "insert
/// at the last position", which for an empty level is the only gap and reads
/// "drop into this empty list".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InsertionPoint<K> {
    /// Nesting depth of the owning level.
    pub depth: usize,
    /// Id of the parent whose child list this gap belongs to.
    pub container: K,
    /// Position before which a drop inserts, or `None` for the last position.
    pub index: Option<usize>,
}

/// Hover state the registry reports for a candidate container.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverStatus {
    /// Whether the pointer is currently over this container (and not over one
    /// of its child affordances).
    pub is_over: bool,
}

/// The seam to the embedding toolkit's hover/drop plumbing.
///
/// The orchestrator asks for hover state on every render and requests
/// activation of a container as a live drop zone only when target resolution
/// authorizes it. Implementations typically wrap whatever pointer monitor the
/// toolkit provides.
pub trait DropRegistry<K> {
    /// Report hover state for a candidate container.
    fn hover(&self, container: K) -> HoverStatus;

    /// Mark `container` itself — not any individual child — as an active drop
    /// zone for the remainder of this render.
    fn accept(&mut self, container: K);
}

/// An inert registry: never hovered, ignores activation.
///
/// Useful for renders with no drag in progress and for tests.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullRegistry;

impl<K> DropRegistry<K> for NullRegistry {
    #[inline]
    fn hover(&self, _container: K) -> HoverStatus {
        HoverStatus::default()
    }

    #[inline]
    fn accept(&mut self, _container: K) {}
}
