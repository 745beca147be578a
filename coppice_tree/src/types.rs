// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the forest: capability flags and the node record.

use alloc::string::String;

bitflags::bitflags! {
    /// Node capability flags.
    ///
    /// `DROPPABLE` controls whether other nodes may be dropped *into* this node,
    /// making it their new parent. It is independent of whether the node itself
    /// can be picked up and repositioned among its siblings; that is a gesture
    /// policy owned by the drag plumbing.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Other nodes may be dropped into this node as new children.
        const DROPPABLE = 0b0000_0001;
        /// The node's child list is expanded in the view.
        const OPEN      = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// One item in the forest.
///
/// `K` is the caller-chosen id type; it must stay stable across renders.
/// `T` is an opaque payload the view layer never inspects (leaf rendering is a
/// downstream concern).
#[derive(Clone, Debug)]
pub struct Node<K, T = ()> {
    /// Unique, render-stable identifier.
    pub id: K,
    /// Id of the owning node, or the root sentinel.
    pub parent: K,
    /// Natural display value; the default sort order compares these.
    pub label: String,
    /// Capability flags.
    pub flags: NodeFlags,
    /// Opaque payload carried through to the consumer.
    pub payload: T,
}

impl<K, T: Default> Node<K, T> {
    /// Create a node with default flags (closed, not droppable) and a default payload.
    pub fn new(id: K, parent: K, label: impl Into<String>) -> Self {
        Self {
            id,
            parent,
            label: label.into(),
            flags: NodeFlags::default(),
            payload: T::default(),
        }
    }
}

impl<K, T> Node<K, T> {
    /// Replace the capability flags.
    #[must_use]
    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Replace the payload.
    #[must_use]
    pub fn with_payload<U>(self, payload: U) -> Node<K, U> {
        Node {
            id: self.id,
            parent: self.parent,
            label: self.label,
            flags: self.flags,
            payload,
        }
    }

    /// Whether other nodes may be dropped into this node.
    pub fn is_droppable(&self) -> bool {
        self.flags.contains(NodeFlags::DROPPABLE)
    }

    /// Whether this node's child list is expanded.
    pub fn is_open(&self) -> bool {
        self.flags.contains(NodeFlags::OPEN)
    }
}
