// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The flat node collection: storage, selection, and between-render mutation.
//!
//! ## Overview
//!
//! [`Forest`] stores nodes in insertion order and answers the queries a view
//! layer needs per render: direct children of a parent, lookup by id, and the
//! ancestor chain of a node. Mutation (push/remove/reparent) is expected to
//! happen between renders, owned by whoever drives the UI; during a render the
//! forest is read-only.

use alloc::vec::Vec;

use crate::types::Node;

/// A flat, insertion-ordered collection of nodes linked by parent ids.
///
/// The root of the hierarchy is a sentinel id chosen by the caller and never
/// stored as a node; top-level nodes simply use it as their `parent`.
#[derive(Clone, Debug)]
pub struct Forest<K, T = ()> {
    nodes: Vec<Node<K, T>>,
}

impl<K, T> Default for Forest<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> Forest<K, T> {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Number of stored nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the forest holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate all nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Node<K, T>> {
        self.nodes.iter()
    }

    /// Append a node. Insertion order is the fallback display order when
    /// sorting is disabled downstream.
    pub fn push(&mut self, node: Node<K, T>) {
        self.nodes.push(node);
    }
}

impl<K: Copy + Eq, T> Forest<K, T> {
    /// Look up a node by id.
    pub fn get(&self, id: K) -> Option<&Node<K, T>> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up a node by id, mutably.
    pub fn get_mut(&mut self, id: K) -> Option<&mut Node<K, T>> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Whether a node with this id is stored.
    pub fn contains(&self, id: K) -> bool {
        self.get(id).is_some()
    }

    /// Direct children of `parent`, in insertion order.
    ///
    /// `parent` may be the root sentinel or any node id; an id with no children
    /// (or not present at all) yields an empty iterator.
    pub fn children(&self, parent: K) -> impl Iterator<Item = &Node<K, T>> {
        self.nodes.iter().filter(move |n| n.parent == parent)
    }

    /// Number of direct children of `parent`.
    pub fn child_count(&self, parent: K) -> usize {
        self.children(parent).count()
    }

    /// Walk the ancestor chain of `id`, nearest parent first.
    ///
    /// The walk stops when a parent id does not resolve to a stored node; the
    /// root sentinel never resolves, so a well-formed chain ends at a top-level
    /// node. Assumes acyclic parent links.
    pub fn ancestors(&self, id: K) -> impl Iterator<Item = &Node<K, T>> {
        let mut cursor = self.get(id).map(|n| n.parent);
        core::iter::from_fn(move || {
            let next = self.get(cursor?)?;
            cursor = Some(next.parent);
            Some(next)
        })
    }

    /// Detach and return the node with this id, keeping the order of the rest.
    ///
    /// Children of the removed node keep their (now dangling) parent link;
    /// repairing or cascading is the owner's call.
    pub fn remove(&mut self, id: K) -> Option<Node<K, T>> {
        let idx = self.nodes.iter().position(|n| n.id == id)?;
        Some(self.nodes.remove(idx))
    }

    /// Point `id` at a new parent, as a drop gesture does. The node keeps its
    /// position in the collection order. Returns false when `id` is unknown.
    pub fn reparent(&mut self, id: K, new_parent: K) -> bool {
        match self.get_mut(id) {
            Some(n) => {
                n.parent = new_parent;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeFlags;
    use alloc::vec;

    fn sample() -> Forest<u32> {
        let mut f = Forest::new();
        f.push(Node::new(1, 0, "alpha").with_flags(NodeFlags::DROPPABLE | NodeFlags::OPEN));
        f.push(Node::new(2, 0, "beta"));
        f.push(Node::new(3, 1, "gamma").with_flags(NodeFlags::DROPPABLE));
        f.push(Node::new(4, 3, "delta"));
        f
    }

    #[test]
    fn children_preserve_insertion_order() {
        let f = sample();
        let ids: Vec<u32> = f.children(0).map(|n| n.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(f.child_count(0), 2);
        assert_eq!(f.child_count(2), 0);
    }

    #[test]
    fn unknown_parent_yields_no_children() {
        let f = sample();
        assert_eq!(f.children(99).count(), 0);
    }

    #[test]
    fn lookup_and_contains() {
        let f = sample();
        assert_eq!(f.get(3).map(|n| n.parent), Some(1));
        assert!(f.contains(4));
        assert!(!f.contains(0), "root sentinel is not a stored node");
    }

    #[test]
    fn ancestors_walk_to_top_level() {
        let f = sample();
        let chain: Vec<u32> = f.ancestors(4).map(|n| n.id).collect();
        assert_eq!(chain, vec![3, 1]);
        assert_eq!(f.ancestors(1).count(), 0, "top-level node has no stored ancestors");
        assert_eq!(f.ancestors(42).count(), 0);
    }

    #[test]
    fn reparent_keeps_collection_position() {
        let mut f = sample();
        assert!(f.reparent(4, 0));
        let top: Vec<u32> = f.children(0).map(|n| n.id).collect();
        assert_eq!(top, vec![1, 2, 4], "moved node lands after existing order");
        assert!(!f.reparent(42, 0));
    }

    #[test]
    fn remove_detaches_single_node() {
        let mut f = sample();
        let gone = f.remove(3).unwrap();
        assert_eq!(gone.label, "gamma");
        assert_eq!(f.len(), 3);
        // The child keeps its dangling link; validation is the owner's concern.
        assert_eq!(f.get(4).map(|n| n.parent), Some(3));
    }
}
