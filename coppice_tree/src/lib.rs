// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coppice Tree: a flat forest model for reorderable tree views.
//!
//! Coppice Tree is the node store underneath a drag-and-drop tree view.
//!
//! - Nodes live in one flat collection; hierarchy is expressed through parent links only.
//! - Ids are caller-chosen, stable across renders, and generic (`K: Copy + Eq`).
//! - A node's parent is either another node's id or a root sentinel id that is
//!   never stored in the collection.
//! - Capability flags ([`NodeFlags`]) say whether a node accepts drops and whether
//!   its child list is expanded.
//!
//! The collection's insertion order is meaningful: it is the order a view layer
//! falls back to when sorting is disabled. Ordering itself lives in
//! `coppice_view`; this crate only stores and selects.
//!
//! ## Validity
//!
//! The store does not validate structure. Parent links are assumed to form a
//! forest (no cycles) with every non-sentinel parent id present in the
//! collection; upholding that is the owner's job. Queries over malformed input
//! are not detected here — see [`Forest::ancestors`] for the one walk that
//! assumes acyclicity.
//!
//! ## Minimal usage
//!
//! ```
//! use coppice_tree::{Forest, Node, NodeFlags};
//!
//! let mut forest: Forest<u64, ()> = Forest::new();
//! forest.push(Node::new(1, 0, "Folder").with_flags(NodeFlags::DROPPABLE | NodeFlags::OPEN));
//! forest.push(Node::new(2, 1, "File"));
//!
//! let top: Vec<_> = forest.children(0).map(|n| n.id).collect();
//! assert_eq!(top, vec![1]);
//! assert!(forest.get(1).unwrap().is_droppable());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod forest;
pub mod types;

pub use forest::Forest;
pub use types::{Node, NodeFlags};
