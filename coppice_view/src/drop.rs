// Copyright 2025 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop-target resolution for the current drag gesture.
//!
//! ## Overview
//!
//! [`is_droppable`] answers one question: may the node being dragged land in
//! this target right now? The level orchestrator consults it for the root
//! container only, which is what lets a drag released over empty canvas space
//! resolve to "insert at top level". Per-node targets are vetted by the same
//! rules when the embedding plumbing asks on hover.
//!
//! ## Rules
//!
//! - No drag in progress: nothing is a target.
//! - A node is never a target for itself.
//! - A non-root target must exist and carry
//!   [`DROPPABLE`](coppice_tree::NodeFlags::DROPPABLE); the root container
//!   needs no capability flag.
//! - A target inside the dragged node's own subtree is rejected, so a drop can
//!   never create a cycle.

use crate::types::TreeContext;

/// Whether `drop_target` accepts the in-progress drag of `drag_source`.
///
/// `drag_source` is `None` when no drag is in progress; the answer is then
/// always `false`. `drop_target` may be the root sentinel or any node id.
pub fn is_droppable<K: Copy + Eq, T>(
    drag_source: Option<K>,
    drop_target: K,
    ctx: &TreeContext<'_, K, T>,
) -> bool {
    let Some(source) = drag_source else {
        return false;
    };
    if source == drop_target {
        return false;
    }
    if drop_target != ctx.root {
        match ctx.forest.get(drop_target) {
            Some(target) if target.is_droppable() => {}
            _ => return false,
        }
        // Reject targets inside the dragged subtree.
        if ctx.forest.ancestors(drop_target).any(|a| a.id == source) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use coppice_tree::{Forest, Node, NodeFlags};

    // 1 (droppable) ── 3 (droppable) ── 4
    // 2
    fn ctx_forest() -> Forest<u32> {
        let mut f = Forest::new();
        f.push(Node::new(1, 0, "a").with_flags(NodeFlags::DROPPABLE));
        f.push(Node::new(2, 0, "b"));
        f.push(Node::new(3, 1, "c").with_flags(NodeFlags::DROPPABLE));
        f.push(Node::new(4, 3, "d"));
        f
    }

    #[test]
    fn no_drag_means_no_target() {
        let f = ctx_forest();
        let ctx = TreeContext::new(&f, 0);
        assert!(!is_droppable(None, 0, &ctx));
        assert!(!is_droppable(None, 1, &ctx));
    }

    #[test]
    fn self_drop_is_rejected() {
        let f = ctx_forest();
        let ctx = TreeContext::new(&f, 0);
        assert!(!is_droppable(Some(5), 5, &ctx));
        assert!(!is_droppable(Some(1), 1, &ctx));
    }

    #[test]
    fn root_accepts_any_foreign_drag() {
        let f = ctx_forest();
        let ctx = TreeContext::new(&f, 0);
        assert!(is_droppable(Some(5), 0, &ctx));
        assert!(is_droppable(Some(4), 0, &ctx));
    }

    #[test]
    fn non_root_target_requires_capability() {
        let f = ctx_forest();
        let ctx = TreeContext::new(&f, 0);
        assert!(is_droppable(Some(2), 1, &ctx));
        assert!(!is_droppable(Some(1), 2, &ctx), "node 2 is not droppable");
        assert!(!is_droppable(Some(1), 99, &ctx), "unknown target");
    }

    #[test]
    fn own_subtree_is_rejected() {
        let f = ctx_forest();
        let ctx = TreeContext::new(&f, 0);
        // 3 is a child of 1; dropping 1 into it would orphan the subtree.
        assert!(!is_droppable(Some(1), 3, &ctx));
        // A sibling subtree is fine.
        assert!(is_droppable(Some(2), 3, &ctx));
    }
}
