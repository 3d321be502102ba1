use super::*;
use common::shapes::{HasBounds, Rect};
use fxhash::FxHashSet;
use std::cell::RefCell;

pub(crate) const ROOT_NODE: u32 = 0;

pub(crate) struct Node {
    pub(crate) bounds: Rect,
    pub(crate) depth: u32,
    // Non-owning back-reference, consulted only by diagnostics.
    pub(crate) parent: u32,
    pub(crate) is_branch: bool,
    // Frame entity slots held while this node is a leaf; empty on branches.
    pub(crate) objects: Vec<u32>,
    // 0 means "never split": slot 0 holds the root, which is never a child.
    // Once populated the array is kept for the lifetime of the tree.
    pub(crate) children: [u32; 4],
}

impl Node {
    pub(crate) fn new(bounds: Rect, depth: u32, parent: u32) -> Self {
        Self {
            bounds,
            depth,
            parent,
            is_branch: false,
            objects: Vec::new(),
            children: [0; 4],
        }
    }

    #[inline(always)]
    pub(crate) fn has_children(&self) -> bool {
        self.children[0] != 0
    }
}

/// Snapshot of one active node, for debug rendering and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeInfo {
    pub index: u32,
    pub bounds: Rect,
    pub depth: u32,
    pub parent: Option<u32>,
    pub is_branch: bool,
    pub object_count: usize,
}

/// Broad-phase quadtree over lightweight entity handles.
///
/// Driven once per frame in the order `clear()`, `add(..)`, then any number
/// of `get(..)` calls. Single-threaded by contract; the interior `RefCell`
/// keeps the type `!Sync` so the restriction is visible to the compiler.
pub struct QuadTree<T> {
    pub(crate) inner: RefCell<QuadTreeInner<T>>,
}

pub(crate) struct QuadTreeInner<T> {
    // Node slots are allocated once and never freed; `clear` only resets
    // their leaf/branch state.
    pub(crate) nodes: Vec<Node>,
    // This frame's roster. Leaf object lists index into it.
    pub(crate) entities: Vec<T>,
    pub(crate) entity_extents: Vec<Rect>,
    pub(crate) seen: FxHashSet<u32>,
    pub(crate) insert_stack: InsertStack,
    pub(crate) query_stack: QueryStack,
    pub(crate) max_objects: usize,
    pub(crate) max_depth: u32,
    pub(crate) profile_remaining: u32,
    pub(crate) frame: u64,
}

impl<T: Copy + PartialEq + HasBounds> QuadTreeInner<T> {
    pub(crate) fn clear(&mut self) {
        for node in &mut self.nodes {
            node.objects.clear();
            node.is_branch = false;
        }
        self.entities.clear();
        self.entity_extents.clear();
        self.frame = self.frame.wrapping_add(1);
    }

    pub(crate) fn all_node_bounds(&mut self, out: &mut Vec<Rect>) {
        let mut stack = std::mem::take(&mut self.query_stack);
        stack.push(ROOT_NODE);
        while let Some(node_idx) = stack.pop() {
            let node = &self.nodes[node_idx as usize];
            out.push(node.bounds);
            if node.is_branch {
                stack.extend_from_slice(&node.children);
            }
        }
        self.query_stack = stack;
    }

    pub(crate) fn node_info(&mut self) -> Vec<NodeInfo> {
        let mut out = Vec::new();
        let mut stack = std::mem::take(&mut self.query_stack);
        stack.push(ROOT_NODE);
        while let Some(node_idx) = stack.pop() {
            let node = &self.nodes[node_idx as usize];
            out.push(NodeInfo {
                index: node_idx,
                bounds: node.bounds,
                depth: node.depth,
                parent: (node_idx != ROOT_NODE).then_some(node.parent),
                is_branch: node.is_branch,
                object_count: node.objects.len(),
            });
            if node.is_branch {
                stack.extend_from_slice(&node.children);
            }
        }
        self.query_stack = stack;
        out
    }
}
