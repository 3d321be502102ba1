use super::*;
use common::shapes::{HasBounds, Rect};
use std::cell::RefCell;

impl<T: Copy + PartialEq + HasBounds> QuadTree<T> {
    pub fn new(bounds: Rect) -> QuadtreeResult<Self> {
        Self::new_with_config(bounds, Config::default())
    }

    pub fn new_with_config(bounds: Rect, config: Config) -> QuadtreeResult<Self> {
        Ok(Self {
            inner: RefCell::new(QuadTreeInner::new_with_config(bounds, config)?),
        })
    }

    /// Logically empties the tree. Node slots, children arrays and buffer
    /// capacities are all retained for the next frame.
    pub fn clear(&mut self) {
        self.inner.get_mut().clear();
    }

    /// Inserts a batch of entity handles; may trigger recursive splitting.
    pub fn add<I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.inner.get_mut().add_many(entities);
    }

    pub fn add_one(&mut self, entity: T) {
        self.inner.get_mut().add_many(std::iter::once(entity));
    }

    /// Candidate neighbors sharing leaf membership with `entity`, excluding
    /// the entity itself. Never changes what the tree holds.
    pub fn get(&self, entity: &T) -> Vec<T> {
        let mut out = Vec::new();
        self.get_into(entity, &mut out);
        out
    }

    /// `get` into a caller-owned buffer, so a game loop can reuse one
    /// candidate list across frames.
    pub fn get_into(&self, entity: &T, out: &mut Vec<T>) {
        self.inner.borrow_mut().get_into(entity, out);
    }

    /// Entities tracked this frame.
    pub fn len(&self) -> usize {
        self.inner.borrow().entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// (retained node slots, entities tracked this frame)
    pub fn storage_counts(&self) -> (usize, usize) {
        let inner = self.inner.borrow();
        (inner.nodes.len(), inner.entities.len())
    }

    /// Bounds of every node active in the current subdivision, for debug
    /// rendering.
    pub fn all_node_bounds(&self, out: &mut Vec<Rect>) {
        self.inner.borrow_mut().all_node_bounds(out);
    }

    /// Snapshot of the active tree structure.
    pub fn node_info(&self) -> Vec<NodeInfo> {
        self.inner.borrow_mut().node_info()
    }
}
