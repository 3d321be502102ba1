use super::*;
use common::shapes::{HasBounds, Rect};
use fxhash::FxHashSet;
use std::time::Instant;

fn validate_bounds(bounds: &Rect) -> QuadtreeResult<()> {
    let finite = bounds.x.is_finite()
        && bounds.y.is_finite()
        && bounds.width.is_finite()
        && bounds.height.is_finite();
    if !finite || bounds.width < 0.0 || bounds.height < 0.0 {
        return Err(QuadtreeError::InvalidBounds {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
        });
    }
    Ok(())
}

/// Every node slot a tree of this depth can ever allocate: sum of 4^d for
/// d in 0..=max_depth.
pub(crate) fn max_node_count(max_depth: u32) -> usize {
    let mut total = 1usize;
    let mut level = 1usize;
    for _ in 0..max_depth {
        level = level.saturating_mul(4);
        total = total.saturating_add(level);
    }
    total
}

impl<T: Copy + PartialEq + HasBounds> QuadTreeInner<T> {
    pub(crate) fn new_with_config(bounds: Rect, config: Config) -> QuadtreeResult<Self> {
        validate_bounds(&bounds)?;
        let max_objects = config.max_objects.max(1);
        let max_depth = config.max_depth as u32;
        let reserve = if config.pool_size > 0 {
            config.pool_size
        } else {
            max_node_count(max_depth)
        };
        let mut nodes = Vec::with_capacity(reserve);
        nodes.push(Node::new(bounds, 0, ROOT_NODE));
        let profile_remaining = if config.profile_summary {
            config.profile_limit.max(1)
        } else {
            0
        };
        Ok(Self {
            nodes,
            entities: Vec::new(),
            entity_extents: Vec::new(),
            seen: FxHashSet::default(),
            insert_stack: InsertStack::new(),
            query_stack: QueryStack::new(),
            max_objects,
            max_depth,
            profile_remaining,
            frame: 0,
        })
    }

    fn take_profile_summary(&mut self) -> bool {
        if self.profile_remaining == 0 {
            return false;
        }
        self.profile_remaining -= 1;
        true
    }

    pub(crate) fn add_many<I>(&mut self, entities: I)
    where
        I: IntoIterator<Item = T>,
    {
        let profile_start = if self.take_profile_summary() {
            Some(Instant::now())
        } else {
            None
        };
        let before = self.entities.len();

        for entity in entities {
            // Bounds are captured once per frame; the tree does no transform
            // math of its own.
            let extent = entity.bounds();
            let slot = self.entities.len() as u32;
            self.entities.push(entity);
            self.entity_extents.push(extent);
            self.insert(slot);
        }

        if let Some(start) = profile_start {
            eprintln!(
                "qt_profile frame {}: add: entities={} nodes={} elapsed={:.3}ms",
                self.frame,
                self.entities.len() - before,
                self.nodes.len(),
                start.elapsed().as_secs_f64() * 1000.0
            );
        }
    }

    fn insert(&mut self, entity_slot: u32) {
        let mut stack = std::mem::take(&mut self.insert_stack);
        let mut targets = [0usize; 4];
        stack.push((ROOT_NODE, entity_slot));

        while let Some((node_idx, slot)) = stack.pop() {
            let idx = node_idx as usize;

            if self.nodes[idx].is_branch {
                // Branches never hold objects; route to every overlapped child.
                let bounds = self.nodes[idx].bounds;
                let children = self.nodes[idx].children;
                let extent = self.entity_extents[slot as usize];
                let len = quadrant_indices(extent, bounds, &mut targets);
                for &q in &targets[..len] {
                    stack.push((children[q], slot));
                }
                continue;
            }

            self.nodes[idx].objects.push(slot);

            let over_capacity = self.nodes[idx].objects.len() > self.max_objects;
            if over_capacity && self.nodes[idx].depth < self.max_depth {
                self.split(node_idx);
                // Every held object is re-routed, not just the newest one.
                let bounds = self.nodes[idx].bounds;
                let children = self.nodes[idx].children;
                let mut spill = std::mem::take(&mut self.nodes[idx].objects);
                for held in spill.drain(..) {
                    let extent = self.entity_extents[held as usize];
                    let len = quadrant_indices(extent, bounds, &mut targets);
                    for &q in &targets[..len] {
                        stack.push((children[q], held));
                    }
                }
                // Hand the drained buffer back so its capacity survives.
                self.nodes[idx].objects = spill;
            }
            // At max_depth the leaf just keeps absorbing objects.
        }

        self.insert_stack = stack;
    }

    fn split(&mut self, node_idx: u32) {
        let idx = node_idx as usize;
        self.nodes[idx].is_branch = true;
        if self.nodes[idx].has_children() {
            // Children from an earlier split survive clear(); reuse them.
            return;
        }

        let bounds = self.nodes[idx].bounds;
        let depth = self.nodes[idx].depth + 1;
        let sub_w = (bounds.width / 2.0).floor();
        let sub_h = (bounds.height / 2.0).floor();
        let offsets = [(0.0, 0.0), (sub_w, 0.0), (0.0, sub_h), (sub_w, sub_h)];

        let mut children = [0u32; 4];
        for (i, (dx, dy)) in offsets.into_iter().enumerate() {
            children[i] = self.nodes.len() as u32;
            self.nodes.push(Node::new(
                Rect::new(bounds.x + dx, bounds.y + dy, sub_w, sub_h),
                depth,
                node_idx,
            ));
        }
        self.nodes[idx].children = children;
    }
}
