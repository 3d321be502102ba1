use super::*;
use common::shapes::HasBounds;

impl<T: Copy + PartialEq + HasBounds> QuadTreeInner<T> {
    pub(crate) fn get_into(&mut self, entity: &T, out: &mut Vec<T>) {
        let extent = entity.bounds();
        self.seen.clear();
        let mut stack = std::mem::take(&mut self.query_stack);
        let mut targets = [0usize; 4];
        stack.push(ROOT_NODE);

        while let Some(node_idx) = stack.pop() {
            let node = &self.nodes[node_idx as usize];

            if node.is_branch {
                let len = quadrant_indices(extent, node.bounds, &mut targets);
                for &q in &targets[..len] {
                    stack.push(node.children[q]);
                }
                continue;
            }

            for &slot in &node.objects {
                let candidate = self.entities[slot as usize];
                if candidate == *entity {
                    continue;
                }
                // An entity straddling a midline sits in several leaves;
                // report it once.
                if self.seen.insert(slot) {
                    out.push(candidate);
                }
            }
        }

        self.query_stack = stack;
    }
}
