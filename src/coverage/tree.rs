use std::ops::Range;

use crate::{
    geom::{span, Rectangle},
    sweep::EventKind,
    Rectangles,
};

use super::CoverageCounter;

#[derive(Clone, Copy, Debug, Default)]
struct TreeNode {
    /// How many active rectangles contain this node's whole interval, without
    /// also containing its parent's.
    active: u32,
    /// The length of this node's interval that is covered, by rectangles
    /// counted either here or somewhere below.
    covered: u64,
}

/// A coverage counter that stores the compressed slabs in a segment tree.
///
/// The leaves are the intervals between consecutive rectangle boundaries (as
/// in [`CompressedCounter`](super::CompressedCounter)), and the internal nodes
/// are unions of adjacent leaves. The tree is stored as a heap: the children of
/// node `i` are at `2 * i + 1` and `2 * i + 2`. Activating a rectangle marks
/// the `O(log n)` nodes that exactly tile its extent, and every node caches its
/// covered length, so the root always knows the total.
#[derive(Clone, Debug)]
pub struct TreeCounter {
    ys: Vec<i32>,
    tree: Vec<TreeNode>,
}

impl TreeCounter {
    fn leaf_count(&self) -> usize {
        self.ys.len().saturating_sub(1)
    }

    // `leaves` is the range of leaves below `idx`, and `target` is the range of
    // leaves we want to update.
    fn update(&mut self, idx: usize, leaves: Range<usize>, target: &Range<usize>, kind: EventKind) {
        if target.end <= leaves.start || leaves.end <= target.start {
            return;
        }

        if target.start <= leaves.start && leaves.end <= target.end {
            let node = &mut self.tree[idx];
            match kind {
                EventKind::Enter => node.active += 1,
                EventKind::Exit => {
                    debug_assert!(node.active > 0, "exit without enter at node {idx}");
                    node.active -= 1;
                }
            }
        } else {
            let mid = (leaves.start + leaves.end) / 2;
            self.update(2 * idx + 1, leaves.start..mid, target, kind);
            self.update(2 * idx + 2, mid..leaves.end, target, kind);
        }

        self.recompute(idx, leaves);
    }

    fn recompute(&mut self, idx: usize, leaves: Range<usize>) {
        let covered = if self.tree[idx].active > 0 {
            span(self.ys[leaves.start], self.ys[leaves.end])
        } else if leaves.len() == 1 {
            0
        } else {
            self.tree[2 * idx + 1].covered + self.tree[2 * idx + 2].covered
        };
        self.tree[idx].covered = covered;
    }

    #[cfg(feature = "slow-asserts")]
    fn check_invariants(&self) {
        fn check(tree: &TreeCounter, idx: usize, leaves: Range<usize>) -> u64 {
            let node = tree.tree[idx];
            let expected = if node.active > 0 {
                span(tree.ys[leaves.start], tree.ys[leaves.end])
            } else if leaves.len() == 1 {
                0
            } else {
                let mid = (leaves.start + leaves.end) / 2;
                check(tree, 2 * idx + 1, leaves.start..mid)
                    + check(tree, 2 * idx + 2, mid..leaves.end)
            };
            assert_eq!(node.covered, expected);
            expected
        }

        if self.leaf_count() > 0 {
            check(self, 0, 0..self.leaf_count());
        }
    }

    #[cfg(not(feature = "slow-asserts"))]
    fn check_invariants(&self) {}
}

impl CoverageCounter for TreeCounter {
    fn new(rects: &Rectangles) -> Self {
        let ys = rects.y_boundaries();
        // A heap with `n` leaves, split in the middle at every level, fits
        // in `4 * n` nodes.
        let tree = vec![TreeNode::default(); 4 * ys.len().saturating_sub(1)];
        TreeCounter { ys, tree }
    }

    fn apply(&mut self, rect: &Rectangle, kind: EventKind) {
        let y_range = rect.y_range();
        let start = self.ys.partition_point(|&y| y < y_range.start);
        let end = self.ys.partition_point(|&y| y < y_range.end);
        if start < end {
            let leaves = 0..self.leaf_count();
            self.update(0, leaves, &(start..end), kind);
        }
        self.check_invariants();
    }

    fn covered_length(&self) -> u64 {
        self.tree.first().map_or(0, |root| root.covered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RectIdx;

    #[test]
    fn basic() {
        let rects: Rectangles = [[0, 0, 1, 10], [0, 1, 1, 9], [0, 0, 1, 2]]
            .into_iter()
            .collect();
        let mut counter = TreeCounter::new(&rects);
        assert_eq!(counter.ys, vec![0, 1, 2, 9, 10]);
        assert_eq!(counter.covered_length(), 0);

        counter.apply(&rects[RectIdx(1)], EventKind::Enter);
        assert_eq!(counter.covered_length(), 8);
        counter.apply(&rects[RectIdx(2)], EventKind::Enter);
        assert_eq!(counter.covered_length(), 9);
        counter.apply(&rects[RectIdx(0)], EventKind::Enter);
        assert_eq!(counter.covered_length(), 10);
        counter.apply(&rects[RectIdx(0)], EventKind::Exit);
        counter.apply(&rects[RectIdx(1)], EventKind::Exit);
        assert_eq!(counter.covered_length(), 2);
        counter.apply(&rects[RectIdx(2)], EventKind::Exit);
        assert_eq!(counter.covered_length(), 0);
    }

    #[test]
    fn no_leaves() {
        let rects: Rectangles = [[0, 4, 5, 4]].into_iter().collect();
        let mut counter = TreeCounter::new(&rects);
        counter.apply(&rects[RectIdx(0)], EventKind::Enter);
        assert_eq!(counter.covered_length(), 0);
        counter.apply(&rects[RectIdx(0)], EventKind::Exit);
        assert_eq!(counter.covered_length(), 0);
    }
}
