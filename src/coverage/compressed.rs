use crate::{
    geom::{span, Rectangle},
    sweep::EventKind,
    Rectangles,
};

use super::CoverageCounter;

/// A vertical interval between two consecutive rectangle boundaries.
///
/// Every rectangle either contains a slab completely or doesn't overlap it at
/// all, because no rectangle boundary falls strictly inside a slab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Slab {
    start: i32,
    end: i32,
    /// How many active rectangles contain this slab.
    active: u32,
}

/// A coverage counter that uses coordinate compression.
///
/// The sorted, distinct `y` coordinates of all rectangles split the vertical
/// axis into slabs, and we keep a count of active rectangles for each slab.
/// The slabs are fixed when the counter is created; only their counts change.
#[derive(Clone, Debug)]
pub struct CompressedCounter {
    slabs: Vec<Slab>,
}

impl CompressedCounter {
    /// The slabs contained in `rect`, which are contiguous because the slabs
    /// are sorted.
    fn slabs_in(&mut self, rect: &Rectangle) -> &mut [Slab] {
        let ys = rect.y_range();
        let first = self.slabs.partition_point(|s| s.start < ys.start);
        let len = self.slabs[first..].partition_point(|s| s.end <= ys.end);
        &mut self.slabs[first..(first + len)]
    }

    #[cfg(feature = "slow-asserts")]
    fn check_invariants(&self) {
        for pair in self.slabs.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        for slab in &self.slabs {
            assert!(slab.start < slab.end);
        }
    }

    #[cfg(not(feature = "slow-asserts"))]
    fn check_invariants(&self) {}
}

impl CoverageCounter for CompressedCounter {
    fn new(rects: &Rectangles) -> Self {
        let slabs = rects
            .y_boundaries()
            .windows(2)
            .map(|pair| Slab {
                start: pair[0],
                end: pair[1],
                active: 0,
            })
            .collect();
        CompressedCounter { slabs }
    }

    fn apply(&mut self, rect: &Rectangle, kind: EventKind) {
        for slab in self.slabs_in(rect) {
            match kind {
                EventKind::Enter => slab.active += 1,
                EventKind::Exit => {
                    debug_assert!(slab.active > 0, "exit without enter at {slab:?}");
                    slab.active -= 1;
                }
            }
        }
        self.check_invariants();
    }

    fn covered_length(&self) -> u64 {
        self.slabs
            .iter()
            .filter(|s| s.active > 0)
            .map(|s| span(s.start, s.end))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slabs_partition_the_extent() {
        let rects: Rectangles = [[0, 0, 2, 2], [1, 1, 3, 3], [0, 0, 0, 5]]
            .into_iter()
            .collect();
        let counter = CompressedCounter::new(&rects);
        let bounds: Vec<_> = counter.slabs.iter().map(|s| (s.start, s.end)).collect();
        assert_eq!(bounds, vec![(0, 1), (1, 2), (2, 3), (3, 5)]);
        assert!(counter.slabs.iter().all(|s| s.active == 0));
    }

    #[test]
    fn only_contained_slabs_change() {
        let rects: Rectangles = [[0, 0, 2, 2], [1, 1, 3, 3]].into_iter().collect();
        let mut counter = CompressedCounter::new(&rects);
        counter.apply(&rects[crate::RectIdx(1)], EventKind::Enter);
        let active: Vec<_> = counter.slabs.iter().map(|s| s.active).collect();
        assert_eq!(active, vec![0, 1, 1]);
        assert_eq!(counter.covered_length(), 2);
    }

    #[test]
    fn single_boundary() {
        // All the rectangles are flat at the same height, so there are no slabs.
        let rects: Rectangles = [[0, 1, 5, 1], [2, 1, 8, 1]].into_iter().collect();
        let mut counter = CompressedCounter::new(&rects);
        assert!(counter.slabs.is_empty());
        counter.apply(&rects[crate::RectIdx(0)], EventKind::Enter);
        assert_eq!(counter.covered_length(), 0);
    }
}
