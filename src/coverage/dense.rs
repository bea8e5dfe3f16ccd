use crate::{
    geom::{span, Rectangle},
    sweep::EventKind,
    Rectangles,
};

use super::CoverageCounter;

/// A coverage counter with one cell per unit of height.
///
/// This uses memory proportional to the vertical extent of the rectangles, and
/// every update and query walks over the cells one by one. Use it as a
/// reference for small inputs, not in production.
#[derive(Clone, Debug)]
pub struct DenseCounter {
    /// The height of the bottom of `cells[0]`.
    bottom: i32,
    cells: Vec<u32>,
}

impl DenseCounter {
    fn cell_idx(&self, y: i32) -> usize {
        span(self.bottom, y) as usize
    }
}

impl CoverageCounter for DenseCounter {
    fn new(rects: &Rectangles) -> Self {
        match rects.bounding_box() {
            Some(bbox) => DenseCounter {
                bottom: bbox.bottom_left().y,
                cells: vec![0; bbox.height() as usize],
            },
            None => DenseCounter {
                bottom: 0,
                cells: Vec::new(),
            },
        }
    }

    fn apply(&mut self, rect: &Rectangle, kind: EventKind) {
        let ys = rect.y_range();
        let start = self.cell_idx(ys.start);
        let end = self.cell_idx(ys.end);
        for cell in &mut self.cells[start..end] {
            match kind {
                EventKind::Enter => *cell += 1,
                EventKind::Exit => {
                    debug_assert!(*cell > 0);
                    *cell -= 1;
                }
            }
        }
    }

    fn covered_length(&self) -> u64 {
        self.cells.iter().filter(|&&c| c > 0).count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_heights() {
        let rects: Rectangles = [[-5, -5, 0, 0], [0, 0, 5, 5]].into_iter().collect();
        let mut counter = DenseCounter::new(&rects);
        assert_eq!(counter.cells.len(), 10);

        counter.apply(&rects[crate::RectIdx(0)], EventKind::Enter);
        assert_eq!(counter.covered_length(), 5);
        assert!(counter.cells[..5].iter().all(|&c| c == 1));
        counter.apply(&rects[crate::RectIdx(1)], EventKind::Enter);
        assert_eq!(counter.covered_length(), 10);
        counter.apply(&rects[crate::RectIdx(0)], EventKind::Exit);
        assert_eq!(counter.covered_length(), 5);
    }
}
