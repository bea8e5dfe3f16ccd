//! Utilities for generating examples, benchmarks, and test cases.

use crate::{Rectangle, Rectangles};

/// Generate a bunch of squares, arranged in a grid.
///
/// The bottom-left of the first square is at (x0, y0). Each square has size
/// `size x size`, and the distance between squares (both horizontally and
/// vertically) is `offset`.
fn squares((x0, y0): (i32, i32), size: i32, offset: i32, count: usize) -> Vec<Rectangle> {
    let mut ret = Vec::new();
    for i in 0..count as i32 {
        let x = x0 + i * offset;
        for j in 0..count as i32 {
            let y = y0 + j * offset;
            ret.push(Rectangle::new((x, y), (x + size, y + size)));
        }
    }
    ret
}

/// Generate an `n` by `n` checkerboard-like pattern with overlapping squares.
/// For `n = 3`, it looks like:
///
/// ```text
/// ┌────┐ ┌────┐ ┌────┐
/// │    │ │    │ │    │
/// │  ┌─┼─┼─┐┌─┼─┼─┐  │
/// └──┼─┘ └─┼┼─┘ └─┼──┘
/// ┌──┼─┐ ┌─┼┼─┐ ┌─┼──┐
/// │  └─┼─┼─┘└─┼─┼─┘  │
/// │  ┌─┼─┼─┐┌─┼─┼─┐  │
/// └──┼─┘ └─┼┼─┘ └─┼──┘
/// ┌──┼─┐ ┌─┼┼─┐ ┌─┼──┐
/// │  └─┼─┼─┘└─┼─┼─┘  │
/// │    │ │    │ │    │
/// └────┘ └────┘ └────┘
/// ```
///
/// The outer `n x n` squares have side 30 and the inner `(n - 1) x (n - 1)`
/// ones fill the gaps between them, overlapping each of their neighbors in a
/// 10 by 10 corner.
pub fn checkerboard(n: usize) -> Rectangles {
    let mut ret: Rectangles = squares((0, 0), 30, 40, n).into_iter().collect();
    ret.extend(squares((20, 20), 30, 40, n.saturating_sub(1)));
    ret
}

/// The exact area of [`checkerboard`]`(n)`.
pub fn checkerboard_area(n: usize) -> u64 {
    let n = n as u64;
    let inner = n.saturating_sub(1);
    // Each inner square overlaps four outer squares in a 10 by 10 corner.
    n * n * 900 + inner * inner * (900 - 4 * 100)
}

/// Generate `n` rectangles that all contain the origin, each one taller and
/// narrower than the last.
///
/// Every pair of rectangles overlaps, which is the worst case for counters that
/// walk over every slab.
pub fn staircase(n: usize) -> Rectangles {
    let n = n as i32;
    (1..=n)
        .map(|i| Rectangle::new((-(n - i + 1), -i), (n - i + 1, i)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{coverage::DenseCounter, union_area, AreaSweeper};

    #[test]
    fn checkerboard_areas() {
        for n in 1..5 {
            assert_eq!(checkerboard(n).len(), n * n + (n - 1) * (n - 1));
            assert_eq!(union_area(&checkerboard(n)).unwrap(), checkerboard_area(n));
        }
    }

    #[test]
    fn staircase_matches_dense() {
        let rects = staircase(12);
        let dense = AreaSweeper::<DenseCounter>::with_counter(&rects)
            .unwrap()
            .area();
        assert_eq!(union_area(&rects).unwrap(), dense);
    }
}
