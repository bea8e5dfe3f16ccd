use crate::geom::Rectangle;

/// An index into our rectangle arena.
///
/// Sweep events refer back to the rectangle that produced them through this
/// index, instead of carrying a copy of the rectangle. (Of course, this
/// index-as-identifier breaks down if there are multiple `Rectangles` in flight.
/// Just be careful not to mix them up.)
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, serde::Serialize)]
pub struct RectIdx(pub usize);

impl std::fmt::Debug for RectIdx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r_{}", self.0)
    }
}

/// An arena of rectangles.
///
/// Rectangles are indexed by [`RectIdx`] and can be retrieved by indexing
/// (i.e. with square brackets). The arena keeps its rectangles in insertion
/// order, and never removes or modifies them.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Rectangles {
    rects: Vec<Rectangle>,
}

impl Rectangles {
    /// The number of rectangles in this arena.
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    /// Are there no rectangles at all?
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Adds a rectangle, returning its index.
    pub fn push(&mut self, rect: impl Into<Rectangle>) -> RectIdx {
        self.rects.push(rect.into());
        RectIdx(self.rects.len() - 1)
    }

    /// Iterate over all indices that can be used to index into this arena.
    pub fn indices(&self) -> impl Iterator<Item = RectIdx> {
        (0..self.rects.len()).map(RectIdx)
    }

    /// Iterate over all rectangles in this arena.
    pub fn rectangles(&self) -> impl Iterator<Item = &Rectangle> {
        self.rects.iter()
    }

    /// Iterate over indices and rectangles.
    pub fn iter(&self) -> impl Iterator<Item = (RectIdx, &Rectangle)> + '_ {
        self.rects
            .iter()
            .enumerate()
            .map(|(idx, r)| (RectIdx(idx), r))
    }

    /// All the distinct `y` coordinates of rectangle boundaries, in increasing order.
    ///
    /// These are the only heights at which the vertical coverage of a sweep line
    /// can change.
    pub fn y_boundaries(&self) -> Vec<i32> {
        let mut ys: Vec<i32> = Vec::with_capacity(self.rects.len() * 2);
        ys.extend(self.rects.iter().map(|r| r.bottom_left().y));
        ys.extend(self.rects.iter().map(|r| r.top_right().y));
        ys.sort_unstable();
        ys.dedup();
        ys
    }

    /// The smallest rectangle containing all the rectangles in this arena,
    /// or `None` if the arena is empty.
    pub fn bounding_box(&self) -> Option<Rectangle> {
        let mut rects = self.rects.iter();
        let first = *rects.next()?;
        Some(rects.fold(first, |bbox, r| {
            Rectangle::new(
                bbox.bottom_left().min_coords(r.bottom_left()),
                bbox.top_right().max_coords(r.top_right()),
            )
        }))
    }
}

impl std::ops::Index<RectIdx> for Rectangles {
    type Output = Rectangle;

    fn index(&self, index: RectIdx) -> &Self::Output {
        &self.rects[index.0]
    }
}

impl<R: Into<Rectangle>> FromIterator<R> for Rectangles {
    fn from_iter<T: IntoIterator<Item = R>>(iter: T) -> Self {
        Rectangles {
            rects: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<R: Into<Rectangle>> Extend<R> for Rectangles {
    fn extend<T: IntoIterator<Item = R>>(&mut self, iter: T) {
        self.rects.extend(iter.into_iter().map(Into::into));
    }
}

impl From<Vec<Rectangle>> for Rectangles {
    fn from(rects: Vec<Rectangle>) -> Self {
        Rectangles { rects }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_sorted_and_distinct() {
        let rects: Rectangles = [[0, 5, 2, 1], [1, 1, 3, 3], [0, 0, 0, 5]]
            .into_iter()
            .collect();
        assert_eq!(rects.y_boundaries(), vec![0, 1, 3, 5]);
    }

    #[test]
    fn indexing() {
        let mut rects = Rectangles::default();
        let a = rects.push([0, 0, 1, 1]);
        let b = rects.push([2, 2, -1, -1]);
        assert_eq!(format!("{b:?}"), "r_1");
        assert_eq!(rects[a].area(), 1);
        assert_eq!(rects[b], Rectangle::new((-1, -1), (2, 2)));
        assert_eq!(rects.indices().collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn bounding_box() {
        assert_eq!(Rectangles::default().bounding_box(), None);

        let rects: Rectangles = [[0, 0, 1, 1], [-3, 2, -2, 7]].into_iter().collect();
        assert_eq!(rects.bounding_box(), Some(Rectangle::new((-3, 0), (1, 7))));
    }
}
