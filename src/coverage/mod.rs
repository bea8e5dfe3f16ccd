//! Measuring how much of the sweep line is covered.
//!
//! As the sweep line moves across the plane, rectangles enter and leave it.
//! A [`CoverageCounter`] keeps track of which vertical intervals are currently
//! active, and reports the total length of the sweep line that lies inside at
//! least one of them.
//!
//! There are three implementations, all producing the same answers:
//!
//! - [`CompressedCounter`] only looks at the heights where some rectangle
//!   starts or ends, and keeps a count for each interval between consecutive
//!   heights. This is the default.
//! - [`TreeCounter`] arranges those same intervals in a segment tree, so that
//!   updates touch a logarithmic number of nodes and queries are constant-time.
//! - [`DenseCounter`] keeps a count for every unit of height. It's simple
//!   enough to be obviously correct, which makes it useful for testing the
//!   others, but its memory use grows with the coordinate range.

mod compressed;
mod dense;
mod tree;

pub use compressed::CompressedCounter;
pub use dense::DenseCounter;
pub use tree::TreeCounter;

use crate::{geom::Rectangle, sweep::EventKind, Rectangles};

/// Tracks the union of the vertical extents of the currently active rectangles.
pub trait CoverageCounter {
    /// Prepares a counter for sweeping over `rects`, with nothing active yet.
    ///
    /// Only rectangles from `rects` may be passed to [`apply`](Self::apply)
    /// afterwards.
    fn new(rects: &Rectangles) -> Self
    where
        Self: Sized;

    /// Activates (on [`EventKind::Enter`]) or deactivates (on
    /// [`EventKind::Exit`]) the vertical extent of `rect`.
    ///
    /// Every exit must be preceded by a matching enter.
    fn apply(&mut self, rect: &Rectangle, kind: EventKind);

    /// The total length covered by at least one active rectangle.
    fn covered_length(&self) -> u64;
}
