//! The sweep-line area computation.
//!
//! A vertical line sweeps from left to right over the plane. It stops at every
//! vertical rectangle edge, and between two consecutive stops the set of
//! rectangles crossing the line doesn't change. So the area swept between two
//! stops is just the distance between them times the length of the line that is
//! inside some rectangle, which a [`CoverageCounter`] keeps track of.
//!
//! The main entry point is [`AreaSweeper`].

mod event;

pub use event::{sorted_events, Event, EventKind};

use log::{debug, trace};

use crate::{
    coverage::{CompressedCounter, CoverageCounter},
    geom::span,
    Error, Rectangles,
};

#[cfg(feature = "slow-asserts")]
use crate::coverage::DenseCounter;

/// Computes the area of a union of rectangles by sweeping over them once.
///
/// The type parameter chooses how the covered length of the sweep line is
/// measured; the default is a [`CompressedCounter`]. A sweeper is used up by
/// computing the area: to do it again, make a new one.
#[derive(Debug)]
pub struct AreaSweeper<'a, C = CompressedCounter> {
    rects: &'a Rectangles,
    events: Vec<Event>,
    counter: C,
    // Only present when the rectangles are short enough for a dense counter.
    #[cfg(feature = "slow-asserts")]
    reference: Option<DenseCounter>,
}

/// The tallest vertical extent that `slow-asserts` will check with a dense counter.
#[cfg(feature = "slow-asserts")]
const MAX_REFERENCE_HEIGHT: u64 = 1 << 20;

impl<'a> AreaSweeper<'a, CompressedCounter> {
    /// Prepares to sweep over `rects`, using the default coverage counter.
    ///
    /// Returns an error if `rects` is empty.
    pub fn new(rects: &'a Rectangles) -> Result<Self, Error> {
        Self::with_counter(rects)
    }
}

impl<'a, C: CoverageCounter> AreaSweeper<'a, C> {
    /// Prepares to sweep over `rects`, measuring coverage with a `C`.
    ///
    /// Returns an error if `rects` is empty.
    pub fn with_counter(rects: &'a Rectangles) -> Result<Self, Error> {
        if rects.is_empty() {
            return Err(Error::NoRectangles);
        }

        let events = sorted_events(rects);
        debug!(
            "sweeping {} rectangles ({} events)",
            rects.len(),
            events.len()
        );

        Ok(AreaSweeper {
            rects,
            events,
            counter: C::new(rects),
            #[cfg(feature = "slow-asserts")]
            reference: rects
                .bounding_box()
                .filter(|bbox| bbox.height() <= MAX_REFERENCE_HEIGHT)
                .map(|_| DenseCounter::new(rects)),
        })
    }

    /// The events of this sweep, in the order they will be processed.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Runs the sweep, returning the total area covered by the rectangles.
    ///
    /// Overlapping parts are only counted once.
    pub fn area(mut self) -> u64 {
        // The covered length is zero before the first event, so it doesn't
        // matter where the sweep starts as long as it's no later than that.
        let Some(mut prev_x) = self.events.first().map(|ev| ev.x) else {
            return 0;
        };

        // This can't overflow: the total is at most the area of the bounding box,
        // and the bounding box of any `i32` rectangles has area less than `2^64`.
        let mut area: u64 = 0;
        for ev in &self.events {
            let covered = self.counter.covered_length();
            area += span(prev_x, ev.x) * covered;
            trace!("{ev:?}: covered length {covered} since {prev_x}, area {area}");

            let rect = &self.rects[ev.rect];
            self.counter.apply(rect, ev.kind);
            #[cfg(feature = "slow-asserts")]
            if let Some(reference) = &mut self.reference {
                reference.apply(rect, ev.kind);
                assert_eq!(self.counter.covered_length(), reference.covered_length());
            }
            prev_x = ev.x;
        }

        debug!("union area is {area}");
        area
    }
}

/// Computes the total area covered by `rects`, counting overlapping parts only once.
///
/// Returns an error if `rects` is empty.
pub fn union_area(rects: &Rectangles) -> Result<u64, Error> {
    Ok(AreaSweeper::new(rects)?.area())
}
