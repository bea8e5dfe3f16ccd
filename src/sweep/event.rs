use crate::{RectIdx, Rectangles};

/// Whether a rectangle is entering or leaving the sweep line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The sweep line has reached the left edge of a rectangle.
    Enter,
    /// The sweep line has reached the right edge of a rectangle.
    Exit,
}

/// A position on the horizontal axis where a rectangle starts or stops
/// intersecting the sweep line.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event {
    /// The horizontal position of this event.
    pub x: i32,
    /// Entering or leaving?
    pub kind: EventKind,
    /// The rectangle that this event belongs to.
    pub rect: RectIdx,
}

impl std::fmt::Debug for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = match self.kind {
            EventKind::Enter => "enter",
            EventKind::Exit => "exit",
        };
        write!(f, "{kind} {:?} @ {}", self.rect, self.x)
    }
}

/// All the events for a collection of rectangles, ordered by their horizontal
/// position.
///
/// Every rectangle produces two events, one at each of its vertical edges. We
/// don't promise anything about the order of events at the same position:
/// the area computation doesn't need it.
pub fn sorted_events(rects: &Rectangles) -> Vec<Event> {
    let mut events = Vec::with_capacity(rects.len() * 2);
    for (idx, rect) in rects.iter() {
        events.push(Event {
            x: rect.bottom_left().x,
            kind: EventKind::Enter,
            rect: idx,
        });
        events.push(Event {
            x: rect.top_right().x,
            kind: EventKind::Exit,
            rect: idx,
        });
    }
    events.sort_unstable_by_key(|ev| ev.x);
    events
}
