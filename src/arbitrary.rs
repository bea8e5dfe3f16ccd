//! Utilities for fuzz and/or property testing using `arbitrary`.

use arbitrary::Unstructured;

use crate::{Rectangle, Rectangles};

/// Generate an arbitrary coordinate in `-bound..=bound`, with a bias towards a
/// few special values.
///
/// Coincident edges are where the interesting cases are, so we want them to
/// turn up more often than they would if we picked uniformly.
fn coordinate(bound: i32, u: &mut Unstructured<'_>) -> Result<i32, arbitrary::Error> {
    let special: bool = u.arbitrary()?;
    if special {
        Ok(*u.choose(&[-bound, 0, bound])?)
    } else {
        u.int_in_range(-bound..=bound)
    }
}

/// Generate an arbitrary rectangle with all coordinates in `-bound..=bound`.
pub fn rectangle_in_range(
    bound: i32,
    u: &mut Unstructured<'_>,
) -> Result<Rectangle, arbitrary::Error> {
    let p = (coordinate(bound, u)?, coordinate(bound, u)?);
    let q = (coordinate(bound, u)?, coordinate(bound, u)?);
    Ok(Rectangle::new(p, q))
}

/// Generate an arbitrary rectangle that has a chance of sharing an edge or a
/// corner with `other`.
pub fn another_rectangle(
    other: &Rectangle,
    bound: i32,
    u: &mut Unstructured<'_>,
) -> Result<Rectangle, arbitrary::Error> {
    let fresh = rectangle_in_range(bound, u)?;
    let same_x: bool = u.arbitrary()?;
    let same_y: bool = u.arbitrary()?;

    let bl = other.bottom_left();
    let tr = fresh.top_right();
    let x0 = if same_x { bl.x } else { fresh.bottom_left().x };
    let y0 = if same_y { bl.y } else { fresh.bottom_left().y };
    Ok(Rectangle::new((x0, y0), (tr.x, tr.y)))
}

/// Generate up to `max_len` arbitrary rectangles with coordinates in `-bound..=bound`.
///
/// The result might be empty.
pub fn rectangles(
    bound: i32,
    max_len: usize,
    u: &mut Unstructured<'_>,
) -> Result<Rectangles, arbitrary::Error> {
    let len = u.int_in_range(0..=max_len)?;
    let mut ret = Rectangles::default();
    let mut prev: Option<Rectangle> = None;
    for _ in 0..len {
        let rect = match prev {
            Some(p) if u.arbitrary()? => another_rectangle(&p, bound, u)?,
            _ => rectangle_in_range(bound, u)?,
        };
        ret.push(rect);
        prev = Some(rect);
    }
    Ok(ret)
}
