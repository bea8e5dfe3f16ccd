#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

#[cfg(any(test, feature = "arbitrary"))]
pub mod arbitrary;
pub mod coverage;
mod geom;
pub mod input;
mod rectangles;
pub mod sweep;

#[cfg(feature = "generators")]
pub mod generators;

pub use geom::{Point, Rectangle};
pub use rectangles::{RectIdx, Rectangles};
pub use sweep::{union_area, AreaSweeper};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// The rectangles couldn't be swept.
///
/// These errors mean that the caller broke a precondition; problems with
/// reading or validating input are reported as [`input::InputError`] instead.
pub enum Error {
    /// There were no rectangles.
    NoRectangles,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NoRectangles => write!(f, "there were no rectangles to sweep"),
        }
    }
}

impl std::error::Error for Error {}
