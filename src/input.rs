//! Reading rectangles from text, and writing results back out.
//!
//! The input format has one rectangle per line, given as four integers
//! separated by whitespace: the coordinates of two opposite corners,
//! `x0 y0 x1 y1`. The corners can be in any order.

use std::io::{BufRead, Write};

use log::debug;
use thiserror::Error;

use crate::{Rectangle, Rectangles};

/// Bounds on the input that we're willing to accept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// The largest allowed absolute value of any coordinate.
    pub max_coordinate: u32,
    /// The largest allowed number of rectangles.
    pub max_rectangles: usize,
}

impl Limits {
    /// The default bound on coordinates.
    pub const DEFAULT_MAX_COORDINATE: u32 = 10_000;
    /// The default bound on the number of rectangles.
    pub const DEFAULT_MAX_RECTANGLES: usize = 100;
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_coordinate: Self::DEFAULT_MAX_COORDINATE,
            max_rectangles: Self::DEFAULT_MAX_RECTANGLES,
        }
    }
}

/// Something was wrong with the input text.
///
/// Line numbers start at 1.
#[derive(Debug, Error)]
pub enum InputError {
    /// A line didn't have exactly four fields.
    #[error("line {line}: expected 4 numbers, found {found} fields")]
    WrongFieldCount {
        /// The offending line.
        line: usize,
        /// How many whitespace-separated fields it had.
        found: usize,
    },
    /// A field wasn't an integer.
    #[error("line {line}: {token:?} is not a number")]
    NotANumber {
        /// The offending line.
        line: usize,
        /// The field that failed to parse.
        token: String,
    },
    /// A coordinate was too big or too small.
    #[error("line {line}: {token} is outside the range -{max}..={max}")]
    OutOfRange {
        /// The offending line.
        line: usize,
        /// The out-of-range coordinate, as written.
        token: String,
        /// The largest allowed absolute value.
        max: u32,
    },
    /// There were too many lines.
    #[error("more than {max} rectangles in the input")]
    TooManyRectangles {
        /// The largest allowed number of rectangles.
        max: usize,
    },
    /// There were no rectangles at all.
    #[error("the input is empty")]
    Empty,
    /// Reading failed.
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

/// Is this a string of decimal digits, possibly with a leading minus sign?
fn is_integer(token: &str) -> bool {
    let digits = token.strip_prefix('-').unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_coordinate(token: &str, line: usize, limits: &Limits) -> Result<i32, InputError> {
    let out_of_range = || InputError::OutOfRange {
        line,
        token: token.to_owned(),
        max: limits.max_coordinate,
    };

    // The token is known to be an integer, so parsing can only fail if it is
    // too long for an i64.
    let value: i64 = token.parse().map_err(|_| out_of_range())?;
    if value.unsigned_abs() > u64::from(limits.max_coordinate) {
        return Err(out_of_range());
    }
    i32::try_from(value).map_err(|_| out_of_range())
}

/// Parses one line of input into a rectangle.
pub fn parse_line(text: &str, line: usize, limits: &Limits) -> Result<Rectangle, InputError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let &[x0, y0, x1, y1] = tokens.as_slice() else {
        return Err(InputError::WrongFieldCount {
            line,
            found: tokens.len(),
        });
    };

    // Check that everything is a number before checking ranges, so that
    // a line like "1 2 99999 foo" is reported as malformed.
    if let Some(token) = tokens.iter().find(|t| !is_integer(t)) {
        return Err(InputError::NotANumber {
            line,
            token: (*token).to_owned(),
        });
    }

    Ok(Rectangle::from_coords([
        parse_coordinate(x0, line, limits)?,
        parse_coordinate(y0, line, limits)?,
        parse_coordinate(x1, line, limits)?,
        parse_coordinate(y1, line, limits)?,
    ]))
}

/// Reads and validates rectangles, one per line.
pub fn read_rectangles(reader: impl BufRead, limits: &Limits) -> Result<Rectangles, InputError> {
    let mut rects = Rectangles::default();
    for (idx, text) in reader.lines().enumerate() {
        let text = text?;
        let line = idx + 1;
        rects.push(parse_line(&text, line, limits)?);
        if rects.len() > limits.max_rectangles {
            return Err(InputError::TooManyRectangles {
                max: limits.max_rectangles,
            });
        }
    }

    if rects.is_empty() {
        return Err(InputError::Empty);
    }
    debug!("read {} rectangles", rects.len());
    Ok(rects)
}

/// Parses and validates rectangles, one per line.
pub fn parse_rectangles(text: &str, limits: &Limits) -> Result<Rectangles, InputError> {
    read_rectangles(text.as_bytes(), limits)
}

/// Writes an area as a decimal integer, with no trailing newline.
pub fn write_area(mut writer: impl Write, area: u64) -> std::io::Result<()> {
    write!(writer, "{area}")?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn parse(text: &str) -> Result<Rectangles, InputError> {
        parse_rectangles(text, &Limits::default())
    }

    #[test]
    fn normalizes() {
        let rects = parse("2 2 0 0\n1 3 3 1\n").unwrap();
        let expected: Rectangles = [[0, 0, 2, 2], [1, 1, 3, 3]].into_iter().collect();
        assert_eq!(rects, expected);
    }

    #[test]
    fn extra_whitespace() {
        let rects = parse("  -5\t-5 0   0 \n0 0 5 5").unwrap();
        assert_eq!(rects.len(), 2);
    }

    #[test]
    fn wrong_field_count() {
        assert_matches!(
            parse("0 0 1 1\n0 0 1\n"),
            Err(InputError::WrongFieldCount { line: 2, found: 3 })
        );
        assert_matches!(
            parse("0 0 1 1 1"),
            Err(InputError::WrongFieldCount { line: 1, found: 5 })
        );
        assert_matches!(
            parse("0 0 1 1\n\n0 0 1 1"),
            Err(InputError::WrongFieldCount { line: 2, found: 0 })
        );
    }

    #[test]
    fn not_a_number() {
        assert_matches!(
            parse("0 0 1 x"),
            Err(InputError::NotANumber { line: 1, token }) if token == "x"
        );
        assert_matches!(
            parse("0 0 1.5 1"),
            Err(InputError::NotANumber { line: 1, .. })
        );
        // Malformed fields are reported before out-of-range ones.
        assert_matches!(
            parse("99999 0 1 -"),
            Err(InputError::NotANumber { line: 1, token }) if token == "-"
        );
    }

    #[test]
    fn out_of_range() {
        assert!(parse("-10000 -10000 10000 10000").is_ok());
        assert_matches!(
            parse("0 0 1 1\n0 -10001 1 1"),
            Err(InputError::OutOfRange { line: 2, max: 10000, token }) if token == "-10001"
        );
        assert_matches!(
            parse("0 0 1 123456789012345678901234567890"),
            Err(InputError::OutOfRange { line: 1, .. })
        );
        assert_matches!(
            parse("123456789012345678901234567890 0 1 y"),
            Err(InputError::NotANumber { line: 1, token }) if token == "y"
        );
    }

    #[test]
    fn plus_sign_is_not_a_number() {
        assert_matches!(
            parse("+1 0 2 2"),
            Err(InputError::NotANumber { line: 1, token }) if token == "+1"
        );
    }

    #[test]
    fn widest_limit_still_fits_coordinates() {
        let limits = Limits {
            max_coordinate: u32::MAX,
            ..Limits::default()
        };
        let rects = parse_rectangles("-2147483648 0 2147483647 1", &limits).unwrap();
        assert_eq!(rects.len(), 1);
        assert_matches!(
            parse_rectangles("0 0 1 3000000000", &limits),
            Err(InputError::OutOfRange { line: 1, max: u32::MAX, .. })
        );
    }

    #[test]
    fn too_many() {
        let limits = Limits {
            max_rectangles: 3,
            ..Limits::default()
        };
        let text = "0 0 1 1\n".repeat(3);
        assert_eq!(parse_rectangles(&text, &limits).unwrap().len(), 3);

        let text = "0 0 1 1\n".repeat(4);
        assert_matches!(
            parse_rectangles(&text, &limits),
            Err(InputError::TooManyRectangles { max: 3 })
        );

        // The line past the limit is still parsed, and its own errors win.
        let text = format!("{}a b c\n", "0 0 1 1\n".repeat(3));
        assert_matches!(
            parse_rectangles(&text, &limits),
            Err(InputError::WrongFieldCount { line: 4, found: 3 })
        );
    }

    #[test]
    fn empty() {
        assert_matches!(parse(""), Err(InputError::Empty));
    }

    #[test]
    fn messages() {
        let err = parse("0 0 1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 1: expected 4 numbers, found 3 fields"
        );
        let err = parse("0 0 1 20000").unwrap_err();
        assert_eq!(
            err.to_string(),
            "line 1: 20000 is outside the range -10000..=10000"
        );
    }

    #[test]
    fn writes_plain_integer() {
        let mut out = Vec::new();
        write_area(&mut out, 1234567).unwrap();
        assert_eq!(out, b"1234567");
    }
}
