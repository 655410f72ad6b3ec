//! Lines segment manipulator: one vector element, or one jagged row, per line.
//!
//! Row count policy for parsing:
//! - a declared row count is always honored;
//! - otherwise [`parse_lines`] reads to end of input, and
//!   [`parse_lines_with_rows`] reads exactly the caller's count.
//!
//! Column counts of jagged rows are never declared and never compared.

use crate::error::{IoError, Terminator};
use crate::io::tokens::{self, cell, element};
use crate::segment::{LinesSegment, LinesVariable, SegmentKind};
use crate::trace;
use std::io::{BufRead, Write};

/// Parse the segment, reading to end of input when no row count is declared.
///
/// # Errors
/// - [`IoError::InsufficientTokens`] when a declared row is missing, or a
///   vector row is empty.
/// - [`IoError::UnexpectedToken`] when a vector row holds more than one token.
/// - [`IoError::Parse`] when a token does not convert.
///
/// The bound container is replaced only when every row parses.
pub fn parse_lines<R: BufRead + ?Sized>(
    segment: &mut LinesSegment<'_>,
    input: &mut R,
) -> Result<(), IoError> {
    parse_rows(segment, input, None)
}

/// Parse the segment, reading `rows` lines when it declares no row count of
/// its own. A declared row count takes precedence over `rows`.
///
/// # Errors
/// See [`parse_lines`].
pub fn parse_lines_with_rows<R: BufRead + ?Sized>(
    segment: &mut LinesSegment<'_>,
    input: &mut R,
    rows: usize,
) -> Result<(), IoError> {
    parse_rows(segment, input, Some(rows))
}

fn parse_rows<R: BufRead + ?Sized>(
    segment: &mut LinesSegment<'_>,
    input: &mut R,
    hint: Option<usize>,
) -> Result<(), IoError> {
    let rows = segment.rows.or(hint);
    let count = match &mut segment.variable {
        LinesVariable::Vector(vector) => {
            let name = vector.name().to_string();
            let lines = tokens::read_rows(input, &name, rows, |i, line| {
                let words = tokens::tokenize(line);
                match words.as_slice() {
                    [_] => Ok(()),
                    [] => Err(IoError::InsufficientTokens {
                        variable: element(&name, i),
                        found: Terminator::Newline,
                    }),
                    [_, extra, ..] => Err(IoError::UnexpectedToken {
                        after: element(&name, i),
                        found: (*extra).to_string(),
                    }),
                }
            })?;
            let words: Vec<&str> = lines.iter().map(String::as_str).map(str::trim).collect();
            let bad = |i: usize| IoError::Parse {
                variable: element(&name, i),
                token: words[i].to_string(),
            };
            vector.storage.accepts(&words).map_err(bad)?;
            vector.storage.assign(&words).map_err(bad)?;
            words.len()
        }
        LinesVariable::Jagged(matrix) => {
            let name = matrix.name().to_string();
            let lines = tokens::read_rows(input, &name, rows, |_, _| Ok(()))?;
            let grid: Vec<Vec<&str>> = lines.iter().map(|l| tokens::tokenize(l)).collect();
            let bad = |(r, c): (usize, usize)| IoError::Parse {
                variable: cell(&name, r, c),
                token: grid[r][c].to_string(),
            };
            matrix.storage.accepts(&grid).map_err(bad)?;
            matrix.storage.assign(&grid).map_err(bad)?;
            grid.len()
        }
    };
    trace::segment_parsed(SegmentKind::Lines, count);
    Ok(())
}

/// Print one line per vector element or per jagged row.
///
/// # Errors
/// - [`IoError::SizeMismatch`] when a declared row count differs from the
///   bound container's length; nothing is written in that case.
/// - [`IoError::Io`] when the output fails.
pub fn print_lines<W: Write + ?Sized>(
    segment: &LinesSegment<'_>,
    output: &mut W,
) -> Result<(), IoError> {
    let mut buf = String::new();
    match &segment.variable {
        LinesVariable::Vector(vector) => {
            let actual = vector.len();
            if let Some(expected) = segment.rows
                && expected != actual
            {
                return Err(IoError::vector_elements(vector.name(), expected, actual));
            }
            for i in 0..actual {
                tokens::push_row(&mut buf, [vector.storage.render(i)]);
            }
        }
        LinesVariable::Jagged(matrix) => {
            let actual = matrix.rows();
            if let Some(expected) = segment.rows
                && expected != actual
            {
                return Err(IoError::matrix_rows(matrix.name(), expected, actual));
            }
            for r in 0..actual {
                tokens::push_row(&mut buf, matrix.storage.render_row(r));
            }
        }
    }
    tokens::emit(output, &buf)?;
    trace::segment_printed(SegmentKind::Lines, buf.len());
    Ok(())
}
