//! Grid segment manipulator: a rectangular `R x C` matrix.
//!
//! Layout: `R` lines of exactly `C` space-separated tokens each. Short or
//! long rows are rejected, never padded or truncated.

use crate::error::IoError;
use crate::io::tokens::{self, cell};
use crate::segment::{GridSegment, SegmentKind};
use crate::trace;
use std::io::{BufRead, Write};

/// Parse `R` rows of `C` tokens into the bound matrix.
///
/// # Errors
/// - [`IoError::InsufficientTokens`] when fewer than `R` lines remain.
/// - [`IoError::SizeMismatch`] when a row does not hold exactly `C` tokens;
///   the message cites the 0-based row index.
/// - [`IoError::Parse`] when a token does not convert.
///
/// The matrix is replaced only when every row parses.
pub fn parse_grid<R: BufRead + ?Sized>(
    segment: &mut GridSegment<'_>,
    input: &mut R,
) -> Result<(), IoError> {
    let (rows, columns) = (segment.rows, segment.columns);
    let name = segment.matrix.name().to_string();
    let lines = tokens::read_rows(input, &name, Some(rows), |r, line| {
        let actual = tokens::tokenize(line).len();
        if actual == columns {
            Ok(())
        } else {
            Err(IoError::row_columns(&name, r, columns, actual))
        }
    })?;
    let grid: Vec<Vec<&str>> = lines.iter().map(|l| tokens::tokenize(l)).collect();
    let bad = |(r, c): (usize, usize)| IoError::Parse {
        variable: cell(&name, r, c),
        token: grid[r][c].to_string(),
    };
    segment.matrix.storage.accepts(&grid).map_err(bad)?;
    segment.matrix.storage.assign(&grid).map_err(bad)?;
    trace::segment_parsed(SegmentKind::Grid, rows);
    Ok(())
}

/// Print the bound matrix as `R` lines of `C` tokens.
///
/// The row count is checked before any row is inspected; then each row's
/// column count is checked in order.
///
/// # Errors
/// - [`IoError::SizeMismatch`] on a row or column count mismatch; nothing is
///   written in that case.
/// - [`IoError::Io`] when the output fails.
pub fn print_grid<W: Write + ?Sized>(
    segment: &GridSegment<'_>,
    output: &mut W,
) -> Result<(), IoError> {
    let matrix = &segment.matrix;
    let actual = matrix.rows();
    if actual != segment.rows {
        return Err(IoError::matrix_rows(matrix.name(), segment.rows, actual));
    }
    if let Some(r) = (0..actual).find(|&r| matrix.storage.columns(r) != segment.columns) {
        return Err(IoError::row_columns(
            matrix.name(),
            r,
            segment.columns,
            matrix.storage.columns(r),
        ));
    }

    let mut buf = String::new();
    for r in 0..actual {
        tokens::push_row(&mut buf, matrix.storage.render_row(r));
    }
    tokens::emit(output, &buf)?;
    trace::segment_printed(SegmentKind::Grid, buf.len());
    Ok(())
}
