//! Line segment manipulator: scalars and sized vectors on one line.
//!
//! Layout: `v1 v2 ... vn\n`, where a vector of declared length `k` expands
//! inline into `k` consecutive tokens.

use crate::error::{IoError, Terminator};
use crate::io::tokens::{self, element};
use crate::segment::{LineItem, LineSegment, SegmentKind};
use crate::trace;
use std::io::{BufRead, Write};

/// Name of the `offset`-th token consumed by `item`.
fn position(item: &LineItem<'_>, offset: usize) -> String {
    match item {
        LineItem::Scalar(s) => s.name().to_string(),
        LineItem::Vector { vector, .. } => element(vector.name(), offset),
    }
}

fn width(item: &LineItem<'_>) -> usize {
    match item {
        LineItem::Scalar(_) => 1,
        LineItem::Vector { size, .. } => *size,
    }
}

/// Parse one line into the segment's variables.
///
/// # Errors
/// - [`IoError::InsufficientTokens`] when the input or the line runs out
///   before every variable is satisfied.
/// - [`IoError::UnexpectedToken`] when the line holds extra tokens.
/// - [`IoError::Parse`] when a token does not convert.
///
/// No variable is modified unless the whole line parses.
pub fn parse_line<R: BufRead + ?Sized>(
    segment: &mut LineSegment<'_>,
    input: &mut R,
) -> Result<(), IoError> {
    let first = segment
        .items
        .iter()
        .find(|item| width(item) > 0)
        .map(|item| position(item, 0))
        .unwrap_or_default();
    let line = tokens::require_line(input, || first)?;
    let words = tokens::tokenize(&line);

    // Slice the line into one token run per item before touching storage.
    let mut runs = Vec::with_capacity(segment.items.len());
    let mut cursor = 0;
    let mut last = String::new();
    for item in &segment.items {
        let need = width(item);
        let available = words.len() - cursor;
        if available < need {
            return Err(IoError::InsufficientTokens {
                variable: position(item, available),
                found: Terminator::Newline,
            });
        }
        runs.push(&words[cursor..cursor + need]);
        cursor += need;
        if need > 0 {
            last = position(item, need - 1);
        }
    }
    if let Some(extra) = words.get(cursor) {
        return Err(IoError::UnexpectedToken {
            after: last,
            found: (*extra).to_string(),
        });
    }

    for (item, run) in segment.items.iter().zip(&runs) {
        check(item, run)?;
    }
    for (item, run) in segment.items.iter_mut().zip(&runs) {
        assign(item, run)?;
    }
    trace::segment_parsed(SegmentKind::Line, 1);
    Ok(())
}

fn parse_error(item: &LineItem<'_>, run: &[&str], offset: usize) -> IoError {
    IoError::Parse {
        variable: position(item, offset),
        token: run[offset].to_string(),
    }
}

fn check(item: &LineItem<'_>, run: &[&str]) -> Result<(), IoError> {
    match item {
        LineItem::Scalar(s) if !s.storage.accepts(run[0]) => Err(parse_error(item, run, 0)),
        LineItem::Scalar(_) => Ok(()),
        LineItem::Vector { vector, .. } => vector
            .storage
            .accepts(run)
            .map_err(|i| parse_error(item, run, i)),
    }
}

fn assign(item: &mut LineItem<'_>, run: &[&str]) -> Result<(), IoError> {
    let failed = match item {
        LineItem::Scalar(s) => (!s.storage.assign(run[0])).then_some(0),
        LineItem::Vector { vector, .. } => vector.storage.assign(run).err(),
    };
    match failed {
        Some(offset) => Err(parse_error(item, run, offset)),
        None => Ok(()),
    }
}

/// Print the segment's variables as one space-separated line.
///
/// # Errors
/// - [`IoError::SizeMismatch`] when a vector's length differs from its
///   declared length; nothing is written in that case.
/// - [`IoError::Io`] when the output fails.
pub fn print_line<W: Write + ?Sized>(
    segment: &LineSegment<'_>,
    output: &mut W,
) -> Result<(), IoError> {
    let mut words = Vec::new();
    for item in &segment.items {
        match item {
            LineItem::Scalar(s) => words.push(s.storage.render()),
            LineItem::Vector { vector, size } => {
                let actual = vector.len();
                if actual != *size {
                    return Err(IoError::vector_elements(vector.name(), *size, actual));
                }
                words.extend((0..actual).map(|i| vector.storage.render(i)));
            }
        }
    }
    let mut buf = String::new();
    tokens::push_row(&mut buf, words);
    tokens::emit(output, &buf)?;
    trace::segment_printed(SegmentKind::Line, buf.len());
    Ok(())
}
