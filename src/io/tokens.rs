//! Line reading, tokenizing and rendering shared by the manipulators.

use crate::error::{IoError, Terminator};
use std::io::{BufRead, Write};

/// Upper bound on rows reserved up front; larger declared counts grow on demand.
const PREALLOCATED_ROWS: usize = 1 << 16;

/// Read one line without its terminator (`\n` or `\r\n`).
///
/// Returns `Ok(None)` at end of input. A final line lacking a terminator is
/// still returned.
pub(crate) fn read_line<R: BufRead + ?Sized>(input: &mut R) -> Result<Option<String>, IoError> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(Some(buf))
}

/// Read one line that must exist; `variable` names what the line would hold.
pub(crate) fn require_line<R, F>(input: &mut R, variable: F) -> Result<String, IoError>
where
    R: BufRead + ?Sized,
    F: FnOnce() -> String,
{
    read_line(input)?.ok_or_else(|| IoError::InsufficientTokens {
        variable: variable(),
        found: Terminator::Eof,
    })
}

/// Read `rows` lines, or every remaining line when `rows` is `None`.
///
/// `check` runs on each line as it is read, so a malformed row is reported
/// before later rows are consumed.
pub(crate) fn read_rows<R, F>(
    input: &mut R,
    name: &str,
    rows: Option<usize>,
    mut check: F,
) -> Result<Vec<String>, IoError>
where
    R: BufRead + ?Sized,
    F: FnMut(usize, &str) -> Result<(), IoError>,
{
    let mut lines = Vec::with_capacity(rows.unwrap_or_default().min(PREALLOCATED_ROWS));
    loop {
        let index = lines.len();
        let line = match rows {
            Some(n) if index == n => break,
            Some(_) => require_line(input, || element(name, index))?,
            None => match read_line(input)? {
                Some(line) => line,
                None => break,
            },
        };
        check(index, &line)?;
        lines.push(line);
    }
    Ok(lines)
}

#[inline]
pub(crate) fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// `A[i]`
#[inline]
pub(crate) fn element(name: &str, index: usize) -> String {
    format!("{name}[{index}]")
}

/// `M[r][c]`
#[inline]
pub(crate) fn cell(name: &str, row: usize, column: usize) -> String {
    format!("{name}[{row}][{column}]")
}

/// Append `tokens` joined by single spaces, then a newline.
pub(crate) fn push_row<I>(buf: &mut String, tokens: I)
where
    I: IntoIterator<Item = String>,
{
    for (i, token) in tokens.into_iter().enumerate() {
        if i > 0 {
            buf.push(' ');
        }
        buf.push_str(&token);
    }
    buf.push('\n');
}

/// Write a fully rendered segment in one call.
pub(crate) fn emit<W: Write + ?Sized>(output: &mut W, buf: &str) -> Result<(), IoError> {
    output.write_all(buf.as_bytes())?;
    Ok(())
}
