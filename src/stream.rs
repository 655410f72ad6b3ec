//! Sequential reading and writing of whole test case files.
//!
//! A test case file is a sequence of segments. [`SegmentReader`] parses them
//! one after another from a single input, so a size read by one segment can
//! be used to build the next; [`SegmentReader::finish`] then requires the
//! input to be exhausted. [`SegmentWriter`] is the printing counterpart.
//!
//! ```
//! use caseio::*;
//! use std::io::Cursor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut reader = SegmentReader::new(Cursor::new("3\n10 20 30\n"));
//!
//! let mut n = 0usize;
//! reader.read(&mut LineSegmentBuilder::new()
//!     .add_scalar_variable(Scalar::new("N", &mut n))
//!     .build()?)?;
//!
//! let mut a: Vec<i32> = Vec::new();
//! reader.read(&mut LineSegmentBuilder::new()
//!     .add_vector_variable_with_size(Vector::new("A", &mut a), n)
//!     .build()?)?;
//! reader.finish()?;
//!
//! assert_eq!(a, vec![10, 20, 30]);
//! # Ok(())
//! # }
//! ```

use crate::error::IoError;
use crate::io::{lines, tokens};
use crate::segment::{IoSegment, LinesSegment, Segment};
use crate::trace;
use std::io::{BufRead, Write};

/// Parses consecutive segments from one input.
#[derive(Debug)]
pub struct SegmentReader<R> {
    input: R,
    segments: usize,
}

impl<R: BufRead> SegmentReader<R> {
    pub fn new(input: R) -> Self {
        Self { input, segments: 0 }
    }

    /// Parse the next segment.
    ///
    /// # Errors
    /// Propagates the segment's [`IoError`]; the input position is then
    /// unspecified and the reader should be discarded.
    pub fn read<S: IoSegment + ?Sized>(&mut self, segment: &mut S) -> Result<(), IoError> {
        segment.parse(&mut self.input)?;
        self.segments += 1;
        Ok(())
    }

    /// Parse a lines segment, reading `rows` lines unless it declares its own
    /// row count.
    ///
    /// # Errors
    /// See [`read`](Self::read).
    pub fn read_lines_with_rows(
        &mut self,
        segment: &mut LinesSegment<'_>,
        rows: usize,
    ) -> Result<(), IoError> {
        lines::parse_lines_with_rows(segment, &mut self.input, rows)?;
        self.segments += 1;
        Ok(())
    }

    /// Number of segments parsed so far.
    #[must_use]
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Require end of input and return the underlying reader.
    ///
    /// # Errors
    /// [`IoError::TrailingInput`] when anything, even a blank line, remains.
    pub fn finish(mut self) -> Result<R, IoError> {
        if let Some(rest) = tokens::read_line(&mut self.input)? {
            let found = tokens::tokenize(&rest)
                .first()
                .map_or_else(String::new, |t| (*t).to_string());
            return Err(IoError::TrailingInput { found });
        }
        trace::stream_finished("read", self.segments);
        Ok(self.input)
    }
}

/// Prints consecutive segments to one output.
#[derive(Debug)]
pub struct SegmentWriter<W> {
    output: W,
    segments: usize,
}

impl<W: Write> SegmentWriter<W> {
    pub fn new(output: W) -> Self {
        Self { output, segments: 0 }
    }

    /// Print the next segment.
    ///
    /// # Errors
    /// Propagates the segment's [`IoError`]. Segments written before the
    /// failing one stay in the output.
    pub fn write<S: IoSegment + ?Sized>(&mut self, segment: &S) -> Result<(), IoError> {
        segment.print(&mut self.output)?;
        self.segments += 1;
        Ok(())
    }

    /// Print every segment in order, stopping at the first failure.
    ///
    /// # Errors
    /// See [`write`](Self::write).
    pub fn write_all(&mut self, segments: &[Segment<'_>]) -> Result<(), IoError> {
        segments.iter().try_for_each(|segment| self.write(segment))
    }

    /// Number of segments printed so far.
    #[must_use]
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Flush and return the underlying writer.
    ///
    /// # Errors
    /// [`IoError::Io`] when the flush fails.
    pub fn finish(mut self) -> Result<W, IoError> {
        self.output.flush()?;
        trace::stream_finished("write", self.segments);
        Ok(self.output)
    }
}
