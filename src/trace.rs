//! Structured tracing hooks.
//!
//! All events are compiled only with the `tracing` feature; without it every
//! hook is an inlined no-op, so a default build logs nothing at all. Events
//! describe completed work. Failures are returned to the caller and never
//! logged here.

use crate::segment::{IoSegment, SegmentKind};

/// Target name for every event emitted by this crate.
#[cfg(feature = "tracing")]
const SEGMENT_TARGET: &str = "caseio::segment";

/// A builder finalized a segment.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn segment_built(segment: &dyn IoSegment) {
    tracing::trace!(
        target: SEGMENT_TARGET,
        kind = %segment.kind(),
        layout = %segment.layout(),
        "segment: built"
    );
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn segment_built(_segment: &dyn IoSegment) {}

/// A segment was parsed; `rows` counts the lines consumed.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn segment_parsed(kind: SegmentKind, rows: usize) {
    tracing::trace!(target: SEGMENT_TARGET, kind = %kind, rows, "segment: parsed");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn segment_parsed(_kind: SegmentKind, _rows: usize) {}

/// A segment was printed; `bytes` counts what was written.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn segment_printed(kind: SegmentKind, bytes: usize) {
    tracing::trace!(target: SEGMENT_TARGET, kind = %kind, bytes, "segment: printed");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn segment_printed(_kind: SegmentKind, _bytes: usize) {}

/// A [`SegmentReader`](crate::SegmentReader) or
/// [`SegmentWriter`](crate::SegmentWriter) finished its stream.
#[cfg(feature = "tracing")]
#[inline]
pub(crate) fn stream_finished(direction: &'static str, segments: usize) {
    tracing::debug!(target: SEGMENT_TARGET, direction, segments, "stream: finished");
}

#[cfg(not(feature = "tracing"))]
#[inline]
pub(crate) fn stream_finished(_direction: &'static str, _segments: usize) {}
