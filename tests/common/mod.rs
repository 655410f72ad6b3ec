//! Shared helpers for segment tests.

#![allow(dead_code)]

use caseio::{IoError, IoSegment};

/// Print `segment` into a fresh buffer and return it as text.
pub fn print_to_string<S: IoSegment + ?Sized>(segment: &S) -> anyhow::Result<String> {
    let mut out = Vec::new();
    segment.print(&mut out)?;
    Ok(String::from_utf8(out)?)
}

/// Parse `segment` from an in-memory string.
pub fn parse_str<S: IoSegment + ?Sized>(segment: &mut S, input: &str) -> Result<(), IoError> {
    let mut bytes = input.as_bytes();
    segment.parse(&mut bytes)
}

/// Print `segment`, expecting a failure, and return the error together with
/// whatever reached the output.
pub fn print_err<S: IoSegment + ?Sized>(segment: &S) -> (IoError, Vec<u8>) {
    let mut out = Vec::new();
    match segment.print(&mut out) {
        Ok(()) => panic!("print unexpectedly succeeded: {:?}", String::from_utf8_lossy(&out)),
        Err(e) => (e, out),
    }
}
