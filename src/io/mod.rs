//! Segment manipulators: the only code that touches the text format.
//!
//! Each submodule pairs a `parse_*` and a `print_*` function for one segment
//! kind. Both run to completion within one call and keep no state between
//! calls. Streams are caller-owned; the manipulators never open files.
//!
//! Output format: tokens separated by a single space, every line terminated
//! by `\n`, no trailing spaces.

pub mod grid;
pub mod line;
pub mod lines;
pub(crate) mod tokens;

pub use grid::{parse_grid, print_grid};
pub use line::{parse_line, print_line};
pub use lines::{parse_lines, parse_lines_with_rows, print_lines};
