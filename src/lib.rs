//! # caseio
//!
//! Shape-checked **parsing and printing of competitive-programming test case
//! files**: sequences of scalars, vectors and matrices laid out under strict
//! line and token conventions.
//!
//! ## Key Features
//!
//! - **Declarative segments** - describe a region of a file as one line, one
//!   value per line, or a fixed-size grid
//! - **Borrowed bindings** - variables are `&mut` views into caller storage;
//!   nothing is copied into or cached by the engine
//! - **Exact layout** - single spaces between tokens, `\n` after every line,
//!   no trailing spaces
//! - **Precise errors** - every failure names the variable and element
//!   position (`A[2]`, `M[1][0]`) and size mismatches use fixed messages
//! - **All-or-nothing** - a failed parse leaves storage untouched; a failed
//!   print writes nothing
//!
//! ## Quick Start
//!
//! ```
//! use caseio::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut m: Vec<Vec<i32>> = Vec::new();
//! let mut grid = GridSegmentBuilder::new()
//!     .add_matrix_variable(Matrix::new("M", &mut m))
//!     .set_size(2, 3)
//!     .build()?;
//!
//! let mut input = "1 2 3\n4 5 6\n".as_bytes();
//! grid.parse(&mut input)?;
//!
//! let mut out = Vec::new();
//! grid.print(&mut out)?;
//! assert_eq!(out, b"1 2 3\n4 5 6\n");
//! # drop(grid);
//! assert_eq!(m, vec![vec![1, 2, 3], vec![4, 5, 6]]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Variables
//!
//! [`Scalar`], [`Vector`] and [`Matrix`] bind a name to caller storage of any
//! lexical type (`T: FromStr + Display`). Names are only used in diagnostics.
//!
//! ### Segments
//!
//! Builders turn variables into immutable segments:
//! - [`LineSegmentBuilder`] - scalars and sized vectors on one line
//! - [`LinesSegmentBuilder`] - a vector (one value per line) or a jagged
//!   matrix (one row per line)
//! - [`GridSegmentBuilder`] - a rectangular matrix with declared rows and
//!   columns
//!
//! Declaration problems surface from `build()` as [`SpecificationError`].
//!
//! ### Manipulators
//!
//! The [`io`] module holds one `parse_*`/`print_*` pair per segment kind; the
//! [`IoSegment`] trait exposes them as methods. Data problems surface as
//! [`IoError`].
//!
//! ### Streams
//!
//! [`SegmentReader`] and [`SegmentWriter`] process a whole file as a
//! sequence of segments and check for leftover input.
//!
//! ## Feature Flags
//!
//! - `tracing` - emit `tracing` events for built, parsed and printed segments
//!
//! ## Module Overview
//!
//! - [`variable`] - descriptors and storage traits
//! - [`builder`] - segment builders
//! - [`segment`] - finalized segment types
//! - [`io`] - line, lines and grid manipulators
//! - [`stream`] - multi-segment reader and writer
//! - [`layout`] - serializable shape descriptions
//! - [`error`] - error types

pub mod builder;
pub mod error;
pub mod io;
pub mod layout;
pub mod segment;
pub mod stream;
mod trace;
pub mod variable;

pub use builder::{GridSegmentBuilder, LineSegmentBuilder, LinesSegmentBuilder};
pub use error::{IoError, SizeSubject, SpecificationError, Terminator};
pub use layout::{SegmentLayout, Shape, VariableLayout};
pub use segment::{
    GridSegment, IoSegment, LineItem, LineSegment, LinesSegment, LinesVariable, Segment,
    SegmentKind,
};
pub use stream::{SegmentReader, SegmentWriter};
pub use variable::{
    IntoSize, Lexeme, Matrix, MatrixStorage, Scalar, ScalarStorage, Variable, Vector,
    VectorStorage,
};
