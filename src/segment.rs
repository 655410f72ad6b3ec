//! Finalized segment shapes.
//!
//! A segment is produced once by its builder (see [`crate::builder`]) and is
//! immutable afterwards: its declared sizes and variable order never change.
//! The storage it points to is mutated by `parse` and read by `print`.

use crate::error::IoError;
use crate::io::{grid, line, lines};
use crate::layout::{SegmentLayout, Shape, VariableLayout};
use crate::variable::{Matrix, Scalar, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{BufRead, Write};

/// The three segment shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// One line of scalars and fixed-length vectors.
    Line,
    /// One value (or one jagged row) per line.
    Lines,
    /// A rectangular matrix.
    Grid,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Line => "Line",
            Self::Lines => "Lines",
            Self::Grid => "Grid",
        })
    }
}

/// Common interface of every segment: shape introspection plus the
/// manipulator entry points.
pub trait IoSegment {
    fn kind(&self) -> SegmentKind;

    /// Describe the declared shape without touching storage.
    fn layout(&self) -> SegmentLayout;

    /// Read this segment from `input` into the bound storage.
    ///
    /// # Errors
    /// Returns an [`IoError`] when the input does not match the declared shape
    /// or a token does not convert. Bound storage is left untouched on error.
    fn parse(&mut self, input: &mut dyn BufRead) -> Result<(), IoError>;

    /// Write the bound storage to `output` in this segment's layout.
    ///
    /// # Errors
    /// Returns an [`IoError`] when the bound data disagrees with a declared
    /// size, or the output stream fails. Nothing is written on a size error.
    fn print(&self, output: &mut dyn Write) -> Result<(), IoError>;
}

/// One entry of a [`LineSegment`].
#[derive(Debug)]
pub enum LineItem<'a> {
    Scalar(Scalar<'a>),
    /// A vector spread inline over exactly `size` tokens.
    Vector { vector: Vector<'a>, size: usize },
}

impl LineItem<'_> {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(s) => s.name(),
            Self::Vector { vector, .. } => vector.name(),
        }
    }
}

/// Scalars and sized vectors written on a single line.
#[derive(Debug)]
pub struct LineSegment<'a> {
    pub(crate) items: Vec<LineItem<'a>>,
}

impl<'a> LineSegment<'a> {
    #[must_use]
    pub fn items(&self) -> &[LineItem<'a>] {
        &self.items
    }
}

/// The single variable of a [`LinesSegment`].
#[derive(Debug)]
pub enum LinesVariable<'a> {
    /// One value per line.
    Vector(Vector<'a>),
    /// One row per line, each row as long as its line.
    Jagged(Matrix<'a>),
}

impl LinesVariable<'_> {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Vector(v) => v.name(),
            Self::Jagged(m) => m.name(),
        }
    }
}

/// A vector or jagged matrix laid out one entry per line.
#[derive(Debug)]
pub struct LinesSegment<'a> {
    pub(crate) variable: LinesVariable<'a>,
    pub(crate) rows: Option<usize>,
}

impl<'a> LinesSegment<'a> {
    #[must_use]
    pub fn variable(&self) -> &LinesVariable<'a> {
        &self.variable
    }

    /// Declared row count, if any.
    #[must_use]
    pub fn rows(&self) -> Option<usize> {
        self.rows
    }
}

/// A rectangular matrix with declared rows and columns.
#[derive(Debug)]
pub struct GridSegment<'a> {
    pub(crate) matrix: Matrix<'a>,
    pub(crate) rows: usize,
    pub(crate) columns: usize,
}

impl<'a> GridSegment<'a> {
    #[must_use]
    pub fn matrix(&self) -> &Matrix<'a> {
        &self.matrix
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }
}

/// Any segment, so heterogeneous sequences can be stored together.
#[derive(Debug)]
pub enum Segment<'a> {
    Line(LineSegment<'a>),
    Lines(LinesSegment<'a>),
    Grid(GridSegment<'a>),
}

impl<'a> From<LineSegment<'a>> for Segment<'a> {
    fn from(s: LineSegment<'a>) -> Self {
        Self::Line(s)
    }
}

impl<'a> From<LinesSegment<'a>> for Segment<'a> {
    fn from(s: LinesSegment<'a>) -> Self {
        Self::Lines(s)
    }
}

impl<'a> From<GridSegment<'a>> for Segment<'a> {
    fn from(s: GridSegment<'a>) -> Self {
        Self::Grid(s)
    }
}

impl IoSegment for LineSegment<'_> {
    fn kind(&self) -> SegmentKind {
        SegmentKind::Line
    }

    fn layout(&self) -> SegmentLayout {
        let variables = self
            .items
            .iter()
            .map(|item| match item {
                LineItem::Scalar(s) => VariableLayout::new(s.name(), Shape::Scalar, None),
                LineItem::Vector { vector, size } => {
                    VariableLayout::new(vector.name(), Shape::Vector, Some(*size))
                }
            })
            .collect();
        SegmentLayout {
            kind: SegmentKind::Line,
            rows: None,
            columns: None,
            variables,
        }
    }

    fn parse(&mut self, input: &mut dyn BufRead) -> Result<(), IoError> {
        line::parse_line(self, input)
    }

    fn print(&self, output: &mut dyn Write) -> Result<(), IoError> {
        line::print_line(self, output)
    }
}

impl IoSegment for LinesSegment<'_> {
    fn kind(&self) -> SegmentKind {
        SegmentKind::Lines
    }

    fn layout(&self) -> SegmentLayout {
        let variable = match &self.variable {
            LinesVariable::Vector(v) => VariableLayout::new(v.name(), Shape::Vector, self.rows),
            LinesVariable::Jagged(m) => VariableLayout::new(m.name(), Shape::Matrix, self.rows),
        };
        SegmentLayout {
            kind: SegmentKind::Lines,
            rows: self.rows,
            columns: None,
            variables: vec![variable],
        }
    }

    fn parse(&mut self, input: &mut dyn BufRead) -> Result<(), IoError> {
        lines::parse_lines(self, input)
    }

    fn print(&self, output: &mut dyn Write) -> Result<(), IoError> {
        lines::print_lines(self, output)
    }
}

impl IoSegment for GridSegment<'_> {
    fn kind(&self) -> SegmentKind {
        SegmentKind::Grid
    }

    fn layout(&self) -> SegmentLayout {
        SegmentLayout {
            kind: SegmentKind::Grid,
            rows: Some(self.rows),
            columns: Some(self.columns),
            variables: vec![VariableLayout::new(
                self.matrix.name(),
                Shape::Matrix,
                Some(self.rows),
            )],
        }
    }

    fn parse(&mut self, input: &mut dyn BufRead) -> Result<(), IoError> {
        grid::parse_grid(self, input)
    }

    fn print(&self, output: &mut dyn Write) -> Result<(), IoError> {
        grid::print_grid(self, output)
    }
}

impl IoSegment for Segment<'_> {
    fn kind(&self) -> SegmentKind {
        match self {
            Self::Line(s) => s.kind(),
            Self::Lines(s) => s.kind(),
            Self::Grid(s) => s.kind(),
        }
    }

    fn layout(&self) -> SegmentLayout {
        match self {
            Self::Line(s) => s.layout(),
            Self::Lines(s) => s.layout(),
            Self::Grid(s) => s.layout(),
        }
    }

    fn parse(&mut self, input: &mut dyn BufRead) -> Result<(), IoError> {
        match self {
            Self::Line(s) => s.parse(input),
            Self::Lines(s) => s.parse(input),
            Self::Grid(s) => s.parse(input),
        }
    }

    fn print(&self, output: &mut dyn Write) -> Result<(), IoError> {
        match self {
            Self::Line(s) => s.print(output),
            Self::Lines(s) => s.print(output),
            Self::Grid(s) => s.print(output),
        }
    }
}
