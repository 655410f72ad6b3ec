//! Fluent builders that assemble descriptors into finalized segments.
//!
//! Every builder method consumes and returns the builder. Declaration errors
//! are not raised where they happen: the first one is remembered and returned
//! by `build()`, so a whole declaration reads as one expression.
//!
//! ```
//! use caseio::*;
//!
//! let (mut n, mut m) = (0i32, 0i32);
//! let mut a: Vec<i64> = Vec::new();
//! let segment = LineSegmentBuilder::new()
//!     .add_scalar_variable(Scalar::new("N", &mut n))
//!     .add_scalar_variable(Scalar::new("M", &mut m))
//!     .add_vector_variable(Vector::new("A", &mut a).with_size(3))
//!     .build()
//!     .unwrap();
//! assert_eq!(segment.layout().to_string(), "line: N M A[3]");
//! ```

use crate::error::SpecificationError;
use crate::segment::{
    GridSegment, LineItem, LineSegment, LinesSegment, LinesVariable, SegmentKind,
};
use crate::trace;
use crate::variable::{DeclaredSize, IntoSize, Matrix, Scalar, Vector};
use std::collections::HashSet;

/// Tracks names already bound into one segment, and the first error seen.
#[derive(Debug, Default)]
struct Declarations {
    names: HashSet<String>,
    error: Option<SpecificationError>,
}

impl Declarations {
    /// Register `name`; returns `false` if the builder has already failed or
    /// the name is taken.
    fn claim(&mut self, name: &str) -> bool {
        if self.error.is_some() {
            return false;
        }
        if !self.names.insert(name.to_string()) {
            self.fail(SpecificationError::DuplicateName {
                name: name.to_string(),
            });
            return false;
        }
        true
    }

    fn fail(&mut self, error: SpecificationError) {
        self.error.get_or_insert(error);
    }

    fn check(&mut self) -> Result<(), SpecificationError> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

/// Resolve a size that may be declared on the descriptor, on the segment, or
/// both. Every declared value is validated; two declarations must agree.
fn reconcile(
    name: &str,
    descriptor: Option<&DeclaredSize>,
    segment: Option<&DeclaredSize>,
) -> Result<Option<usize>, SpecificationError> {
    let descriptor = descriptor.map(|size| size.resolve(name)).transpose()?;
    let segment = segment.map(|size| size.resolve(name)).transpose()?;
    match (descriptor, segment) {
        (Some(d), Some(s)) if d != s => Err(SpecificationError::ConflictingSize {
            name: name.to_string(),
            descriptor: d,
            segment: s,
        }),
        (d, s) => Ok(s.or(d)),
    }
}

enum PendingLineItem<'a> {
    Scalar(Scalar<'a>),
    Vector(Vector<'a>),
}

/// Builds a [`LineSegment`].
#[derive(Default)]
pub struct LineSegmentBuilder<'a> {
    items: Vec<PendingLineItem<'a>>,
    declarations: Declarations,
}

impl<'a> LineSegmentBuilder<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            declarations: Declarations::default(),
        }
    }

    #[must_use]
    pub fn add_scalar_variable(mut self, scalar: Scalar<'a>) -> Self {
        if self.declarations.claim(scalar.name()) {
            self.items.push(PendingLineItem::Scalar(scalar));
        }
        self
    }

    /// Add a vector; it must carry a declared length ([`Vector::with_size`]).
    #[must_use]
    pub fn add_vector_variable(mut self, vector: Vector<'a>) -> Self {
        if self.declarations.claim(vector.name()) {
            self.items.push(PendingLineItem::Vector(vector));
        }
        self
    }

    /// Add a vector occupying exactly `size` tokens of the line.
    #[must_use]
    pub fn add_vector_variable_with_size(self, vector: Vector<'a>, size: impl IntoSize) -> Self {
        self.add_vector_variable(vector.with_size(size))
    }

    /// Finalize the segment.
    ///
    /// # Errors
    /// Fails on duplicate names, a negative declared length, or a vector
    /// without a declared length.
    pub fn build(mut self) -> Result<LineSegment<'a>, SpecificationError> {
        self.declarations.check()?;
        let mut items = Vec::with_capacity(self.items.len());
        for item in self.items {
            items.push(match item {
                PendingLineItem::Scalar(s) => LineItem::Scalar(s),
                PendingLineItem::Vector(vector) => {
                    let Some(declared) = &vector.size else {
                        return Err(SpecificationError::UnsizedVector {
                            name: vector.name().to_string(),
                        });
                    };
                    let size = declared.resolve(vector.name())?;
                    LineItem::Vector { vector, size }
                }
            });
        }
        let segment = LineSegment { items };
        trace::segment_built(&segment);
        Ok(segment)
    }
}

/// Builds a [`LinesSegment`] from exactly one vector or jagged matrix.
#[derive(Default)]
pub struct LinesSegmentBuilder<'a> {
    variable: Option<LinesVariable<'a>>,
    size: Option<DeclaredSize>,
    declarations: Declarations,
}

impl<'a> LinesSegmentBuilder<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            variable: None,
            size: None,
            declarations: Declarations::default(),
        }
    }

    fn bind(mut self, variable: LinesVariable<'a>) -> Self {
        if !self.declarations.claim(variable.name()) {
            return self;
        }
        if self.variable.is_some() {
            self.declarations.fail(SpecificationError::TooManyVariables {
                kind: SegmentKind::Lines,
                name: variable.name().to_string(),
            });
            return self;
        }
        self.variable = Some(variable);
        self
    }

    /// Bind a vector written one element per line.
    ///
    /// A length declared on the vector itself is a row count; when
    /// [`set_size`](Self::set_size) is also called the two must agree.
    #[must_use]
    pub fn add_vector_variable(self, vector: Vector<'a>) -> Self {
        self.bind(LinesVariable::Vector(vector))
    }

    /// Bind a matrix written one row per line, with free column counts.
    ///
    /// Rows declared with [`Matrix::with_rows`] count like
    /// [`set_size`](Self::set_size).
    #[must_use]
    pub fn add_jagged_vector_variable(self, matrix: Matrix<'a>) -> Self {
        self.bind(LinesVariable::Jagged(matrix))
    }

    /// Declare the number of rows.
    #[must_use]
    pub fn set_size(mut self, rows: impl IntoSize) -> Self {
        self.size = Some(DeclaredSize::new(rows));
        self
    }

    /// Finalize the segment.
    ///
    /// # Errors
    /// Fails on a duplicate or second variable, a missing variable, a
    /// negative or conflicting row count, or a jagged matrix with declared
    /// columns.
    pub fn build(mut self) -> Result<LinesSegment<'a>, SpecificationError> {
        self.declarations.check()?;
        let Some(variable) = self.variable else {
            return Err(SpecificationError::MissingVariable {
                kind: SegmentKind::Lines,
            });
        };
        let on_descriptor = match &variable {
            LinesVariable::Vector(v) => v.size.as_ref(),
            LinesVariable::Jagged(m) => {
                if m.declared_columns.is_some() {
                    return Err(SpecificationError::JaggedColumns {
                        name: m.name().to_string(),
                    });
                }
                m.declared_rows.as_ref()
            }
        };
        let rows = reconcile(variable.name(), on_descriptor, self.size.as_ref())?;
        let segment = LinesSegment { variable, rows };
        trace::segment_built(&segment);
        Ok(segment)
    }
}

/// Builds a [`GridSegment`] from exactly one matrix and its `(rows, columns)`.
///
/// The size may come from [`set_size`](GridSegmentBuilder::set_size), from
/// [`Matrix::with_size`], or from both when they agree.
#[derive(Default)]
pub struct GridSegmentBuilder<'a> {
    matrix: Option<Matrix<'a>>,
    size: Option<(DeclaredSize, DeclaredSize)>,
    declarations: Declarations,
}

impl<'a> GridSegmentBuilder<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            matrix: None,
            size: None,
            declarations: Declarations::default(),
        }
    }

    #[must_use]
    pub fn add_matrix_variable(mut self, matrix: Matrix<'a>) -> Self {
        if !self.declarations.claim(matrix.name()) {
            return self;
        }
        if self.matrix.is_some() {
            self.declarations.fail(SpecificationError::TooManyVariables {
                kind: SegmentKind::Grid,
                name: matrix.name,
            });
            return self;
        }
        self.matrix = Some(matrix);
        self
    }

    /// Declare the number of rows and columns.
    #[must_use]
    pub fn set_size(mut self, rows: impl IntoSize, columns: impl IntoSize) -> Self {
        self.size = Some((DeclaredSize::new(rows), DeclaredSize::new(columns)));
        self
    }

    /// Finalize the segment.
    ///
    /// # Errors
    /// Fails on a duplicate or second matrix, a missing matrix, a missing
    /// size, or a negative or conflicting dimension.
    pub fn build(mut self) -> Result<GridSegment<'a>, SpecificationError> {
        self.declarations.check()?;
        let Some(matrix) = self.matrix else {
            return Err(SpecificationError::MissingVariable {
                kind: SegmentKind::Grid,
            });
        };
        let (rows_on_segment, columns_on_segment) = match &self.size {
            Some((rows, columns)) => (Some(rows), Some(columns)),
            None => (None, None),
        };
        let rows = reconcile(matrix.name(), matrix.declared_rows.as_ref(), rows_on_segment)?;
        let columns = reconcile(
            matrix.name(),
            matrix.declared_columns.as_ref(),
            columns_on_segment,
        )?;
        let (Some(rows), Some(columns)) = (rows, columns) else {
            return Err(SpecificationError::MissingSize {
                kind: SegmentKind::Grid,
            });
        };
        let segment = GridSegment {
            matrix,
            rows,
            columns,
        };
        trace::segment_built(&segment);
        Ok(segment)
    }
}
