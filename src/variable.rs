//! Variable descriptors: named, borrowed handles to caller-owned storage.
//!
//! A descriptor never owns its data. It holds a `&mut` view into a caller's
//! scalar, `Vec<T>` or `Vec<Vec<T>>`, erased behind one of the storage traits
//! so that a single segment can bind variables of different element types:
//!
//! - [`ScalarStorage`] for any lexical value `T`
//! - [`VectorStorage`] for `Vec<T>`
//! - [`MatrixStorage`] for `Vec<Vec<T>>`
//!
//! Conversions are all-or-nothing per container: the `accepts` methods check
//! every token without touching storage, and `assign` replaces the container
//! only when every token converts.

use crate::layout::Shape;
use std::fmt::{self, Display};
use std::str::FromStr;

/// A type that converts to and from a single whitespace-free token.
pub trait Lexeme: FromStr + Display {}

impl<T: FromStr + Display> Lexeme for T {}

/// Type-erased access to a single value.
pub trait ScalarStorage {
    /// Whether `token` converts to the stored type.
    fn accepts(&self, token: &str) -> bool;

    /// Replace the value with `token`; returns `false` (and leaves the value
    /// untouched) if the token does not convert.
    fn assign(&mut self, token: &str) -> bool;

    /// Token form of the current value.
    fn render(&self) -> String;
}

impl<T: Lexeme> ScalarStorage for T {
    fn accepts(&self, token: &str) -> bool {
        token.parse::<T>().is_ok()
    }

    fn assign(&mut self, token: &str) -> bool {
        match token.parse::<T>() {
            Ok(v) => {
                *self = v;
                true
            }
            Err(_) => false,
        }
    }

    fn render(&self) -> String {
        self.to_string()
    }
}

/// Type-erased access to a resizable sequence.
pub trait VectorStorage {
    /// Current number of elements.
    fn len(&self) -> usize;

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check that every token converts; `Err(i)` names the first bad index.
    fn accepts(&self, tokens: &[&str]) -> Result<(), usize>;

    /// Replace the whole sequence with `tokens`. On `Err(i)` the sequence is
    /// left unchanged.
    fn assign(&mut self, tokens: &[&str]) -> Result<(), usize>;

    /// Token form of the element at `index`.
    fn render(&self, index: usize) -> String;
}

impl<T: Lexeme> VectorStorage for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn accepts(&self, tokens: &[&str]) -> Result<(), usize> {
        match tokens.iter().position(|t| t.parse::<T>().is_err()) {
            Some(i) => Err(i),
            None => Ok(()),
        }
    }

    fn assign(&mut self, tokens: &[&str]) -> Result<(), usize> {
        let parsed = convert_all::<T>(tokens)?;
        *self = parsed;
        Ok(())
    }

    fn render(&self, index: usize) -> String {
        self[index].to_string()
    }
}

/// Type-erased access to a sequence of rows.
pub trait MatrixStorage {
    /// Current number of rows.
    fn rows(&self) -> usize;

    /// Number of elements in row `row`.
    fn columns(&self, row: usize) -> usize;

    /// Check that every token converts; `Err((r, c))` names the first bad cell.
    fn accepts(&self, rows: &[Vec<&str>]) -> Result<(), (usize, usize)>;

    /// Replace the whole matrix with `rows`. On error the matrix is left
    /// unchanged.
    fn assign(&mut self, rows: &[Vec<&str>]) -> Result<(), (usize, usize)>;

    /// Token forms of every element of row `row`.
    fn render_row(&self, row: usize) -> Vec<String>;
}

impl<T: Lexeme> MatrixStorage for Vec<Vec<T>> {
    fn rows(&self) -> usize {
        self.len()
    }

    fn columns(&self, row: usize) -> usize {
        self[row].len()
    }

    fn accepts(&self, rows: &[Vec<&str>]) -> Result<(), (usize, usize)> {
        for (r, row) in rows.iter().enumerate() {
            if let Some(c) = row.iter().position(|t| t.parse::<T>().is_err()) {
                return Err((r, c));
            }
        }
        Ok(())
    }

    fn assign(&mut self, rows: &[Vec<&str>]) -> Result<(), (usize, usize)> {
        let mut parsed = Vec::with_capacity(rows.len());
        for (r, row) in rows.iter().enumerate() {
            parsed.push(convert_all::<T>(row).map_err(|c| (r, c))?);
        }
        *self = parsed;
        Ok(())
    }

    fn render_row(&self, row: usize) -> Vec<String> {
        self[row].iter().map(ToString::to_string).collect()
    }
}

fn convert_all<T: FromStr>(tokens: &[&str]) -> Result<Vec<T>, usize> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, t)| t.parse::<T>().map_err(|_| i))
        .collect()
}

/// Integer types accepted as declared sizes.
///
/// Negative or oversized values are not rejected here; they are carried to
/// `build()`, which reports them as [`SpecificationError::InvalidSize`].
///
/// [`SpecificationError::InvalidSize`]: crate::SpecificationError::InvalidSize
pub trait IntoSize: Copy + Display {
    /// The size as a `usize`, or `None` when it is negative or too large.
    fn into_size(self) -> Option<usize>;
}

macro_rules! impl_into_size {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoSize for $t {
                #[inline]
                fn into_size(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }
            }
        )*
    };
}

impl_into_size!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// A size as declared by the caller, validated at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DeclaredSize {
    value: Option<usize>,
    raw: String,
}

impl DeclaredSize {
    pub(crate) fn new(size: impl IntoSize) -> Self {
        Self {
            value: size.into_size(),
            raw: size.to_string(),
        }
    }

    pub(crate) fn resolve(&self, subject: &str) -> Result<usize, crate::SpecificationError> {
        self.value
            .ok_or_else(|| crate::SpecificationError::InvalidSize {
                subject: subject.to_string(),
                value: self.raw.clone(),
            })
    }
}

/// A named handle to one caller-owned value.
pub struct Scalar<'a> {
    pub(crate) name: String,
    pub(crate) storage: &'a mut dyn ScalarStorage,
}

impl<'a> Scalar<'a> {
    /// Bind `value` under `name`.
    pub fn new<T: Lexeme>(name: impl Into<String>, value: &'a mut T) -> Self {
        Self {
            name: name.into(),
            storage: value,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A named handle to a caller-owned `Vec<T>`, optionally with a declared length.
pub struct Vector<'a> {
    pub(crate) name: String,
    pub(crate) storage: &'a mut dyn VectorStorage,
    pub(crate) size: Option<DeclaredSize>,
}

impl<'a> Vector<'a> {
    /// Bind `values` under `name`, with no declared length.
    pub fn new<T: Lexeme>(name: impl Into<String>, values: &'a mut Vec<T>) -> Self {
        Self {
            name: name.into(),
            storage: values,
            size: None,
        }
    }

    /// Declare the expected number of elements.
    #[must_use]
    pub fn with_size(mut self, size: impl IntoSize) -> Self {
        self.size = Some(DeclaredSize::new(size));
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current length of the bound sequence.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

/// A named handle to a caller-owned `Vec<Vec<T>>`.
///
/// Whether the rows are rectangular or jagged is decided by the segment the
/// matrix is bound into, not by the descriptor.
pub struct Matrix<'a> {
    pub(crate) name: String,
    pub(crate) storage: &'a mut dyn MatrixStorage,
    pub(crate) declared_rows: Option<DeclaredSize>,
    pub(crate) declared_columns: Option<DeclaredSize>,
}

impl<'a> Matrix<'a> {
    /// Bind `rows` under `name`.
    pub fn new<T: Lexeme>(name: impl Into<String>, rows: &'a mut Vec<Vec<T>>) -> Self {
        Self {
            name: name.into(),
            storage: rows,
            declared_rows: None,
            declared_columns: None,
        }
    }

    /// Declare the expected number of rows.
    #[must_use]
    pub fn with_rows(mut self, rows: impl IntoSize) -> Self {
        self.declared_rows = Some(DeclaredSize::new(rows));
        self
    }

    /// Declare the expected number of rows and columns.
    ///
    /// Only a grid segment checks columns; a jagged matrix rejects them at
    /// `build()`.
    #[must_use]
    pub fn with_size(self, rows: impl IntoSize, columns: impl IntoSize) -> Self {
        let mut matrix = self.with_rows(rows);
        matrix.declared_columns = Some(DeclaredSize::new(columns));
        matrix
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current number of rows of the bound matrix.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.storage.rows()
    }
}

/// Any descriptor, tagged by shape.
#[derive(Debug)]
pub enum Variable<'a> {
    Scalar(Scalar<'a>),
    Vector(Vector<'a>),
    Matrix(Matrix<'a>),
}

impl Variable<'_> {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar(s) => s.name(),
            Self::Vector(v) => v.name(),
            Self::Matrix(m) => m.name(),
        }
    }

    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Self::Scalar(_) => Shape::Scalar,
            Self::Vector(_) => Shape::Vector,
            Self::Matrix(_) => Shape::Matrix,
        }
    }
}

impl<'a> From<Scalar<'a>> for Variable<'a> {
    fn from(s: Scalar<'a>) -> Self {
        Self::Scalar(s)
    }
}

impl<'a> From<Vector<'a>> for Variable<'a> {
    fn from(v: Vector<'a>) -> Self {
        Self::Vector(v)
    }
}

impl<'a> From<Matrix<'a>> for Variable<'a> {
    fn from(m: Matrix<'a>) -> Self {
        Self::Matrix(m)
    }
}

impl fmt::Debug for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scalar")
            .field("name", &self.name)
            .field("value", &self.storage.render())
            .finish()
    }
}

impl fmt::Debug for Vector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("name", &self.name)
            .field("len", &self.storage.len())
            .field("size", &self.size)
            .finish()
    }
}

impl fmt::Debug for Matrix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("name", &self.name)
            .field("rows", &self.storage.rows())
            .field("declared_rows", &self.declared_rows)
            .field("declared_columns", &self.declared_columns)
            .finish()
    }
}
