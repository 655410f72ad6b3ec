//! Error types for segment declaration and manipulation.
//!
//! Two families are kept apart so callers can tell a bad declaration from bad
//! data:
//! - [`SpecificationError`] is returned by segment builders.
//! - [`IoError`] is returned by `parse`/`print` calls.
//!
//! The messages of [`IoError::SizeMismatch`] are part of the external contract
//! and are rendered verbatim.

use crate::segment::SegmentKind;
use std::{fmt, io};

/// A segment declaration that cannot be turned into a valid segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecificationError {
    /// The same variable name was added twice to one segment.
    DuplicateName { name: String },
    /// A declared size is negative or does not fit in `usize`.
    InvalidSize { subject: String, value: String },
    /// A descriptor and its segment declare different sizes for one variable.
    ConflictingSize {
        name: String,
        descriptor: usize,
        segment: usize,
    },
    /// A jagged matrix declares a column count, which it cannot check.
    JaggedColumns { name: String },
    /// A vector placed on a single line has no declared element count.
    UnsizedVector { name: String },
    /// A segment kind that requires a size was built without one.
    MissingSize { kind: SegmentKind },
    /// A single-variable segment was built without its variable.
    MissingVariable { kind: SegmentKind },
    /// A second variable was added to a single-variable segment.
    TooManyVariables { kind: SegmentKind, name: String },
}

impl fmt::Display for SpecificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateName { name } => {
                write!(f, "Variable name '{name}' is declared more than once in one segment")
            }
            Self::InvalidSize { subject, value } => write!(
                f,
                "Declared size of '{subject}' must be a non-negative integer. Got: {value}"
            ),
            Self::ConflictingSize {
                name,
                descriptor,
                segment,
            } => write!(
                f,
                "Conflicting sizes declared for '{name}'. Descriptor: {descriptor}, segment: {segment}"
            ),
            Self::JaggedColumns { name } => write!(
                f,
                "Jagged matrix '{name}' cannot declare its number of columns"
            ),
            Self::UnsizedVector { name } => write!(
                f,
                "Vector '{name}' in a line segment must declare its number of elements"
            ),
            Self::MissingSize { kind } => {
                write!(f, "{kind} segment requires its number of rows and columns")
            }
            Self::MissingVariable { kind } => {
                write!(f, "{kind} segment requires exactly one variable")
            }
            Self::TooManyVariables { kind, name } => write!(
                f,
                "{kind} segment accepts exactly one variable; cannot add '{name}'"
            ),
        }
    }
}

impl std::error::Error for SpecificationError {}

/// What a [`IoError::SizeMismatch`] counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeSubject {
    /// Elements of a vector.
    VectorElements { name: String },
    /// Rows of a matrix.
    MatrixRows { name: String },
    /// Columns of one (0-based) row of a matrix.
    RowColumns { name: String, row: usize },
}

/// What was found where a value was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// The current line ended.
    Newline,
    /// The input ended.
    Eof,
}

impl fmt::Display for Terminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Newline => f.write_str("<newline>"),
            Self::Eof => f.write_str("<EOF>"),
        }
    }
}

/// Failure of a single `parse` or `print` call.
#[derive(Debug)]
pub enum IoError {
    /// A token could not be converted to the variable's type.
    Parse { variable: String, token: String },
    /// The input ran out of tokens or lines before the segment was satisfied.
    InsufficientTokens { variable: String, found: Terminator },
    /// Declared and actual counts disagree.
    SizeMismatch {
        subject: SizeSubject,
        expected: usize,
        actual: usize,
    },
    /// A line holds more tokens than the segment consumes.
    UnexpectedToken { after: String, found: String },
    /// Input remains after the last expected segment. `found` is the first
    /// leftover token, or empty when the leftover line is blank.
    TrailingInput { found: String },
    /// The underlying stream failed.
    Io(io::Error),
}

impl IoError {
    pub(crate) fn vector_elements(name: &str, expected: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            subject: SizeSubject::VectorElements { name: name.to_string() },
            expected,
            actual,
        }
    }

    pub(crate) fn matrix_rows(name: &str, expected: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            subject: SizeSubject::MatrixRows { name: name.to_string() },
            expected,
            actual,
        }
    }

    pub(crate) fn row_columns(name: &str, row: usize, expected: usize, actual: usize) -> Self {
        Self::SizeMismatch {
            subject: SizeSubject::RowColumns {
                name: name.to_string(),
                row,
            },
            expected,
            actual,
        }
    }
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { variable, .. } => {
                write!(f, "Cannot parse value for variable '{variable}'")
            }
            Self::InsufficientTokens { variable, found } if variable.is_empty() => {
                write!(f, "Expected: <newline>. Found: {found}")
            }
            Self::InsufficientTokens { variable, found } => {
                write!(f, "Missing value for variable '{variable}'. Found: {found}")
            }
            Self::SizeMismatch {
                subject,
                expected,
                actual,
            } => {
                match subject {
                    SizeSubject::VectorElements { name } => {
                        write!(f, "Number of elements of vector '{name}' unsatisfied")?;
                    }
                    SizeSubject::MatrixRows { name } => {
                        write!(f, "Number of rows of matrix '{name}' unsatisfied")?;
                    }
                    SizeSubject::RowColumns { name, row } => write!(
                        f,
                        "Number of columns of row {row} of matrix '{name}' unsatisfied"
                    )?,
                }
                write!(f, ". Expected: {expected}, actual: {actual}")
            }
            Self::UnexpectedToken { after, found } if after.is_empty() => {
                write!(f, "Expected: <newline>. Found: '{found}'")
            }
            Self::UnexpectedToken { after, found } => write!(
                f,
                "Expected: <newline> after variable '{after}'. Found: '{found}'"
            ),
            Self::TrailingInput { found } if found.is_empty() => {
                write!(f, "Expected: <EOF>. Found: <newline>")
            }
            Self::TrailingInput { found } => write!(f, "Expected: <EOF>. Found: '{found}'"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for IoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for IoError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
