//! Serializable descriptions of segment shapes.
//!
//! A [`SegmentLayout`] records what a segment declares (kind, sizes, variable
//! order) without referring to the bound storage, so it can be logged,
//! compared or stored as JSON alongside generated test files.
//!
//! The compact `Display` form reads like the file it describes:
//!
//! | Segment | Display |
//! |---|---|
//! | line with scalar `N` and 3-element vector `A` | `line: N A[3]` |
//! | lines with vector `A`, 4 rows | `lines[4]: A` |
//! | lines with jagged matrix `M`, no declared rows | `lines: M[][]` |
//! | 2x3 grid `M` | `grid[2x3]: M` |

use crate::segment::SegmentKind;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Shape of one bound variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Scalar,
    Vector,
    Matrix,
}

/// One variable of a [`SegmentLayout`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableLayout {
    /// Diagnostic name of the variable.
    pub name: String,
    pub shape: Shape,
    /// Declared element count (vectors) or row count (matrices).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
}

impl VariableLayout {
    pub(crate) fn new(name: &str, shape: Shape, size: Option<usize>) -> Self {
        Self {
            name: name.to_string(),
            shape,
            size,
        }
    }
}

/// Declared shape of a whole segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentLayout {
    pub kind: SegmentKind,
    /// Declared row count (lines and grid segments).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    /// Declared column count (grid segments).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<usize>,
    /// Variables in declaration order.
    pub variables: Vec<VariableLayout>,
}

impl SegmentLayout {
    /// Render the layout as pretty-printed JSON.
    ///
    /// # Errors
    /// Propagates serialization failures from `serde_json`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse a layout previously produced by [`to_json`](Self::to_json).
    ///
    /// # Errors
    /// Fails when `json` is not a valid layout document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Display for SegmentLayout {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match (self.kind, self.rows, self.columns) {
            (SegmentKind::Line, _, _) => f.write_str("line")?,
            (SegmentKind::Lines, Some(rows), _) => write!(f, "lines[{rows}]")?,
            (SegmentKind::Lines, None, _) => f.write_str("lines")?,
            (SegmentKind::Grid, Some(rows), Some(columns)) => write!(f, "grid[{rows}x{columns}]")?,
            (SegmentKind::Grid, _, _) => f.write_str("grid")?,
        }
        f.write_str(":")?;
        for variable in &self.variables {
            write!(f, " {}", variable.name)?;
            match (self.kind, variable.shape, variable.size) {
                (SegmentKind::Line, Shape::Vector, Some(size)) => write!(f, "[{size}]")?,
                (SegmentKind::Lines, Shape::Matrix, _) => f.write_str("[][]")?,
                _ => {}
            }
        }
        Ok(())
    }
}
