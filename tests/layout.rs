//! Tests for layouts derived from built segments.

use anyhow::Result;
use caseio::*;

#[test]
fn line_layout_lists_variables_in_order() -> Result<()> {
    let (mut n, mut m) = (0, 0);
    let mut a: Vec<i32> = Vec::new();
    let segment = LineSegmentBuilder::new()
        .add_scalar_variable(Scalar::new("N", &mut n))
        .add_vector_variable_with_size(Vector::new("A", &mut a), 3)
        .add_scalar_variable(Scalar::new("M", &mut m))
        .build()?;
    let layout = segment.layout();

    assert_eq!(layout.to_string(), "line: N A[3] M");
    let names: Vec<&str> = layout.variables.iter().map(|v| v.name.as_str()).collect();
    assert_eq!(names, vec!["N", "A", "M"]);
    assert_eq!(layout.variables[1].shape, Shape::Vector);
    assert_eq!(layout.variables[1].size, Some(3));
    Ok(())
}

#[test]
fn lines_layout_shows_declared_rows() -> Result<()> {
    let mut a: Vec<i32> = Vec::new();
    let sized = LinesSegmentBuilder::new()
        .add_vector_variable(Vector::new("A", &mut a))
        .set_size(4)
        .build()?;
    assert_eq!(sized.layout().to_string(), "lines[4]: A");
    drop(sized);

    let mut m: Vec<Vec<i32>> = Vec::new();
    let jagged = LinesSegmentBuilder::new()
        .add_jagged_vector_variable(Matrix::new("M", &mut m))
        .build()?;
    assert_eq!(jagged.layout().to_string(), "lines: M[][]");
    assert_eq!(jagged.layout().rows, None);
    Ok(())
}

#[test]
fn grid_layout_round_trips_through_json() -> Result<()> {
    let mut m: Vec<Vec<char>> = Vec::new();
    let segment = GridSegmentBuilder::new()
        .add_matrix_variable(Matrix::new("board", &mut m))
        .set_size(8, 8)
        .build()?;
    let layout = segment.layout();
    assert_eq!(layout.to_string(), "grid[8x8]: board");

    let json = layout.to_json()?;
    let value: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(value["kind"], "grid");
    assert_eq!(value["rows"], 8);
    assert_eq!(value["columns"], 8);
    assert_eq!(value["variables"][0]["shape"], "matrix");

    assert_eq!(SegmentLayout::from_json(&json)?, layout);
    Ok(())
}

#[test]
fn layout_does_not_depend_on_bound_data() -> Result<()> {
    let mut before: Vec<Vec<i32>> = Vec::new();
    let mut after = vec![vec![1; 3]; 2];
    let empty = GridSegmentBuilder::new()
        .add_matrix_variable(Matrix::new("M", &mut before))
        .set_size(2, 3)
        .build()?;
    let filled = GridSegmentBuilder::new()
        .add_matrix_variable(Matrix::new("M", &mut after))
        .set_size(2, 3)
        .build()?;
    assert_eq!(empty.layout(), filled.layout());
    Ok(())
}

#[test]
fn segment_enum_forwards_layout() -> Result<()> {
    let mut n = 0u8;
    let segment: Segment<'_> = LineSegmentBuilder::new()
        .add_scalar_variable(Scalar::new("N", &mut n))
        .build()?
        .into();
    assert_eq!(segment.kind(), SegmentKind::Line);
    assert_eq!(segment.layout().to_string(), "line: N");
    Ok(())
}
