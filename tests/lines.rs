//! Tests for the lines segment manipulator.

mod common;

use anyhow::Result;
use caseio::io::parse_lines_with_rows;
use caseio::*;
use common::{parse_str, print_err, print_to_string};

#[test]
fn vector_parses_one_value_per_line() -> Result<()> {
    let mut a: Vec<i32> = Vec::new();
    let mut segment = LinesSegmentBuilder::new()
        .add_vector_variable(Vector::new("A", &mut a))
        .set_size(3)
        .build()?;
    parse_str(&mut segment, "7\n-2\n9\n")?;
    drop(segment);
    assert_eq!(a, vec![7, -2, 9]);
    Ok(())
}

#[test]
fn vector_prints_one_value_per_line() -> Result<()> {
    let mut a = vec!["x".to_string(), "yy".to_string()];
    let segment = LinesSegmentBuilder::new()
        .add_vector_variable(Vector::new("A", &mut a))
        .set_size(2)
        .build()?;
    assert_eq!(print_to_string(&segment)?, "x\nyy\n");
    Ok(())
}

#[test]
fn vector_row_mismatch_on_print() -> Result<()> {
    let mut a = vec![1, 2];
    let segment = LinesSegmentBuilder::new()
        .add_vector_variable(Vector::new("A", &mut a))
        .set_size(3)
        .build()?;
    let (err, out) = print_err(&segment);
    assert_eq!(
        err.to_string(),
        "Number of elements of vector 'A' unsatisfied. Expected: 3, actual: 2"
    );
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn vector_size_declared_on_descriptor_is_used() -> Result<()> {
    let mut a: Vec<i32> = Vec::new();
    let mut segment = LinesSegmentBuilder::new()
        .add_vector_variable(Vector::new("A", &mut a).with_size(2))
        .build()?;
    assert_eq!(segment.rows(), Some(2));

    let err = parse_str(&mut segment, "1\n").unwrap_err();
    assert_eq!(err.to_string(), "Missing value for variable 'A[1]'. Found: <EOF>");
    Ok(())
}

#[test]
fn vector_rejects_two_tokens_on_a_line() -> Result<()> {
    let mut a: Vec<i32> = Vec::new();
    let mut segment = LinesSegmentBuilder::new()
        .add_vector_variable(Vector::new("A", &mut a))
        .set_size(2)
        .build()?;
    let err = parse_str(&mut segment, "1\n2 3\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expected: <newline> after variable 'A[1]'. Found: '3'"
    );
    Ok(())
}

#[test]
fn vector_rejects_blank_line() -> Result<()> {
    let mut a: Vec<i32> = Vec::new();
    let mut segment = LinesSegmentBuilder::new()
        .add_vector_variable(Vector::new("A", &mut a))
        .set_size(2)
        .build()?;
    let err = parse_str(&mut segment, "1\n\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing value for variable 'A[1]'. Found: <newline>"
    );
    Ok(())
}

#[test]
fn vector_parse_failure_keeps_storage() -> Result<()> {
    let mut a = vec![42];
    let mut segment = LinesSegmentBuilder::new()
        .add_vector_variable(Vector::new("A", &mut a))
        .set_size(3)
        .build()?;
    let err = parse_str(&mut segment, "1\n2\nz\n").unwrap_err();
    drop(segment);
    assert_eq!(err.to_string(), "Cannot parse value for variable 'A[2]'");
    assert_eq!(a, vec![42]);
    Ok(())
}

#[test]
fn undeclared_rows_read_to_end_of_input() -> Result<()> {
    let mut a: Vec<u32> = Vec::new();
    let mut segment = LinesSegmentBuilder::new()
        .add_vector_variable(Vector::new("A", &mut a))
        .build()?;
    assert_eq!(segment.rows(), None);
    parse_str(&mut segment, "5\n6\n7\n8")?;
    drop(segment);
    assert_eq!(a, vec![5, 6, 7, 8]);
    Ok(())
}

#[test]
fn undeclared_rows_print_current_length() -> Result<()> {
    let mut m = vec![vec![1], vec![2, 3], vec![]];
    let segment = LinesSegmentBuilder::new()
        .add_jagged_vector_variable(Matrix::new("M", &mut m))
        .build()?;
    assert_eq!(print_to_string(&segment)?, "1\n2 3\n\n");
    Ok(())
}

#[test]
fn row_hint_limits_an_undeclared_segment() -> Result<()> {
    let mut a: Vec<i32> = Vec::new();
    let mut segment = LinesSegmentBuilder::new()
        .add_vector_variable(Vector::new("A", &mut a))
        .build()?;
    let mut input = "1\n2\n3\n".as_bytes();
    parse_lines_with_rows(&mut segment, &mut input, 2)?;
    drop(segment);
    assert_eq!(a, vec![1, 2]);
    assert_eq!(input, b"3\n");
    Ok(())
}

#[test]
fn declared_rows_win_over_hint() -> Result<()> {
    let mut a: Vec<i32> = Vec::new();
    let mut segment = LinesSegmentBuilder::new()
        .add_vector_variable(Vector::new("A", &mut a))
        .set_size(1)
        .build()?;
    let mut input = "1\n2\n3\n".as_bytes();
    parse_lines_with_rows(&mut segment, &mut input, 3)?;
    drop(segment);
    assert_eq!(a, vec![1]);
    Ok(())
}

#[test]
fn jagged_rows_take_their_own_lengths() -> Result<()> {
    let mut m: Vec<Vec<i32>> = Vec::new();
    let mut segment = LinesSegmentBuilder::new()
        .add_jagged_vector_variable(Matrix::new("M", &mut m))
        .set_size(3)
        .build()?;
    parse_str(&mut segment, "1 2 3\n\n4 5\n")?;
    assert_eq!(print_to_string(&segment)?, "1 2 3\n\n4 5\n");
    drop(segment);
    assert_eq!(m, vec![vec![1, 2, 3], vec![], vec![4, 5]]);
    Ok(())
}

#[test]
fn jagged_row_mismatch_on_print() -> Result<()> {
    let mut m = vec![vec![1, 2, 3, 4], vec![5]];
    let segment = LinesSegmentBuilder::new()
        .add_jagged_vector_variable(Matrix::new("M", &mut m))
        .set_size(3)
        .build()?;
    let (err, out) = print_err(&segment);
    assert_eq!(
        err.to_string(),
        "Number of rows of matrix 'M' unsatisfied. Expected: 3, actual: 2"
    );
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn jagged_bad_cell_is_reported_by_position() -> Result<()> {
    let mut m: Vec<Vec<i32>> = Vec::new();
    let mut segment = LinesSegmentBuilder::new()
        .add_jagged_vector_variable(Matrix::new("M", &mut m))
        .set_size(2)
        .build()?;
    let err = parse_str(&mut segment, "1\n2 ? 4\n").unwrap_err();
    drop(segment);
    assert_eq!(err.to_string(), "Cannot parse value for variable 'M[1][1]'");
    assert!(m.is_empty());
    Ok(())
}

#[test]
fn zero_rows_consume_nothing() -> Result<()> {
    let mut a: Vec<i32> = vec![1];
    let mut segment = LinesSegmentBuilder::new()
        .add_vector_variable(Vector::new("A", &mut a))
        .set_size(0)
        .build()?;
    let mut input = "9\n".as_bytes();
    parse_lines_with_rows(&mut segment, &mut input, 5)?;
    drop(segment);
    assert!(a.is_empty());
    assert_eq!(input, b"9\n");
    Ok(())
}
