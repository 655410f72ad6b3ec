//! Tests for the line segment manipulator.

mod common;

use anyhow::Result;
use caseio::*;
use common::{parse_str, print_err, print_to_string};

#[test]
fn parses_scalars_and_sized_vector() -> Result<()> {
    let (mut n, mut k) = (0i32, 0u64);
    let mut a: Vec<i64> = Vec::new();
    let mut segment = LineSegmentBuilder::new()
        .add_scalar_variable(Scalar::new("N", &mut n))
        .add_scalar_variable(Scalar::new("K", &mut k))
        .add_vector_variable_with_size(Vector::new("A", &mut a), 3)
        .build()?;
    parse_str(&mut segment, "2 10 -1 0 7\n")?;
    drop(segment);

    assert_eq!((n, k), (2, 10));
    assert_eq!(a, vec![-1, 0, 7]);
    Ok(())
}

#[test]
fn prints_tokens_separated_by_single_spaces() -> Result<()> {
    let mut n = 3usize;
    let mut name = "alice".to_string();
    let mut a = vec![1.5f64, 2.0, -0.25];
    let segment = LineSegmentBuilder::new()
        .add_scalar_variable(Scalar::new("N", &mut n))
        .add_vector_variable(Vector::new("A", &mut a).with_size(3))
        .add_scalar_variable(Scalar::new("S", &mut name))
        .build()?;
    assert_eq!(print_to_string(&segment)?, "3 1.5 2 -0.25 alice\n");
    Ok(())
}

#[test]
fn vector_length_mismatch_writes_nothing() -> Result<()> {
    let mut n = 1;
    let mut a = vec![1, 2];
    let segment = LineSegmentBuilder::new()
        .add_scalar_variable(Scalar::new("N", &mut n))
        .add_vector_variable_with_size(Vector::new("A", &mut a), 3)
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
fn bad_token_names_variable_and_keeps_storage() -> Result<()> {
    let (mut n, mut m) = (5i32, 6i32);
    let mut segment = LineSegmentBuilder::new()
        .add_scalar_variable(Scalar::new("N", &mut n))
        .add_scalar_variable(Scalar::new("M", &mut m))
        .build()?;
    let err = parse_str(&mut segment, "1 two\n").unwrap_err();
    drop(segment);

    assert_eq!(err.to_string(), "Cannot parse value for variable 'M'");
    assert!(matches!(err, IoError::Parse { ref token, .. } if token == "two"));
    assert_eq!((n, m), (5, 6));
    Ok(())
}

#[test]
fn bad_vector_element_is_reported_by_index() -> Result<()> {
    let mut a = vec![0u8; 3];
    let mut segment = LineSegmentBuilder::new()
        .add_vector_variable_with_size(Vector::new("A", &mut a), 3)
        .build()?;
    let err = parse_str(&mut segment, "1 2 300\n").unwrap_err();
    drop(segment);

    assert_eq!(err.to_string(), "Cannot parse value for variable 'A[2]'");
    assert_eq!(a, vec![0, 0, 0]);
    Ok(())
}

#[test]
fn short_line_reports_next_missing_position() -> Result<()> {
    let mut n = 0;
    let mut a: Vec<i32> = Vec::new();
    let mut segment = LineSegmentBuilder::new()
        .add_scalar_variable(Scalar::new("N", &mut n))
        .add_vector_variable_with_size(Vector::new("A", &mut a), 3)
        .build()?;
    let err = parse_str(&mut segment, "3 1 2\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing value for variable 'A[2]'. Found: <newline>"
    );
    Ok(())
}

#[test]
fn missing_line_reports_eof() -> Result<()> {
    let mut n = 0;
    let mut segment = LineSegmentBuilder::new()
        .add_scalar_variable(Scalar::new("N", &mut n))
        .build()?;
    let err = parse_str(&mut segment, "").unwrap_err();
    assert_eq!(err.to_string(), "Missing value for variable 'N'. Found: <EOF>");
    Ok(())
}

#[test]
fn extra_token_is_rejected() -> Result<()> {
    let (mut n, mut m) = (0, 0);
    let mut segment = LineSegmentBuilder::new()
        .add_scalar_variable(Scalar::new("N", &mut n))
        .add_scalar_variable(Scalar::new("M", &mut m))
        .build()?;
    let err = parse_str(&mut segment, "1 2 3\n").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Expected: <newline> after variable 'M'. Found: '3'"
    );
    Ok(())
}

#[test]
fn empty_vector_occupies_no_tokens() -> Result<()> {
    let mut n = 0;
    let mut a: Vec<i32> = vec![4, 4];
    let mut segment = LineSegmentBuilder::new()
        .add_scalar_variable(Scalar::new("N", &mut n))
        .add_vector_variable_with_size(Vector::new("A", &mut a), 0)
        .build()?;
    parse_str(&mut segment, "0\n")?;
    assert_eq!(print_to_string(&segment)?, "0\n");
    drop(segment);
    assert!(a.is_empty());
    Ok(())
}

#[test]
fn segment_without_variables_is_an_empty_line() -> Result<()> {
    let mut segment = LineSegmentBuilder::new().build()?;
    assert_eq!(print_to_string(&segment)?, "\n");
    parse_str(&mut segment, "\n")?;

    let err = parse_str(&mut segment, "x\n").unwrap_err();
    assert_eq!(err.to_string(), "Expected: <newline>. Found: 'x'");
    Ok(())
}

#[test]
fn tolerates_extra_whitespace_and_crlf() -> Result<()> {
    let (mut n, mut m) = (0, 0);
    let mut segment = LineSegmentBuilder::new()
        .add_scalar_variable(Scalar::new("N", &mut n))
        .add_scalar_variable(Scalar::new("M", &mut m))
        .build()?;
    parse_str(&mut segment, "  4\t 9 \r\n")?;
    assert_eq!(print_to_string(&segment)?, "4 9\n");
    Ok(())
}

#[test]
fn reparse_of_printed_output_is_stable() -> Result<()> {
    let mut n = -12i32;
    let mut a = vec![3u32, 1, 4, 1, 5];
    let text = {
        let segment = LineSegmentBuilder::new()
            .add_scalar_variable(Scalar::new("N", &mut n))
            .add_vector_variable_with_size(Vector::new("A", &mut a), 5)
            .build()?;
        print_to_string(&segment)?
    };

    let mut n2 = 0i32;
    let mut a2: Vec<u32> = Vec::new();
    let mut segment = LineSegmentBuilder::new()
        .add_scalar_variable(Scalar::new("N", &mut n2))
        .add_vector_variable_with_size(Vector::new("A", &mut a2), 5)
        .build()?;
    parse_str(&mut segment, &text)?;
    assert_eq!(print_to_string(&segment)?, text);
    drop(segment);
    assert_eq!((n2, a2), (n, a));
    Ok(())
}
