//! Row-major reshape
//!
//! The last dimension is the innermost level; data elements are consumed left
//! to right, depth first. The dimension product must equal the data length
//! exactly: no padding, truncation or broadcasting.

use super::shape::Shape;
use crate::error::{EvalError, EvalResult};
use crate::value::{Array, Value};

pub fn reshape(data: &Array, shape: &Array) -> EvalResult<Array> {
    let dims = dimensions(shape)?;

    let total = dims
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| EvalError::shape_mismatch("reshape", "shape dimensions overflow"))?;

    if data.len() != total {
        return Err(EvalError::shape_mismatch(
            "reshape",
            format!(
                "data size {} does not match shape dimensions {:?}",
                data.len(),
                dims.as_slice()
            ),
        ));
    }

    let mut elements = data.iter().cloned();
    Ok(build(&dims, &mut elements))
}

fn dimensions(shape: &Array) -> EvalResult<Shape> {
    if shape.is_empty() {
        return Err(EvalError::invalid_argument(
            "reshape",
            "requires a non-empty shape array",
        ));
    }

    shape
        .iter()
        .map(|value| {
            let n = value.as_number().ok_or(EvalError::TypeMismatch {
                word: "reshape",
                expected: "numeric shape values",
            })?;
            if n <= 0.0 || n.fract() != 0.0 {
                return Err(EvalError::invalid_argument(
                    "reshape",
                    format!("dimensions must be positive integers, got {}", n),
                ));
            }
            if n >= usize::MAX as f64 {
                return Err(EvalError::invalid_argument(
                    "reshape",
                    format!("dimension {} is too large", n),
                ));
            }
            Ok(n as usize)
        })
        .collect()
}

fn build<I: Iterator<Item = Value>>(dims: &[usize], elements: &mut I) -> Array {
    match dims {
        [] => Array::new(),
        [last] => elements.by_ref().take(*last).collect(),
        [extent, rest @ ..] => (0..*extent)
            .map(|_| Value::Array(build(rest, elements)))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::shape::dims;
    use crate::parser::parse_array;

    fn run(data: &str, shape: &str) -> EvalResult<Array> {
        reshape(&parse_array(data), &parse_array(shape))
    }

    #[test]
    fn test_reshape_matrix() {
        assert_eq!(run("[1 2 3 4]", "[2 2]"), Ok(parse_array("[[1 2] [3 4]]")));
        assert_eq!(
            run("[1 2 3 4 5 6]", "[3 2]"),
            Ok(parse_array("[[1 2] [3 4] [5 6]]"))
        );
    }

    #[test]
    fn test_reshape_rank_three_is_row_major() {
        assert_eq!(
            run("[1 2 3 4 5 6 7 8]", "[2 2 2]"),
            Ok(parse_array("[[[1 2] [3 4]] [[5 6] [7 8]]]"))
        );
    }

    #[test]
    fn test_reshape_scalar_shape() {
        assert_eq!(run("[1 2 3]", "3"), Ok(parse_array("[1 2 3]")));
    }

    #[test]
    fn test_reshape_keeps_element_kinds() {
        assert_eq!(run("[a b c d]", "[2 2]"), Ok(parse_array("[[a b] [c d]]")));
    }

    #[test]
    fn test_reshape_then_dims_recovers_shape() {
        let reshaped = run("[1 2 3 4 5 6 7 8 9 10 11 12]", "[2 3 2]").unwrap();
        assert_eq!(dims(&reshaped).unwrap().as_slice(), &[2, 3, 2]);
    }

    #[test]
    fn test_reshape_size_mismatch() {
        assert!(matches!(
            run("[1 2 3]", "[2 2]"),
            Err(EvalError::ShapeMismatch { word: "reshape", .. })
        ));
        assert!(matches!(
            run("[1 2 3 4 5]", "[2 2]"),
            Err(EvalError::ShapeMismatch { word: "reshape", .. })
        ));
    }

    #[test]
    fn test_reshape_bad_dimensions() {
        for shape in ["[]", "[0 2]", "[-2 2]", "[1.5 2]"] {
            assert!(
                matches!(run("[1 2 3 4]", shape), Err(EvalError::InvalidArgument { .. })),
                "shape {shape}"
            );
        }
        assert!(matches!(
            run("[1 2 3 4]", "[x 2]"),
            Err(EvalError::TypeMismatch { word: "reshape", .. })
        ));
    }

    #[test]
    fn test_reshape_huge_dimension() {
        let err = run("[1 2 3]", "[1e300]").unwrap_err();
        assert!(matches!(err, EvalError::InvalidArgument { word: "reshape", .. }));
        assert!(err.to_string().ends_with("is too large"), "{err}");
    }
}
