//! Matrix multiplication of two rank-2 numeric arrays

use super::shape::shape;
use crate::error::{EvalError, EvalResult};
use crate::value::{Array, Value};

/// `a` is m×n, `b` is n×p; the result is m×p. No batching, no broadcasting.
pub fn matmul(a: &Array, b: &Array) -> EvalResult<Array> {
    let shape_a = shape(a);
    let shape_b = shape(b);
    if shape_a.len() != 2 || shape_b.len() != 2 {
        return Err(EvalError::shape_mismatch("matmul", "requires 2D arrays"));
    }

    let (m, n) = (shape_a[0], shape_a[1]);
    let (n_b, p) = (shape_b[0], shape_b[1]);
    if n != n_b {
        return Err(EvalError::shape_mismatch(
            "matmul",
            format!("incompatible dimensions {}x{} and {}x{}", m, n, n_b, p),
        ));
    }

    let lhs = numeric_rows(a)?;
    let rhs = numeric_rows(b)?;

    let product = lhs
        .iter()
        .map(|row| {
            let cells = (0..p).map(|j| {
                row.iter()
                    .zip(&rhs)
                    .fold(0.0, |sum, (x, rhs_row)| sum + x * rhs_row[j])
            });
            Value::Array(Array::numbers(cells))
        })
        .collect();

    Ok(product)
}

fn numeric_rows(matrix: &Array) -> EvalResult<Vec<Vec<f64>>> {
    matrix
        .iter()
        .map(|row| {
            let row = row.as_array().ok_or(EvalError::TypeMismatch {
                word: "matmul",
                expected: "2D numeric arrays",
            })?;
            row.iter()
                .map(|value| {
                    value.as_number().ok_or(EvalError::TypeMismatch {
                        word: "matmul",
                        expected: "numeric elements",
                    })
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_array;

    fn run(a: &str, b: &str) -> EvalResult<Array> {
        matmul(&parse_array(a), &parse_array(b))
    }

    #[test]
    fn test_square() {
        assert_eq!(
            run("[[1 2] [3 4]]", "[[5 6] [7 8]]"),
            Ok(parse_array("[[19 22] [43 50]]"))
        );
    }

    #[test]
    fn test_rectangular() {
        // 2x3 times 3x1
        assert_eq!(
            run("[[1 2 3] [4 5 6]]", "[[1] [0] [2]]"),
            Ok(parse_array("[[7] [16]]"))
        );
    }

    #[test]
    fn test_associative_on_integer_matrices() {
        let a = "[[1 2] [3 4]]";
        let b = "[[0 1] [1 0]]";
        let c = "[[2 0] [0 3]]";
        let ab = run(a, b).unwrap();
        let bc = run(b, c).unwrap();
        let left = matmul(&ab, &parse_array(c)).unwrap();
        let right = matmul(&parse_array(a), &bc).unwrap();
        assert_eq!(left, right);
        assert_eq!(left, parse_array("[[4 3] [8 9]]"));
    }

    #[test]
    fn test_rejects_wrong_rank() {
        assert!(matches!(
            run("[1 2]", "[[1] [2]]"),
            Err(EvalError::ShapeMismatch { word: "matmul", .. })
        ));
        assert!(matches!(
            run("[[[1]]]", "[[1]]"),
            Err(EvalError::ShapeMismatch { word: "matmul", .. })
        ));
    }

    #[test]
    fn test_rejects_inner_dimension_mismatch() {
        assert_eq!(
            run("[[1 2] [3 4]]", "[[1 2 3]]"),
            Err(EvalError::shape_mismatch(
                "matmul",
                "incompatible dimensions 2x2 and 1x3"
            ))
        );
    }

    #[test]
    fn test_rejects_non_numeric_elements() {
        assert!(matches!(
            run("[[1 x] [3 4]]", "[[1 2] [3 4]]"),
            Err(EvalError::TypeMismatch { word: "matmul", .. })
        ));
        // Rank 2 by inference, but a leaf is an array.
        assert!(matches!(
            run("[[[1] 2] [3 4]]", "[[1 2] [3 4]]"),
            Err(EvalError::TypeMismatch { word: "matmul", .. })
        ));
    }
}
