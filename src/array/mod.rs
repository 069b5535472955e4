//! Array engine
//!
//! Shape inference, scalar broadcasting, reshape and matrix multiplication
//! over arbitrarily nested, dynamically typed arrays. Every function here is
//! pure: operands are borrowed and a fresh array is returned, so a failing
//! operation never leaves a partial result behind.

mod broadcast;
mod matmul;
mod reshape;
mod shape;

pub use broadcast::{BinaryOp, broadcast};
pub use matmul::matmul;
pub use reshape::reshape;
pub use shape::{Shape, dims, is_scalar, shape};

use crate::error::{EvalError, EvalResult};
use crate::value::{Array, Value};

/// Top-level concatenation: `a`'s elements followed by `b`'s
pub fn concat(mut a: Array, b: Array) -> Array {
    a.extend(b);
    a
}

/// `[0, 1, ..., n-1]` for a scalar non-negative integer `n`
pub fn range(n: &Array) -> EvalResult<Array> {
    let count = match n.first() {
        Some(Value::Number(count)) if n.len() == 1 => *count,
        _ => {
            return Err(EvalError::TypeMismatch {
                word: "range",
                expected: "a scalar numeric argument",
            });
        }
    };

    if count < 0.0 || count.fract() != 0.0 {
        return Err(EvalError::invalid_argument(
            "range",
            format!("requires a non-negative integer, got {}", count),
        ));
    }

    if count >= usize::MAX as f64 {
        return Err(too_many_elements(count));
    }
    let len = count as usize;

    let mut items = Vec::new();
    items
        .try_reserve_exact(len)
        .map_err(|_| too_many_elements(count))?;
    items.extend((0..len).map(|i| Value::Number(i as f64)));
    Ok(Array::from(items))
}

fn too_many_elements(count: f64) -> EvalError {
    EvalError::invalid_argument("range", format!("cannot allocate {} elements", count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_array;

    #[test]
    fn test_concat_is_top_level() {
        let joined = concat(parse_array("[[1 2] 3]"), parse_array("[4 [5]]"));
        assert_eq!(joined, parse_array("[[1 2] 3 4 [5]]"));
    }

    #[test]
    fn test_range() {
        assert_eq!(range(&parse_array("5")), Ok(parse_array("[0 1 2 3 4]")));
        assert_eq!(range(&parse_array("0")), Ok(Array::new()));
    }

    #[test]
    fn test_range_rejects_bad_arguments() {
        assert!(matches!(
            range(&parse_array("-1")),
            Err(EvalError::InvalidArgument { word: "range", .. })
        ));
        assert!(matches!(
            range(&parse_array("2.5")),
            Err(EvalError::InvalidArgument { word: "range", .. })
        ));
        assert!(matches!(
            range(&parse_array("[1 2]")),
            Err(EvalError::TypeMismatch { word: "range", .. })
        ));
        assert!(matches!(
            range(&parse_array("x")),
            Err(EvalError::TypeMismatch { word: "range", .. })
        ));
    }

    #[test]
    fn test_range_too_large_to_allocate() {
        for n in ["1e18", "1e300"] {
            assert!(
                matches!(
                    range(&parse_array(n)),
                    Err(EvalError::InvalidArgument { word: "range", .. })
                ),
                "argument {n}"
            );
        }
    }
}
