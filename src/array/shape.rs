//! Shape inference
//!
//! A shape is never stored on an array; it is computed by walking the nesting
//! through first children. Each level is checked for uniformity only against
//! its own elements, so inconsistencies below the first child of a level go
//! unnoticed. Callers rely on exactly this behaviour.

use crate::error::{EvalError, EvalResult};
use crate::value::{Array, Value};
use smallvec::SmallVec;

/// Per-level extents, outermost first
pub type Shape = SmallVec<[usize; 4]>;

/// A length-1 array whose sole element is a number
pub fn is_scalar(arr: &Array) -> bool {
    arr.len() == 1 && matches!(arr[0], Value::Number(_))
}

/// Infer the shape of `arr`.
///
/// The level's length is always recorded. Descent continues into the first
/// element only while every element of the level is an array of the same
/// length as the first; otherwise the level is treated as a leaf.
pub fn shape(arr: &Array) -> Shape {
    let mut shape = Shape::new();
    let mut level = arr;

    loop {
        shape.push(level.len());

        let Some(Value::Array(first)) = level.first() else {
            break;
        };
        let uniform = level[1..]
            .iter()
            .all(|value| matches!(value, Value::Array(inner) if inner.len() == first.len()));
        if !uniform {
            break;
        }
        level = first;
    }

    shape
}

/// Dimensions reported by `dim`.
///
/// Unlike [`shape`], a level whose first element is an array but which holds
/// a non-array or an array of a different length is an error. A scalar has
/// no dimensions; an empty level contributes `0`.
pub fn dims(arr: &Array) -> EvalResult<Shape> {
    let mut dims = Shape::new();
    if arr.len() == 1 && !arr[0].is_array() {
        return Ok(dims);
    }

    let mut level = arr;
    loop {
        dims.push(level.len());

        let Some(Value::Array(first)) = level.first() else {
            break;
        };
        for value in &level[1..] {
            match value {
                Value::Array(inner) if inner.len() == first.len() => {}
                _ => return Err(EvalError::NonUniformArray { word: "dim" }),
            }
        }
        level = first;
    }

    Ok(dims)
}
