//! Elementwise arithmetic with scalar broadcasting
//!
//! A scalar operand is replicated over every leaf of the other operand's
//! shape. Two non-scalar operands must have exactly equal shapes; there is no
//! dimension-wise broadcasting beyond the scalar case.

use super::shape::{is_scalar, shape};
use crate::error::{EvalError, EvalResult};
use crate::value::{Array, Value};

/// Arithmetic operators available as built-ins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        }
    }

    pub fn apply(self, x: f64, y: f64) -> EvalResult<f64> {
        Ok(match self {
            BinaryOp::Add => x + y,
            BinaryOp::Sub => x - y,
            BinaryOp::Mul => x * y,
            BinaryOp::Div if y == 0.0 => return Err(EvalError::DivisionByZero),
            BinaryOp::Div => x / y,
            BinaryOp::Pow => x.powf(y),
        })
    }

    fn type_mismatch(self) -> EvalError {
        EvalError::TypeMismatch {
            word: self.symbol(),
            expected: "numeric arguments",
        }
    }

    fn too_short(self) -> EvalError {
        EvalError::shape_mismatch(self.symbol(), "operand is shorter than the broadcast shape")
    }
}

/// Apply `op` elementwise to `a` (second from top) and `b` (top).
///
/// The first non-number leaf or zero divisor aborts the whole operation.
pub fn broadcast(op: BinaryOp, a: &Array, b: &Array) -> EvalResult<Array> {
    let shape_a = shape(a);
    let shape_b = shape(b);

    let target = match (is_scalar(a), is_scalar(b)) {
        (true, false) => shape_b,
        (false, true) => shape_a,
        _ if shape_a == shape_b => shape_a,
        _ => {
            return Err(EvalError::shape_mismatch(
                op.symbol(),
                format!(
                    "requires a scalar or arrays of equal shape, got {:?} and {:?}",
                    shape_a.as_slice(),
                    shape_b.as_slice()
                ),
            ));
        }
    };

    zip_level(op, a, b, &target).map(Array::from)
}

fn zip_level(op: BinaryOp, x: &[Value], y: &[Value], shape: &[usize]) -> EvalResult<Vec<Value>> {
    let Some((&extent, inner)) = shape.split_first() else {
        return Ok(Vec::new());
    };

    let mut out = Vec::with_capacity(extent);
    for i in 0..extent {
        if inner.is_empty() {
            let lhs = leaf(op, x, i)?;
            let rhs = leaf(op, y, i)?;
            out.push(Value::Number(op.apply(lhs, rhs)?));
        } else {
            let xs = descend(op, x, i)?;
            let ys = descend(op, y, i)?;
            out.push(Value::Array(zip_level(op, xs, ys, inner)?.into()));
        }
    }
    Ok(out)
}

// A length-1 level replicates its only element across the extent.
fn leaf(op: BinaryOp, level: &[Value], i: usize) -> EvalResult<f64> {
    let value = if level.len() == 1 {
        &level[0]
    } else {
        level.get(i).ok_or_else(|| op.too_short())?
    };
    value.as_number().ok_or_else(|| op.type_mismatch())
}

// A scalar is carried down unchanged so it reaches every leaf.
fn descend(op: BinaryOp, level: &[Value], i: usize) -> EvalResult<&[Value]> {
    if level.len() == 1 {
        return Ok(match &level[0] {
            Value::Array(inner) => &inner[..],
            _ => level,
        });
    }
    match level.get(i) {
        Some(Value::Array(inner)) => Ok(&inner[..]),
        Some(_) => Err(op.type_mismatch()),
        None => Err(op.too_short()),
    }
}
