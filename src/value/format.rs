//! Printing format for values and arrays
//!
//! Flat arrays print on one line, `[1 2 3]`. An array holding at least one
//! array puts every element on its own line, two spaces deeper per level:
//!
//! ```text
//! [
//!   [1 2],
//!   [3 4]
//! ]
//! ```

use super::{Array, Value};
use std::fmt;

const INDENT: &str = "  ";

fn pad(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str(INDENT)?;
    }
    Ok(())
}

impl Array {
    fn write_at(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        pad(f, depth)?;
        f.write_str("[")?;

        if self.is_empty() {
            return f.write_str("]");
        }

        if !self.is_nested() {
            for (i, value) in self.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", value)?;
            }
            return f.write_str("]");
        }

        f.write_str("\n")?;
        let last = self.len() - 1;
        for (i, value) in self.iter().enumerate() {
            match value {
                Value::Array(inner) => inner.write_at(f, depth + 1)?,
                other => {
                    pad(f, depth + 1)?;
                    write!(f, "{}", other)?;
                }
            }
            f.write_str(if i < last { ",\n" } else { "\n" })?;
        }
        pad(f, depth)?;
        f.write_str("]")
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_at(f, 0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Char(c) => write!(f, "{}", c),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => write!(f, "\"{}\"", s),
            Value::Array(arr) => arr.write_at(f, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn matrix(rows: &[&[f64]]) -> Array {
        rows.iter()
            .map(|row| Value::Array(Array::numbers(row.iter().copied())))
            .collect()
    }

    #[test]
    fn test_flat_array() {
        let arr: Array = vec![
            Value::Number(1.0),
            Value::Number(2.5),
            Value::Char('x'),
            Value::Text("hi there".to_string()),
        ]
        .into();
        assert_eq!(arr.to_string(), "[1 2.5 x \"hi there\"]");
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(Array::new().to_string(), "[]");
    }

    #[test]
    fn test_matrix() {
        let m = matrix(&[&[19.0, 22.0], &[43.0, 50.0]]);
        assert_eq!(m.to_string(), "[\n  [19 22],\n  [43 50]\n]");
    }

    #[test]
    fn test_mixed_nesting_indents_scalars() {
        let arr: Array = vec![
            Value::Number(1.0),
            Value::Array(matrix(&[&[2.0], &[3.0]])),
        ]
        .into();
        let expected = "[\n  1,\n  [\n    [2],\n    [3]\n  ]\n]";
        assert_eq!(arr.to_string(), expected);
    }

    #[test]
    fn test_negative_and_fractional_numbers() {
        assert_eq!(Value::Number(-2.0).to_string(), "-2");
        assert_eq!(Value::Number(0.25).to_string(), "0.25");
    }
}
