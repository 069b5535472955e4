//! Value model for SIC
//!
//! Everything the language talks about is a `Value`. Whatever reaches the
//! stack is an `Array`, even a bare scalar, which is an `Array` of length 1.

mod format;

use std::ops::Deref;

/// A dynamically typed element
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Single Unicode code point
    Char(char),

    /// IEEE-754 double
    Number(f64),

    /// Unicode string, printed quoted
    Text(String),

    /// Nested array, owned by value
    Array(Array),
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<Array> for Value {
    fn from(arr: Array) -> Self {
        Value::Array(arr)
    }
}

/// Ordered sequence of values; the unit of everything on the stack
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Array(Vec<Value>);

impl Array {
    pub fn new() -> Self {
        Array(Vec::new())
    }

    /// Wrap a single value: the scalar-as-length-1-array form
    pub fn singleton(value: Value) -> Self {
        Array(vec![value])
    }

    pub fn numbers(values: impl IntoIterator<Item = f64>) -> Self {
        values.into_iter().map(Value::Number).collect()
    }

    pub fn push(&mut self, value: Value) {
        self.0.push(value);
    }

    pub fn extend(&mut self, other: Array) {
        self.0.extend(other.0);
    }

    /// Whether any element is itself an array
    pub fn is_nested(&self) -> bool {
        self.0.iter().any(Value::is_array)
    }
}

impl Deref for Array {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Array(values)
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Array(iter.into_iter().collect())
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
