/*!
Built-in words

This module binds the engine-provided operations to their symbols:
- Arithmetic: +, -, *, /, ^ (elementwise with scalar broadcasting)
- Arrays: cat, range, reshape, dim, matmul
- Stack: dup, swap, clear
- Output: .

Every handler validates before it pushes. Operands already popped when a
check fails are gone; nothing is restored.
*/

use super::Interpreter;
use crate::array::{self, BinaryOp};
use crate::error::EvalResult;
use crate::value::Array;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Arith(BinaryOp),
    Cat,
    Print,
    Clear,
    Swap,
    Dup,
    Range,
    Reshape,
    Dim,
    Matmul,
}

/// All built-ins, in listing order
pub const BUILTINS: &[Builtin] = &[
    // Arithmetic
    Builtin::Arith(BinaryOp::Add),
    Builtin::Arith(BinaryOp::Sub),
    Builtin::Arith(BinaryOp::Mul),
    Builtin::Arith(BinaryOp::Div),
    Builtin::Arith(BinaryOp::Pow),
    // Arrays
    Builtin::Cat,
    Builtin::Range,
    Builtin::Reshape,
    Builtin::Dim,
    Builtin::Matmul,
    // Stack
    Builtin::Dup,
    Builtin::Swap,
    Builtin::Clear,
    // Output
    Builtin::Print,
];

impl Builtin {
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Arith(op) => op.symbol(),
            Builtin::Cat => "cat",
            Builtin::Print => ".",
            Builtin::Clear => "clear",
            Builtin::Swap => "swap",
            Builtin::Dup => "dup",
            Builtin::Range => "range",
            Builtin::Reshape => "reshape",
            Builtin::Dim => "dim",
            Builtin::Matmul => "matmul",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Builtin::Arith(BinaryOp::Add) => "Add elementwise",
            Builtin::Arith(BinaryOp::Sub) => "Subtract top from second, elementwise",
            Builtin::Arith(BinaryOp::Mul) => "Multiply elementwise",
            Builtin::Arith(BinaryOp::Div) => "Divide second by top, elementwise",
            Builtin::Arith(BinaryOp::Pow) => "Raise second to the power of top, elementwise",
            Builtin::Cat => "Concatenate the top two arrays",
            Builtin::Print => "Pop and print the top array",
            Builtin::Clear => "Remove every stack element",
            Builtin::Swap => "Swap top two stack elements",
            Builtin::Dup => "Duplicate top stack element",
            Builtin::Range => "Replace n with [0 .. n-1]",
            Builtin::Reshape => "Reshape data (second) to shape (top), row-major",
            Builtin::Dim => "Replace the top array with its dimensions",
            Builtin::Matmul => "Multiply two 2D matrices",
        }
    }
}

/// Name to built-in lookup table, built once per interpreter
pub fn registry() -> FxHashMap<&'static str, Builtin> {
    BUILTINS.iter().map(|&b| (b.name(), b)).collect()
}

impl Interpreter {
    /// Run a built-in against the live stack
    pub(super) fn call_builtin(&mut self, builtin: Builtin) -> EvalResult<()> {
        let word = builtin.name();
        match builtin {
            Builtin::Arith(op) => {
                let (a, b) = self.stack.pop2(word)?;
                let result = array::broadcast(op, &a, &b)?;
                self.stack.push(result);
            }
            Builtin::Cat => {
                let (a, b) = self.stack.pop2(word)?;
                self.stack.push(array::concat(a, b));
            }
            Builtin::Print => {
                let top = self.stack.pop(word)?;
                self.output.result(&top.to_string());
            }
            Builtin::Clear => self.stack.clear(),
            Builtin::Swap => {
                let (second, top) = self.stack.pop2(word)?;
                self.stack.push(top);
                self.stack.push(second);
            }
            Builtin::Dup => {
                self.stack.require(word, 1)?;
                if let Some(top) = self.stack.peek().cloned() {
                    self.stack.push(top);
                }
            }
            Builtin::Range => {
                let n = self.stack.pop(word)?;
                self.stack.push(array::range(&n)?);
            }
            Builtin::Reshape => {
                let (data, shape) = self.stack.pop2(word)?;
                self.stack.push(array::reshape(&data, &shape)?);
            }
            Builtin::Dim => {
                let top = self.stack.pop(word)?;
                let dims = array::dims(&top)?;
                self.stack
                    .push(Array::numbers(dims.into_iter().map(|d| d as f64)));
            }
            Builtin::Matmul => {
                let (a, b) = self.stack.pop2(word)?;
                self.stack.push(array::matmul(&a, &b)?);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        let table = registry();
        assert_eq!(table.get("+"), Some(&Builtin::Arith(BinaryOp::Add)));
        assert_eq!(table.get("matmul"), Some(&Builtin::Matmul));
        assert_eq!(table.get("."), Some(&Builtin::Print));
        assert_eq!(table.get("double"), None);
    }

    #[test]
    fn test_registry_covers_every_builtin() {
        let table = registry();
        assert_eq!(table.len(), BUILTINS.len());
        for &builtin in BUILTINS {
            assert_eq!(table.get(builtin.name()), Some(&builtin));
            assert!(!builtin.description().is_empty());
        }
    }
}
