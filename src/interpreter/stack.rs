//! The data stack: a LIFO of arrays owned by one interpreter

use crate::error::{EvalError, EvalResult};
use crate::value::Array;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stack {
    items: Vec<Array>,
}

impl Stack {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: Array) {
        self.items.push(item);
    }

    pub fn peek(&self) -> Option<&Array> {
        self.items.last()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Fail with `StackUnderflow` unless `required` items are present
    pub fn require(&self, word: &'static str, required: usize) -> EvalResult<()> {
        if self.items.len() < required {
            return Err(EvalError::StackUnderflow {
                word,
                required,
                available: self.items.len(),
            });
        }
        Ok(())
    }

    pub fn pop(&mut self, word: &'static str) -> EvalResult<Array> {
        self.items.pop().ok_or(EvalError::StackUnderflow {
            word,
            required: 1,
            available: 0,
        })
    }

    /// Pop the top two items as `(second, top)`.
    ///
    /// Depth is checked first, so on underflow nothing is removed.
    pub fn pop2(&mut self, word: &'static str) -> EvalResult<(Array, Array)> {
        self.require(word, 2)?;
        let top = self.pop(word)?;
        let second = self.pop(word)?;
        Ok((second, top))
    }

    /// Items from top to bottom
    pub fn iter_top_down(&self) -> impl Iterator<Item = &Array> {
        self.items.iter().rev()
    }
}
