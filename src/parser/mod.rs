//! Parser for SIC
//!
//! Hand-written single-pass tokenizer plus the literal parser that turns
//! token text into values. Tokens are classified lazily, one at a time, as
//! the evaluator reaches them.

mod lexer;
mod literal;

pub use lexer::{Lexer, tokenize};
pub use literal::{TokenClass, classify, parse_array, parse_element, split_elements};
