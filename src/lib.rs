//! SIC - Simple Interpreted Concatenative language
//!
//! A small stack-based language with APL-style array semantics. This crate
//! implements the interpreter, including:
//! - Tokenizer and literal parser
//! - Dynamically typed value model (characters, numbers, text, nested arrays)
//! - Dictionary of late-bound user words
//! - Stack evaluator and built-in words
//! - Array engine: shape inference, broadcasting, reshape, matmul

pub mod array;
pub mod error;
pub mod interpreter;
pub mod output;
pub mod parser;
pub mod repl;
pub mod value;

pub use error::{EvalError, EvalResult};
pub use interpreter::{BUILTINS, Builtin, Interpreter};
pub use output::Output;
pub use repl::Repl;
pub use value::{Array, Value};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=sicl=debug` or
/// `RUST_LOG=sicl=trace`; without `RUST_LOG` nothing is installed.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
