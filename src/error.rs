/*!
Error types for evaluation

Every built-in reports failure through `EvalError`. None of them are fatal:
the interpreter prints the error as one `Error: ` line and moves on to the
next token.
*/

use thiserror::Error;

/// Errors that can occur while evaluating a line
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// An operator needs more items than the stack holds
    #[error("Insufficient stack elements for {word} (needs {required}, found {available})")]
    StackUnderflow {
        word: &'static str,
        required: usize,
        available: usize,
    },

    /// An operator found a leaf of the wrong kind
    #[error("{word} requires {expected}")]
    TypeMismatch {
        word: &'static str,
        expected: &'static str,
    },

    /// Operand shapes are incompatible
    #[error("{word}: {details}")]
    ShapeMismatch { word: &'static str, details: String },

    #[error("Division by zero")]
    DivisionByZero,

    /// Malformed `:name` header
    #[error("Invalid function definition: {reason}")]
    InvalidDefinition { reason: String },

    /// Inconsistent nesting where a uniform array is required
    #[error("Non-uniform array for {word}")]
    NonUniformArray { word: &'static str },

    /// An argument has the right type but an unusable value
    #[error("{word}: {details}")]
    InvalidArgument { word: &'static str, details: String },
}

impl EvalError {
    pub fn shape_mismatch(word: &'static str, details: impl Into<String>) -> Self {
        EvalError::ShapeMismatch {
            word,
            details: details.into(),
        }
    }

    pub fn invalid_argument(word: &'static str, details: impl Into<String>) -> Self {
        EvalError::InvalidArgument {
            word,
            details: details.into(),
        }
    }

    pub fn invalid_definition(reason: impl Into<String>) -> Self {
        EvalError::InvalidDefinition {
            reason: reason.into(),
        }
    }
}

/// Result type for evaluation
pub type EvalResult<T> = Result<T, EvalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EvalError::StackUnderflow {
            word: "+",
            required: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stack elements for + (needs 2, found 1)"
        );

        let err = EvalError::TypeMismatch {
            word: "*",
            expected: "numeric arguments",
        };
        assert_eq!(err.to_string(), "* requires numeric arguments");

        assert_eq!(EvalError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(
            EvalError::NonUniformArray { word: "dim" }.to_string(),
            "Non-uniform array for dim"
        );
    }

    #[test]
    fn test_constructors() {
        assert_eq!(
            EvalError::invalid_definition("reserved name 'end'").to_string(),
            "Invalid function definition: reserved name 'end'"
        );
        assert_eq!(
            EvalError::shape_mismatch("matmul", "requires 2D arrays").to_string(),
            "matmul: requires 2D arrays"
        );
    }
}
