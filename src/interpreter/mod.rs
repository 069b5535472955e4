/*!
Stack evaluator for SIC

One `Interpreter` owns the data stack, the dictionary of user words and the
built-in table. `process` tokenizes one line and evaluates it; each token is,
in priority order:

1. `:dump` - print the whole stack, top first, without consuming it
2. `:name` at top level - start a definition, closed by `:end`
3. any token while defining - appended verbatim to the pending body
4. a user word - its stored body is evaluated as a token sequence
5. a built-in - its handler runs against the stack
6. anything else - parsed as a literal and pushed

Word bodies cannot open definitions; a `:name` token inside a body falls
through to the literal parser.
*/

pub mod builtins;
pub mod dictionary;
pub mod stack;

pub use builtins::{BUILTINS, Builtin};
pub use dictionary::{Dictionary, validate_word_name};
pub use stack::Stack;

use crate::error::{EvalError, EvalResult};
use crate::output::Output;
use crate::parser::{parse_array, tokenize};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

const DUMP: &str = ":dump";
const END: &str = ":end";

/// Stack space to keep free before a nested word call
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing
const STACK_PER_CALL: usize = 1024 * 1024;

/// A definition being collected between `:name` and `:end`
struct Definition {
    name: String,
    body: Vec<String>,
}

pub struct Interpreter {
    stack: Stack,
    dictionary: Dictionary,
    builtins: FxHashMap<&'static str, Builtin>,
    output: Output,
}

impl Interpreter {
    /// Interpreter writing to stdout and stderr
    pub fn new() -> Self {
        Self::with_output(Output::stdio())
    }

    /// Interpreter capturing both streams in memory
    pub fn buffered() -> Self {
        Self::with_output(Output::buffered())
    }

    pub fn with_output(output: Output) -> Self {
        Interpreter {
            stack: Stack::new(),
            dictionary: Dictionary::new(),
            builtins: builtins::registry(),
            output,
        }
    }

    /// Tokenize and evaluate one line against the persistent state
    pub fn process(&mut self, line: &str) {
        let tokens = tokenize(line);
        self.evaluate(&tokens, false);
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Drain captured results (empty unless buffered)
    pub fn take_results(&mut self) -> String {
        self.output.take_results()
    }

    /// Drain captured diagnostics (empty unless buffered)
    pub fn take_diagnostics(&mut self) -> String {
        self.output.take_diagnostics()
    }

    fn evaluate(&mut self, tokens: &[String], in_body: bool) {
        let mut pending: Option<Definition> = None;

        for (i, token) in tokens.iter().enumerate() {
            trace!(token = %token, in_body, "evaluate");

            if token == DUMP {
                self.dump();
                continue;
            }

            if pending.is_some() {
                if token == END {
                    if let Some(def) = pending.take() {
                        self.commit(def);
                    }
                } else if let Some(def) = pending.as_mut() {
                    def.body.push(token.clone());
                }
                continue;
            }

            if !in_body {
                if let Some(name) = definition_header(token) {
                    let has_body = i + 1 < tokens.len();
                    match open_definition(name, has_body) {
                        Ok(def) => pending = Some(def),
                        Err(err) => self.report(err),
                    }
                    continue;
                }
            }

            if let Some(body) = self.dictionary.get(token) {
                // Read the body at call time so redefinitions take effect.
                let body = body.to_vec();
                self.call_word(token, &body);
                continue;
            }

            if let Some(&builtin) = self.builtins.get(token.as_str()) {
                if let Err(err) = self.call_builtin(builtin) {
                    self.report(err);
                }
                continue;
            }

            self.stack.push(parse_array(token));
        }

        if let Some(def) = pending {
            debug!(word = %def.name, "unterminated definition discarded");
        }
    }

    fn call_word(&mut self, name: &str, body: &[String]) {
        trace!(word = %name, tokens = body.len(), "call word");
        ensure_sufficient_stack(|| self.evaluate(body, true));
    }

    fn commit(&mut self, def: Definition) {
        let tokens = def.body.len();
        let replaced = self.dictionary.define(def.name.clone(), def.body);
        debug!(word = %def.name, tokens, replaced, "defined word");
    }

    fn dump(&mut self) {
        self.output.result("Stack:");
        if self.stack.is_empty() {
            self.output.result("(empty)");
            return;
        }
        let lines: Vec<String> = self.stack.iter_top_down().map(ToString::to_string).collect();
        for line in &lines {
            self.output.result(line);
        }
    }

    fn report(&mut self, err: EvalError) {
        debug!(%err, "evaluation error");
        self.output.diagnostic(&format!("Error: {}", err));
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// Name after the colon of a `:name` token
fn definition_header(token: &str) -> Option<&str> {
    let name = token.strip_prefix(':')?;
    if name.is_empty() { None } else { Some(name) }
}

fn open_definition(name: &str, has_body: bool) -> EvalResult<Definition> {
    validate_word_name(name)?;
    if !has_body {
        return Err(EvalError::invalid_definition(format!(
            "':{}' has no body",
            name
        )));
    }
    Ok(Definition {
        name: name.to_string(),
        body: Vec::new(),
    })
}

#[inline]
#[cfg(not(target_arch = "wasm32"))]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_CALL, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[&str]) -> Interpreter {
        let mut interp = Interpreter::buffered();
        for line in lines {
            interp.process(line);
        }
        interp
    }

    #[test]
    fn test_literals_are_pushed() {
        let interp = run(&["1 [2 3] x"]);
        assert_eq!(interp.stack().len(), 3);
        assert_eq!(interp.stack().peek(), Some(&parse_array("x")));
    }

    #[test]
    fn test_definition_is_stored_unparsed() {
        let interp = run(&[":double dup + :end"]);
        assert_eq!(
            interp.dictionary().get("double"),
            Some(&["dup".to_string(), "+".to_string()][..])
        );
        assert!(interp.stack().is_empty());
    }

    #[test]
    fn test_definition_does_not_span_lines() {
        let mut interp = run(&[":half 2 /"]);
        assert!(!interp.dictionary().contains("half"));
        assert_eq!(interp.take_diagnostics(), "");
    }

    #[test]
    fn test_header_without_body() {
        let mut interp = run(&[":lonely"]);
        assert!(interp.dictionary().is_empty());
        assert_eq!(
            interp.take_diagnostics(),
            "Error: Invalid function definition: ':lonely' has no body\n"
        );
    }

    #[test]
    fn test_header_inside_body_is_not_a_definition() {
        let interp = run(&[":outer :inner :end", "outer"]);
        assert!(!interp.dictionary().contains("inner"));
        assert_eq!(interp.stack().peek(), Some(&parse_array(":inner")));
    }

    #[test]
    fn test_bare_colon_is_a_character() {
        let interp = run(&[":"]);
        assert_eq!(interp.stack().peek(), Some(&parse_array(":")));
    }

    #[test]
    fn test_dump_while_defining_is_not_stored() {
        let mut interp = run(&["1 :w 2 :dump 3 :end"]);
        assert_eq!(
            interp.dictionary().get("w"),
            Some(&["2".to_string(), "3".to_string()][..])
        );
        assert_eq!(interp.take_results(), "Stack:\n[1]\n");
    }

    #[test]
    fn test_deep_word_recursion_grows_stack() {
        // Each level nests one more word call.
        let mut lines = vec![":w0 1 :end".to_string()];
        for depth in 1..2000 {
            lines.push(format!(":w{} w{} :end", depth, depth - 1));
        }
        let mut interp = Interpreter::buffered();
        for line in &lines {
            interp.process(line);
        }
        interp.process("w1999 .");
        assert_eq!(interp.take_results(), "[1]\n");
    }
}
