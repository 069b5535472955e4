use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::interpreter::Interpreter;

pub const BANNER: &str = "SIC Lang - Simple Interpreted Concatenative Lang";
pub const PROMPT: &str = "> ";
pub const EXIT: &str = "exit";

/// Interactive loop: one line in, one `process` call
pub struct Repl {
    interpreter: Interpreter,
}

impl Repl {
    pub fn new() -> Self {
        Self {
            interpreter: Interpreter::new(),
        }
    }

    pub fn run(&mut self) -> rustyline::Result<()> {
        let mut editor = DefaultEditor::new()?;
        println!("{BANNER}");
        println!("Type '{EXIT}' to quit");

        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed == EXIT {
                        break;
                    }
                    if !trimmed.is_empty() {
                        editor.add_history_entry(trimmed).ok();
                    }
                    self.interpreter.process(&line);
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}
