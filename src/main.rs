use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use sicl::{BUILTINS, Interpreter, Repl};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sic", author, version, about = "SIC - Simple Interpreted Concatenative Lang")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive session (default)
    Repl,
    /// Evaluate a script file, one line at a time
    Run { script: PathBuf },
    /// Evaluate each argument as one line
    Eval {
        #[arg(required = true)]
        lines: Vec<String>,
    },
    /// List the built-in words
    Words,
    /// Print shell completions
    Completions { shell: Shell },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    sicl::init_tracing();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Repl) {
        Command::Repl => Repl::new().run()?,
        Command::Run { script } => {
            let source = fs::read_to_string(&script)
                .map_err(|e| format!("Failed to read {}: {}", script.display(), e))?;
            let mut interpreter = Interpreter::new();
            for line in source.lines() {
                interpreter.process(line);
            }
        }
        Command::Eval { lines } => {
            let mut interpreter = Interpreter::new();
            for line in &lines {
                interpreter.process(line);
            }
        }
        Command::Words => {
            for builtin in BUILTINS {
                println!("{:<8} {}", builtin.name(), builtin.description());
            }
        }
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "sic", &mut std::io::stdout());
        }
    }

    Ok(())
}
