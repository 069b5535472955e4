//! Output streams for the interpreter.
//!
//! Two logical streams leave the interpreter: results (`.` and `:dump`) and
//! diagnostics (one `Error: ` line per failure). They can go to the process's
//! stdout/stderr or be captured for tests and embedding.

/// Captured output, one string per stream
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Buffer {
    results: String,
    diagnostics: String,
}

/// Output destination, dispatched statically
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Results to stdout, diagnostics to stderr
    Stdio,
    /// Both streams captured in memory
    Buffer(Buffer),
}

impl Output {
    pub fn stdio() -> Self {
        Output::Stdio
    }

    pub fn buffered() -> Self {
        Output::Buffer(Buffer::default())
    }

    /// Write one line to the results stream.
    pub fn result(&mut self, line: &str) {
        match self {
            Output::Stdio => println!("{line}"),
            Output::Buffer(buf) => {
                buf.results.push_str(line);
                buf.results.push('\n');
            }
        }
    }

    /// Write one line to the diagnostics stream.
    pub fn diagnostic(&mut self, line: &str) {
        match self {
            Output::Stdio => eprintln!("{line}"),
            Output::Buffer(buf) => {
                buf.diagnostics.push_str(line);
                buf.diagnostics.push('\n');
            }
        }
    }

    /// Drain captured results. Always empty for stdio.
    pub fn take_results(&mut self) -> String {
        match self {
            Output::Stdio => String::new(),
            Output::Buffer(buf) => std::mem::take(&mut buf.results),
        }
    }

    /// Drain captured diagnostics. Always empty for stdio.
    pub fn take_diagnostics(&mut self) -> String {
        match self {
            Output::Stdio => String::new(),
            Output::Buffer(buf) => std::mem::take(&mut buf.diagnostics),
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::stdio()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_keeps_streams_apart() {
        let mut out = Output::buffered();
        out.result("[1 2]");
        out.diagnostic("Error: boom");
        out.result("[3]");

        assert_eq!(out.take_results(), "[1 2]\n[3]\n");
        assert_eq!(out.take_diagnostics(), "Error: boom\n");
        assert_eq!(out.take_results(), "");
    }

    #[test]
    fn test_stdio_captures_nothing() {
        let mut out = Output::stdio();
        assert_eq!(out.take_results(), "");
        assert_eq!(out.take_diagnostics(), "");
    }
}
