//! Lexer for SIC source lines
//!
//! Splits a line on whitespace, keeping quoted strings and bracketed array
//! literals whole. Unterminated quotes or brackets are not errors: whatever
//! has accumulated is emitted as the last token.

pub struct Lexer<'a> {
    input: &'a str,
    tokens: Vec<String>,
    current: String,
    bracket_depth: i32,
    in_quotes: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            tokens: Vec::new(),
            current: String::new(),
            bracket_depth: 0,
            in_quotes: false,
        }
    }

    pub fn tokenize(mut self) -> Vec<String> {
        let mut prev = None;

        for c in self.input.chars() {
            self.scan(c, prev);
            prev = Some(c);
        }
        self.flush();

        self.tokens
    }

    fn scan(&mut self, c: char, prev: Option<char>) {
        if c == '"' && prev != Some('\\') {
            self.in_quotes = !self.in_quotes;
            self.current.push(c);
            return;
        }

        if self.in_quotes {
            self.current.push(c);
            return;
        }

        match c {
            '[' => {
                self.bracket_depth += 1;
                self.current.push(c);
            }
            ']' => {
                self.bracket_depth -= 1;
                self.current.push(c);
                // A closing bracket ends the token even without whitespace after it
                if self.bracket_depth == 0 {
                    self.flush();
                }
            }
            c if c.is_whitespace() && self.bracket_depth == 0 => self.flush(),
            c => self.current.push(c),
        }
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.tokens.push(std::mem::take(&mut self.current));
        }
    }
}

/// Split one line into raw token strings
pub fn tokenize(line: &str) -> Vec<String> {
    Lexer::new(line).tokenize()
}
